//! File-to-text extraction for knowledge-base context.
//!
//! Converts an uploaded file into plain text usable as an agent's `context`.
//! Dispatch is by extension, in this precedence: plain text, CSV,
//! XLSX/XLS, PDF (delegated to the backend extraction endpoint). Files over
//! the size ceiling are rejected before any parse, and unknown types are
//! rejected without a single read. Every failure is a human-readable
//! [`EmbedChatError`]; nothing here panics or rethrows raw parser errors.

mod tabular;

use std::path::Path;

use embedchat_client::ExtractionClient;
use embedchat_core::error::{EmbedChatError, Result};
use tracing::{debug, info};

/// Size ceiling for uploaded files, checked before any parse attempt.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

const MAX_FILE_SIZE_MIB: u64 = 10;

/// Human-readable supported set, quoted in rejection errors.
pub const SUPPORTED_EXTENSIONS: &str = ".txt, .csv, .xlsx, .xls, .pdf";

/// Extracts plain text from a file on disk.
///
/// `client` is only contacted for the PDF path; every other format parses
/// locally. The returned text is ready to use as knowledge-base context.
pub async fn extract_text(path: &Path, client: &ExtractionClient) -> Result<String> {
    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > MAX_FILE_SIZE {
        return Err(EmbedChatError::FileTooLarge {
            size: metadata.len(),
            limit_mib: MAX_FILE_SIZE_MIB,
        });
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    debug!(
        target: "embedchat::extract",
        path = %path.display(),
        extension,
        size = metadata.len(),
        "Extracting text"
    );

    let text = match extension.as_str() {
        "txt" => read_plain_text(path).await?,
        "csv" => tabular::extract_csv(path)?,
        "xlsx" | "xls" => tabular::extract_workbook(path)?,
        "pdf" => {
            let bytes = tokio::fs::read(path).await?;
            let file_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or("upload.pdf");
            client.extract_pdf(file_name, bytes).await?
        }
        _ if is_plain_text(path) => read_plain_text(path).await?,
        other => {
            return Err(EmbedChatError::UnsupportedFile {
                extension: if other.is_empty() {
                    "(none)".to_string()
                } else {
                    format!(".{other}")
                },
                supported: SUPPORTED_EXTENSIONS,
            });
        }
    };

    info!(
        target: "embedchat::extract",
        path = %path.display(),
        chars = text.len(),
        "Extraction complete"
    );
    Ok(text)
}

/// Unusual extensions still count as plain text when their registered MIME
/// type is `text/*` (e.g. `.md`, `.log`).
fn is_plain_text(path: &Path) -> bool {
    mime_guess::from_path(path)
        .first()
        .map(|mime| mime.type_() == mime_guess::mime::TEXT)
        .unwrap_or(false)
}

async fn read_plain_text(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path).await.map_err(|err| {
        EmbedChatError::extraction(format!("Could not read file as text: {err}"))
    })
}
