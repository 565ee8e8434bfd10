//! Backend PDF text-extraction client.
//!
//! PDFs are not parsed locally; the file is uploaded as a multipart form to
//! the backend extraction endpoint, which returns the extracted text.

use embedchat_core::error::{EmbedChatError, Result};
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::{debug, warn};

const EXTRACT_PATH: &str = "/api/extract-text";

/// Fixed multipart field name the backend expects the file under.
const FILE_FIELD: &str = "file";

/// Client for the backend text-extraction endpoint.
#[derive(Debug, Clone)]
pub struct ExtractionClient {
    client: Client,
    base_url: String,
}

impl ExtractionClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Uploads a PDF and returns the text the backend extracted from it.
    ///
    /// Single attempt; any failure (transport or `success: false`) comes
    /// back as an error with human-readable text.
    pub async fn extract_pdf(&self, file_name: &str, bytes: Vec<u8>) -> Result<String> {
        let url = format!("{}{}", self.base_url, EXTRACT_PATH);
        debug!(
            target: "embedchat::extract",
            file_name,
            size = bytes.len(),
            "Uploading PDF for text extraction"
        );

        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str("application/pdf")?;
        let form = Form::new().part(FILE_FIELD, part);

        let response = self.client.post(&url).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(EmbedChatError::transport(format!(
                "extraction endpoint returned status {status}"
            )));
        }

        let parsed: ExtractResponse = response.json().await?;
        match parsed {
            ExtractResponse {
                success: true,
                text: Some(text),
            } => Ok(text),
            _ => {
                warn!(target: "embedchat::extract", file_name, "Backend could not extract text");
                Err(EmbedChatError::extraction(
                    "The server could not extract text from this PDF.",
                ))
            }
        }
    }
}

#[derive(Deserialize)]
struct ExtractResponse {
    success: bool,
    #[serde(default)]
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_parses_text() {
        let parsed: ExtractResponse =
            serde_json::from_str(r#"{"success":true,"text":"page one"}"#).unwrap();
        assert!(parsed.success);
        assert_eq!(parsed.text.as_deref(), Some("page one"));
    }

    #[test]
    fn test_response_tolerates_missing_text() {
        let parsed: ExtractResponse = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert!(!parsed.success);
        assert!(parsed.text.is_none());
    }
}
