//! `embedchat extract` — turn a file into agent context text.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use embedchat_client::ExtractionClient;
use embedchat_core::config::EnvironmentUrls;

#[derive(Args)]
pub struct ExtractArgs {
    /// File to extract text from (.txt, .csv, .xlsx, .xls, .pdf)
    pub file: PathBuf,

    /// Environment whose backend handles the PDF path
    #[arg(long, default_value = "development")]
    pub env: String,
}

pub async fn run(args: ExtractArgs) -> Result<()> {
    let urls = EnvironmentUrls::default();
    let client = ExtractionClient::new(urls.resolve_name(&args.env));
    let text = embedchat_extract::extract_text(&args.file, &client).await?;
    print!("{text}");
    Ok(())
}
