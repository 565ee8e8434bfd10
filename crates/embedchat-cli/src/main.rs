use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "embedchat")]
#[command(about = "Embeddable AI agent chat widget toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an embeddable widget bundle for an agent instance
    Generate(commands::generate::GenerateArgs),
    /// Extract plain text from a file for use as agent context
    Extract(commands::extract::ExtractArgs),
    /// Interactive terminal preview of the chat widget
    Chat(commands::chat::ChatArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Generate(args) => commands::generate::run(args),
        Commands::Extract(args) => commands::extract::run(args).await,
        Commands::Chat(args) => commands::chat::run(args).await,
    }
}
