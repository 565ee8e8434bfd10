//! `embedchat generate` — produce an embeddable widget bundle.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Args;
use embedchat_codegen::WidgetCodegen;
use embedchat_core::agent::AgentInstance;
use embedchat_core::config::EnvironmentUrls;

#[derive(Args)]
pub struct GenerateArgs {
    /// Agent instance definition (TOML)
    #[arg(long)]
    pub agent: PathBuf,

    /// End-user/tenant identifier embedded in the bundle
    #[arg(long)]
    pub sub_id: String,

    /// Target environment name; unrecognized names use the default
    #[arg(long, default_value = "production")]
    pub env: String,

    /// TOML file overriding the built-in environment base URLs
    #[arg(long)]
    pub environments: Option<PathBuf>,

    /// Write the bundle to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let source = std::fs::read_to_string(&args.agent)
        .with_context(|| format!("reading agent file {}", args.agent.display()))?;
    let agent: AgentInstance = toml::from_str(&source)
        .with_context(|| format!("parsing agent file {}", args.agent.display()))?;

    let urls = match &args.environments {
        Some(path) => {
            let overrides = std::fs::read_to_string(path)
                .with_context(|| format!("reading environments file {}", path.display()))?;
            EnvironmentUrls::from_toml_str(&overrides)?
        }
        None => EnvironmentUrls::default(),
    };

    let bundle = WidgetCodegen::with_environments(urls).generate(&agent, &args.sub_id, &args.env)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &bundle)
                .with_context(|| format!("writing bundle to {}", path.display()))?;
            eprintln!("Wrote {} bytes to {}", bundle.len(), path.display());
        }
        None => print!("{bundle}"),
    }
    Ok(())
}
