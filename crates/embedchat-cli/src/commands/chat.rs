//! `embedchat chat` — terminal preview of the widget conversation.
//!
//! Drives the same state machine and chat client as the in-app widget, so
//! what an operator sees here matches what the embedded bundle will do.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Args;
use embedchat_client::{ChatClient, ChatWidget};
use embedchat_core::config::EnvironmentUrls;
use embedchat_core::session::Session;

#[derive(Args)]
pub struct ChatArgs {
    /// Agent instance to talk to
    #[arg(long)]
    pub agent_id: String,

    /// End-user/tenant identifier
    #[arg(long)]
    pub sub_id: String,

    /// Environment whose backend serves the chat endpoint
    #[arg(long, default_value = "production")]
    pub env: String,
}

pub async fn run(args: ChatArgs) -> Result<()> {
    let urls = EnvironmentUrls::default();
    let client = ChatClient::new(urls.resolve_name(&args.env));
    let mut widget = ChatWidget::new(client, Session::new(args.sub_id, args.agent_id));
    widget.toggle();

    println!("embedchat preview — session {}", widget.session().session_id);
    println!("Type a message and press Enter. /quit exits.");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\n', '\r']);
        if line == "/quit" {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        widget.set_draft(line);
        widget.press_enter(false).await;

        // History is server-authoritative after each exchange; the reply
        // (or the inline error bubble) is always the final entry.
        if let Some(last) = widget.state().messages.last() {
            if last.error {
                println!("[error] {}", last.content);
            } else {
                println!("assistant: {}", last.content);
            }
        }
    }
    Ok(())
}
