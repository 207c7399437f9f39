//! runeterra: console front-end for the lookup assistant.
//!
//! Reads one command or mention per line from stdin and prints the answer:
//! - `/ask pergunta`, `/champ nome`, `/item nome`, `/region nome`, `/help`
//! - `@runeterra pergunta` for free text, subject to the mention cooldown
//!
//! Configuration comes from `runeterra.toml` (or `$RUNETERRA_CONFIG`), then
//! `DD_LANG` and `RUNETERRA_CACHE_DIR`.

use std::path::PathBuf;
use std::sync::Arc;

use lookup_core::{Assistant, Inbound, LookupConfig};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

const CONSOLE_USER: &str = "console";
const UNRECOGNIZED: &str = "Não entendi. Use /help ou me marque com @runeterra.";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lookup_core=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = std::env::var("RUNETERRA_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("runeterra.toml"));
    let config = LookupConfig::load(Some(config_path.as_path()))?;

    info!(
        locale = %config.locale,
        cache_dir = %config.cache_dir.display(),
        "RUNETERRA online"
    );

    let assistant = Arc::new(Assistant::from_config(config)?);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match Inbound::parse(&line) {
            Inbound::Command(command) => {
                println!("{}\n", assistant.respond(command).await.text);
            }
            Inbound::Mention(text) => {
                if let Some(answer) = assistant.mention(CONSOLE_USER, &text).await {
                    println!("{}\n", answer.text);
                }
            }
            Inbound::Unrecognized => println!("{UNRECOGNIZED}\n"),
        }
    }

    Ok(())
}
