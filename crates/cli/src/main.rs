//! `paste` — command-line client for the paste service.
//!
//! Startup sequence:
//! 1. Parse the command line.
//! 2. Load and validate [`Config`] from `PASTE_`-prefixed environment variables.
//! 3. Initialise logging (stderr, so stdout carries only paste output).
//! 4. Run the requested flow: `create` or `show`.

mod commands;
mod config;
mod telemetry;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use paste_client::PasteClient;

use config::Config;

#[derive(Parser)]
#[command(name = "paste", version, about = "Create and view pastes, optionally password-protected")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a paste from a file (or stdin) and print its share URL
    Create {
        /// File to read content from; stdin when omitted
        file: Option<PathBuf>,

        /// Syntax-highlighting language hint
        #[arg(long, default_value = "plaintext")]
        syntax: String,

        /// Delete the paste after it is read once
        #[arg(long)]
        burn: bool,

        /// Minutes until the paste expires; never expires when omitted
        #[arg(long)]
        expire_minutes: Option<u32>,

        /// Encrypt the content with this password before it leaves the client
        #[arg(long, env = "PASTE_PASSWORD")]
        password: Option<String>,
    },

    /// Fetch a paste and print its content
    Show {
        /// Paste key from the share URL
        key: String,

        /// Password for protected pastes
        #[arg(long, env = "PASTE_PASSWORD")]
        password: Option<String>,

        /// Print the stored payload without decrypting
        #[arg(long)]
        raw: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let cfg = Config::from_env().map_err(|e| {
        // Telemetry is not yet up; write to stderr directly.
        eprintln!("ERROR: configuration invalid: {e}");
        e
    })?;

    telemetry::init(&cfg.log_level)?;

    let mut client = PasteClient::with_timeout(
        &cfg.api_base_url,
        Duration::from_secs(cfg.request_timeout_secs),
    )?;
    if let Some(base) = &cfg.share_base_url {
        client = client.share_base(base);
    }

    match cli.command {
        Command::Create {
            file,
            syntax,
            burn,
            expire_minutes,
            password,
        } => {
            commands::create(
                &client,
                file.as_deref(),
                syntax,
                burn,
                expire_minutes,
                password.as_deref(),
            )
            .await
        }
        Command::Show { key, password, raw } => {
            commands::show(&client, &key, password.as_deref(), raw).await
        }
    }
}
