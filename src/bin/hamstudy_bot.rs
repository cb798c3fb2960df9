//! Runs a single bot command from the console and prints the reply.
//!
//! Usage:
//!
//! ```text
//! hamstudy-bot '/findexam zipcode=62704 post=true' --user '<@1234>'
//! hamstudy-bot --list-commands
//! ```
//!
//! The reply is written to stdout as JSON. Logs go to stderr and honour
//! `RUST_LOG` (default `info`). Endpoint settings come from the
//! `HAMSTUDY_*` environment variables.

use clap::Parser;
use hamstudy_bot::command::adapters::InMemoryCommandRegistry;
use hamstudy_bot::command::domain::InvocationContext;
use hamstudy_bot::command::ports::CommandRegistry;
use hamstudy_bot::command::services::CommandDispatcher;
use hamstudy_bot::config::BotConfig;
use hamstudy_bot::exam::adapters::HttpExamDirectory;
use hamstudy_bot::exam::services::ExamLookupService;
use mockable::DefaultClock;
use std::io::{self, Write};
use std::sync::Arc;
use tokio::runtime::Builder;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Parser, Debug)]
#[command(name = "hamstudy-bot", version, about = "HamStudy exam and licence lookup bot")]
struct Cli {
    #[arg(help = "Slash command to run, for example '/uls lookup_id=W1AW'")]
    command: Option<String>,
    #[arg(long, default_value = "<@console>", help = "Mention of the invoking user")]
    user: String,
    #[arg(long, help = "Print the registered command definitions and exit")]
    list_commands: bool,
}

fn main() -> Result<(), BoxError> {
    let cli = Cli::parse();
    init_tracing();

    let registry = Arc::new(InMemoryCommandRegistry::new());
    if cli.list_commands {
        return write_json(&registry.list()?);
    }
    let Some(command) = cli.command else {
        return Err("a slash command is required (or pass --list-commands)".into());
    };

    let config = BotConfig::from_env()?;
    debug!(api = %config.api_base_url(), "loaded configuration");
    let directory = Arc::new(HttpExamDirectory::new(&config)?);
    let dispatcher = CommandDispatcher::new(
        registry,
        ExamLookupService::from_config(directory, &config),
        Arc::new(DefaultClock),
    );

    let runtime = Builder::new_current_thread().enable_all().build()?;
    let reply = runtime.block_on(dispatcher.dispatch(&command, &InvocationContext::new(cli.user)));
    write_json(&reply)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn write_json(value: &impl serde::Serialize) -> Result<(), BoxError> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
