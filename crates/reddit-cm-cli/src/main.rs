mod cli;
mod context;
mod handlers;
mod output;
mod progress;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use output::Reporter;
use tracing_subscriber::EnvFilter;

fn init_tracing() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("REDDIT_CM_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(log_file))
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let cli = Cli::parse();
    let out = Reporter::new(cli.json);

    let result = match cli.command {
        Commands::Export(args) => handlers::export::handle(args, out).await,
        Commands::Import(args) => handlers::import::handle(args, out).await,
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "reddit-cm",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    };

    match result {
        Err(err) if out.is_json() => output::output_error(&err.to_string()),
        other => other,
    }
}
