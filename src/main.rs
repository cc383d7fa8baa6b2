use anyhow::Context;
use clap::Parser;
use journo::cli::{Cli, Menu};
use journo::error::JournalError;
use journo::infrastructure::{Config, Store};
use std::io;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            let code = e
                .downcast_ref::<JournalError>()
                .map_or(1, JournalError::exit_code);
            std::process::exit(code);
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("journo=warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::resolve(cli.db);

    let store = Store::open(&config.db_path).with_context(|| {
        format!(
            "Failed to open journal store at {}",
            config.db_path.display()
        )
    })?;
    tracing::info!(path = %config.db_path.display(), "journal store ready");

    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(&store, stdin.lock(), stdout.lock()).run()?;

    Ok(())
}
