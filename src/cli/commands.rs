//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "journo")]
#[command(about = "Terminal journal with tagged entries", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Journal database file (overrides JOURNO_DB; default: journal.db)
    #[arg(long, value_name = "PATH")]
    pub db: Option<PathBuf>,
}
