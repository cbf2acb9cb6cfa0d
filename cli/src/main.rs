//! rowdb interactive shell
//!
//! Reads one command per line from stdin and runs it against an in-memory
//! paged table.
//!
//! # Usage
//!
//! ```bash
//! # Start the shell
//! rowdb
//!
//! # Smaller table, no prompt (for scripting)
//! rowdb --max-pages 2 --quiet < commands.txt
//! ```

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use rowdb_sql::Processor;
use storage::Table;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod input;
mod session;

use crate::config::CliConfig;
use crate::session::{Session, SessionEnd};

/// rowdb command-line shell
#[derive(Parser, Debug)]
#[command(name = "rowdb", version, about = "Interactive shell for the rowdb record store")]
struct Args {
    /// Configuration file path
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Maximum number of pages in the table
    #[arg(long, value_name = "PAGES")]
    max_pages: Option<usize>,

    /// Prompt printed before each line
    #[arg(long)]
    prompt: Option<String>,

    /// Suppress prompts (for scripting)
    #[arg(short = 'q', long)]
    quiet: bool,

    /// Enable verbose logging on stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

impl Args {
    fn apply(&self, config: &mut CliConfig) {
        if let Some(max_pages) = self.max_pages {
            config.max_pages = max_pages;
        }
        if let Some(prompt) = &self.prompt {
            config.prompt = prompt.clone();
        }
        if self.quiet {
            config.show_prompt = false;
        }
        if self.verbose {
            config.log_filter = "debug".to_string();
        }
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(SessionEnd::Exit) => ExitCode::SUCCESS,
        Ok(SessionEnd::InputClosed) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<SessionEnd> {
    let args = Args::parse();

    let mut config = CliConfig::load(args.config.as_deref())?;
    args.apply(&mut config);
    config.validate()?;

    init_logging(&config);

    let table = Table::with_max_pages(config.max_pages)?;
    info!(
        max_pages = table.max_pages(),
        max_rows = table.max_rows(),
        "Starting session"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(Processor::new(table), stdin.lock(), stdout.lock())
        .with_prompt(config.effective_prompt());

    session.run()
}

fn init_logging(config: &CliConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    // stdout carries the session transcript, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
