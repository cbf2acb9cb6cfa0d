//! Configuration for the shell.
//!
//! Values are layered: built-in defaults, then an optional config file,
//! then `ROWDB_*` environment variables. Command-line flags are applied on
//! top by the caller.

use std::path::Path;

use anyhow::{bail, Context, Result};
use ::config::{Config, Environment, File};
use serde::Deserialize;
use storage::TABLE_MAX_PAGES;

use crate::session::DEFAULT_PROMPT;

/// Prefix for environment overrides, e.g. `ROWDB_MAX_PAGES=10`.
pub const ENV_PREFIX: &str = "ROWDB";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CliConfig {
    /// Prompt printed before each line.
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Whether to print the prompt at all.
    #[serde(default = "default_show_prompt")]
    pub show_prompt: bool,

    /// Page limit for the table, at most `TABLE_MAX_PAGES`.
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,

    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

fn default_show_prompt() -> bool {
    true
}

fn default_max_pages() -> usize {
    TABLE_MAX_PAGES
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            show_prompt: default_show_prompt(),
            max_pages: default_max_pages(),
            log_filter: default_log_filter(),
        }
    }
}

impl CliConfig {
    /// Load defaults, the optional file at `path`, and the environment.
    ///
    /// Values are not range-checked here; call [`CliConfig::validate`] once
    /// command-line flags have been applied.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        let settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .context("Failed to load configuration")?;

        settings
            .try_deserialize()
            .context("Invalid configuration")
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_pages == 0 || self.max_pages > TABLE_MAX_PAGES {
            bail!(
                "max_pages must be between 1 and {}, got {}",
                TABLE_MAX_PAGES,
                self.max_pages
            );
        }
        Ok(())
    }

    /// The prompt to print, or `None` when prompts are disabled.
    pub fn effective_prompt(&self) -> Option<String> {
        self.show_prompt.then(|| self.prompt.clone())
    }
}
