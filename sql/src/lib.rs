//! Command processing for rowdb
//!
//! Every input line goes through three stages, each of which can stop the
//! line early:
//!
//! 1. meta-command check (`.exit`, `.constants`)
//! 2. statement preparation (`insert <id> <username> <email>`, `select`)
//! 3. execution against a [`storage::Table`]
//!
//! Errors from any stage are reported as a [`CommandError`] and never
//! leave the table partially updated.

pub mod executor;
pub mod meta;
pub mod processor;
pub mod statement;

pub use executor::execute;
pub use meta::MetaCommand;
pub use processor::{Processor, Response};
pub use statement::Statement;

use storage::StorageError;
use thiserror::Error;

/// Recoverable per-line failures. `Display` is the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unrecognized command '{0}'")]
    UnrecognizedMetaCommand(String),

    #[error("Unrecognized keyword at start of '{0}'.")]
    UnrecognizedStatement(String),

    #[error("Syntax error. Could not parse statement.")]
    SyntaxError,

    #[error("String is too long.")]
    StringTooLong,

    #[error("String contains a NUL byte.")]
    NulByte,

    #[error("ID must be positive.")]
    NegativeId,

    #[error("Error: Table full.")]
    TableFull,

    #[error("Error: {0}")]
    Storage(StorageError),
}

impl From<StorageError> for CommandError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::TableFull { .. } => CommandError::TableFull,
            StorageError::FieldTooLong { .. } => CommandError::StringTooLong,
            StorageError::NulInField { .. } => CommandError::NulByte,
            other => CommandError::Storage(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, CommandError>;
