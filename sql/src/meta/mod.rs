// Non-SQL statements like .exit are called "meta-commands".

use std::fmt::Write;

use storage::{
    Page, EMAIL_OFFSET, EMAIL_SIZE, ID_OFFSET, ID_SIZE, PAGE_SIZE, ROWS_PER_PAGE, ROW_SIZE,
    TABLE_MAX_PAGES, TABLE_MAX_ROWS, USERNAME_OFFSET, USERNAME_SIZE,
};

use crate::{CommandError, Result};

/// Marker that starts every meta-command line.
pub const META_PREFIX: char = '.';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaCommand {
    /// End the session and release the table.
    Exit,
    /// Print the storage layout constants.
    Constants,
}

impl MetaCommand {
    pub fn is_meta(input: &str) -> bool {
        input.starts_with(META_PREFIX)
    }

    pub fn parse(input: &str) -> Result<Self> {
        match input {
            ".exit" => Ok(MetaCommand::Exit),
            ".constants" => Ok(MetaCommand::Constants),
            _ => Err(CommandError::UnrecognizedMetaCommand(input.to_string())),
        }
    }
}

/// Layout constants as printed by `.constants`.
pub fn constants_report() -> String {
    let constants = [
        ("ROW_SIZE", ROW_SIZE),
        ("ID_SIZE", ID_SIZE),
        ("ID_OFFSET", ID_OFFSET),
        ("USERNAME_SIZE", USERNAME_SIZE),
        ("USERNAME_OFFSET", USERNAME_OFFSET),
        ("EMAIL_SIZE", EMAIL_SIZE),
        ("EMAIL_OFFSET", EMAIL_OFFSET),
        ("PAGE_SIZE", PAGE_SIZE),
        ("ROWS_PER_PAGE", ROWS_PER_PAGE),
        ("PAGE_UNUSED_TAIL", Page::UNUSED_TAIL),
        ("TABLE_MAX_PAGES", TABLE_MAX_PAGES),
        ("TABLE_MAX_ROWS", TABLE_MAX_ROWS),
    ];

    let mut report = String::from("Constants:");
    for (name, value) in constants {
        // Writing to a String cannot fail
        let _ = write!(report, "\n{name}: {value}");
    }
    report
}
