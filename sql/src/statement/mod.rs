use std::str::SplitWhitespace;

use storage::Row;

use crate::{CommandError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Insert(Row),
    Select,
}

impl Statement {
    /// Turn one input line into a statement.
    ///
    /// Surrounding whitespace is ignored. `insert` must be followed by an id,
    /// a username and an email; anything after the email is ignored.
    /// `select` takes no arguments.
    pub fn prepare(input: &str) -> Result<Self> {
        let input = input.trim();
        let mut tokens = input.split_whitespace();

        match tokens.next() {
            Some("insert") => prepare_insert(tokens),
            Some("select") if input == "select" => Ok(Statement::Select),
            _ => Err(CommandError::UnrecognizedStatement(input.to_string())),
        }
    }
}

fn prepare_insert(mut args: SplitWhitespace<'_>) -> Result<Statement> {
    let (Some(id), Some(username), Some(email)) = (args.next(), args.next(), args.next()) else {
        return Err(CommandError::SyntaxError);
    };

    let id: i64 = id.parse().map_err(|_| CommandError::SyntaxError)?;
    if id < 0 {
        return Err(CommandError::NegativeId);
    }
    let id = u32::try_from(id).map_err(|_| CommandError::SyntaxError)?;

    let row = Row::new(id, username, email)?;
    Ok(Statement::Insert(row))
}
