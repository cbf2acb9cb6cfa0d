use log::debug;
use storage::{Row, Table};

use crate::executor::execute;
use crate::meta::{constants_report, MetaCommand};
use crate::statement::Statement;
use crate::CommandError;

/// Outcome of processing one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// `.exit` was requested; the caller should end the session.
    Exit,
    /// A statement ran. Holds the selected rows (empty for inserts).
    Executed(Vec<Row>),
    /// Informational text from a meta-command.
    Info(String),
    /// The line was rejected; the table is unchanged.
    Error(CommandError),
}

/// Drives the meta-command / prepare / execute stages over a table it owns.
pub struct Processor {
    table: Table,
}

impl Processor {
    pub fn new(table: Table) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn process_line(&mut self, line: &str) -> Response {
        if MetaCommand::is_meta(line) {
            return match MetaCommand::parse(line) {
                Ok(MetaCommand::Exit) => Response::Exit,
                Ok(MetaCommand::Constants) => Response::Info(constants_report()),
                Err(err) => Response::Error(err),
            };
        }

        let statement = match Statement::prepare(line) {
            Ok(statement) => statement,
            Err(err) => {
                debug!("Rejected {:?}: {}", line, err);
                return Response::Error(err);
            }
        };

        match execute(statement, &mut self.table) {
            Ok(rows) => Response::Executed(rows),
            Err(err) => {
                debug!("Execution of {:?} failed: {}", line, err);
                Response::Error(err)
            }
        }
    }
}

impl Default for Processor {
    fn default() -> Self {
        Self::new(Table::new())
    }
}
