use log::debug;
use storage::{Row, Table};

use crate::statement::Statement;
use crate::Result;

/// Run a prepared statement against `table`.
///
/// Inserts return no rows; selects return every stored row in insertion
/// order.
pub fn execute(statement: Statement, table: &mut Table) -> Result<Vec<Row>> {
    match statement {
        Statement::Insert(row) => {
            table.insert(&row)?;
            Ok(Vec::new())
        }
        Statement::Select => {
            debug!("Selecting {} rows", table.num_rows());
            Ok(table.rows().collect())
        }
    }
}
