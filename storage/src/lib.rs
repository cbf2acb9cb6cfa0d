//! Storage engine for rowdb
//!
//! This crate provides the in-memory storage primitives: the fixed-layout
//! row codec, fixed-size pages, and the table that maps row numbers to
//! slots inside lazily allocated pages.

pub mod page;
pub mod row;
pub mod table;

pub use page::{Page, PAGE_SIZE, ROWS_PER_PAGE};
pub use row::{
    Row, EMAIL_OFFSET, EMAIL_SIZE, ID_OFFSET, ID_SIZE, ROW_SIZE, USERNAME_OFFSET, USERNAME_SIZE,
};
pub use table::{SlotLocation, Table, TABLE_MAX_PAGES, TABLE_MAX_ROWS};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Table full: {max_rows} rows")]
    TableFull { max_rows: usize },

    #[error("Page {page_num} is out of bounds (max {max_pages} pages)")]
    PageOutOfBounds { page_num: usize, max_pages: usize },

    #[error("Field {field} is {len} bytes, capacity is {max}")]
    FieldTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("Field {field} contains a NUL byte")]
    NulInField { field: &'static str },

    #[error("Invalid page limit {0}: must be between 1 and {max}", max = TABLE_MAX_PAGES)]
    InvalidPageLimit(usize),
}

pub type Result<T> = std::result::Result<T, StorageError>;
