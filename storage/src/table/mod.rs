use log::{debug, trace};

use crate::page::{Page, ROWS_PER_PAGE};
use crate::row::{Row, ROW_SIZE};
use crate::{Result, StorageError};

pub const TABLE_MAX_PAGES: usize = 100;
pub const TABLE_MAX_ROWS: usize = ROWS_PER_PAGE * TABLE_MAX_PAGES;

/// Physical address of a row: `slot` is always below `ROWS_PER_PAGE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotLocation {
    pub page_num: usize,
    pub slot: usize,
}

impl SlotLocation {
    /// Byte offset of the slot within its page.
    pub const fn byte_offset(&self) -> usize {
        Page::row_offset(self.slot)
    }
}

/// Append-only row store backed by lazily allocated pages.
///
/// Row `n` lives in page `n / ROWS_PER_PAGE` at slot `n % ROWS_PER_PAGE`.
/// Rows `0..num_rows` are always stored; there are no gaps. Pages are
/// allocated the first time a slot inside them is requested and are only
/// released when the table is dropped.
pub struct Table {
    pages: Vec<Option<Box<Page>>>,
    num_rows: usize,
}

impl Table {
    pub fn new() -> Self {
        Self::empty(TABLE_MAX_PAGES)
    }

    /// Create a table capped at `max_pages` pages instead of [`TABLE_MAX_PAGES`].
    pub fn with_max_pages(max_pages: usize) -> Result<Self> {
        if max_pages == 0 || max_pages > TABLE_MAX_PAGES {
            return Err(StorageError::InvalidPageLimit(max_pages));
        }

        Ok(Self::empty(max_pages))
    }

    fn empty(max_pages: usize) -> Self {
        Self {
            pages: (0..max_pages).map(|_| None).collect(),
            num_rows: 0,
        }
    }

    /// Where `row_num` lives: its page and the slot within that page.
    pub const fn slot_location(row_num: usize) -> SlotLocation {
        SlotLocation {
            page_num: row_num / ROWS_PER_PAGE,
            slot: row_num % ROWS_PER_PAGE,
        }
    }

    /// Mutable slot for `row_num`, allocating its page on first touch.
    pub fn row_slot(&mut self, row_num: usize) -> Result<&mut [u8; ROW_SIZE]> {
        let SlotLocation { page_num, slot } = Self::slot_location(row_num);
        let max_pages = self.pages.len();

        let page = self
            .pages
            .get_mut(page_num)
            .ok_or(StorageError::PageOutOfBounds {
                page_num,
                max_pages,
            })?
            .get_or_insert_with(|| {
                debug!("Allocating page {}", page_num);
                Box::new(Page::new())
            });

        Ok(page.slot_mut(slot))
    }

    /// Append a row at `num_rows`.
    ///
    /// Either the row is fully written and counted, or nothing changes.
    pub fn insert(&mut self, row: &Row) -> Result<()> {
        if self.is_full() {
            debug!("Rejecting insert of id {}: table full", row.id());
            return Err(StorageError::TableFull {
                max_rows: self.max_rows(),
            });
        }

        let slot = self.row_slot(self.num_rows)?;
        row.serialize(slot);
        self.num_rows += 1;

        trace!("Inserted row {} (id {})", self.num_rows - 1, row.id());
        Ok(())
    }

    /// Decode the row stored at `row_num`, if it has been written.
    pub fn row(&self, row_num: usize) -> Option<Row> {
        if row_num >= self.num_rows {
            return None;
        }

        let location = Self::slot_location(row_num);
        let page = self.pages.get(location.page_num)?.as_deref()?;
        Some(Row::deserialize(page.slot(location.slot)))
    }

    /// All stored rows in insertion order.
    pub fn rows(&self) -> impl Iterator<Item = Row> + '_ {
        (0..self.num_rows).filter_map(move |row_num| self.row(row_num))
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn max_pages(&self) -> usize {
        self.pages.len()
    }

    pub fn max_rows(&self) -> usize {
        ROWS_PER_PAGE * self.max_pages()
    }

    pub fn allocated_pages(&self) -> usize {
        self.pages.iter().filter(|page| page.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.num_rows == 0
    }

    pub fn is_full(&self) -> bool {
        self.num_rows >= self.max_rows()
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Table {
    fn drop(&mut self) {
        debug!(
            "Releasing table: {} rows in {} pages",
            self.num_rows,
            self.allocated_pages()
        );
    }
}
