use crate::row::ROW_SIZE;

pub const PAGE_SIZE: usize = 4096;

/// Rows are packed back-to-back with no page header: 4096 / 291 = 14
pub const ROWS_PER_PAGE: usize = PAGE_SIZE / ROW_SIZE;

const UNUSED_TAIL: usize = PAGE_SIZE - ROWS_PER_PAGE * ROW_SIZE;

#[repr(C, align(8))]
pub struct Page {
    rows: [[u8; ROW_SIZE]; ROWS_PER_PAGE],
    tail: [u8; UNUSED_TAIL], // never holds a row
}

impl Page {
    /// Bytes at the end of every page that never hold a row
    pub const UNUSED_TAIL: usize = UNUSED_TAIL;

    pub fn new() -> Self {
        Self {
            rows: [[0; ROW_SIZE]; ROWS_PER_PAGE],
            tail: [0; UNUSED_TAIL],
        }
    }

    /// Byte offset of the slot at `index` within this page
    pub const fn row_offset(index: usize) -> usize {
        index * ROW_SIZE
    }

    /// Slot `index` of this page.
    ///
    /// # Panics
    ///
    /// Panics if `index >= ROWS_PER_PAGE`.
    pub fn slot(&self, index: usize) -> &[u8; ROW_SIZE] {
        &self.rows[index]
    }

    /// Mutable slot `index` of this page.
    ///
    /// # Panics
    ///
    /// Panics if `index >= ROWS_PER_PAGE`.
    pub fn slot_mut(&mut self, index: usize) -> &mut [u8; ROW_SIZE] {
        &mut self.rows[index]
    }

    pub fn tail(&self) -> &[u8; UNUSED_TAIL] {
        &self.tail
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_creation() {
        let page = Page::new();
        assert!((0..ROWS_PER_PAGE).all(|i| page.slot(i).iter().all(|&b| b == 0)));
        assert!(page.tail().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_rows_per_page() {
        assert_eq!(ROWS_PER_PAGE, 14);
        assert_eq!(Page::UNUSED_TAIL, 22);
    }

    #[test]
    fn test_page_layout() {
        assert_eq!(std::mem::align_of::<Page>(), 8);
        assert_eq!(std::mem::size_of::<Page>(), PAGE_SIZE);

        let page = Page::new();
        let base = &page as *const Page as usize;
        for i in 0..ROWS_PER_PAGE {
            assert_eq!(page.slot(i).as_ptr() as usize - base, Page::row_offset(i));
        }
        assert_eq!(page.tail().as_ptr() as usize - base, PAGE_SIZE - Page::UNUSED_TAIL);
    }

    #[test]
    #[should_panic]
    fn test_slot_past_end_panics() {
        let page = Page::new();
        page.slot(ROWS_PER_PAGE);
    }

    #[test]
    fn test_rows_do_not_overlap() {
        let mut page = Page::new();

        for i in 0..ROWS_PER_PAGE {
            page.slot_mut(i).fill(i as u8 + 1);
        }

        for i in 0..ROWS_PER_PAGE {
            assert!(page.slot(i).iter().all(|&b| b == i as u8 + 1));
        }
        assert!(page.tail().iter().all(|&b| b == 0));
    }
}
