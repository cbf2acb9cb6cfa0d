//! Property tests for the row codec and the paged table.

use proptest::prelude::*;
use storage::{Page, Row, Table, EMAIL_SIZE, ROWS_PER_PAGE, ROW_SIZE, USERNAME_SIZE};

fn text(max: usize) -> impl Strategy<Value = String> {
    proptest::string::string_regex(&format!("[a-zA-Z0-9@._-]{{0,{max}}}")).unwrap()
}

fn row_strategy() -> impl Strategy<Value = Row> {
    (any::<u32>(), text(USERNAME_SIZE), text(EMAIL_SIZE))
        .prop_map(|(id, username, email)| Row::new(id, &username, &email).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn round_trip_preserves_fields(id in any::<u32>(), username in text(USERNAME_SIZE), email in text(EMAIL_SIZE)) {
        let row = Row::new(id, &username, &email).unwrap();
        let mut slot = [0u8; ROW_SIZE];
        row.serialize(&mut slot);

        let decoded = Row::deserialize(&slot);
        prop_assert_eq!(decoded.id(), id);
        prop_assert_eq!(decoded.username(), username.as_str());
        prop_assert_eq!(decoded.email(), email.as_str());
    }

    #[test]
    fn inserts_only_append(rows in prop::collection::vec(row_strategy(), 1..(ROWS_PER_PAGE * 4))) {
        let mut table = Table::new();

        for (i, row) in rows.iter().enumerate() {
            let before = table.num_rows();
            table.insert(row).unwrap();
            prop_assert_eq!(table.num_rows(), before + 1);

            // Earlier rows are never disturbed by later appends
            for (j, earlier) in rows[..=i].iter().enumerate() {
                prop_assert_eq!(table.row(j), Some(earlier.clone()));
            }
        }
    }

    #[test]
    fn select_order_matches_insert_order(ids in prop::collection::vec(any::<u32>(), 0..100)) {
        let mut table = Table::new();
        for id in &ids {
            table.insert(&Row::new(*id, "u", "e").unwrap()).unwrap();
        }

        let stored: Vec<u32> = table.rows().map(|row| row.id()).collect();
        prop_assert_eq!(stored, ids);
    }

    #[test]
    fn slot_location_is_deterministic(row_num in 0usize..storage::TABLE_MAX_ROWS) {
        let mut table = Table::new();
        let location = Table::slot_location(row_num);

        prop_assert_eq!(location.page_num * ROWS_PER_PAGE + location.slot, row_num);
        prop_assert!(location.slot < ROWS_PER_PAGE);
        prop_assert!(location.byte_offset() + ROW_SIZE <= storage::PAGE_SIZE - Page::UNUSED_TAIL);

        let first = table.row_slot(row_num).unwrap().as_ptr();
        let second = table.row_slot(row_num).unwrap().as_ptr();
        prop_assert_eq!(first, second);
        prop_assert_eq!(table.allocated_pages(), 1);
    }
}
