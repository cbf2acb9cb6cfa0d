//! rowdb benchmarks
//!
//! - Row codec serialize / deserialize
//! - Table inserts and full scans
//! - Line processing through the command processor
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench -p rowdb-bench
//! ```

use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use storage::{Row, Table, EMAIL_SIZE, USERNAME_SIZE};

/// Generates random alphanumeric text.
pub fn random_string(rng: &mut StdRng, len: usize) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Generates `count` rows with random ids and text of random length.
pub fn generate_rows(count: usize) -> Vec<Row> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|_| {
            let id = rng.gen();
            let username_len = rng.gen_range(1..=USERNAME_SIZE);
            let email_len = rng.gen_range(1..=EMAIL_SIZE);
            let username = random_string(&mut rng, username_len);
            let email = random_string(&mut rng, email_len);
            Row::new(id, &username, &email).expect("generated text fits its column")
        })
        .collect()
}

/// Generates `insert` command lines.
pub fn generate_insert_lines(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("insert {i} user{i} person{i}@example.com"))
        .collect()
}

/// Builds a table holding `rows`.
pub fn filled_table(rows: &[Row]) -> Table {
    let mut table = Table::new();
    for row in rows {
        if table.insert(row).is_err() {
            break;
        }
    }
    table
}
