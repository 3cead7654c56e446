use rusqlite::Connection;

use super::StoreResult;

pub(super) fn init(conn: &Connection) -> StoreResult<()> {
    create_items_table(conn)
}

fn create_items_table(conn: &Connection) -> StoreResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS items (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            text TEXT
        );",
    )?;
    Ok(())
}
