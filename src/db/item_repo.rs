use rusqlite::{Connection, params};

use super::StoreResult;
use crate::domain::item::{Item, ItemId, NewItem};

pub(super) fn insert_item(conn: &Connection, new_item: &NewItem) -> StoreResult<ItemId> {
    conn.execute(
        "INSERT INTO items (text) VALUES (?1)",
        params![&new_item.text],
    )?;
    Ok(conn.last_insert_rowid().into())
}

pub(super) fn fetch_items(conn: &Connection) -> StoreResult<Vec<Item>> {
    let mut stmt = conn.prepare(
        "SELECT id, text
         FROM items
         ORDER BY id DESC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(Item {
            id: row.get::<_, i64>(0)?.into(),
            // The column is nullable; rows written by other tools may hold NULL.
            text: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        })
    })?;

    let mut items = Vec::new();
    for row in rows {
        items.push(row?);
    }
    Ok(items)
}
