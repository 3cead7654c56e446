use log::{debug, error, info};
use rusqlite::Connection;
use std::{
    path::{Path, PathBuf},
    time::{Duration, Instant},
};
use thiserror::Error;

mod item_repo;
mod schema;

use crate::domain::item::{Item, NewItem};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

pub(crate) type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub(crate) enum StoreError {
    #[error("cannot open database `{}`: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}

/// Handle to the notes database file.
///
/// Holds only the path: every operation opens its own connection and closes
/// it before returning, so no connection outlives a call.
#[derive(Clone, Debug)]
pub(crate) struct Store {
    path: PathBuf,
}

impl Store {
    /// Creates the handle and makes sure the `items` table exists.
    pub(crate) fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let store = Self { path: path.into() };
        store.ensure_schema()?;
        Ok(store)
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn ensure_schema(&self) -> StoreResult<()> {
        let started_at = Instant::now();
        let result = self.connect().and_then(|conn| schema::init(&conn));
        match &result {
            Ok(()) => info!(
                "event=ensure_schema module=db status=ok duration_ms={}",
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=ensure_schema module=db status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            ),
        }
        result
    }

    pub(crate) fn append(&self, new_item: &NewItem) -> StoreResult<()> {
        let conn = self.connect()?;
        match item_repo::insert_item(&conn, new_item) {
            Ok(id) => {
                info!(
                    "event=item_append module=db status=ok id={} text_len={}",
                    id,
                    new_item.text.chars().count()
                );
                Ok(())
            }
            Err(err) => {
                error!("event=item_append module=db status=error error={}", err);
                Err(err)
            }
        }
    }

    /// Every stored text, newest first.
    pub(crate) fn list_all(&self) -> StoreResult<Vec<String>> {
        Ok(self
            .list_items()?
            .into_iter()
            .map(|item| item.text)
            .collect())
    }

    pub(crate) fn list_items(&self) -> StoreResult<Vec<Item>> {
        let conn = self.connect()?;
        let items = item_repo::fetch_items(&conn)?;
        debug!(
            "event=item_list module=db status=ok count={}",
            items.len()
        );
        Ok(items)
    }

    fn connect(&self) -> StoreResult<Connection> {
        let conn = Connection::open(&self.path).map_err(|source| StoreError::Open {
            path: self.path.clone(),
            source,
        })?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(conn)
    }
}
