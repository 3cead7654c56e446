use anyhow::{Context, Result};
use log::info;

use crate::{config::Config, db::Store};

pub(crate) struct AppContext {
    store: Store,
}

impl AppContext {
    pub(crate) fn new(config: &Config) -> Result<Self> {
        let store = Store::open(&config.db_path).context("failed to open note store")?;
        info!(
            "event=app_ready module=app status=ok db_path={}",
            store.path().display()
        );
        Ok(Self { store })
    }

    pub(crate) fn store(&self) -> &Store {
        &self.store
    }
}
