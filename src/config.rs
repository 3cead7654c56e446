use anyhow::{Context, Result};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = ".jot";
const DB_FILE: &str = "jot.db";
const LOG_DIR: &str = "logs";

pub(crate) struct Config {
    pub(crate) db_path: PathBuf,
    pub(crate) log_dir: PathBuf,
    pub(crate) log_level: String,
}

impl Config {
    pub(crate) fn resolve(db_override: Option<PathBuf>, log_level: &str) -> Result<Self> {
        let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
        Self::resolve_in(Path::new(&home), db_override, log_level)
    }

    fn resolve_in(home: &Path, db_override: Option<PathBuf>, log_level: &str) -> Result<Self> {
        let (db_path, log_dir) = match db_override {
            Some(path) => {
                let log_dir = path
                    .parent()
                    .map(|dir| dir.join(LOG_DIR))
                    .unwrap_or_else(|| PathBuf::from(LOG_DIR));
                (path, log_dir)
            }
            None => {
                let app_dir = home.join(APP_DIR);
                (app_dir.join(DB_FILE), app_dir.join(LOG_DIR))
            }
        };
        if let Some(parent) = db_path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("cannot create directory `{}`", parent.display()))?;
        }

        Ok(Self {
            db_path,
            log_dir,
            log_level: log_level.to_string(),
        })
    }
}
