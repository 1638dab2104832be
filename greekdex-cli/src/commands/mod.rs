pub(crate) mod import;
pub(crate) mod match_contacts;
pub(crate) mod roster;
pub(crate) mod stats;

use std::path::{Path, PathBuf};

use rusqlite::Connection;

use crate::CliError;

/// Default path for the directory database.
pub(crate) fn default_db_path() -> PathBuf {
    PathBuf::from("greekdex.db")
}

/// Open (or create) the directory database.
pub(crate) fn open_db(db_path: &Path) -> Result<Connection, CliError> {
    greekdex_db::open_database(db_path)
        .map_err(|e| CliError::database(format!("Failed to open {}: {}", db_path.display(), e)))
}
