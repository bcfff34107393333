//! SQLite connection ownership and schema bootstrap.
//!
//! # Design
//! A single `rusqlite::Connection` lives behind an `Arc<parking_lot::Mutex>`.
//! Handlers borrow it through `with_conn`, so conflicting writes serialize at
//! the database layer and the rest of the server holds no mutable state.

use std::path::Path;
use std::sync::Arc;

use parking_lot::Mutex;
use rusqlite::Connection;
use tracing::info;

use crate::store::StoreError;

const PRAGMAS: &str = "
PRAGMA journal_mode = WAL;
PRAGMA synchronous = NORMAL;
PRAGMA busy_timeout = 5000;
";

const CREATE_TABLES: &str = "
CREATE TABLE IF NOT EXISTS Items (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    name       TEXT NULL,
    isComplete INTEGER NULL
);
";

/// Shared handle to the backing SQLite database.
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Open or create the database file at `path`, creating the `Items`
    /// table on first use.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        conn.execute_batch(PRAGMAS)?;
        conn.execute_batch(CREATE_TABLES)?;

        info!(path = %path.display(), "database opened");

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open a private in-memory database (for testing).
    pub fn in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(CREATE_TABLES)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Run `f` with exclusive access to the connection.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&Connection) -> Result<T, StoreError>,
    {
        let conn = self.conn.lock();
        f(&conn)
    }
}
