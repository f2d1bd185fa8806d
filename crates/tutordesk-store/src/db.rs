//! Database connection management
//!
//! `Database` is the single data-access handle: opened (and migrated) once at
//! startup, shared by reference, and closed explicitly at shutdown.

use crate::errors::{from_rusqlite, lock_poisoned, Result};
use crate::migrations::apply_migrations;
use rusqlite::Connection;
use std::path::Path;
use std::sync::Mutex;

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path).map_err(from_rusqlite)
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(from_rusqlite)
}

/// Configure a connection: foreign keys on, WAL journaling
///
/// In-memory databases silently keep their `memory` journal mode.
pub fn configure(conn: &Connection) -> Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON; PRAGMA journal_mode = WAL;")
        .map_err(from_rusqlite)
}

/// Owned, migrated SQLite connection guarded by a mutex
pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    /// Open the file database, configure it and apply pending migrations
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let conn = open(path)?;
        tracing::info!(path = %path.display(), "opened database");
        Self::prepare(conn)
    }

    /// Fresh, migrated in-memory database
    pub fn open_in_memory() -> Result<Self> {
        Self::prepare(open_in_memory()?)
    }

    fn prepare(mut conn: Connection) -> Result<Self> {
        configure(&conn)?;
        apply_migrations(&mut conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Run `f` with exclusive access to the connection
    pub fn with_conn<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Connection) -> Result<T>,
    {
        let mut guard = self.conn.lock().map_err(|_| lock_poisoned())?;
        f(&mut *guard)
    }

    /// Close the underlying connection, surfacing any close error
    pub fn close(self) -> Result<()> {
        let conn = self.conn.into_inner().map_err(|_| lock_poisoned())?;
        conn.close().map_err(|(_, e)| from_rusqlite(e))?;
        tracing::info!("closed database");
        Ok(())
    }
}
