//! SQLite pack size store

use std::path::Path;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use rusqlite::{Connection, OptionalExtension, params};
use tracing::info;

use crate::core::PackSizeProvider;
use crate::error::Result;
use crate::storage::migrations;

/// SQLite database holding the available pack sizes.
///
/// The connection sits behind a mutex so one database can serve every
/// worker thread.
pub struct Database {
    conn: Mutex<Connection>,
    schema_version: u32,
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("schema_version", &self.schema_version)
            .finish_non_exhaustive()
    }
}

impl Database {
    /// Open database at the given path
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        Self::configure_pragmas(&conn)?;
        Self::from_connection(conn)
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        let schema_version = migrations::run_migrations(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
            schema_version,
        })
    }

    /// Current schema version after migrations.
    pub const fn schema_version(&self) -> u32 {
        self.schema_version
    }

    /// Stored pack sizes, ascending.
    pub fn list_pack_sizes(&self) -> Result<Vec<i64>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare("SELECT size FROM pack_sizes ORDER BY size ASC")?;
        let rows = stmt.query_map([], |row| row.get(0))?;
        let mut sizes = Vec::new();
        for row in rows {
            sizes.push(row?);
        }
        Ok(sizes)
    }

    /// Replace every stored size in one transaction. Duplicates collapse;
    /// any non-positive size fails the whole replacement.
    pub fn replace_pack_sizes(&self, sizes: &[i64]) -> Result<()> {
        let mut distinct = sizes.to_vec();
        distinct.sort_unstable();
        distinct.dedup();

        let mut conn = self.conn.lock();
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM pack_sizes", [])?;
        {
            // plain INSERT: OR IGNORE would also skip CHECK violations
            let mut insert = tx.prepare("INSERT INTO pack_sizes (size) VALUES (?)")?;
            for size in &distinct {
                insert.execute([size])?;
            }
        }
        tx.execute(
            "INSERT INTO pack_size_updates (size_count, updated_at) VALUES (?, ?)",
            params![distinct.len() as i64, Utc::now().timestamp()],
        )?;
        tx.commit()?;
        Ok(())
    }

    /// Store `defaults` if no sizes exist yet. Returns true when seeded.
    pub fn seed_if_empty(&self, defaults: &[i64]) -> Result<bool> {
        if !self.list_pack_sizes()?.is_empty() {
            return Ok(false);
        }
        self.replace_pack_sizes(defaults)?;
        info!(count = defaults.len(), "seeded default pack sizes");
        Ok(true)
    }

    /// When the size set was last replaced, if ever.
    pub fn last_updated(&self) -> Result<Option<DateTime<Utc>>> {
        let conn = self.conn.lock();
        let secs: Option<i64> = conn
            .query_row(
                "SELECT updated_at FROM pack_size_updates ORDER BY id DESC LIMIT 1",
                [],
                |row| row.get(0),
            )
            .optional()?;
        Ok(secs.and_then(|secs| DateTime::from_timestamp(secs, 0)))
    }

    fn configure_pragmas(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA busy_timeout = 5000;
             PRAGMA foreign_keys = ON;",
        )?;
        Ok(())
    }
}

impl PackSizeProvider for Database {
    fn pack_sizes(&self) -> Result<Vec<i64>> {
        self.list_pack_sizes()
    }

    fn store_pack_sizes(&self, sizes: &[i64]) -> Result<()> {
        self.replace_pack_sizes(sizes)
    }
}
