//! # Monkey Record Store
//!
//! Durable storage for the registry: a single `monkeys` table in a SQLite file.
//!
//! The store is opened once at startup in `main.rs` and handed to the Actix
//! application as `web::Data<MonkeyStore>`. Every operation is one SQL statement
//! against the shared connection, so no transactions or extra locking are layered
//! on top of the `Mutex` that makes the connection shareable between workers.
//! Reads always hit the database; nothing is cached.

use crate::model::MonkeyFields;
use common::model::monkey::Monkey;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};
use thiserror::Error;

const CREATE_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS monkeys (
        monkey_id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        species TEXT NOT NULL,
        age_years INTEGER NOT NULL,
        favourite_fruit TEXT NOT NULL,
        last_checkup_at TEXT NOT NULL,
        description TEXT,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )";

const SELECT_COLUMNS: &str = "SELECT monkey_id, name, species, age_years, favourite_fruit, \
     last_checkup_at, description, created_at, updated_at FROM monkeys";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("monkey not found")]
    NotFound,
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("database connection lock poisoned")]
    Poisoned,
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Owns the process-wide SQLite connection.
pub struct MonkeyStore {
    conn: Mutex<Connection>,
    schema_ready: AtomicBool,
}

impl MonkeyStore {
    /// Opens (or creates) the database file at `path` and makes sure the table exists.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        Self::from_connection(Connection::open(path)?)
    }

    /// Private in-memory database. Contents vanish with the handle.
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> StoreResult<Self> {
        let store = Self {
            conn: Mutex::new(conn),
            schema_ready: AtomicBool::new(false),
        };
        store.ensure_schema()?;
        Ok(store)
    }

    /// Flushes and releases the connection. Called once at shutdown.
    pub fn close(self) -> StoreResult<()> {
        let conn = self.conn.into_inner().map_err(|_| StoreError::Poisoned)?;
        conn.close().map_err(|(_, e)| StoreError::Sqlite(e))
    }

    /// Creates the `monkeys` table if it is missing.
    ///
    /// Only the first call on a handle touches the database. A handle attached to a
    /// file that another process already initialised finds the table in place, which
    /// `IF NOT EXISTS` turns into a no-op.
    pub fn ensure_schema(&self) -> StoreResult<()> {
        if self.schema_ready.load(Ordering::Acquire) {
            return Ok(());
        }
        self.lock()?.execute_batch(CREATE_TABLE)?;
        self.schema_ready.store(true, Ordering::Release);
        Ok(())
    }

    /// All records, newest `created_at` first. Rows sharing a timestamp come back in
    /// reverse insertion order.
    pub fn list_all(&self) -> StoreResult<Vec<Monkey>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!(
            "{SELECT_COLUMNS} ORDER BY created_at DESC, rowid DESC"
        ))?;
        let monkeys = stmt
            .query_map([], monkey_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(monkeys)
    }

    pub fn get(&self, monkey_id: &str) -> StoreResult<Monkey> {
        let conn = self.lock()?;
        fetch(&conn, monkey_id)
    }

    pub fn exists(&self, monkey_id: &str) -> StoreResult<bool> {
        let found = self
            .lock()?
            .query_row(
                "SELECT 1 FROM monkeys WHERE monkey_id = ?1",
                params![monkey_id],
                |_| Ok(()),
            )
            .optional()?;
        Ok(found.is_some())
    }

    /// Writes a fully populated record. A duplicate `monkey_id` surfaces as a
    /// constraint violation.
    pub fn insert(&self, monkey: &Monkey) -> StoreResult<()> {
        self.lock()?.execute(
            "INSERT INTO monkeys (
                monkey_id, name, species, age_years, favourite_fruit,
                last_checkup_at, description, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                monkey.monkey_id,
                monkey.name,
                monkey.species,
                monkey.age_years,
                monkey.favourite_fruit,
                monkey.last_checkup_at,
                monkey.description,
                monkey.created_at,
                monkey.updated_at,
            ],
        )?;
        Ok(())
    }

    /// Replaces every user-editable column, `description` included, and stamps
    /// `updated_at`. Returns the record as stored afterwards.
    pub fn update(
        &self,
        monkey_id: &str,
        fields: &MonkeyFields,
        updated_at: &str,
    ) -> StoreResult<Monkey> {
        let conn = self.lock()?;
        let changed = conn.execute(
            "UPDATE monkeys SET
                name = ?1, species = ?2, age_years = ?3, favourite_fruit = ?4,
                last_checkup_at = ?5, description = ?6, updated_at = ?7
            WHERE monkey_id = ?8",
            params![
                fields.name,
                fields.species,
                fields.age_years,
                fields.favourite_fruit,
                fields.last_checkup_at,
                fields.description,
                updated_at,
                monkey_id,
            ],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound);
        }
        fetch(&conn, monkey_id)
    }

    /// Hard delete.
    pub fn delete(&self, monkey_id: &str) -> StoreResult<()> {
        let removed = self
            .lock()?
            .execute("DELETE FROM monkeys WHERE monkey_id = ?1", params![monkey_id])?;
        if removed == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }

    #[cfg(test)]
    pub(crate) fn with_connection<T>(&self, f: impl FnOnce(&Connection) -> T) -> T {
        f(&self.lock().expect("store lock"))
    }
}

fn fetch(conn: &Connection, monkey_id: &str) -> StoreResult<Monkey> {
    conn.query_row(
        &format!("{SELECT_COLUMNS} WHERE monkey_id = ?1"),
        params![monkey_id],
        monkey_from_row,
    )
    .optional()?
    .ok_or(StoreError::NotFound)
}

fn monkey_from_row(row: &Row<'_>) -> rusqlite::Result<Monkey> {
    Ok(Monkey {
        monkey_id: row.get(0)?,
        name: row.get(1)?,
        species: row.get(2)?,
        age_years: row.get(3)?,
        favourite_fruit: row.get(4)?,
        last_checkup_at: row.get(5)?,
        description: row.get(6)?,
        created_at: row.get(7)?,
        updated_at: row.get(8)?,
    })
}
