//! Database schema migration management and versioning system.
//!
//! The schema is described as an ordered list of named, idempotent steps.
//! The highest applied step is recorded as `("version", N)` in the
//! `db_metadata` table; a missing record means version 0.
//!
//! ## Features
//!
//! - **Version Tracking**: One durable version record, advanced only on commit
//! - **All-or-Nothing**: Pending steps, seed data and the version write share one transaction
//! - **One-Time Seeding**: Demonstration lists inserted only on the 0 → N transition
//! - **Idempotent Steps**: Every step is safe to re-run against a partially matching schema
//!
//! ## Usage
//!
//! ```rust
//! use listkeeper::db::migrations::{init_with_migrations, get_db_version, SCHEMA_VERSION};
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open_in_memory()?;
//! init_with_migrations(&mut conn)?;
//! assert_eq!(get_db_version(&conn)?, SCHEMA_VERSION);
//! # Ok::<(), listkeeper::db::error::StoreError>(())
//! ```

use super::error::{Result, StoreError};
use super::seed;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_error, msg_info, msg_success};
use rusqlite::{params, Connection, OptionalExtension, Transaction};

/// Version produced by the newest registered migration.
pub const SCHEMA_VERSION: u32 = 2;

const METADATA_TABLE: &str = "
CREATE TABLE IF NOT EXISTS db_metadata (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
)";
const VERSION_KEY: &str = "version";
const METADATA_TABLE_EXISTS: &str = "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'db_metadata'";
const SELECT_VERSION: &str = "SELECT value FROM db_metadata WHERE key = ?1";
const UPSERT_VERSION: &str = "INSERT INTO db_metadata (key, value) VALUES (?1, ?2)
    ON CONFLICT(key) DO UPDATE SET value = excluded.value";

/// A single schema step.
#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    /// Applies the change on the caller's transaction; must be safe to re-run
    up: fn(&Transaction) -> Result<()>,
}

/// Registry of schema steps and the logic that applies them.
///
/// Meant to run once at startup, before any data access happens.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    /// Registers all schema steps in version order.
    fn register_migrations(&mut self) {
        // Version 1: lists and their items
        self.add_migration(1, "create_todo_tables", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS todo_lists (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    title TEXT NOT NULL,
                    description TEXT,
                    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
                )",
                [],
            )?;
            tx.execute(
                "CREATE TABLE IF NOT EXISTS todo_items (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    list_id INTEGER NOT NULL,
                    text TEXT NOT NULL,
                    completed BOOLEAN NOT NULL DEFAULT 0,
                    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                    FOREIGN KEY (list_id) REFERENCES todo_lists(id) ON DELETE CASCADE
                )",
                [],
            )?;
            // Item lookups and the composite read both go through list_id
            tx.execute("CREATE INDEX IF NOT EXISTS idx_todo_items_list_id ON todo_items(list_id)", [])?;
            Ok(())
        });

        // Version 2: optional due date on items
        self.add_migration(2, "add_item_due_date", |tx| {
            if !column_exists(tx, "todo_items", "due_date")? {
                tx.execute("ALTER TABLE todo_items ADD COLUMN due_date TIMESTAMP", [])?;
            }
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Version of the newest registered step.
    pub fn latest_version(&self) -> u32 {
        self.migrations.last().map(|m| m.version).unwrap_or(0)
    }

    /// Brings the schema to the latest registered version.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<u32> {
        self.ensure_schema(conn, self.latest_version())
    }

    /// Brings the schema to `expected`, exactly once and atomically.
    ///
    /// Steps newer than the stored version and not newer than `expected` run
    /// in order inside one transaction. When the stored version is 0 the seed
    /// lists are added in the same transaction. The new version is written
    /// last, so a failure anywhere leaves the previous version and data
    /// untouched. Returns the version the database ends up at.
    pub fn ensure_schema(&self, conn: &mut Connection, expected: u32) -> Result<u32> {
        let latest = self.latest_version();
        if expected > latest {
            return Err(StoreError::UnknownSchemaVersion { expected, latest });
        }

        // Must exist before the version can be read, so it lives outside the transaction
        conn.execute(METADATA_TABLE, [])?;
        let stored = read_version(conn)?;

        if stored >= expected {
            msg_debug!(Message::DatabaseUpToDate);
            return Ok(stored);
        }

        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > stored && m.version <= expected).collect();
        msg_info!(Message::MigrationsFound(pending.len()));

        let tx = conn.transaction()?;

        for migration in pending {
            msg_info!(Message::RunningMigration(migration.version, migration.name.to_string()));

            match (migration.up)(&tx) {
                Ok(()) => msg_success!(Message::MigrationCompleted(migration.version)),
                Err(e) => {
                    // Dropping the transaction rolls back every step applied so far
                    msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                    return Err(e);
                }
            }
        }

        if stored == 0 {
            seed::seed_if_empty(&tx)?;
        }

        tx.execute(UPSERT_VERSION, params![VERSION_KEY, expected.to_string()])?;
        tx.commit()?;
        msg_success!(Message::AllMigrationsCompleted(expected));

        Ok(expected)
    }

    /// Reads the stored schema version without changing anything.
    pub fn current_version(&self, conn: &Connection) -> Result<u32> {
        read_version(conn)
    }

    /// Names of the steps that would run to reach the latest version.
    pub fn pending_migrations(&self, conn: &Connection) -> Result<Vec<(u32, &'static str)>> {
        let stored = read_version(conn)?;
        Ok(self.migrations.iter().filter(|m| m.version > stored).map(|m| (m.version, m.name)).collect())
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads `("version", N)`; a missing table or record is version 0.
fn read_version(conn: &Connection) -> Result<u32> {
    let has_table: i64 = conn.query_row(METADATA_TABLE_EXISTS, [], |row| row.get(0))?;
    if has_table == 0 {
        return Ok(0);
    }

    let value: Option<String> = conn.query_row(SELECT_VERSION, params![VERSION_KEY], |row| row.get(0)).optional()?;
    match value {
        None => Ok(0),
        Some(raw) => raw.trim().parse::<u32>().map_err(|_| StoreError::CorruptMetadata(raw)),
    }
}

fn column_exists(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({})", table))?;
    let names = stmt.query_map([], |row| row.get::<_, String>(1))?.collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(names.iter().any(|name| name == column))
}

/// Applies all pending migrations to `conn`.
pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    MigrationManager::new().run_migrations(conn)?;
    Ok(())
}

/// Stored schema version of `conn`.
pub fn get_db_version(conn: &Connection) -> Result<u32> {
    MigrationManager::new().current_version(conn)
}

/// Whether `conn` is behind the latest registered version.
pub fn needs_migration(conn: &Connection) -> Result<bool> {
    let manager = MigrationManager::new();
    Ok(manager.current_version(conn)? < manager.latest_version())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(conn: &Connection, sql: &str) -> i64 {
        conn.query_row(sql, [], |row| row.get(0)).unwrap()
    }

    #[test]
    fn test_registered_versions_are_sequential() {
        let manager = MigrationManager::new();
        for (index, migration) in manager.migrations.iter().enumerate() {
            assert_eq!(migration.version as usize, index + 1);
        }
        assert_eq!(manager.latest_version(), SCHEMA_VERSION);
    }

    #[test]
    fn test_failed_step_rolls_back_everything() {
        let mut manager = MigrationManager::new();
        manager.add_migration(SCHEMA_VERSION + 1, "broken_step", |tx| {
            tx.execute("CREATE TABLE half_done (id INTEGER)", [])?;
            tx.execute("INSERT INTO table_that_does_not_exist VALUES (1)", [])?;
            Ok(())
        });

        let mut conn = Connection::open_in_memory().unwrap();
        let result = manager.run_migrations(&mut conn);
        assert!(result.is_err());

        // Nothing from the batch survived, including earlier steps and seed data
        assert_eq!(read_version(&conn).unwrap(), 0);
        assert_eq!(count(&conn, "SELECT COUNT(*) FROM sqlite_master WHERE name IN ('todo_lists', 'half_done')"), 0);
    }

    #[test]
    fn test_failed_upgrade_keeps_previous_version_and_data() {
        let mut conn = Connection::open_in_memory().unwrap();
        MigrationManager::new().run_migrations(&mut conn).unwrap();

        let mut manager = MigrationManager::new();
        manager.add_migration(SCHEMA_VERSION + 1, "broken_step", |tx| {
            tx.execute("DELETE FROM todo_items", [])?;
            tx.execute("ALTER TABLE missing ADD COLUMN x TEXT", [])?;
            Ok(())
        });

        assert!(manager.run_migrations(&mut conn).is_err());
        assert_eq!(read_version(&conn).unwrap(), SCHEMA_VERSION);
        assert_eq!(count(&conn, "SELECT COUNT(*) FROM todo_items"), 8);
    }

    #[test]
    fn test_due_date_step_is_idempotent() {
        let mut conn = Connection::open_in_memory().unwrap();
        MigrationManager::new().run_migrations(&mut conn).unwrap();

        let manager = MigrationManager::new();
        let tx = conn.transaction().unwrap();
        for migration in &manager.migrations {
            (migration.up)(&tx).unwrap();
        }
        tx.commit().unwrap();

        assert!(column_exists(&conn, "todo_items", "due_date").unwrap());
    }

    #[test]
    fn test_unknown_target_version_is_rejected() {
        let mut conn = Connection::open_in_memory().unwrap();
        let error = MigrationManager::new().ensure_schema(&mut conn, SCHEMA_VERSION + 5).unwrap_err();
        assert!(matches!(error, StoreError::UnknownSchemaVersion { latest: SCHEMA_VERSION, .. }));
    }
}
