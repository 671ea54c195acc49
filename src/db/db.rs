use super::error::{Result, StoreError};
use super::migrations::MigrationManager;
use crate::libs::config::{Config, DatabaseLocation};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

pub const IN_MEMORY_PATH: &str = ":memory:";

/// The process-wide storage handle.
///
/// Owns the single SQLite connection. Constructing a `Db` opens the database,
/// enables foreign keys and brings the schema to the latest version, so a
/// `Db` value always has a usable schema.
pub struct Db {
    pub conn: Connection,
    location: DatabaseLocation,
}

impl Db {
    /// Opens the database at `location` and applies pending migrations.
    pub fn open(location: &DatabaseLocation) -> Result<Db> {
        let mut conn = Self::open_without_migrations(location)?;
        MigrationManager::new().run_migrations(&mut conn)?;

        Ok(Db {
            conn,
            location: location.clone(),
        })
    }

    /// Opens an ephemeral database that disappears with the handle.
    pub fn in_memory() -> Result<Db> {
        Self::open(&DatabaseLocation::InMemory)
    }

    pub fn file<P: AsRef<Path>>(path: P) -> Result<Db> {
        Self::open(&DatabaseLocation::File(path.as_ref().to_path_buf()))
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Db> {
        let location = config.database()?;
        Ok(Self::open(&location)?)
    }

    /// Opens and configures a connection without touching the schema.
    ///
    /// Used by introspection commands that must not migrate.
    pub fn open_without_migrations(location: &DatabaseLocation) -> Result<Connection> {
        let (path, opened) = match location {
            DatabaseLocation::File(path) => (path.clone(), Connection::open(path)),
            DatabaseLocation::InMemory => (PathBuf::from(IN_MEMORY_PATH), Connection::open_in_memory()),
        };
        let unavailable = |source: rusqlite::Error| StoreError::StorageUnavailable { path: path.clone(), source };

        let conn = opened.map_err(unavailable)?;
        // Cascade deletes and list references depend on this pragma
        conn.pragma_update(None, "foreign_keys", true).map_err(unavailable)?;

        Ok(conn)
    }

    pub fn location(&self) -> &DatabaseLocation {
        &self.location
    }
}
