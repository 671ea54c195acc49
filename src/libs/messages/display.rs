//! Display implementation for listkeeper messages.
//!
//! Single source of truth for user-facing text. Messages with parameters
//! interpolate them here so call sites only pick the variant.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === DATABASE MESSAGES ===
            Message::DatabaseOpened(location) => format!("Database opened: {}", location),
            Message::InMemoryDatabase => "Using an in-memory database; all data is lost on exit".to_string(),
            Message::DatabaseVersion(version) => format!("Current database version: {}", version),
            Message::DatabaseUpToDate => "Database schema is up to date".to_string(),
            Message::DatabaseNeedsUpdate(current, latest) => {
                format!("Database schema needs to be updated (v{} -> v{})", current, latest)
            }

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted(version) => format!("Database schema migrated to v{}", version),
            Message::SeedingDatabase => "Seeding new database with demonstration lists".to_string(),
            Message::SeedSkippedExistingLists(count) => format!("Skipping seed data: {} lists already exist", count),
            Message::SeedCompleted(lists, items) => format!("Seeded {} lists with {} items", lists, items),

            // === LIST MESSAGES ===
            Message::ListsHeader => "Todo lists (open items only):".to_string(),
            Message::NoListsFound => "No todo lists found".to_string(),
            Message::NoOpenItems => "(nothing open)".to_string(),
            Message::ListNotFound(id) => format!("Todo list {} not found", id),
            Message::ListTitleRequired => "List title must not be empty".to_string(),

            // === ITEM MESSAGES ===
            Message::ItemTextRequired => "Item text must not be empty".to_string(),
            Message::ItemListMissing(id) => format!("Cannot add item: todo list {} does not exist", id),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigInvalidPort(value) => format!("Invalid port '{}': expected a number between 0 and 65535", value),

            // === SERVER MESSAGES ===
            Message::ServerStarting(address) => format!("Listening on http://{}", address),
            Message::ServerStopped => "Server stopped".to_string(),
            Message::InternalServerError => "Internal server error".to_string(),
        };
        write!(f, "{}", text)
    }
}
