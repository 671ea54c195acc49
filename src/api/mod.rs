//! HTTP surface for listkeeper.
//!
//! Thin JSON adapters over the data access layer. Handlers lock the shared
//! storage handle for the duration of one data access call; nothing in
//! [`crate::db`] knows about HTTP.
//!
//! ## Routes
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | GET | `/api/lists` | all lists, newest first |
//! | GET | `/api/lists/open` | all lists with their open items |
//! | POST | `/api/lists` | create a list |
//! | GET | `/api/lists/{id}` | one list with all its items |
//! | DELETE | `/api/lists/{id}` | delete a list and its items |
//! | POST | `/api/lists/{id}/items` | add an item |
//! | PATCH | `/api/lists/{id}/items` | set an item's completion flag |
//! | DELETE | `/api/lists/{id}/items` | delete an item |

use crate::db::db::Db;
use parking_lot::Mutex;

pub mod handlers;

pub use handlers::configure;

/// Shared application state
pub struct AppState {
    /// `rusqlite::Connection` is not `Sync`, so workers take turns on the one handle
    pub db: Mutex<Db>,
}

impl AppState {
    pub fn new(db: Db) -> Self {
        AppState { db: Mutex::new(db) }
    }
}
