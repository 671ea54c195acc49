//! # Listkeeper - todo lists over SQLite
//!
//! A small web backend that keeps todo lists and their items in a single
//! SQLite file and exposes them as JSON.
//!
//! ## Features
//!
//! - **Versioned Schema**: Ordered, idempotent migration steps applied in one transaction
//! - **One-Time Seeding**: Demonstration lists inserted only when a database is created
//! - **Typed Data Access**: Named CRUD operations for lists and items, never raw SQL
//! - **Composite Read**: All lists with their open items in one round trip
//! - **HTTP Surface**: JSON endpoints over the data access layer
//!
//! ## Usage
//!
//! ```rust,no_run
//! use listkeeper::db::{db::Db, lists::TodoLists};
//!
//! let db = Db::in_memory()?;
//! for list in TodoLists::new(&db.conn).all_with_open_items()? {
//!     println!("{}: {} open", list.list.title, list.items.len());
//! }
//! # Ok::<(), listkeeper::db::error::StoreError>(())
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
