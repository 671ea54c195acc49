//! Database layer for listkeeper.
//!
//! A single SQLite file (or an in-memory database in development) holds two
//! related tables, `todo_lists` and `todo_items`, plus `db_metadata` with the
//! schema version.
//!
//! ## Layers
//!
//! - **Storage handle** ([`db::Db`]): opens the file, enables foreign keys, migrates
//! - **Schema manager** ([`migrations`], [`seed`]): versioned, transactional schema steps
//! - **Data access** ([`lists`], [`items`]): named operations, never caller-supplied SQL
//!
//! ## Usage
//!
//! ```rust
//! use listkeeper::db::{db::Db, items::TodoItems, lists::TodoLists};
//! use listkeeper::libs::todo::{NewTodoItem, NewTodoList};
//!
//! let db = Db::in_memory()?;
//! let list_id = TodoLists::new(&db.conn).create(&NewTodoList::new("Errands", None))?;
//! TodoItems::new(&db.conn).create(list_id, &NewTodoItem::new("Post office"))?;
//! # Ok::<(), listkeeper::db::error::StoreError>(())
//! ```
//!
//! The repositories borrow the connection, so every operation is one
//! synchronous unit of work on the handle the caller owns. Nothing here
//! retries or locks; SQLite's own write serialization is relied upon.

/// Storage handle: connection ownership and configuration.
pub mod db;

/// Typed storage failures.
pub mod error;

/// Todo item operations.
pub mod items;

/// Todo list operations, including the lists-with-open-items read.
pub mod lists;

/// Versioned schema steps and the manager that applies them.
pub mod migrations;

/// Demonstration content for new databases.
pub mod seed;
