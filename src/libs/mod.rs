//! Core library modules for listkeeper.
//!
//! Domain types, configuration, user-facing messaging and terminal views.
//! Storage lives in [`crate::db`], the HTTP surface in [`crate::api`].

pub mod config;
pub mod data_storage;
pub mod messages;
pub mod todo;
pub mod view;
