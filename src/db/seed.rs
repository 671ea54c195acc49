//! Demonstration content for freshly created databases.
//!
//! Inserted by the schema manager in the same transaction that creates the
//! tables, and only when the database starts at version 0.

use super::error::Result;
use crate::libs::messages::Message;
use crate::{msg_info, msg_success};
use rusqlite::{params, Connection};

const COUNT_LISTS: &str = "SELECT COUNT(*) FROM todo_lists";
const INSERT_LIST: &str = "INSERT INTO todo_lists (title, description) VALUES (?1, ?2)";
const INSERT_ITEM: &str = "INSERT INTO todo_items (list_id, text, completed) VALUES (?1, ?2, ?3)";

pub struct SeedList {
    pub title: &'static str,
    pub description: &'static str,
    /// `(text, completed)` pairs in insertion order
    pub items: &'static [(&'static str, bool)],
}

pub const SEED_LISTS: &[SeedList] = &[
    SeedList {
        title: "Work Tasks",
        description: "All my work-related todos",
        items: &[
            ("Complete project proposal", false),
            ("Review code changes", true),
            ("Update documentation", false),
        ],
    },
    SeedList {
        title: "Shopping List",
        description: "Things to buy",
        items: &[("Groceries for the week", false), ("New headphones", false)],
    },
    SeedList {
        title: "Personal Goals",
        description: "Personal development tasks",
        items: &[
            ("Read a chapter of the book", true),
            ("Go to the gym", false),
            ("Practice meditation", false),
        ],
    },
];

/// Inserts [`SEED_LISTS`] unless any list already exists.
///
/// Runs on the caller's transaction. Returns whether anything was inserted.
pub fn seed_if_empty(conn: &Connection) -> Result<bool> {
    let existing: i64 = conn.query_row(COUNT_LISTS, [], |row| row.get(0))?;
    if existing > 0 {
        msg_info!(Message::SeedSkippedExistingLists(existing));
        return Ok(false);
    }

    msg_info!(Message::SeedingDatabase);
    let mut insert_list = conn.prepare(INSERT_LIST)?;
    let mut insert_item = conn.prepare(INSERT_ITEM)?;
    let mut item_count = 0;

    for list in SEED_LISTS {
        let list_id = insert_list.insert(params![list.title, list.description])?;
        for (text, completed) in list.items {
            insert_item.execute(params![list_id, text, completed])?;
            item_count += 1;
        }
    }

    msg_success!(Message::SeedCompleted(SEED_LISTS.len(), item_count));
    Ok(true)
}
