use super::error::{Result, StoreError};
use crate::libs::messages::Message;
use crate::libs::todo::{NewTodoItem, TodoItem};
use rusqlite::{params, Connection, OptionalExtension, Row};

const ITEM_COLUMNS: &str = "id, list_id, text, completed, due_date, created_at";
const INSERT_ITEM: &str = "INSERT INTO todo_items (list_id, text, due_date) VALUES (?1, ?2, ?3)";
const UPDATE_COMPLETED: &str = "UPDATE todo_items SET completed = ?2 WHERE id = ?1";
const DELETE_ITEM: &str = "DELETE FROM todo_items WHERE id = ?1";

/// Data access for todo items.
pub struct TodoItems<'a> {
    conn: &'a Connection,
}

impl<'a> TodoItems<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        TodoItems { conn }
    }

    /// Items of one list, oldest first. Unknown lists yield an empty vector.
    pub fn by_list(&self, list_id: i64) -> Result<Vec<TodoItem>> {
        let sql = format!("SELECT {} FROM todo_items WHERE list_id = ?1 ORDER BY created_at ASC, id ASC", ITEM_COLUMNS);
        let mut stmt = self.conn.prepare(&sql)?;
        let item_iter = stmt.query_map(params![list_id], |row| item_from_row(row, 0))?;

        let mut items = Vec::new();
        for item in item_iter {
            items.push(item?);
        }
        Ok(items)
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<TodoItem>> {
        let sql = format!("SELECT {} FROM todo_items WHERE id = ?1", ITEM_COLUMNS);
        self.conn
            .query_row(&sql, params![id], |row| item_from_row(row, 0))
            .optional()
            .map_err(Into::into)
    }

    /// Adds an open item to `list_id` and returns its id.
    ///
    /// A list id that does not exist fails with
    /// [`StoreError::ConstraintViolation`] and inserts nothing.
    pub fn create(&self, list_id: i64, item: &NewTodoItem) -> Result<i64> {
        let text = item.text.trim();
        if text.is_empty() {
            return Err(StoreError::Validation(Message::ItemTextRequired.to_string()));
        }

        self.conn.execute(INSERT_ITEM, params![list_id, text, item.due_date])?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Sets the completion flag; returns the number of rows changed (0 for an unknown id).
    pub fn set_completed(&self, id: i64, completed: bool) -> Result<usize> {
        Ok(self.conn.execute(UPDATE_COMPLETED, params![id, completed])?)
    }

    /// Removes an item; deleting an absent id changes nothing and is not an error.
    pub fn delete(&self, id: i64) -> Result<usize> {
        Ok(self.conn.execute(DELETE_ITEM, params![id])?)
    }
}

/// Maps the six item columns starting at `offset`.
pub(crate) fn item_from_row(row: &Row, offset: usize) -> rusqlite::Result<TodoItem> {
    Ok(TodoItem {
        id: row.get(offset)?,
        list_id: row.get(offset + 1)?,
        text: row.get(offset + 2)?,
        completed: row.get(offset + 3)?,
        due_date: row.get(offset + 4)?,
        created_at: row.get(offset + 5)?,
    })
}
