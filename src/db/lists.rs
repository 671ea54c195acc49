use super::error::{Result, StoreError};
use super::items::item_from_row;
use crate::libs::messages::Message;
use crate::libs::todo::{NewTodoList, TodoList, TodoListWithItems};
use rusqlite::{params, Connection, OptionalExtension, Row};

const SELECT_LISTS: &str = "SELECT id, title, description, created_at FROM todo_lists ORDER BY created_at DESC, id DESC";
const SELECT_LIST_BY_ID: &str = "SELECT id, title, description, created_at FROM todo_lists WHERE id = ?1";
const INSERT_LIST: &str = "INSERT INTO todo_lists (title, description) VALUES (?1, ?2)";
const DELETE_LIST: &str = "DELETE FROM todo_lists WHERE id = ?1";
// The completed filter sits in the join condition, not in WHERE, so lists
// without open items still produce exactly one row with NULL item columns.
const SELECT_LISTS_WITH_OPEN_ITEMS: &str = "
    SELECT l.id, l.title, l.description, l.created_at,
           i.id, i.list_id, i.text, i.completed, i.due_date, i.created_at
    FROM todo_lists l
    LEFT JOIN todo_items i ON i.list_id = l.id AND i.completed = 0
    ORDER BY l.created_at DESC, l.id DESC, i.created_at ASC, i.id ASC
";

/// Data access for todo lists.
pub struct TodoLists<'a> {
    conn: &'a Connection,
}

impl<'a> TodoLists<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        TodoLists { conn }
    }

    /// All lists, newest first.
    pub fn all(&self) -> Result<Vec<TodoList>> {
        let mut stmt = self.conn.prepare(SELECT_LISTS)?;
        let list_iter = stmt.query_map([], list_from_row)?;

        let mut lists = Vec::new();
        for list in list_iter {
            lists.push(list?);
        }
        Ok(lists)
    }

    /// All lists, newest first, each carrying only its incomplete items.
    ///
    /// One query: the outer join is grouped here, and a list whose join
    /// produced no item row gets an empty `items` vector.
    pub fn all_with_open_items(&self) -> Result<Vec<TodoListWithItems>> {
        let mut stmt = self.conn.prepare(SELECT_LISTS_WITH_OPEN_ITEMS)?;
        let mut rows = stmt.query([])?;

        let mut lists: Vec<TodoListWithItems> = Vec::new();
        while let Some(row) = rows.next()? {
            let list_id: i64 = row.get(0)?;
            if lists.last().map(|l| l.list.id) != Some(list_id) {
                lists.push(TodoListWithItems {
                    list: list_from_row(row)?,
                    items: Vec::new(),
                });
            }

            let item_id: Option<i64> = row.get(4)?;
            if item_id.is_some() {
                let item = item_from_row(row, 4)?;
                if let Some(current) = lists.last_mut() {
                    current.items.push(item);
                }
            }
        }

        Ok(lists)
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<TodoList>> {
        self.conn
            .query_row(SELECT_LIST_BY_ID, params![id], list_from_row)
            .optional()
            .map_err(Into::into)
    }

    /// Creates a list and returns its id. The title must not be blank.
    pub fn create(&self, list: &NewTodoList) -> Result<i64> {
        let title = list.title.trim();
        if title.is_empty() {
            return Err(StoreError::Validation(Message::ListTitleRequired.to_string()));
        }

        self.conn.execute(INSERT_LIST, params![title, list.description])?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Deletes a list together with its items; returns the number of lists removed.
    pub fn delete(&self, id: i64) -> Result<usize> {
        Ok(self.conn.execute(DELETE_LIST, params![id])?)
    }
}

fn list_from_row(row: &Row) -> rusqlite::Result<TodoList> {
    Ok(TodoList {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        created_at: row.get(3)?,
    })
}
