use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{de, Deserialize, Deserializer, Serialize};

/// A named container of todo items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoList {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
}

/// A single entry belonging to exactly one list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: i64,
    pub list_id: i64,
    pub text: String,
    pub completed: bool,
    pub due_date: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

/// A list together with a subset of its items.
///
/// Returned by the composite read, where `items` holds only the open ones.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoListWithItems {
    #[serde(flatten)]
    pub list: TodoList,
    pub items: Vec<TodoItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewTodoList {
    pub title: String,
    pub description: Option<String>,
}

impl NewTodoList {
    pub fn new(title: &str, description: Option<&str>) -> Self {
        NewTodoList {
            title: title.to_string(),
            description: description.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodoItem {
    pub text: String,
    #[serde(default, deserialize_with = "deserialize_due_date")]
    pub due_date: Option<NaiveDateTime>,
}

impl NewTodoItem {
    pub fn new(text: &str) -> Self {
        NewTodoItem {
            text: text.to_string(),
            due_date: None,
        }
    }

    pub fn with_due_date(mut self, due_date: NaiveDateTime) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Parses a due date as sent by clients.
///
/// Accepts full timestamps (`2025-01-15T18:00:00`, with a space or fractional
/// seconds too), RFC 3339 with an offset (stored as UTC), minute precision as
/// produced by `datetime-local` inputs, and bare dates, which mean midnight.
pub fn parse_due_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_utc()))
        .or_else(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().and_then(|date| date.and_hms_opt(0, 0, 0)))
}

fn deserialize_due_date<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse_due_date(&raw)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid dueDate '{}'", raw))),
        None => Ok(None),
    }
}
