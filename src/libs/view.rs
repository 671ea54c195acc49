use super::todo::TodoListWithItems;
use crate::libs::messages::Message;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Builds a table with one row per open item, grouped under its list.
    pub fn lists_table(lists: &[TodoListWithItems]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["LIST ID", "TITLE", "ITEM ID", "ITEM", "DUE"]);
        for entry in lists {
            let list = &entry.list;
            if entry.items.is_empty() {
                table.add_row(row![list.id, list.title, "", Message::NoOpenItems, ""]);
                continue;
            }
            for (index, item) in entry.items.iter().enumerate() {
                // Only the first row of a group repeats the list columns
                let (list_id, title) = if index == 0 { (list.id.to_string(), list.title.as_str()) } else { (String::new(), "") };
                let due = item.due_date.map(|d| d.format("%Y-%m-%d %H:%M").to_string()).unwrap_or_default();
                table.add_row(row![list_id, title, item.id, item.text, due]);
            }
        }

        table
    }

    pub fn lists(lists: &[TodoListWithItems]) {
        Self::lists_table(lists).printstd();
    }
}
