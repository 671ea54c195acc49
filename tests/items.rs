#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use listkeeper::db::db::Db;
    use listkeeper::db::error::StoreError;
    use listkeeper::db::items::TodoItems;
    use listkeeper::db::lists::TodoLists;
    use listkeeper::libs::todo::{NewTodoItem, NewTodoList};
    use test_context::{test_context, TestContext};

    struct ItemTestContext {
        db: Db,
        list_id: i64,
    }

    impl TestContext for ItemTestContext {
        fn setup() -> Self {
            let db = Db::in_memory().unwrap();
            let list_id = TodoLists::new(&db.conn).create(&NewTodoList::new("Scratch", None)).unwrap();
            ItemTestContext { db, list_id }
        }
    }

    fn item_count(db: &Db) -> i64 {
        db.conn.query_row("SELECT COUNT(*) FROM todo_items", [], |row| row.get(0)).unwrap()
    }

    #[test_context(ItemTestContext)]
    #[test]
    fn test_create_item_defaults(ctx: &mut ItemTestContext) {
        let items = TodoItems::new(&ctx.db.conn);
        let id = items.create(ctx.list_id, &NewTodoItem::new("Water plants")).unwrap();

        let item = items.get_by_id(id).unwrap().unwrap();
        assert_eq!(item.list_id, ctx.list_id);
        assert_eq!(item.text, "Water plants");
        assert!(!item.completed);
        assert!(item.due_date.is_none());
    }

    #[test_context(ItemTestContext)]
    #[test]
    fn test_due_date_is_stored(ctx: &mut ItemTestContext) {
        let items = TodoItems::new(&ctx.db.conn);
        let due = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap().and_hms_opt(17, 0, 0).unwrap();

        let id = items.create(ctx.list_id, &NewTodoItem::new("File taxes").with_due_date(due)).unwrap();
        assert_eq!(items.get_by_id(id).unwrap().unwrap().due_date, Some(due));
    }

    #[test_context(ItemTestContext)]
    #[test]
    fn test_unknown_list_is_a_constraint_violation(ctx: &mut ItemTestContext) {
        let before = item_count(&ctx.db);

        let result = TodoItems::new(&ctx.db.conn).create(999, &NewTodoItem::new("x"));
        assert!(matches!(result, Err(StoreError::ConstraintViolation { .. })));
        assert_eq!(item_count(&ctx.db), before);
    }

    #[test_context(ItemTestContext)]
    #[test]
    fn test_blank_text_is_rejected(ctx: &mut ItemTestContext) {
        let before = item_count(&ctx.db);

        let result = TodoItems::new(&ctx.db.conn).create(ctx.list_id, &NewTodoItem::new(""));
        assert!(matches!(result, Err(StoreError::Validation(_))));
        assert_eq!(item_count(&ctx.db), before);
    }

    #[test_context(ItemTestContext)]
    #[test]
    fn test_items_are_oldest_first(ctx: &mut ItemTestContext) {
        let items = TodoItems::new(&ctx.db.conn);
        for text in ["one", "two", "three"] {
            items.create(ctx.list_id, &NewTodoItem::new(text)).unwrap();
        }

        let texts: Vec<String> = items.by_list(ctx.list_id).unwrap().into_iter().map(|i| i.text).collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
    }

    #[test_context(ItemTestContext)]
    #[test]
    fn test_unknown_list_has_no_items(ctx: &mut ItemTestContext) {
        assert!(TodoItems::new(&ctx.db.conn).by_list(424242).unwrap().is_empty());
    }

    #[test_context(ItemTestContext)]
    #[test]
    fn test_set_completed(ctx: &mut ItemTestContext) {
        let items = TodoItems::new(&ctx.db.conn);
        let id = items.create(ctx.list_id, &NewTodoItem::new("Call mom")).unwrap();

        assert_eq!(items.set_completed(id, true).unwrap(), 1);
        assert!(items.get_by_id(id).unwrap().unwrap().completed);

        // Unknown ids are not an error
        assert_eq!(items.set_completed(id + 1000, true).unwrap(), 0);
    }

    #[test_context(ItemTestContext)]
    #[test]
    fn test_delete_twice(ctx: &mut ItemTestContext) {
        let items = TodoItems::new(&ctx.db.conn);
        let id = items.create(ctx.list_id, &NewTodoItem::new("Once")).unwrap();

        assert_eq!(items.delete(id).unwrap(), 1);
        assert_eq!(items.delete(id).unwrap(), 0);
        assert!(items.get_by_id(id).unwrap().is_none());
    }
}
