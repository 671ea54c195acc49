#[cfg(test)]
mod tests {
    use listkeeper::db::db::Db;
    use listkeeper::db::error::StoreError;
    use listkeeper::db::items::TodoItems;
    use listkeeper::db::lists::TodoLists;
    use listkeeper::libs::todo::{NewTodoItem, NewTodoList, TodoListWithItems};
    use test_context::{test_context, TestContext};

    struct ListTestContext {
        db: Db,
    }

    impl TestContext for ListTestContext {
        fn setup() -> Self {
            ListTestContext { db: Db::in_memory().unwrap() }
        }
    }

    fn open_texts(lists: &[TodoListWithItems], list_id: i64) -> Vec<String> {
        let list = lists.iter().find(|l| l.list.id == list_id).expect("list missing from composite read");
        list.items.iter().map(|i| i.text.clone()).collect()
    }

    #[test_context(ListTestContext)]
    #[test]
    fn test_create_then_get(ctx: &mut ListTestContext) {
        let lists = TodoLists::new(&ctx.db.conn);
        let existing: Vec<i64> = lists.all().unwrap().iter().map(|l| l.id).collect();

        let id = lists.create(&NewTodoList::new("Weekend", Some("Things for Saturday"))).unwrap();
        assert!(!existing.contains(&id));

        let list = lists.get_by_id(id).unwrap().unwrap();
        assert_eq!(list.id, id);
        assert_eq!(list.title, "Weekend");
        assert_eq!(list.description.as_deref(), Some("Things for Saturday"));

        let bare = lists.create(&NewTodoList::new("No description", None)).unwrap();
        assert!(lists.get_by_id(bare).unwrap().unwrap().description.is_none());
    }

    #[test_context(ListTestContext)]
    #[test]
    fn test_blank_title_is_rejected(ctx: &mut ListTestContext) {
        let lists = TodoLists::new(&ctx.db.conn);
        let before = lists.all().unwrap().len();

        let result = lists.create(&NewTodoList::new("   ", None));
        assert!(matches!(result, Err(StoreError::Validation(_))));
        assert_eq!(lists.all().unwrap().len(), before);
    }

    #[test_context(ListTestContext)]
    #[test]
    fn test_missing_list_is_none(ctx: &mut ListTestContext) {
        assert!(TodoLists::new(&ctx.db.conn).get_by_id(12345).unwrap().is_none());
    }

    #[test_context(ListTestContext)]
    #[test]
    fn test_newest_list_comes_first(ctx: &mut ListTestContext) {
        let lists = TodoLists::new(&ctx.db.conn);
        let first = lists.create(&NewTodoList::new("First", None)).unwrap();
        let second = lists.create(&NewTodoList::new("Second", None)).unwrap();

        let all = lists.all().unwrap();
        assert_eq!(all[0].id, second);
        assert_eq!(all[1].id, first);

        let composite = lists.all_with_open_items().unwrap();
        let order: Vec<i64> = composite.iter().map(|l| l.list.id).collect();
        let plain: Vec<i64> = all.iter().map(|l| l.id).collect();
        assert_eq!(order, plain);
    }

    #[test_context(ListTestContext)]
    #[test]
    fn test_delete_cascades_to_items(ctx: &mut ListTestContext) {
        let lists = TodoLists::new(&ctx.db.conn);
        let items = TodoItems::new(&ctx.db.conn);

        let id = lists.create(&NewTodoList::new("Doomed", None)).unwrap();
        let item = items.create(id, &NewTodoItem::new("Also doomed")).unwrap();
        assert_eq!(items.by_list(id).unwrap().len(), 1);

        assert_eq!(lists.delete(id).unwrap(), 1);
        assert!(lists.get_by_id(id).unwrap().is_none());
        assert!(items.by_list(id).unwrap().is_empty());
        assert!(items.get_by_id(item).unwrap().is_none());

        // Deleting again is harmless
        assert_eq!(lists.delete(id).unwrap(), 0);
    }

    #[test_context(ListTestContext)]
    #[test]
    fn test_ids_are_not_reused(ctx: &mut ListTestContext) {
        let lists = TodoLists::new(&ctx.db.conn);
        let old = lists.create(&NewTodoList::new("Temporary", None)).unwrap();
        lists.delete(old).unwrap();

        let new = lists.create(&NewTodoList::new("Replacement", None)).unwrap();
        assert!(new > old);
    }

    #[test_context(ListTestContext)]
    #[test]
    fn test_open_items_exclude_completed(ctx: &mut ListTestContext) {
        let lists = TodoLists::new(&ctx.db.conn);
        let work = lists.all().unwrap().into_iter().find(|l| l.title == "Work Tasks").unwrap();

        let composite = lists.all_with_open_items().unwrap();
        assert_eq!(open_texts(&composite, work.id), vec!["Complete project proposal", "Update documentation"]);
    }

    #[test_context(ListTestContext)]
    #[test]
    fn test_completion_toggles_membership(ctx: &mut ListTestContext) {
        let lists = TodoLists::new(&ctx.db.conn);
        let items = TodoItems::new(&ctx.db.conn);

        let id = lists.create(&NewTodoList::new("Toggle", None)).unwrap();
        let first = items.create(id, &NewTodoItem::new("First")).unwrap();
        items.create(id, &NewTodoItem::new("Second")).unwrap();

        assert_eq!(items.set_completed(first, true).unwrap(), 1);
        assert_eq!(open_texts(&lists.all_with_open_items().unwrap(), id), vec!["Second"]);

        assert_eq!(items.set_completed(first, false).unwrap(), 1);
        assert_eq!(open_texts(&lists.all_with_open_items().unwrap(), id), vec!["First", "Second"]);
    }

    #[test_context(ListTestContext)]
    #[test]
    fn test_lists_without_open_items_have_empty_arrays(ctx: &mut ListTestContext) {
        let lists = TodoLists::new(&ctx.db.conn);
        let items = TodoItems::new(&ctx.db.conn);

        let empty = lists.create(&NewTodoList::new("Nothing yet", None)).unwrap();
        let done = lists.create(&NewTodoList::new("All done", None)).unwrap();
        let item = items.create(done, &NewTodoItem::new("Finished")).unwrap();
        items.set_completed(item, true).unwrap();

        let composite = lists.all_with_open_items().unwrap();
        // One entry per list, never duplicated by the join
        assert_eq!(composite.len(), lists.all().unwrap().len());
        assert!(open_texts(&composite, empty).is_empty());
        assert!(open_texts(&composite, done).is_empty());

        for list in &composite {
            for open in &list.items {
                assert!(open.id > 0);
                assert_eq!(open.list_id, list.list.id);
                assert!(!open.completed);
            }
        }

        let json = serde_json::to_value(&composite).unwrap();
        for list in json.as_array().unwrap() {
            assert!(list["items"].is_array());
            for open in list["items"].as_array().unwrap() {
                assert!(!open["id"].is_null());
            }
        }
    }
}
