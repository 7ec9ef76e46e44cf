#[cfg(test)]
mod tests {
    use tasktree::libs::component::{TaskComponent, TaskGroup, TreeError};
    use tasktree::libs::task::{Category, Status, Task};
    use test_context::{test_context, TestContext};

    /// Work (10)
    /// ├── A (1, pending)
    /// ├── B (2, completed)
    /// └── Sub (11)
    ///     └── C (3, pending)
    struct TreeTestContext {
        work: TaskGroup,
    }

    impl TestContext for TreeTestContext {
        fn setup() -> Self {
            let a = Task::with_category(1, "A", "", Category::Work);
            let mut b = Task::with_category(2, "B", "", Category::Work);
            b.set_status(Status::Completed);
            let c = Task::with_category(3, "C", "", Category::Study);

            let mut sub = TaskGroup::new(11, "Sub", "#27ae60");
            sub.add(c.into());

            let mut work = TaskGroup::new(10, "Work", "#e67e22");
            work.add(a.into());
            work.add(b.into());
            work.add(sub.into());

            TreeTestContext { work }
        }
    }

    fn ids(group: &TaskGroup) -> Vec<u32> {
        group.flatten_leaves().iter().map(|leaf| leaf.task.id).collect()
    }

    #[test_context(TreeTestContext)]
    #[test]
    fn test_count_matches_nested_leaves(ctx: &mut TreeTestContext) {
        assert_eq!(ctx.work.count_tasks(), 3);
        assert_eq!(ctx.work.count_tasks(), ctx.work.flatten_leaves().len());
        assert_eq!(ids(&ctx.work), vec![1, 2, 3]);
    }

    #[test_context(TreeTestContext)]
    #[test]
    fn test_group_status_reaches_every_leaf(ctx: &mut TreeTestContext) {
        let touched = ctx.work.set_group_status(Status::Completed);
        assert_eq!(touched, 3);
        assert!(ctx.work.flatten_leaves().iter().all(|leaf| leaf.task.status == Status::Completed));
        assert_eq!(ctx.work.progress(), 100);
    }

    #[test_context(TreeTestContext)]
    #[test]
    fn test_remove_then_lookup_returns_none(ctx: &mut TreeTestContext) {
        for id in [3, 1, 11, 2] {
            assert!(ctx.work.get_child(id).is_some());
            let removed = ctx.work.remove(id).unwrap();
            assert_eq!(removed.id(), id);
            assert!(ctx.work.get_child(id).is_none());
            assert_eq!(ctx.work.count_tasks(), ctx.work.flatten_leaves().len());
        }
        assert_eq!(ctx.work.count_tasks(), 0);
        assert_eq!(ctx.work.remove(1), Err(TreeError::NotFound(1)));
    }

    #[test_context(TreeTestContext)]
    #[test]
    fn test_removing_a_group_takes_its_subtree(ctx: &mut TreeTestContext) {
        let removed = ctx.work.remove(11).unwrap();
        assert!(removed.is_composite());
        assert_eq!(removed.count_tasks(), 1);
        assert!(ctx.work.get_child(3).is_none());
        assert_eq!(ids(&ctx.work), vec![1, 2]);
    }

    #[test_context(TreeTestContext)]
    #[test]
    fn test_search_prefers_direct_children(ctx: &mut TreeTestContext) {
        // Same id at two depths: the direct child wins.
        ctx.work.add(Task::new(3, "Shallow C", "").into());
        match ctx.work.get_child(3) {
            Some(TaskComponent::Leaf(leaf)) => assert_eq!(leaf.task.title, "Shallow C"),
            other => panic!("unexpected lookup result: {:?}", other),
        }

        ctx.work.remove(3).unwrap();
        match ctx.work.get_child(3) {
            Some(TaskComponent::Leaf(leaf)) => assert_eq!(leaf.task.title, "C"),
            other => panic!("unexpected lookup result: {:?}", other),
        }
    }

    #[test_context(TreeTestContext)]
    #[test]
    fn test_count_by_status(ctx: &mut TreeTestContext) {
        assert_eq!(ctx.work.count_by_status(Status::Pending), 2);
        assert_eq!(ctx.work.count_by_status(Status::Completed), 1);
        assert_eq!(ctx.work.count_by_status(Status::InProgress), 0);
        assert_eq!(ctx.work.progress(), 33);
    }

    #[test_context(TreeTestContext)]
    #[test]
    fn test_find_task_mut_changes_nested_task(ctx: &mut TreeTestContext) {
        ctx.work.find_task_mut(3).unwrap().set_status(Status::InProgress);
        assert_eq!(ctx.work.count_by_status(Status::InProgress), 1);
        assert!(ctx.work.find_task_mut(11).is_none());
    }

    #[test]
    fn test_leaf_rejects_children() {
        let mut leaf = TaskComponent::from(Task::new(1, "Solo", ""));
        let before = leaf.clone();

        assert_eq!(leaf.add(Task::new(2, "Other", "").into()), Err(TreeError::NotAGroup));
        assert_eq!(leaf.remove(1), Err(TreeError::NotAGroup));
        assert!(leaf.get_child(1).is_none());
        assert!(!leaf.is_composite());
        assert_eq!(leaf.count_tasks(), 1);
        assert_eq!(leaf, before);
    }

    #[test]
    fn test_component_add_appends_in_order() {
        let mut group = TaskComponent::from(TaskGroup::new(1, "G", "#000"));
        group.add(Task::new(2, "first", "").into()).unwrap();
        group.add(TaskGroup::new(3, "nested", "#000").into()).unwrap();
        group.add(Task::new(4, "last", "").into()).unwrap();

        let order: Vec<u32> = group.children().iter().map(TaskComponent::id).collect();
        assert_eq!(order, vec![2, 3, 4]);
        assert_eq!(group.count_tasks(), 2);
    }

    #[test]
    fn test_empty_group() {
        let mut group = TaskGroup::new(1, "Empty", "#000");
        assert_eq!(group.count_tasks(), 0);
        assert!(group.flatten_leaves().is_empty());
        assert_eq!(group.progress(), 0);
        assert_eq!(group.set_group_status(Status::Completed), 0);
        assert_eq!(group.remove(5), Err(TreeError::NotFound(5)));
    }

    #[test]
    fn test_toggle_expanded() {
        let mut group = TaskGroup::new(1, "G", "#000");
        assert!(group.expanded);
        assert!(!group.toggle_expanded());
        assert!(group.toggle_expanded());
    }

    #[test]
    fn test_deep_nesting_counts() {
        let mut current = TaskGroup::new(100, "level-0", "#000");
        current.add(Task::new(1, "deepest", "").into());
        for level in 1..20u32 {
            let mut parent = TaskGroup::new(100 + level, "level", "#000");
            parent.add(Task::new(level + 1, "task", "").into());
            parent.add(current.into());
            current = parent;
        }

        assert_eq!(current.count_tasks(), 20);
        assert_eq!(current.flatten_leaves().len(), 20);
        assert!(current.get_child(1).is_some());
        current.remove(1).unwrap();
        assert_eq!(current.count_tasks(), 19);
    }
}
