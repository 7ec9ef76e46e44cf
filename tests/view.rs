#[cfg(test)]
mod tests {
    use tasktree::libs::component::TaskGroup;
    use tasktree::libs::messages::Message;
    use tasktree::libs::task::{Category, Status, Task};
    use tasktree::libs::view::View;
    use tasktree::msg_bail_anyhow;

    fn sample() -> TaskGroup {
        let mut sub = TaskGroup::new(11, "Sub", "#000");
        sub.add(Task::with_category(3, "C", "", Category::Study).into());

        let mut done = Task::with_category(2, "B", "", Category::Work);
        done.set_status(Status::Completed);

        let mut work = TaskGroup::new(10, "Work", "#000");
        work.add(Task::with_category(1, "A", "", Category::Work).into());
        work.add(done.into());
        work.add(sub.into());

        let mut root = TaskGroup::new(0, "root", "#000");
        root.add(work.into());
        root
    }

    #[test]
    fn test_render_expanded_tree() {
        let rendered = View::render_tree(&sample());
        let expected = "\
└── ▾ Work #10 (1/3)
    ├── [ ] #1 💼 A
    ├── [x] #2 💼 B
    └── ▾ Sub #11 (0/1)
        └── [ ] #3 📚 C
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_collapsed_group_hides_children() {
        let mut root = sample();
        if let Some(tasktree::libs::component::TaskComponent::Group(work)) = root.get_child_mut(10) {
            work.toggle_expanded();
        }

        let rendered = View::render_tree(&root);
        assert_eq!(rendered, "└── ▸ Work #10 (1/3)\n");
    }

    #[test]
    fn test_messages_render() {
        assert_eq!(Message::StatusApplied(3, Status::Completed.to_string()).to_string(), "Status 'Completed' applied to 3 task(s)");
        assert_eq!(Message::GroupToggled("Work".to_string(), false).to_string(), "Group 'Work' collapsed");
        assert_eq!(Message::GroupSummary(7, 14).to_string(), "7 task(s), 14% done");
        assert_eq!(Message::NotAGroup(4).to_string(), "Item #4 is a task, not a group");
    }

    fn lookup(root: &TaskGroup, id: u32) -> anyhow::Result<String> {
        match root.get_child(id) {
            Some(component) => Ok(component.id().to_string()),
            None => msg_bail_anyhow!(Message::ComponentNotFound(id)),
        }
    }

    #[test]
    fn test_bail_carries_message() {
        let root = sample();
        assert_eq!(lookup(&root, 3).unwrap(), "3");
        assert_eq!(lookup(&root, 42).unwrap_err().to_string(), "❌ Item #42 not found");
    }
}
