#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tasktree::libs::task::{Category, Status, Task};

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new(7, "Water plants", "Balcony");
        assert_eq!(task.id, 7);
        assert_eq!(task.title, "Water plants");
        assert_eq!(task.description, "Balcony");
        assert_eq!(task.status, Status::Pending);
        assert_eq!(task.category, Category::Generic);
        assert_eq!(task.type_label(), "Task");
    }

    #[test]
    fn test_type_labels_per_category() {
        let labels: Vec<&str> = Category::ALL
            .iter()
            .map(|category| Task::with_category(1, "t", "", *category).type_label())
            .collect();
        assert_eq!(
            labels,
            vec!["Task", "Personal Task", "Work Task", "Study Task", "Volunteer Task"]
        );
    }

    #[test]
    fn test_any_status_transition_is_allowed() {
        let mut task = Task::new(1, "t", "");
        task.set_status(Status::Completed);
        assert!(task.is_completed());
        task.set_status(Status::Pending);
        assert_eq!(task.status, Status::Pending);
        task.set_status(Status::InProgress);
        assert_eq!(task.status, Status::InProgress);
    }

    #[test]
    fn test_created_timestamp_survives_status_changes() {
        let stamp = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap().and_hms_opt(23, 59, 0).unwrap();
        let mut task = Task::new(1, "t", "").with_created_at(stamp);
        task.set_status(Status::Completed);
        assert_eq!(task.created_at(), stamp);
    }

    #[test]
    fn test_serialized_shape() {
        let stamp = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap().and_hms_opt(9, 30, 0).unwrap();
        let mut task = Task::with_category(3, "Standup", "", Category::Work).with_created_at(stamp);
        task.set_status(Status::InProgress);

        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["category"], "work");
        assert_eq!(json["status"], "in-progress");
        assert_eq!(json["created_at"], "2025-01-15T09:30:00");

        let back: Task = serde_json::from_value(json).unwrap();
        assert_eq!(back, task);
    }
}
