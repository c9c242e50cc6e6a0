#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use daytrack::libs::error::TrackerError;
    use daytrack::libs::task::{NewTask, Recurrence, TaskPatch};
    use daytrack::libs::tracker::Tracker;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TrackerTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for TrackerTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            TrackerTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_create_one_time_task(_ctx: &mut TrackerTestContext) {
        let mut tracker = Tracker::open().unwrap();
        let due = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

        let task = tracker.create_task(NewTask::once("Pay rent", due)).unwrap();
        assert!(task.id > 0);
        assert_eq!(task.title, "Pay rent");
        assert_eq!(task.recurrence, Recurrence::Once);
        assert_eq!(task.date, Some(due));
        assert!(!task.completed);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_create_trims_title(_ctx: &mut TrackerTestContext) {
        let mut tracker = Tracker::open().unwrap();
        let task = tracker.create_task(NewTask::new("  Water plants  ")).unwrap();
        assert_eq!(task.title, "Water plants");
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_create_rejects_blank_title(_ctx: &mut TrackerTestContext) {
        let mut tracker = Tracker::open().unwrap();
        let err = tracker.create_task(NewTask::new("   ")).unwrap_err();
        assert!(matches!(err, TrackerError::Validation(_)));
        assert!(tracker.list_tasks().unwrap().is_empty());
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_create_dateless_task_defaults_to_today(_ctx: &mut TrackerTestContext) {
        let mut tracker = Tracker::open().unwrap();
        let today = chrono::Local::now().date_naive();

        let task = tracker.create_task(NewTask::new("Quick errand")).unwrap();
        assert_eq!(task.recurrence, Recurrence::Once);
        assert_eq!(task.date, Some(today));

        // The task is visible on its (defaulted) day, not stranded dateless.
        let occurrences = tracker.tasks_for_date(today).unwrap();
        assert_eq!(occurrences.len(), 1);
        assert_eq!(occurrences[0].task.title, "Quick errand");
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_create_rejects_out_of_range_weekday(_ctx: &mut TrackerTestContext) {
        let mut tracker = Tracker::open().unwrap();
        let err = tracker.create_task(NewTask::weekly("Workout", &[1, 9])).unwrap_err();
        assert!(matches!(err, TrackerError::Validation(_)));
        assert!(tracker.list_tasks().unwrap().is_empty());
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_update_rejects_out_of_range_weekday(_ctx: &mut TrackerTestContext) {
        let mut tracker = Tracker::open().unwrap();
        let task = tracker.create_task(NewTask::weekly("Workout", &[1, 3])).unwrap();

        let err = tracker
            .update_task(
                task.id,
                TaskPatch {
                    recur_days: Some(vec![7]),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, TrackerError::Validation(_)));

        let stored = tracker.get_task(task.id).unwrap().unwrap();
        assert_eq!(stored.recur_days, vec![1, 3]);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_create_recurring_discards_date(_ctx: &mut TrackerTestContext) {
        let mut tracker = Tracker::open().unwrap();

        let mut input = NewTask::daily("Stretch");
        input.date = NaiveDate::from_ymd_opt(2024, 6, 15);
        let task = tracker.create_task(input).unwrap();

        assert_eq!(task.recurrence, Recurrence::Daily);
        assert_eq!(task.date, None);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_create_non_weekly_discards_recur_days(_ctx: &mut TrackerTestContext) {
        let mut tracker = Tracker::open().unwrap();

        let mut input = NewTask::daily("Stretch");
        input.recur_days = vec![1, 3];
        let task = tracker.create_task(input).unwrap();

        assert!(task.recur_days.is_empty());
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_ids_are_unique_and_increasing(_ctx: &mut TrackerTestContext) {
        let mut tracker = Tracker::open().unwrap();

        let a = tracker.create_task(NewTask::new("A")).unwrap();
        let b = tracker.create_task(NewTask::new("B")).unwrap();
        tracker.delete_task(b.id).unwrap();
        let c = tracker.create_task(NewTask::new("C")).unwrap();

        assert!(b.id > a.id);
        // Deleted ids are never handed out again.
        assert!(c.id > b.id);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_update_task(_ctx: &mut TrackerTestContext) {
        let mut tracker = Tracker::open().unwrap();
        let task = tracker.create_task(NewTask::new("Original").with_notes("old")).unwrap();

        let updated = tracker
            .update_task(
                task.id,
                TaskPatch {
                    title: Some("Renamed".to_string()),
                    notes: Some("new".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.notes, Some("new".to_string()));
        assert_eq!(updated.created_at, task.created_at);

        let stored = tracker.get_task(task.id).unwrap().unwrap();
        assert_eq!(stored.title, "Renamed");
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_update_missing_task_is_not_found(_ctx: &mut TrackerTestContext) {
        let mut tracker = Tracker::open().unwrap();
        let err = tracker
            .update_task(
                999,
                TaskPatch {
                    title: Some("Ghost".to_string()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, TrackerError::NotFound(999)));
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_update_rejects_blank_title(_ctx: &mut TrackerTestContext) {
        let mut tracker = Tracker::open().unwrap();
        let task = tracker.create_task(NewTask::new("Keep me")).unwrap();

        let err = tracker
            .update_task(
                task.id,
                TaskPatch {
                    title: Some("  ".to_string()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, TrackerError::Validation(_)));

        // The stored record is untouched.
        let stored = tracker.get_task(task.id).unwrap().unwrap();
        assert_eq!(stored.title, "Keep me");
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_delete_task(_ctx: &mut TrackerTestContext) {
        let mut tracker = Tracker::open().unwrap();
        let task = tracker.create_task(NewTask::new("Doomed")).unwrap();

        assert!(tracker.delete_task(task.id).unwrap());
        assert!(tracker.get_task(task.id).unwrap().is_none());
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_delete_missing_task_is_noop(_ctx: &mut TrackerTestContext) {
        let mut tracker = Tracker::open().unwrap();
        assert!(!tracker.delete_task(12345).unwrap());
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_list_tasks_in_creation_order(_ctx: &mut TrackerTestContext) {
        let mut tracker = Tracker::open().unwrap();
        for title in ["First", "Second", "Third"] {
            tracker.create_task(NewTask::new(title)).unwrap();
        }

        let titles: Vec<String> = tracker.list_tasks().unwrap().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }
}
