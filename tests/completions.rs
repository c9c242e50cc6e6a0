#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use daytrack::libs::error::TrackerError;
    use daytrack::libs::task::NewTask;
    use daytrack::libs::tracker::Tracker;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct CompletionTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for CompletionTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            CompletionTestContext { _temp_dir: temp_dir }
        }
    }

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    #[test_context(CompletionTestContext)]
    #[test]
    fn test_completion_defaults_to_false(_ctx: &mut CompletionTestContext) {
        let mut tracker = Tracker::open().unwrap();
        let task = tracker.create_task(NewTask::daily("Stretch")).unwrap();
        assert!(!tracker.completion(task.id, monday()).unwrap());
    }

    #[test_context(CompletionTestContext)]
    #[test]
    fn test_toggle_recurring_task(_ctx: &mut CompletionTestContext) {
        let mut tracker = Tracker::open().unwrap();
        let task = tracker.create_task(NewTask::daily("Stretch")).unwrap();

        assert!(tracker.toggle_completion(task.id, monday()).unwrap());
        assert!(tracker.completion(task.id, monday()).unwrap());

        // Toggling back returns to the pending state.
        assert!(!tracker.toggle_completion(task.id, monday()).unwrap());
        assert!(!tracker.completion(task.id, monday()).unwrap());

        // The stored record never carries recurring completion.
        let stored = tracker.get_task(task.id).unwrap().unwrap();
        assert!(!stored.completed);
    }

    #[test_context(CompletionTestContext)]
    #[test]
    fn test_toggle_is_date_scoped(_ctx: &mut CompletionTestContext) {
        let mut tracker = Tracker::open().unwrap();
        let task = tracker.create_task(NewTask::daily("Stretch")).unwrap();
        let tuesday = NaiveDate::from_ymd_opt(2024, 6, 11).unwrap();

        tracker.toggle_completion(task.id, monday()).unwrap();

        assert!(tracker.completion(task.id, monday()).unwrap());
        assert!(!tracker.completion(task.id, tuesday).unwrap());
    }

    #[test_context(CompletionTestContext)]
    #[test]
    fn test_toggle_one_time_task_updates_record(_ctx: &mut CompletionTestContext) {
        let mut tracker = Tracker::open().unwrap();
        let due = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let task = tracker.create_task(NewTask::once("Pay rent", due)).unwrap();

        assert!(tracker.toggle_completion(task.id, due).unwrap());

        let stored = tracker.get_task(task.id).unwrap().unwrap();
        assert!(stored.completed);
        // One-time completion lives on the record, not in the ledger.
        assert!(!tracker.completion(task.id, due).unwrap());
    }

    #[test_context(CompletionTestContext)]
    #[test]
    fn test_toggle_branch_follows_stored_record(_ctx: &mut CompletionTestContext) {
        use daytrack::libs::task::{Recurrence, TaskPatch};

        let mut tracker = Tracker::open().unwrap();
        let task = tracker.create_task(NewTask::daily("Stretch")).unwrap();

        // Convert to one-time after creation; the next toggle must hit the
        // record, not the ledger.
        tracker
            .update_task(
                task.id,
                TaskPatch {
                    recurrence: Some(Recurrence::Once),
                    date: Some(NaiveDate::from_ymd_opt(2024, 6, 15)),
                    ..Default::default()
                },
            )
            .unwrap();

        let due = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert!(tracker.toggle_completion(task.id, due).unwrap());

        let stored = tracker.get_task(task.id).unwrap().unwrap();
        assert!(stored.completed);
        assert!(!tracker.completion(task.id, due).unwrap());
    }

    #[test_context(CompletionTestContext)]
    #[test]
    fn test_toggle_missing_task_is_not_found(_ctx: &mut CompletionTestContext) {
        let mut tracker = Tracker::open().unwrap();
        let err = tracker.toggle_completion(404, monday()).unwrap_err();
        assert!(matches!(err, TrackerError::NotFound(404)));
    }

    #[test_context(CompletionTestContext)]
    #[test]
    fn test_delete_task_cascades_completions(_ctx: &mut CompletionTestContext) {
        let mut tracker = Tracker::open().unwrap();
        let task = tracker.create_task(NewTask::daily("Stretch")).unwrap();
        let tuesday = NaiveDate::from_ymd_opt(2024, 6, 11).unwrap();

        tracker.toggle_completion(task.id, monday()).unwrap();
        tracker.toggle_completion(task.id, tuesday).unwrap();

        tracker.delete_task(task.id).unwrap();

        assert!(!tracker.completion(task.id, monday()).unwrap());
        assert!(!tracker.completion(task.id, tuesday).unwrap());
    }

    #[test_context(CompletionTestContext)]
    #[test]
    fn test_set_completion_is_idempotent(_ctx: &mut CompletionTestContext) {
        let mut tracker = Tracker::open().unwrap();
        let task = tracker.create_task(NewTask::daily("Stretch")).unwrap();

        tracker.set_completion(task.id, monday(), true).unwrap();
        tracker.set_completion(task.id, monday(), true).unwrap();
        assert!(tracker.completion(task.id, monday()).unwrap());

        tracker.set_completion(task.id, monday(), false).unwrap();
        tracker.set_completion(task.id, monday(), false).unwrap();
        assert!(!tracker.completion(task.id, monday()).unwrap());
    }
}
