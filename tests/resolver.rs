#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use daytrack::libs::occurrence::{matches_date, resolve, weekday_index, CompletionSet};
    use daytrack::libs::task::{Recurrence, Task};

    fn ts(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn task(id: i64, title: &str, recurrence: Recurrence, recur_days: Vec<u8>, date: Option<NaiveDate>) -> Task {
        Task {
            id,
            title: title.to_string(),
            notes: None,
            recurrence,
            recur_days,
            date,
            completed: false,
            created_at: ts(&format!("2024-06-01 10:00:{:02}", id)),
            updated_at: ts(&format!("2024-06-01 10:00:{:02}", id)),
        }
    }

    #[test]
    fn test_weekday_index_is_sunday_based() {
        // 2024-06-09 is a Sunday.
        assert_eq!(weekday_index(NaiveDate::from_ymd_opt(2024, 6, 9).unwrap()), 0);
        assert_eq!(weekday_index(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()), 1);
        assert_eq!(weekday_index(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()), 6);
    }

    #[test]
    fn test_daily_task_matches_every_date() {
        let t = task(1, "Stretch", Recurrence::Daily, vec![], None);
        for day in 1..=30 {
            let date = NaiveDate::from_ymd_opt(2024, 6, day).unwrap();
            assert!(matches_date(&t, date, weekday_index(date)));
        }
    }

    #[test]
    fn test_weekly_task_matches_only_listed_weekdays() {
        // Monday and Wednesday.
        let t = task(1, "Workout", Recurrence::Weekly, vec![1, 3], None);

        let monday = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let tuesday = NaiveDate::from_ymd_opt(2024, 6, 11).unwrap();
        let wednesday = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();

        assert!(matches_date(&t, monday, weekday_index(monday)));
        assert!(!matches_date(&t, tuesday, weekday_index(tuesday)));
        assert!(matches_date(&t, wednesday, weekday_index(wednesday)));
    }

    #[test]
    fn test_weekly_task_with_empty_days_matches_nothing() {
        let t = task(1, "Orphan", Recurrence::Weekly, vec![], None);
        for day in 1..=30 {
            let date = NaiveDate::from_ymd_opt(2024, 6, day).unwrap();
            assert!(!matches_date(&t, date, weekday_index(date)));
        }
    }

    #[test]
    fn test_once_task_matches_exact_date_only() {
        let due = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let t = task(1, "Pay rent", Recurrence::Once, vec![], Some(due));

        assert!(matches_date(&t, due, weekday_index(due)));
        let day_before = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
        let day_after = NaiveDate::from_ymd_opt(2024, 6, 16).unwrap();
        assert!(!matches_date(&t, day_before, weekday_index(day_before)));
        assert!(!matches_date(&t, day_after, weekday_index(day_after)));
    }

    #[test]
    fn test_once_task_without_date_matches_nothing() {
        let t = task(1, "Dateless", Recurrence::Once, vec![], None);
        let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert!(!matches_date(&t, date, weekday_index(date)));
    }

    #[test]
    fn test_resolve_preserves_input_order() {
        let tasks = vec![
            task(3, "Third", Recurrence::Daily, vec![], None),
            task(1, "First", Recurrence::Daily, vec![], None),
            task(2, "Second", Recurrence::Daily, vec![], None),
        ];
        let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let occurrences = resolve(date, &tasks, &CompletionSet::new());

        let ids: Vec<i64> = occurrences.iter().map(|o| o.task.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_resolve_recurring_completion_from_ledger() {
        let tasks = vec![task(1, "Workout", Recurrence::Daily, vec![], None)];
        let monday = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let tuesday = NaiveDate::from_ymd_opt(2024, 6, 11).unwrap();

        let mut completions = CompletionSet::new();
        completions.insert(1, monday, true);

        let on_monday = resolve(monday, &tasks, &completions);
        assert!(on_monday[0].completed);

        // No ledger entry for Tuesday, so it reads as pending.
        let on_tuesday = resolve(tuesday, &tasks, &completions);
        assert!(!on_tuesday[0].completed);
    }

    #[test]
    fn test_resolve_once_completion_from_task_flag() {
        let due = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let mut t = task(1, "Pay rent", Recurrence::Once, vec![], Some(due));
        t.completed = true;

        // The ledger is empty; the stored flag alone decides.
        let occurrences = resolve(due, &[t], &CompletionSet::new());
        assert_eq!(occurrences.len(), 1);
        assert!(occurrences[0].completed);
    }

    #[test]
    fn test_resolve_mixed_day() {
        let monday = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let tasks = vec![
            task(1, "Stretch", Recurrence::Daily, vec![], None),
            task(2, "Workout", Recurrence::Weekly, vec![1, 3], None),
            task(3, "Team call", Recurrence::Weekly, vec![2], None),
            task(4, "Pay rent", Recurrence::Once, vec![], Some(monday)),
            task(5, "Dentist", Recurrence::Once, vec![], NaiveDate::from_ymd_opt(2024, 6, 20)),
        ];

        let occurrences = resolve(monday, &tasks, &CompletionSet::new());
        let ids: Vec<i64> = occurrences.iter().map(|o| o.task.id).collect();
        assert_eq!(ids, vec![1, 2, 4]);
    }

    #[test]
    fn test_completion_set_defaults_to_false() {
        let set = CompletionSet::new();
        assert!(set.is_empty());
        assert!(!set.get(42, NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()));
    }
}
