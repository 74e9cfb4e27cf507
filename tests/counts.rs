#[cfg(test)]
mod tests {
    use chrono::{Duration, Local, NaiveDate};
    use taskdeck::db::db::Db;
    use taskdeck::db::tasks::Tasks;
    use taskdeck::libs::task::{NewTask, TaskStatus, TaskUpdate};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct CountsTestContext {
        temp_dir: TempDir,
    }

    impl CountsTestContext {
        fn db(&self) -> Db {
            Db::open(self.temp_dir.path().join("taskdeck.db")).unwrap()
        }
    }

    impl TestContext for CountsTestContext {
        fn setup() -> Self {
            CountsTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    fn add_task(tasks: &Tasks, title: &str, due: Option<NaiveDate>) -> i64 {
        let mut draft = NewTask::new(title);
        draft.due_date = due;
        tasks.create(&draft).unwrap().id
    }

    fn complete(tasks: &Tasks, id: i64) {
        let updates = TaskUpdate {
            status: Some(TaskStatus::Completed),
            ..Default::default()
        };
        tasks.update(id, &updates).unwrap();
    }

    #[test_context(CountsTestContext)]
    #[test]
    fn test_counts_on_empty_database(ctx: &mut CountsTestContext) {
        let tasks = Tasks::with_db(ctx.db());

        let counts = tasks.counts().unwrap();
        assert_eq!(counts.pending, 0);
        assert_eq!(counts.today, 0);
        assert_eq!(counts.upcoming, 0);
    }

    #[test_context(CountsTestContext)]
    #[test]
    fn test_counts_cover_pending_today_and_upcoming(ctx: &mut CountsTestContext) {
        let tasks = Tasks::with_db(ctx.db());
        let today = Local::now().date_naive();

        add_task(&tasks, "Unscheduled", None);
        add_task(&tasks, "Due today", Some(today));
        add_task(&tasks, "Due tomorrow", Some(today + Duration::days(1)));
        let done_today = add_task(&tasks, "Done today", Some(today));
        let done_later = add_task(&tasks, "Done later", Some(today + Duration::days(2)));
        complete(&tasks, done_today);
        complete(&tasks, done_later);

        let counts = tasks.counts().unwrap();
        assert_eq!(counts.pending, 3);
        assert_eq!(counts.today, 1);
        assert_eq!(counts.upcoming, 1);

        // today and upcoming are subsets of pending
        assert!(counts.today <= counts.pending);
        assert!(counts.upcoming <= counts.pending);
    }

    #[test_context(CountsTestContext)]
    #[test]
    fn test_unscheduled_tasks_never_count_as_today_or_upcoming(ctx: &mut CountsTestContext) {
        let tasks = Tasks::with_db(ctx.db());

        add_task(&tasks, "Someday", None);

        let counts = tasks.counts().unwrap();
        assert_eq!(counts.pending, 1);
        assert_eq!(counts.today, 0);
        assert_eq!(counts.upcoming, 0);
    }

    #[test_context(CountsTestContext)]
    #[test]
    fn test_overdue_tasks_count_as_pending_only(ctx: &mut CountsTestContext) {
        let tasks = Tasks::with_db(ctx.db());
        let today = Local::now().date_naive();

        add_task(&tasks, "Overdue", Some(today - Duration::days(3)));

        let counts = tasks.counts().unwrap();
        assert_eq!(counts.pending, 1);
        assert_eq!(counts.today, 0);
        assert_eq!(counts.upcoming, 0);
    }
}
