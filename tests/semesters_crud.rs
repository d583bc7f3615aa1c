#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use planit::libs::context::AppContext;
    use planit::libs::error::Error;
    use planit::libs::task::{NewTask, TaskFilter};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct SemesterTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for SemesterTestContext {
        fn setup() -> Self {
            SemesterTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test_context(SemesterTestContext)]
    #[test]
    fn test_create_and_get_roundtrip(ctx: &mut SemesterTestContext) {
        let app = AppContext::init_at(ctx.temp_dir.path()).unwrap();
        let semesters = app.semesters();

        let created = semesters.create("Fall 2025", date(2025, 8, 25), date(2025, 12, 15)).unwrap();
        assert!(created.id > 0);

        let fetched = semesters.get_by_id(created.id).unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[test_context(SemesterTestContext)]
    #[test]
    fn test_list_semesters(ctx: &mut SemesterTestContext) {
        let app = AppContext::init_at(ctx.temp_dir.path()).unwrap();
        let semesters = app.semesters();

        assert!(semesters.fetch().unwrap().is_empty());

        semesters.create("Fall 2025", date(2025, 8, 25), date(2025, 12, 15)).unwrap();
        semesters.create("Spring 2026", date(2026, 1, 12), date(2026, 5, 8)).unwrap();

        let all = semesters.fetch().unwrap();
        assert_eq!(all.len(), 2);
    }

    #[test_context(SemesterTestContext)]
    #[test]
    fn test_get_unknown_id_is_none(ctx: &mut SemesterTestContext) {
        let app = AppContext::init_at(ctx.temp_dir.path()).unwrap();

        assert!(app.semesters().get_by_id(42).unwrap().is_none());
    }

    #[test_context(SemesterTestContext)]
    #[test]
    fn test_create_rejects_empty_title(ctx: &mut SemesterTestContext) {
        let app = AppContext::init_at(ctx.temp_dir.path()).unwrap();

        let result = app.semesters().create("   ", date(2025, 8, 25), date(2025, 12, 15));
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test_context(SemesterTestContext)]
    #[test]
    fn test_create_rejects_inverted_dates(ctx: &mut SemesterTestContext) {
        let app = AppContext::init_at(ctx.temp_dir.path()).unwrap();

        let result = app.semesters().create("Fall 2025", date(2025, 12, 15), date(2025, 8, 25));
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test_context(SemesterTestContext)]
    #[test]
    fn test_single_day_semester_is_valid(ctx: &mut SemesterTestContext) {
        let app = AppContext::init_at(ctx.temp_dir.path()).unwrap();

        let semester = app.semesters().create("Exam Day", date(2025, 12, 15), date(2025, 12, 15)).unwrap();
        assert_eq!(semester.start_date, semester.end_date);
    }

    #[test_context(SemesterTestContext)]
    #[test]
    fn test_create_activates_selected_semester(ctx: &mut SemesterTestContext) {
        let app = AppContext::init_at(ctx.temp_dir.path()).unwrap();

        let created = app.semesters().create("Fall 2025", date(2025, 8, 25), date(2025, 12, 15)).unwrap();

        let selected = app.preferences().get_selected_semester().unwrap().unwrap();
        assert_eq!(selected, created);

        // Creating another semester switches the selection
        let next = app.semesters().create("Spring 2026", date(2026, 1, 12), date(2026, 5, 8)).unwrap();
        let selected = app.preferences().get_selected_semester().unwrap().unwrap();
        assert_eq!(selected, next);
    }

    #[test_context(SemesterTestContext)]
    #[test]
    fn test_delete_cascades_tasks(ctx: &mut SemesterTestContext) {
        let app = AppContext::init_at(ctx.temp_dir.path()).unwrap();

        let semester = app.semesters().create("Fall 2025", date(2025, 8, 25), date(2025, 12, 15)).unwrap();
        let tasks = app.tasks();
        for i in 1..=3 {
            tasks.create(&NewTask::new(semester.id, &format!("Task {}", i), "")).unwrap();
        }
        assert_eq!(tasks.fetch(semester.id, TaskFilter::All).unwrap().len(), 3);

        app.semesters().delete(semester.id).unwrap();

        assert!(app.semesters().get_by_id(semester.id).unwrap().is_none());
        assert!(tasks.fetch(semester.id, TaskFilter::All).unwrap().is_empty());
    }

    #[test_context(SemesterTestContext)]
    #[test]
    fn test_delete_leaves_stale_preference_for_caller(ctx: &mut SemesterTestContext) {
        let app = AppContext::init_at(ctx.temp_dir.path()).unwrap();

        let semester = app.semesters().create("Fall 2025", date(2025, 8, 25), date(2025, 12, 15)).unwrap();
        app.semesters().delete(semester.id).unwrap();

        // The snapshot survives; the caller detects staleness by lookup
        let stale = app.preferences().get_selected_semester().unwrap().unwrap();
        assert_eq!(stale.id, semester.id);
        assert!(app.semesters().get_by_id(stale.id).unwrap().is_none());
    }

    #[test_context(SemesterTestContext)]
    #[test]
    fn test_delete_unknown_id_is_not_found(ctx: &mut SemesterTestContext) {
        let app = AppContext::init_at(ctx.temp_dir.path()).unwrap();

        let err = app.semesters().delete(42).unwrap_err();
        assert!(err.is_not_found());
        assert!(matches!(err, Error::NotFound(_)));
    }
}
