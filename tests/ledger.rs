#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use qtask::db::db::Db;
    use qtask::libs::error::LedgerError;
    use qtask::libs::formatter::format_minutes;
    use qtask::libs::grammar::{parse, Verb};
    use qtask::libs::ledger::{Ledger, Outcome};
    use qtask::libs::task::Task;
    use qtask::libs::view::View;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct LedgerTestContext {
        ledger: Ledger,
        now: NaiveDateTime,
        _temp_dir: TempDir,
    }

    impl LedgerTestContext {
        fn run(&mut self, verb: Verb, words: &[&str]) -> Result<Outcome, LedgerError> {
            let tokens: Vec<String> = words.iter().map(|w| w.to_string()).collect();
            let action = parse(verb, &tokens)?;
            self.ledger.execute(action, self.now)
        }

        fn list(&mut self, words: &[&str]) -> Vec<Task> {
            match self.run(Verb::List { grouped: false }, words).unwrap() {
                Outcome::Tasks(tasks) => tasks,
                other => panic!("expected tasks, got {:?}", other),
            }
        }
    }

    impl TestContext for LedgerTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(temp_dir.path().join("qtask.db")).unwrap();
            LedgerTestContext {
                ledger: Ledger::new(db),
                now: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap().and_hms_opt(16, 30, 0).unwrap(),
                _temp_dir: temp_dir,
            }
        }
    }

    #[test_context(LedgerTestContext)]
    #[test]
    fn test_log_then_list_work(ctx: &mut LedgerTestContext) {
        let outcome = ctx.run(Verb::Log, &["Installed tool X"]).unwrap();
        assert_eq!(outcome, Outcome::Logged { task_id: 1, project: None });

        let tasks = ctx.list(&["work"]);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].label, "Installed tool X");
        assert_eq!(tasks[0].project, None);
        assert_eq!(tasks[0].minutes_logged, None);
        assert_eq!(tasks[0].logged_at, "2024-03-15 16:30:00");

        let table = View::tasks(&tasks).to_string();
        assert!(table.contains("Installed tool X"));
        assert!(!table.contains("minutes"));
    }

    #[test_context(LedgerTestContext)]
    #[test]
    fn test_accumulate_renders_hours(ctx: &mut LedgerTestContext) {
        ctx.run(Verb::Log, &["Installed tool X"]).unwrap();

        let outcome = ctx.run(Verb::Log, &["90", "minutes", "against", "task", "1"]).unwrap();
        assert_eq!(
            outcome,
            Outcome::TimeAccumulated {
                task_id: 1,
                total_minutes: Some(90.0)
            }
        );

        let tasks = ctx.list(&["work"]);
        assert_eq!(format_minutes(tasks[0].minutes_logged).unwrap(), "1.5 hours");
        assert!(View::tasks(&tasks).to_string().contains("1.5 hours"));
    }

    #[test_context(LedgerTestContext)]
    #[test]
    fn test_accumulate_against_missing_task(ctx: &mut LedgerTestContext) {
        let err = ctx.run(Verb::Log, &["5", "hours", "against", "task", "231"]).unwrap_err();
        assert!(matches!(err, LedgerError::TaskNotFound(231)));
    }

    #[test_context(LedgerTestContext)]
    #[test]
    fn test_log_to_project_on_date_and_query_back(ctx: &mut LedgerTestContext) {
        ctx.run(Verb::Add, &["project", "P1"]).unwrap();
        ctx.run(Verb::Log, &["A", "to", "P1", "on", "2024-01-01"]).unwrap();

        let tasks = ctx.list(&["P1", "work"]);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].label, "A");
        assert_eq!(tasks[0].project.as_deref(), Some("P1"));
        assert_eq!(tasks[0].logged_at, "2024-01-01");

        assert_eq!(ctx.list(&["work", "between", "2023-12-31", "and", "2024-01-02"]).len(), 1);
        assert!(ctx.list(&["work", "between", "2024-01-02", "and", "2024-01-03"]).is_empty());
    }

    #[test_context(LedgerTestContext)]
    #[test]
    fn test_every_log_form_round_trips(ctx: &mut LedgerTestContext) {
        ctx.run(Verb::Add, &["project", "annotation"]).unwrap();

        let forms: Vec<(Vec<&str>, &str, Option<&str>, &str)> = vec![
            (vec!["one"], "one", None, "2024-03-15 16:30:00"),
            (vec!["two", "to", "annotation"], "two", Some("annotation"), "2024-03-15 16:30:00"),
            (vec!["three", "on", "2024-02-01 08:00"], "three", None, "2024-02-01 08:00"),
            (vec!["four", "to", "annotation", "on", "2024-02-02"], "four", Some("annotation"), "2024-02-02"),
            (vec!["five", "on", "2024-02-03T10:00:00", "to", "annotation"], "five", Some("annotation"), "2024-02-03T10:00:00"),
        ];

        for (words, label, project, logged_at) in forms {
            let task_id = match ctx.run(Verb::Log, &words).unwrap() {
                Outcome::Logged { task_id, .. } => task_id,
                other => panic!("expected a logged task, got {:?}", other),
            };

            let stored = ctx.list(&["work"]).into_iter().find(|t| t.id == Some(task_id)).unwrap();
            assert_eq!(stored.label, label);
            assert_eq!(stored.project.as_deref(), project);
            assert_eq!(stored.logged_at, logged_at);
        }
    }

    #[test_context(LedgerTestContext)]
    #[test]
    fn test_dated_tasks_show_up_in_ranged_queries(ctx: &mut LedgerTestContext) {
        for literal in ["2024-03-05", "2024-03-05 09:30", "2024-03-05 09:30:05", "2024-03-05T09:30:05"] {
            ctx.run(Verb::Log, &["dated", "on", literal]).unwrap();
        }
        assert!(ctx.run(Verb::Log, &["unpadded", "on", "2024-3-5"]).is_err());

        assert_eq!(ctx.list(&["work"]).len(), 4);
        assert_eq!(ctx.list(&["work", "between", "2024-03-01", "and", "2024-03-06"]).len(), 4);
        assert_eq!(ctx.list(&["work", "in", "last", "30", "days"]).len(), 4);
    }

    #[test_context(LedgerTestContext)]
    #[test]
    fn test_very_long_window_returns_all_work(ctx: &mut LedgerTestContext) {
        ctx.run(Verb::Log, &["ancient", "on", "0001-01-01"]).unwrap();
        ctx.run(Verb::Log, &["recent", "on", "2024-03-01"]).unwrap();

        assert_eq!(ctx.list(&["work", "in", "last", "5000", "years"]).len(), 2);
        assert_eq!(ctx.list(&["work", "in", "last", "2025", "years"]).len(), 2);
    }

    #[test_context(LedgerTestContext)]
    #[test]
    fn test_log_to_unknown_project(ctx: &mut LedgerTestContext) {
        let err = ctx.run(Verb::Log, &["A", "to", "nowhere"]).unwrap_err();
        assert!(matches!(err, LedgerError::ProjectNotFound(ref label) if label == "nowhere"));
        assert!(ctx.list(&["work"]).is_empty());
    }

    #[test_context(LedgerTestContext)]
    #[test]
    fn test_list_unknown_project(ctx: &mut LedgerTestContext) {
        let err = ctx.run(Verb::List { grouped: false }, &["nowhere", "work"]).unwrap_err();
        assert!(matches!(err, LedgerError::ProjectNotFound(_)));
    }

    #[test_context(LedgerTestContext)]
    #[test]
    fn test_add_project_work_is_reserved(ctx: &mut LedgerTestContext) {
        let err = ctx.run(Verb::Add, &["project", "work"]).unwrap_err();
        assert!(matches!(err, LedgerError::ReservedLabel(_)));
    }

    #[test_context(LedgerTestContext)]
    #[test]
    fn test_list_projects(ctx: &mut LedgerTestContext) {
        let added = ctx.run(Verb::Add, &["project", "annotation"]).unwrap();
        assert_eq!(
            added,
            Outcome::ProjectAdded {
                id: 1,
                label: "annotation".to_string()
            }
        );

        match ctx.run(Verb::List { grouped: false }, &["projects"]).unwrap() {
            Outcome::Projects(projects) => {
                assert_eq!(projects.len(), 1);
                assert_eq!(projects[0].created_at, "2024-03-15 16:30:00");
            }
            other => panic!("expected projects, got {:?}", other),
        }
    }

    #[test_context(LedgerTestContext)]
    #[test]
    fn test_today_and_yesterday(ctx: &mut LedgerTestContext) {
        ctx.run(Verb::Log, &["this morning", "on", "2024-03-15 08:00"]).unwrap();
        ctx.run(Verb::Log, &["late yesterday", "on", "2024-03-14 23:59:59"]).unwrap();
        ctx.run(Verb::Log, &["two days ago", "on", "2024-03-13 12:00"]).unwrap();
        ctx.run(Verb::Log, &["later today", "on", "2024-03-15 20:00"]).unwrap();

        let today: Vec<String> = ctx.list(&["work", "today"]).into_iter().map(|t| t.label).collect();
        assert_eq!(today, vec!["this morning"]);

        let yesterday: Vec<String> = ctx.list(&["work", "yesterday"]).into_iter().map(|t| t.label).collect();
        assert_eq!(yesterday, vec!["late yesterday"]);
    }

    #[test_context(LedgerTestContext)]
    #[test]
    fn test_in_last_window(ctx: &mut LedgerTestContext) {
        ctx.run(Verb::Add, &["project", "annotation"]).unwrap();
        ctx.run(Verb::Log, &["recent", "to", "annotation", "on", "2024-03-10"]).unwrap();
        ctx.run(Verb::Log, &["unassigned recent", "on", "2024-03-09"]).unwrap();
        ctx.run(Verb::Log, &["old", "to", "annotation", "on", "2024-02-01"]).unwrap();

        assert_eq!(ctx.list(&["work", "in", "last", "1", "week"]).len(), 2);
        assert_eq!(ctx.list(&["work", "in", "last", "1", "year"]).len(), 3);

        let scoped = ctx.list(&["annotation", "work", "in", "last", "7", "days"]);
        assert_eq!(scoped.len(), 1);
        assert_eq!(scoped[0].label, "recent");
    }

    #[test_context(LedgerTestContext)]
    #[test]
    fn test_report_groups_by_project(ctx: &mut LedgerTestContext) {
        ctx.run(Verb::Add, &["project", "rna_seq"]).unwrap();
        ctx.run(Verb::Add, &["project", "annotation"]).unwrap();
        ctx.run(Verb::Log, &["a1", "to", "annotation", "on", "2024-03-01"]).unwrap();
        ctx.run(Verb::Log, &["r1", "to", "rna_seq", "on", "2024-03-02"]).unwrap();
        ctx.run(Verb::Log, &["u1", "on", "2024-03-03"]).unwrap();
        ctx.run(Verb::Log, &["a2", "to", "annotation", "on", "2024-03-04"]).unwrap();
        ctx.run(Verb::Log, &["2", "hours", "against", "task", "1"]).unwrap();

        let flat = ctx.list(&["work", "in", "last", "30", "days"]);
        let buckets = match ctx.run(Verb::Report, &["work", "in", "last", "30", "days"]).unwrap() {
            Outcome::Report(buckets) => buckets,
            other => panic!("expected a report, got {:?}", other),
        };

        let labels: Vec<&str> = buckets.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Unassigned", "annotation", "rna_seq"]);

        let annotation: Vec<&str> = buckets[1].tasks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(annotation, vec!["a2", "a1"]);
        assert_eq!(buckets[1].total_minutes(), Some(120.0));

        let total: usize = buckets.iter().map(|b| b.tasks.len()).sum();
        assert_eq!(total, flat.len());

        let rendered = View::report(&buckets);
        assert!(rendered.contains("annotation (2 task(s), 2.0 hours logged)"));
        assert!(rendered.contains("Unassigned (1 task(s), no time logged)"));
    }

    #[test_context(LedgerTestContext)]
    #[test]
    fn test_list_group_flag(ctx: &mut LedgerTestContext) {
        ctx.run(Verb::Log, &["loose"]).unwrap();

        let outcome = ctx.run(Verb::List { grouped: true }, &["work"]).unwrap();
        assert!(matches!(outcome, Outcome::Report(ref buckets) if buckets.len() == 1 && buckets[0].unassigned));
    }
}
