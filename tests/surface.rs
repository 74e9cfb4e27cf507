#[cfg(test)]
mod tests {
    use taskdeck::api::{Request, Response, Surface};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct SurfaceTestContext {
        temp_dir: TempDir,
    }

    impl SurfaceTestContext {
        fn surface(&self) -> Surface {
            Surface::open(self.temp_dir.path().join("taskdeck.db")).unwrap()
        }
    }

    impl TestContext for SurfaceTestContext {
        fn setup() -> Self {
            SurfaceTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    fn call(surface: &Surface, json: &str) -> Response {
        let request: Request = serde_json::from_str(json).unwrap();
        surface.handle(request).unwrap()
    }

    fn success(response: Response) -> bool {
        match response {
            Response::Success { success } => success,
            other => panic!("expected success response, got {:?}", other),
        }
    }

    #[test_context(SurfaceTestContext)]
    #[test]
    fn test_folder_and_task_workflow(ctx: &mut SurfaceTestContext) {
        let surface = ctx.surface();

        let folder_id = match call(
            &surface,
            r#"{"op": "createFolder", "name": "Work", "icon": "briefcase"}"#,
        ) {
            Response::Folder { folder } => {
                assert_eq!(folder.name, "Work");
                assert_eq!(folder.icon, "briefcase");
                folder.id
            }
            other => panic!("unexpected response: {:?}", other),
        };

        let request = format!(
            r#"{{"op": "createTask", "task": {{"title": "Report", "dueDate": "2099-01-01", "folderId": {}}}}}"#,
            folder_id
        );
        let task_id = match call(&surface, &request) {
            Response::Task { task } => {
                assert_eq!(task.title, "Report");
                assert_eq!(task.folder_id, Some(folder_id));
                assert_eq!(task.status.as_str(), "pending");
                task.id
            }
            other => panic!("unexpected response: {:?}", other),
        };

        let request = format!(r#"{{"op": "getTasks", "filter": {{"folderId": {}}}}}"#, folder_id);
        match call(&surface, &request) {
            Response::Tasks { tasks } => {
                assert_eq!(tasks.len(), 1);
                assert_eq!(tasks[0].id, task_id);
            }
            other => panic!("unexpected response: {:?}", other),
        }

        let request = format!(r#"{{"op": "deleteFolder", "id": {}}}"#, folder_id);
        assert!(success(call(&surface, &request)));

        // Cascade: the folder's task is gone with it
        let request = format!(r#"{{"op": "getTasks", "filter": {{"folderId": {}}}}}"#, folder_id);
        match call(&surface, &request) {
            Response::Tasks { tasks } => assert!(tasks.is_empty()),
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[test_context(SurfaceTestContext)]
    #[test]
    fn test_update_maps_outcomes_to_success_flag(ctx: &mut SurfaceTestContext) {
        let surface = ctx.surface();

        let task_id = match call(
            &surface,
            r#"{"op": "createTask", "task": {"title": "Report"}}"#,
        ) {
            Response::Task { task } => task.id,
            other => panic!("unexpected response: {:?}", other),
        };

        let request = format!(
            r#"{{"op": "updateTask", "id": {}, "updates": {{"status": "completed"}}}}"#,
            task_id
        );
        assert!(success(call(&surface, &request)));

        // Unknown id and empty payload both report false, not an error
        let request = r#"{"op": "updateTask", "id": 9999, "updates": {"title": "Ghost"}}"#;
        assert!(!success(call(&surface, request)));
        let request = format!(r#"{{"op": "updateTask", "id": {}, "updates": {{}}}}"#, task_id);
        assert!(!success(call(&surface, &request)));
    }

    #[test_context(SurfaceTestContext)]
    #[test]
    fn test_delete_task_reports_missing_row(ctx: &mut SurfaceTestContext) {
        let surface = ctx.surface();

        let task_id = match call(
            &surface,
            r#"{"op": "createTask", "task": {"title": "Report"}}"#,
        ) {
            Response::Task { task } => task.id,
            other => panic!("unexpected response: {:?}", other),
        };

        let request = format!(r#"{{"op": "deleteTask", "id": {}}}"#, task_id);
        assert!(success(call(&surface, &request)));
        assert!(!success(call(&surface, &request)));
    }

    #[test_context(SurfaceTestContext)]
    #[test]
    fn test_get_counts(ctx: &mut SurfaceTestContext) {
        let surface = ctx.surface();

        call(
            &surface,
            r#"{"op": "createTask", "task": {"title": "One"}}"#,
        );
        call(
            &surface,
            r#"{"op": "createTask", "task": {"title": "Two", "dueDate": "2099-01-01"}}"#,
        );

        match call(&surface, r#"{"op": "getCounts"}"#) {
            Response::Counts { counts } => {
                assert_eq!(counts.pending, 2);
                assert_eq!(counts.upcoming, 1);
                assert!(counts.today <= counts.pending);
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[test_context(SurfaceTestContext)]
    #[test]
    fn test_malformed_payloads_are_rejected(_ctx: &mut SurfaceTestContext) {
        // Unknown filter field
        let result: Result<Request, _> =
            serde_json::from_str(r#"{"op": "getTasks", "filter": {"owner": "me"}}"#);
        assert!(result.is_err());

        // Status cannot be smuggled into task creation
        let result: Result<Request, _> = serde_json::from_str(
            r#"{"op": "createTask", "task": {"title": "Report", "status": "completed"}}"#,
        );
        assert!(result.is_err());

        // Unsupported date range
        let result: Result<Request, _> =
            serde_json::from_str(r#"{"op": "getTasks", "filter": {"dateRange": "someday"}}"#);
        assert!(result.is_err());

        // Unknown operation
        let result: Result<Request, _> = serde_json::from_str(r#"{"op": "dropEverything"}"#);
        assert!(result.is_err());
    }

    #[test_context(SurfaceTestContext)]
    #[test]
    fn test_validation_errors_propagate(ctx: &mut SurfaceTestContext) {
        let surface = ctx.surface();

        let request: Request =
            serde_json::from_str(r#"{"op": "createFolder", "name": "  "}"#).unwrap();
        assert!(surface.handle(request).is_err());

        let request: Request =
            serde_json::from_str(r#"{"op": "createTask", "task": {"title": ""}}"#).unwrap();
        assert!(surface.handle(request).is_err());
    }
}
