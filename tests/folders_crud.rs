#[cfg(test)]
mod tests {
    use taskdeck::db::db::Db;
    use taskdeck::db::folders::Folders;
    use taskdeck::db::tasks::Tasks;
    use taskdeck::libs::folder::FolderKind;
    use taskdeck::libs::task::{NewTask, TaskFilter};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct FolderTestContext {
        temp_dir: TempDir,
    }

    impl FolderTestContext {
        fn db(&self) -> Db {
            Db::open(self.temp_dir.path().join("taskdeck.db")).unwrap()
        }
    }

    impl TestContext for FolderTestContext {
        fn setup() -> Self {
            FolderTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test_context(FolderTestContext)]
    #[test]
    fn test_folder_create_defaults(ctx: &mut FolderTestContext) {
        let folders = Folders::with_db(ctx.db());

        let folder = folders.create("Work", None).unwrap();
        assert!(folder.id > 0);
        assert_eq!(folder.name, "Work");
        assert_eq!(folder.kind, FolderKind::Custom);
        assert_eq!(folder.icon, "folder");

        let folder = folders.create("Home", Some("house")).unwrap();
        assert_eq!(folder.icon, "house");
    }

    #[test_context(FolderTestContext)]
    #[test]
    fn test_folder_list_creation_order(ctx: &mut FolderTestContext) {
        let folders = Folders::with_db(ctx.db());

        folders.create("First", None).unwrap();
        folders.create("Second", None).unwrap();
        folders.create("Third", None).unwrap();

        let names: Vec<String> = folders.list().unwrap().into_iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test_context(FolderTestContext)]
    #[test]
    fn test_folder_delete_is_idempotent(ctx: &mut FolderTestContext) {
        let folders = Folders::with_db(ctx.db());

        let folder = folders.create("Temp", None).unwrap();
        assert!(folders.delete(folder.id).unwrap());
        // Second delete is a normal outcome, not an error
        assert!(!folders.delete(folder.id).unwrap());
        assert!(!folders.delete(9999).unwrap());
    }

    #[test_context(FolderTestContext)]
    #[test]
    fn test_empty_folder_name_rejected(ctx: &mut FolderTestContext) {
        let folders = Folders::with_db(ctx.db());

        assert!(folders.create("", None).is_err());
        assert!(folders.create("   ", None).is_err());
        assert!(folders.list().unwrap().is_empty());
    }

    #[test_context(FolderTestContext)]
    #[test]
    fn test_folder_delete_cascades_to_tasks(ctx: &mut FolderTestContext) {
        let folders = Folders::with_db(ctx.db());
        let tasks = Tasks::with_db(ctx.db());

        let folder = folders.create("Work", None).unwrap();

        let mut filed = NewTask::new("Report");
        filed.folder_id = Some(folder.id);
        let filed = tasks.create(&filed).unwrap();
        let unfiled = tasks.create(&NewTask::new("Groceries")).unwrap();

        assert_eq!(tasks.fetch(&TaskFilter::by_folder(folder.id)).unwrap().len(), 1);

        assert!(folders.delete(folder.id).unwrap());

        // Cascade invariant: no task references the deleted folder
        assert!(tasks.fetch(&TaskFilter::by_folder(folder.id)).unwrap().is_empty());
        assert!(tasks.get_by_id(filed.id).unwrap().is_none());

        // The unfiled task is untouched
        assert!(tasks.get_by_id(unfiled.id).unwrap().is_some());
    }
}
