//! Integration tests for the board store (task lists and tasks).

use roster_board::db::BoardDb;
use roster_board::error::ErrorCode;

/// Helper to create a fresh in-memory board database for testing.
fn setup_db() -> BoardDb {
    BoardDb::open_in_memory().expect("Failed to create in-memory board database")
}

mod task_list_tests {
    use super::*;

    #[test]
    fn create_task_list_returns_persisted_row() {
        let db = setup_db();

        let list = db
            .create_task_list("Chores", Some("Weekend chores"))
            .expect("Failed to create task list");

        assert!(list.id > 0);
        assert_eq!(list.name, "Chores");
        assert_eq!(list.description.as_deref(), Some("Weekend chores"));

        let fetched = db.get_task_list(list.id).unwrap().expect("List should exist");
        assert_eq!(fetched, list);
    }

    #[test]
    fn create_task_list_without_description() {
        let db = setup_db();

        let list = db.create_task_list("Chores", None).unwrap();
        assert!(list.description.is_none());
    }

    #[test]
    fn list_task_lists_returns_all_rows() {
        let db = setup_db();
        db.create_task_list("Chores", None).unwrap();
        db.create_task_list("Errands", None).unwrap();

        assert_eq!(db.list_task_lists().unwrap().len(), 2);
    }

    #[test]
    fn update_task_list_changes_only_supplied_fields() {
        let db = setup_db();
        let list = db
            .create_task_list("Chores", Some("Weekend chores"))
            .unwrap();

        let updated = db
            .update_task_list(list.id, Some("House chores"), None)
            .expect("Failed to update task list");

        assert_eq!(updated.name, "House chores");
        // Description untouched by a name-only update.
        assert_eq!(updated.description.as_deref(), Some("Weekend chores"));

        let updated = db
            .update_task_list(list.id, None, Some("Everything indoors"))
            .unwrap();
        assert_eq!(updated.name, "House chores");
        assert_eq!(updated.description.as_deref(), Some("Everything indoors"));
    }

    #[test]
    fn update_missing_task_list_is_not_found() {
        let db = setup_db();

        let err = db
            .update_task_list(999, Some("Ghost list"), None)
            .expect_err("Updating a missing list should fail");

        assert_eq!(err.code, ErrorCode::TaskListNotFound);
    }

    #[test]
    fn delete_task_list_cascades_to_tasks() {
        let db = setup_db();
        let list = db.create_task_list("Chores", None).unwrap();
        let laundry = db.create_task("Laundry", None, 2, list.id).unwrap();
        let dishes = db.create_task("Dishes", None, 4, list.id).unwrap();

        db.delete_task_list(list.id).expect("Failed to delete list");

        assert!(db.get_task_list(list.id).unwrap().is_none());
        // Every owned task went with it.
        assert!(db.get_task(laundry.id).unwrap().is_none());
        assert!(db.get_task(dishes.id).unwrap().is_none());
    }

    #[test]
    fn delete_task_list_leaves_other_lists_alone() {
        let db = setup_db();
        let chores = db.create_task_list("Chores", None).unwrap();
        let errands = db.create_task_list("Errands", None).unwrap();
        db.create_task("Laundry", None, 2, chores.id).unwrap();
        let bank = db.create_task("Bank", None, 1, errands.id).unwrap();

        db.delete_task_list(chores.id).unwrap();

        assert!(db.get_task(bank.id).unwrap().is_some());
    }

    #[test]
    fn delete_missing_task_list_is_not_found() {
        let db = setup_db();

        let err = db.delete_task_list(999).expect_err("Delete should fail");
        assert_eq!(err.code, ErrorCode::TaskListNotFound);
    }

    #[test]
    fn board_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.db");

        {
            let db = BoardDb::open(&path).unwrap();
            let list = db.create_task_list("Chores", None).unwrap();
            db.create_task("Laundry", None, 2, list.id).unwrap();
        }

        let db = BoardDb::open(&path).unwrap();
        assert_eq!(db.list_task_lists().unwrap().len(), 1);
        assert_eq!(db.list_tasks(None).unwrap().len(), 1);
    }
}

mod task_tests {
    use super::*;

    #[test]
    fn create_task_returns_persisted_row() {
        let db = setup_db();
        let list = db.create_task_list("Chores", None).unwrap();

        let task = db
            .create_task("Laundry", Some("Whites first"), 3, list.id)
            .expect("Failed to create task");

        assert!(task.id > 0);
        assert_eq!(task.name, "Laundry");
        assert_eq!(task.description.as_deref(), Some("Whites first"));
        assert_eq!(task.priority, 3);
        assert_eq!(task.task_list_id, list.id);

        let fetched = db.get_task(task.id).unwrap().expect("Task should exist");
        assert_eq!(fetched, task);
    }

    #[test]
    fn create_task_for_missing_list_is_not_found() {
        let db = setup_db();

        let err = db
            .create_task("Laundry", None, 3, 999)
            .expect_err("Missing list should be rejected");

        assert_eq!(err.code, ErrorCode::TaskListNotFound);
        assert!(db.list_tasks(None).unwrap().is_empty());
    }

    #[test]
    fn create_task_rejects_out_of_range_priority() {
        let db = setup_db();
        let list = db.create_task_list("Chores", None).unwrap();

        for priority in [0, 6, -3, 100] {
            let err = db
                .create_task("Laundry", None, priority, list.id)
                .expect_err("Out-of-range priority should be rejected");
            assert_eq!(err.code, ErrorCode::InvalidFieldValue);
        }

        assert!(db.list_tasks(None).unwrap().is_empty());
    }

    #[test]
    fn priority_bounds_are_accepted() {
        let db = setup_db();
        let list = db.create_task_list("Chores", None).unwrap();

        db.create_task("Lowest", None, 1, list.id).unwrap();
        db.create_task("Highest", None, 5, list.id).unwrap();
    }

    #[test]
    fn list_tasks_filters_by_list() {
        let db = setup_db();
        let chores = db.create_task_list("Chores", None).unwrap();
        let errands = db.create_task_list("Errands", None).unwrap();

        let laundry = db.create_task("Laundry", None, 2, chores.id).unwrap();
        let dishes = db.create_task("Dishes", None, 4, chores.id).unwrap();
        db.create_task("Bank", None, 1, errands.id).unwrap();

        let chore_tasks = db.list_tasks(Some(chores.id)).unwrap();
        let ids: Vec<i64> = chore_tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![laundry.id, dishes.id]);

        assert_eq!(db.list_tasks(None).unwrap().len(), 3);
    }

    #[test]
    fn update_task_changes_only_supplied_fields() {
        let db = setup_db();
        let list = db.create_task_list("Chores", None).unwrap();
        let task = db
            .create_task("Laundry", Some("Whites first"), 3, list.id)
            .unwrap();

        let updated = db
            .update_task(task.id, None, None, Some(5), None)
            .expect("Failed to update task");

        assert_eq!(updated.name, "Laundry");
        assert_eq!(updated.description.as_deref(), Some("Whites first"));
        assert_eq!(updated.priority, 5);
        assert_eq!(updated.task_list_id, list.id);
    }

    #[test]
    fn update_task_can_move_between_lists() {
        let db = setup_db();
        let chores = db.create_task_list("Chores", None).unwrap();
        let errands = db.create_task_list("Errands", None).unwrap();
        let task = db.create_task("Laundry", None, 2, chores.id).unwrap();

        let updated = db
            .update_task(task.id, None, None, None, Some(errands.id))
            .unwrap();

        assert_eq!(updated.task_list_id, errands.id);
        assert!(db.list_tasks(Some(chores.id)).unwrap().is_empty());
    }

    #[test]
    fn update_task_to_missing_list_is_not_found() {
        let db = setup_db();
        let list = db.create_task_list("Chores", None).unwrap();
        let task = db.create_task("Laundry", None, 2, list.id).unwrap();

        let err = db
            .update_task(task.id, None, None, None, Some(999))
            .expect_err("Missing list should be rejected");

        assert_eq!(err.code, ErrorCode::TaskListNotFound);
        // The task still lives in its old list.
        assert_eq!(db.get_task(task.id).unwrap().unwrap().task_list_id, list.id);
    }

    #[test]
    fn update_task_rejects_out_of_range_priority_and_keeps_stored_value() {
        let db = setup_db();
        let list = db.create_task_list("Chores", None).unwrap();
        let task = db.create_task("Laundry", None, 3, list.id).unwrap();

        for priority in [0, 6] {
            let err = db
                .update_task(task.id, None, None, Some(priority), None)
                .expect_err("Out-of-range priority should be rejected");
            assert_eq!(err.code, ErrorCode::InvalidFieldValue);
        }

        // The stored priority is unchanged.
        assert_eq!(db.get_task(task.id).unwrap().unwrap().priority, 3);
    }

    #[test]
    fn update_missing_task_is_not_found() {
        let db = setup_db();

        let err = db
            .update_task(999, Some("Ghost"), None, None, None)
            .expect_err("Updating a missing task should fail");

        assert_eq!(err.code, ErrorCode::TaskNotFound);
    }

    #[test]
    fn delete_task_removes_only_that_task() {
        let db = setup_db();
        let list = db.create_task_list("Chores", None).unwrap();
        let laundry = db.create_task("Laundry", None, 2, list.id).unwrap();
        let dishes = db.create_task("Dishes", None, 4, list.id).unwrap();

        db.delete_task(laundry.id).expect("Failed to delete task");

        assert!(db.get_task(laundry.id).unwrap().is_none());
        assert!(db.get_task(dishes.id).unwrap().is_some());
    }

    #[test]
    fn delete_missing_task_is_not_found() {
        let db = setup_db();

        let err = db.delete_task(999).expect_err("Delete should fail");
        assert_eq!(err.code, ErrorCode::TaskNotFound);
    }
}
