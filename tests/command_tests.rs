//! Command execution tests
mod common;

use oscar::command::parse;
use oscar::{OscarError, TaskKind};

// todoコマンドのテスト
// タスクが追加され、件数メッセージが返されることを確認
#[test]
fn test_todo_adds_task() {
    let (mut tasks, storage, _dir) = common::get_test_storage();

    let reply = parse("todo read book")
        .unwrap()
        .execute(&mut tasks, &storage)
        .unwrap();

    assert_eq!(
        reply,
        "Oscar has added:\n[T][ ] read book\nYou have 1 task in the list.\n"
    );
    assert_eq!(tasks.len(), 1);
}

#[test]
fn test_todo_empty_is_rejected() {
    let (mut tasks, storage, _dir) = common::get_test_storage();

    let err = parse("todo").unwrap().execute(&mut tasks, &storage).unwrap_err();

    assert!(matches!(err, OscarError::UserInput(_)));
    assert_eq!(
        err.to_string(),
        "Sorry! The description of a todo task cannot be empty.\n"
    );
    assert!(tasks.is_empty());
    assert!(!storage.path().exists());
}

#[test]
fn test_deadline_fields() {
    let (mut tasks, storage, _dir) = common::get_test_storage();

    parse("deadline return book /by Sunday")
        .unwrap()
        .execute(&mut tasks, &storage)
        .unwrap();

    let task = tasks.get(0).unwrap();
    assert_eq!(task.description(), "return book");
    assert_eq!(
        task.kind(),
        &TaskKind::Deadline {
            by: "Sunday".to_string()
        }
    );
}

#[test]
fn test_deadline_without_separator() {
    let (mut tasks, storage, _dir) = common::get_test_storage();

    let err = parse("deadline return book")
        .unwrap()
        .execute(&mut tasks, &storage)
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Sorry! The deadline task is not formatted correctly.\n"
    );
    assert!(tasks.is_empty());
}

#[test]
fn test_event_fields() {
    let (mut tasks, storage, _dir) = common::get_test_storage();

    let reply = parse("event meeting /from Mon 2pm /to 4pm")
        .unwrap()
        .execute(&mut tasks, &storage)
        .unwrap();

    assert!(reply.contains("[E][ ] meeting (from: Mon 2pm to: 4pm)"));
    assert_eq!(
        tasks.get(0).unwrap().kind(),
        &TaskKind::Event {
            start: "Mon 2pm".to_string(),
            end: "4pm".to_string()
        }
    );
}

// mark/unmarkのテスト
// 完了マークを付けて外すと元の表示に戻ることを確認
#[test]
fn test_mark_and_unmark() {
    let (mut tasks, storage, _dir) = common::get_test_storage();
    parse("todo read book").unwrap().execute(&mut tasks, &storage).unwrap();

    let reply = parse("mark 1").unwrap().execute(&mut tasks, &storage).unwrap();
    assert_eq!(reply, "Nice! Oscar has marked this task as done:\n[T][X] read book\n");
    assert!(tasks.get(0).unwrap().is_done());

    let reply = parse("unmark 1").unwrap().execute(&mut tasks, &storage).unwrap();
    assert_eq!(reply, "Oscar has marked this task as not done yet:\n[T][ ] read book\n");
    assert!(!tasks.get(0).unwrap().is_done());
}

#[test]
fn test_mark_out_of_range_leaves_list_unchanged() {
    let (mut tasks, storage, _dir) = common::get_test_storage();
    parse("todo a").unwrap().execute(&mut tasks, &storage).unwrap();
    parse("todo b").unwrap().execute(&mut tasks, &storage).unwrap();
    let before = tasks.clone();

    let err = parse("mark 5").unwrap().execute(&mut tasks, &storage).unwrap_err();
    assert_eq!(err.to_string(), "Sorry! Task number is too large.\n");

    let err = parse("mark 0").unwrap().execute(&mut tasks, &storage).unwrap_err();
    assert_eq!(err.to_string(), "Sorry! Task numbers must be natural numbers.\n");

    let err = parse("unmark first").unwrap().execute(&mut tasks, &storage).unwrap_err();
    assert_eq!(err.to_string(), "Sorry! Please enter a valid task number.\n");

    assert_eq!(tasks, before);
}

#[test]
fn test_delete_shifts_and_counts() {
    let (mut tasks, storage, _dir) = common::get_test_storage();
    for line in ["todo a", "todo b", "todo c"] {
        parse(line).unwrap().execute(&mut tasks, &storage).unwrap();
    }

    let reply = parse("delete 2").unwrap().execute(&mut tasks, &storage).unwrap();

    assert_eq!(
        reply,
        "Oscar has removed this task:\n[T][ ] b\nYou now have 2 tasks in the list.\n"
    );
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks.get(1).unwrap().description(), "c");
}

#[test]
fn test_delete_last_task() {
    let (mut tasks, storage, _dir) = common::get_test_storage();
    parse("todo a").unwrap().execute(&mut tasks, &storage).unwrap();

    let reply = parse("delete 1").unwrap().execute(&mut tasks, &storage).unwrap();

    assert!(reply.ends_with("You have no tasks in the list. Add some now!\n"));
    assert!(tasks.is_empty());
}

#[test]
fn test_find_uses_original_numbers() {
    let (mut tasks, storage, _dir) = common::get_test_storage();
    for line in [
        "todo read book",
        "event meeting /from Mon /to Tue",
        "deadline return book /by Sunday",
    ] {
        parse(line).unwrap().execute(&mut tasks, &storage).unwrap();
    }

    let reply = parse("find book").unwrap().execute(&mut tasks, &storage).unwrap();

    assert_eq!(
        reply,
        "Here are the matching tasks in your list:\n\
         1.[T][ ] read book\n\
         3.[D][ ] return book (by: Sunday)\n\n"
    );
}

#[test]
fn test_list_does_not_save() {
    let (mut tasks, storage, _dir) = common::get_test_storage();

    let reply = parse("list").unwrap().execute(&mut tasks, &storage).unwrap();

    assert_eq!(reply, "Here are the tasks in your list:\n\n");
    assert!(!storage.path().exists());
}

#[test]
fn test_save_failure_is_persistence_error() {
    let dir = tempfile::TempDir::new().unwrap();
    // A directory cannot be written as a file
    let storage = oscar::Storage::new(dir.path());
    let mut tasks = oscar::TaskList::new();

    let err = parse("todo read book")
        .unwrap()
        .execute(&mut tasks, &storage)
        .unwrap_err();

    assert!(matches!(err, OscarError::Persistence(_)));
    // the in-memory list keeps the change
    assert_eq!(tasks.len(), 1);
}

// 区切り文字が先頭にある場合のテスト
// 説明が無い形式は「形式が正しくない」として拒否されることを確認
#[test]
fn test_leading_separator_is_not_formatted() {
    let (mut tasks, storage, _dir) = common::get_test_storage();

    let err = parse("deadline /by Sunday")
        .unwrap()
        .execute(&mut tasks, &storage)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Sorry! The deadline task is not formatted correctly.\n"
    );

    let err = parse("event /from Mon /to Tue")
        .unwrap()
        .execute(&mut tasks, &storage)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Sorry! The event task is not formatted correctly.\n"
    );

    assert!(tasks.is_empty());
    assert!(!storage.path().exists());
}

#[test]
fn test_trailing_separator_reports_empty_field() {
    let (mut tasks, storage, _dir) = common::get_test_storage();

    let err = parse("deadline return book /by ")
        .unwrap()
        .execute(&mut tasks, &storage)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Sorry! The deadline of a deadline task cannot be empty.\n"
    );
    assert!(tasks.is_empty());
}
