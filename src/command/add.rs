//! Handlers that create new tasks

use crate::error::Result;
use crate::storage::Storage;
use crate::task::{Task, TaskList};
use crate::validation;

fn add(task: Task, tasks: &mut TaskList, storage: &Storage) -> Result<String> {
    let rendered = task.to_string();
    tasks.add(task);
    super::save(tasks, storage)?;
    Ok(format!("Oscar has added:\n{}\n{}", rendered, tasks.list_count()))
}

pub(super) fn todo(details: &str, tasks: &mut TaskList, storage: &Storage) -> Result<String> {
    let description = validation::parse_todo(details)?;
    add(Task::todo(description), tasks, storage)
}

pub(super) fn deadline(details: &str, tasks: &mut TaskList, storage: &Storage) -> Result<String> {
    let (description, by) = validation::parse_deadline(details)?;
    add(Task::deadline(description, by), tasks, storage)
}

pub(super) fn event(details: &str, tasks: &mut TaskList, storage: &Storage) -> Result<String> {
    let (description, start, end) = validation::parse_event(details)?;
    add(Task::event(description, start, end), tasks, storage)
}
