//! Handlers that change or remove an existing task by number

use crate::error::Result;
use crate::storage::Storage;
use crate::task::TaskList;
use crate::validation;

pub(super) fn mark(details: &str, tasks: &mut TaskList, storage: &Storage) -> Result<String> {
    let index = validation::parse_task_number(details, tasks.len())?;
    let task = tasks.mark(index);
    super::save(tasks, storage)?;
    Ok(format!("Nice! Oscar has marked this task as done:\n{}\n", task))
}

pub(super) fn unmark(details: &str, tasks: &mut TaskList, storage: &Storage) -> Result<String> {
    let index = validation::parse_task_number(details, tasks.len())?;
    let task = tasks.unmark(index);
    super::save(tasks, storage)?;
    Ok(format!("Oscar has marked this task as not done yet:\n{}\n", task))
}

pub(super) fn delete(details: &str, tasks: &mut TaskList, storage: &Storage) -> Result<String> {
    let index = validation::parse_task_number(details, tasks.len())?;
    let task = tasks.delete(index);
    super::save(tasks, storage)?;
    Ok(format!(
        "Oscar has removed this task:\n{}\n{}",
        task,
        tasks.list_count()
    ))
}
