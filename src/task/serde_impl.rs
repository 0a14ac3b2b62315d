//! Save file representation of a TaskList
//!
//! The save file is a versioned TOML document: a `format_version` key
//! followed by one `[[task]]` table per task, tagged by `kind`. Records are
//! checked on the way in so a hand-edited or truncated file is reported as
//! corrupt instead of producing tasks that break the non-empty invariants.

use super::entry::{Task, TaskKind, local_date_today};
use super::task_list::{FORMAT_VERSION, TaskList};
use crate::error::PersistenceError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// On-disk shape of a whole task list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveFile {
    pub format_version: u32,
    #[serde(default)]
    pub task: Vec<TaskRecord>,
}

/// On-disk shape of a single task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub kind: String,
    pub description: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(default = "local_date_today")]
    pub created_at: NaiveDate,
    #[serde(default = "local_date_today")]
    pub updated_at: NaiveDate,
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        let (by, start, end) = match &task.kind {
            TaskKind::Todo => (None, None, None),
            TaskKind::Deadline { by } => (Some(by.clone()), None, None),
            TaskKind::Event { start, end } => (None, Some(start.clone()), Some(end.clone())),
        };
        Self {
            kind: task.kind.name().to_string(),
            description: task.description.clone(),
            done: task.is_done,
            by,
            start,
            end,
            created_at: task.created_at,
            updated_at: task.updated_at,
        }
    }
}

/// Take a required, non-empty field out of a record
fn required(field: Option<String>, name: &str, index: usize) -> Result<String, PersistenceError> {
    match field {
        Some(value) if !value.is_empty() => Ok(value),
        Some(_) => Err(PersistenceError::Corrupt {
            index,
            reason: format!("field `{}` is empty", name),
        }),
        None => Err(PersistenceError::Corrupt {
            index,
            reason: format!("missing field `{}`", name),
        }),
    }
}

impl TaskRecord {
    /// Convert back to a task, validating the invariants a Command would have enforced
    ///
    /// `index` is the 1-based position of the record, used in error reports.
    pub fn into_task(self, index: usize) -> Result<Task, PersistenceError> {
        if self.description.is_empty() {
            return Err(PersistenceError::Corrupt {
                index,
                reason: "description is empty".to_string(),
            });
        }

        let kind = match self.kind.as_str() {
            "todo" => TaskKind::Todo,
            "deadline" => TaskKind::Deadline {
                by: required(self.by, "by", index)?,
            },
            "event" => TaskKind::Event {
                start: required(self.start, "start", index)?,
                end: required(self.end, "end", index)?,
            },
            other => {
                return Err(PersistenceError::Corrupt {
                    index,
                    reason: format!("unknown task kind '{}'", other),
                });
            }
        };

        Ok(Task {
            description: self.description,
            is_done: self.done,
            kind,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

impl From<&TaskList> for SaveFile {
    fn from(list: &TaskList) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            task: list.tasks.iter().map(TaskRecord::from).collect(),
        }
    }
}

impl TryFrom<SaveFile> for TaskList {
    type Error = PersistenceError;

    fn try_from(file: SaveFile) -> Result<Self, Self::Error> {
        if file.format_version != FORMAT_VERSION {
            return Err(PersistenceError::UnsupportedVersion(file.format_version));
        }

        let tasks = file
            .task
            .into_iter()
            .enumerate()
            .map(|(i, record)| record.into_task(i + 1))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TaskList { tasks })
    }
}
