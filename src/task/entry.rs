use chrono::{Local, NaiveDate};
use std::fmt;

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Kind-specific part of a task
///
/// Dates are kept as the free-form text the user typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    /// Plain task with no date attached
    Todo,
    /// Task that must be finished by a given time
    Deadline { by: String },
    /// Task spanning a start and an end time
    Event { start: String, end: String },
}

impl TaskKind {
    /// One-letter tag shown in front of the completion marker
    pub fn tag(&self) -> &'static str {
        match self {
            TaskKind::Todo => "T",
            TaskKind::Deadline { .. } => "D",
            TaskKind::Event { .. } => "E",
        }
    }

    /// Name used in the save file
    pub fn name(&self) -> &'static str {
        match self {
            TaskKind::Todo => "todo",
            TaskKind::Deadline { .. } => "deadline",
            TaskKind::Event { .. } => "event",
        }
    }
}

/// A single unit of work
///
/// Callers validate input before construction: the description and any
/// kind-specific fields are expected to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub(crate) description: String,
    pub(crate) is_done: bool,
    pub(crate) kind: TaskKind,
    /// Date when the task was created
    pub created_at: NaiveDate,
    /// Date when the task was last marked or unmarked
    pub updated_at: NaiveDate,
}

impl Task {
    fn with_kind(description: impl Into<String>, kind: TaskKind) -> Self {
        let today = local_date_today();
        Self {
            description: description.into(),
            is_done: false,
            kind,
            created_at: today,
            updated_at: today,
        }
    }

    pub fn todo(description: impl Into<String>) -> Self {
        Self::with_kind(description, TaskKind::Todo)
    }

    pub fn deadline(description: impl Into<String>, by: impl Into<String>) -> Self {
        Self::with_kind(description, TaskKind::Deadline { by: by.into() })
    }

    pub fn event(
        description: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        Self::with_kind(
            description,
            TaskKind::Event {
                start: start.into(),
                end: end.into(),
            },
        )
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn is_done(&self) -> bool {
        self.is_done
    }

    /// "X" for a finished task, a single space otherwise
    pub fn status_icon(&self) -> &'static str {
        if self.is_done { "X" } else { " " }
    }

    pub fn mark_as_done(&mut self) {
        self.is_done = true;
        self.updated_at = local_date_today();
    }

    pub fn mark_as_not_done(&mut self) {
        self.is_done = false;
        self.updated_at = local_date_today();
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}][{}] {}",
            self.kind.tag(),
            self.status_icon(),
            self.description
        )?;
        match &self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { by } => write!(f, " (by: {})", by),
            TaskKind::Event { start, end } => write!(f, " (from: {} to: {})", start, end),
        }
    }
}
