use crate::task::entry::Task;

/// Current save file format version
pub const FORMAT_VERSION: u32 = 1;

/// Ordered collection of tasks owned by one session
///
/// Insertion order is display order and persisted order. Positions are
/// 0-based here; the command layer converts from the 1-based numbers users
/// type and checks bounds before calling `mark`, `unmark` or `delete`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    /// All tasks in insertion order
    pub(crate) tasks: Vec<Task>,
}

// Save file conversions are in serde_impl.rs

impl TaskList {
    /// Create a new empty TaskList instance
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// Append a task to the end of the list
    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Mark the task at `index` as done and return its rendering
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn mark(&mut self, index: usize) -> String {
        let task = &mut self.tasks[index];
        task.mark_as_done();
        task.to_string()
    }

    /// Mark the task at `index` as not done and return its rendering
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn unmark(&mut self, index: usize) -> String {
        let task = &mut self.tasks[index];
        task.mark_as_not_done();
        task.to_string()
    }

    /// Remove the task at `index`, shifting later tasks down by one
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn delete(&mut self, index: usize) -> String {
        self.tasks.remove(index).to_string()
    }

    /// Render every task, numbered from 1 in insertion order
    pub fn list(&self) -> String {
        let mut result = String::from("Here are the tasks in your list:\n");
        for (i, task) in self.tasks.iter().enumerate() {
            result.push_str(&format!("{}.{}\n", i + 1, task));
        }
        result.push('\n');
        result
    }

    /// Render the tasks whose description contains `keyword`
    ///
    /// Matching is a case-sensitive substring test. Each match keeps the
    /// number it has in the full list.
    pub fn find(&self, keyword: &str) -> String {
        let mut result = String::from("Here are the matching tasks in your list:\n");
        for (i, task) in self.tasks.iter().enumerate() {
            if task.description().contains(keyword) {
                result.push_str(&format!("{}.{}\n", i + 1, task));
            }
        }
        result.push('\n');
        result
    }

    /// Human-readable count of tasks in the list
    pub fn list_count(&self) -> String {
        match self.tasks.len() {
            0 => "You have no tasks in the list. Add some now!\n".to_string(),
            1 => "You have 1 task in the list.\n".to_string(),
            n => format!("You now have {} tasks in the list.\n", n),
        }
    }
}
