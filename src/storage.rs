use crate::error::PersistenceError;
use crate::task::{SaveFile, TaskList};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// File-backed persistence for the task list
pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn io_error(&self, source: std::io::Error) -> PersistenceError {
        PersistenceError::Io {
            path: self.file_path.clone(),
            source,
        }
    }

    /// Load the saved task list, or an empty one if nothing was saved yet
    pub fn load(&self) -> Result<TaskList, PersistenceError> {
        if !self.file_path.exists() {
            debug!(path = %self.file_path.display(), "no save file, starting empty");
            return Ok(TaskList::new());
        }

        let content = fs::read_to_string(&self.file_path).map_err(|e| self.io_error(e))?;
        let file: SaveFile = toml::from_str(&content)?;
        let tasks = TaskList::try_from(file)?;
        info!(path = %self.file_path.display(), count = tasks.len(), "loaded task list");
        Ok(tasks)
    }

    /// Write the whole task list, creating the parent directory if needed
    ///
    /// The list is written to a temporary file next to the target and then
    /// renamed over it, so an interrupted save leaves the old file intact.
    pub fn save(&self, tasks: &TaskList) -> Result<(), PersistenceError> {
        let dir = match self.file_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;

        let content = toml::to_string_pretty(&SaveFile::from(tasks))?;
        let mut temp = NamedTempFile::new_in(dir).map_err(|e| self.io_error(e))?;
        temp.write_all(content.as_bytes())
            .map_err(|e| self.io_error(e))?;
        temp.persist(&self.file_path)
            .map_err(|e| self.io_error(e.error))?;
        info!(path = %self.file_path.display(), count = tasks.len(), "saved task list");
        Ok(())
    }
}
