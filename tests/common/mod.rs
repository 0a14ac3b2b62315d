//! Common test utilities for integration tests

#![allow(dead_code)]

use oscar::{Oscar, Storage, TaskList};
use tempfile::TempDir;

/// Create a test session with temporary storage
pub fn get_test_oscar() -> (Oscar, TempDir) {
    let dir = TempDir::new().unwrap();
    let oscar = Oscar::new(dir.path().join("oscar.toml")).unwrap();
    (oscar, dir)
}

/// Create an empty task list and a storage pointing into a fresh temp dir
pub fn get_test_storage() -> (TaskList, Storage, TempDir) {
    let dir = TempDir::new().unwrap();
    let storage = Storage::new(dir.path().join("oscar.toml"));
    (TaskList::new(), storage, dir)
}

/// Feed several lines to a session, returning the reply texts
pub fn respond_all(oscar: &mut Oscar, lines: &[&str]) -> Vec<String> {
    lines
        .iter()
        .map(|line| oscar.get_response(line).text)
        .collect()
}
