//! Read-only handlers; nothing here touches storage

use crate::task::TaskList;

pub(super) fn list(tasks: &TaskList) -> String {
    tasks.list()
}

/// Any keyword is accepted, including an empty one, which matches every task
pub(super) fn find(tasks: &TaskList, keyword: &str) -> String {
    tasks.find(keyword)
}
