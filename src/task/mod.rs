//! Task domain models
//!
//! - `entry`: a single task and its kind-specific fields
//! - `task_list`: the ordered list a session works on
//! - `serde_impl`: versioned save file representation

mod entry;
mod serde_impl;
mod task_list;

pub use entry::{Task, TaskKind, local_date_today};
pub use serde_impl::{SaveFile, TaskRecord};
pub use task_list::{FORMAT_VERSION, TaskList};
