pub mod enums;
pub mod task;

pub use enums::{Priority, Tab, UiMode};
pub use task::{Task, TaskId, TaskPatch};
