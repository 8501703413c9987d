use super::enums::Priority;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Task identifier, assigned at creation from the creation timestamp
pub type TaskId = i64;

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique ID, immutable after creation
    pub id: TaskId,
    /// Task title
    pub title: String,
    /// Whether the task is done
    pub completed: bool,
    /// Optional due date; absent means "no due date"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Optional priority
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl Task {
    pub fn new(id: TaskId, title: String, due_date: Option<NaiveDate>, priority: Option<Priority>) -> Self {
        Self {
            id,
            title,
            completed: false,
            due_date,
            priority,
        }
    }

    /// Shallow-merge a patch into this task. Unset patch fields are retained.
    pub fn apply(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
    }
}

/// Partial update for a task. The outer `Option` marks whether the field is
/// part of the patch; for `due_date` and `priority` the inner `Option` lets a
/// patch clear the value.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub completed: Option<bool>,
    pub due_date: Option<Option<NaiveDate>>,
    pub priority: Option<Option<Priority>>,
}

impl TaskPatch {
    pub fn completed(value: bool) -> Self {
        Self {
            completed: Some(value),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new(1, "Write draft".to_string(), None, None);
        assert_eq!(task.id, 1);
        assert!(!task.completed);
        assert!(task.due_date.is_none());
        assert!(task.priority.is_none());
    }

    #[test]
    fn test_apply_merges_only_set_fields() {
        let due = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let mut task = Task::new(1, "Write draft".to_string(), Some(due), Some(Priority::High));

        task.apply(TaskPatch {
            title: Some("Write final draft".to_string()),
            ..TaskPatch::default()
        });

        assert_eq!(task.title, "Write final draft");
        assert_eq!(task.due_date, Some(due));
        assert_eq!(task.priority, Some(Priority::High));
        assert!(!task.completed);
    }

    #[test]
    fn test_apply_can_clear_optional_fields() {
        let due = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let mut task = Task::new(1, "Write draft".to_string(), Some(due), Some(Priority::Low));

        task.apply(TaskPatch {
            due_date: Some(None),
            priority: Some(None),
            ..TaskPatch::default()
        });

        assert!(task.due_date.is_none());
        assert!(task.priority.is_none());
    }

    #[test]
    fn test_task_serde_round_trip() {
        let due = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let task = Task::new(42, "Buy milk".to_string(), Some(due), Some(Priority::Medium));

        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }

    #[test]
    fn test_task_deserializes_without_optional_fields() {
        let task: Task =
            serde_json::from_str(r#"{"id": 7, "title": "Call bank", "completed": true}"#).unwrap();
        assert_eq!(task.id, 7);
        assert!(task.completed);
        assert!(task.due_date.is_none());
        assert!(task.priority.is_none());
    }
}
