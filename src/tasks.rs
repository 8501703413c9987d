use crate::domain::{Priority, Task, TaskId, TaskPatch};
use crate::persistence::DurableStore;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Durable-store key holding the full serialized task collection
pub const TASKS_KEY: &str = "todos";

/// Version tag for the persisted envelope. A payload with any other version
/// is treated as malformed and discarded at load time.
const SCHEMA_VERSION: u32 = 1;

/// Persisted envelope around the task collection
#[derive(Debug, Serialize, Deserialize)]
struct StoredTasks {
    version: u32,
    tasks: Vec<Task>,
}

/// The single source of truth for tasks. Holds the ordered collection in
/// memory and writes the full serialization back to the durable store before
/// every mutating call returns. Persistence failures are swallowed; the
/// in-memory state stays authoritative for the session.
pub struct TaskStore {
    tasks: Vec<Task>,
    store: DurableStore,
    last_id: TaskId,
}

impl TaskStore {
    /// Hydrate from the durable store. An absent or malformed payload yields
    /// the empty collection; this never errors.
    pub fn load(store: DurableStore) -> Self {
        let tasks = store
            .read(TASKS_KEY)
            .and_then(|raw| serde_json::from_str::<StoredTasks>(&raw).ok())
            .filter(|stored| stored.version == SCHEMA_VERSION)
            .map(|stored| stored.tasks)
            .unwrap_or_default();

        let last_id = tasks.iter().map(|t| t.id).max().unwrap_or(0);

        Self {
            tasks,
            store,
            last_id,
        }
    }

    /// The current collection, in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Append a new task. Rejects a title that is empty after trimming and
    /// returns `None` without touching the collection; otherwise returns the
    /// freshly assigned id.
    pub fn add(
        &mut self,
        title: &str,
        due_date: Option<NaiveDate>,
        priority: Option<Priority>,
    ) -> Option<TaskId> {
        if title.trim().is_empty() {
            return None;
        }

        let id = self.next_id();
        self.tasks
            .push(Task::new(id, title.to_string(), due_date, priority));
        self.persist();
        Some(id)
    }

    /// Merge `patch` into the task with `id`. Unknown ids are a silent no-op.
    pub fn update(&mut self, id: TaskId, patch: TaskPatch) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.apply(patch);
            self.persist();
        }
    }

    /// Flip the completion flag of the task with `id`
    pub fn toggle_completed(&mut self, id: TaskId) {
        let completed = match self.tasks.iter().find(|t| t.id == id) {
            Some(task) => task.completed,
            None => return,
        };
        self.update(id, TaskPatch::completed(!completed));
    }

    /// Remove the task with `id` if present. Unknown ids are a silent no-op.
    pub fn remove(&mut self, id: TaskId) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() != before {
            self.persist();
        }
    }

    /// Assign the next task id from the creation timestamp, bumped past the
    /// last issued id so two adds in the same millisecond stay distinct.
    fn next_id(&mut self) -> TaskId {
        let candidate = Utc::now().timestamp_millis();
        self.last_id = candidate.max(self.last_id + 1);
        self.last_id
    }

    /// Write the full collection back to the durable store
    fn persist(&self) {
        let stored = StoredTasks {
            version: SCHEMA_VERSION,
            tasks: self.tasks.clone(),
        };
        if let Ok(json) = serde_json::to_string(&stored) {
            self.store.write(TASKS_KEY, &json);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn empty_store(dir: &tempfile::TempDir) -> TaskStore {
        TaskStore::load(DurableStore::at(dir.path().to_path_buf()))
    }

    #[test]
    fn test_load_from_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        let store = empty_store(&dir);
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_assigns_unique_ids() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = empty_store(&dir);

        let mut ids = Vec::new();
        for i in 0..50 {
            ids.push(store.add(&format!("Task {}", i), None, None).unwrap());
        }

        let mut deduped = ids.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn test_add_rejects_blank_title() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = empty_store(&dir);

        assert_eq!(store.add("", None, None), None);
        assert_eq!(store.add("   \t ", None, None), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_complete_delete_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = empty_store(&dir);

        let id = store.add("Buy milk", None, None).unwrap();
        assert_eq!(store.len(), 1);
        assert!(!store.tasks()[0].completed);

        store.toggle_completed(id);
        assert!(store.tasks()[0].completed);

        store.remove(id);
        assert!(store.is_empty());
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = empty_store(&dir);
        store.add("Buy milk", None, None).unwrap();

        let snapshot = store.tasks().to_vec();
        store.update(999, TaskPatch::completed(true));
        store.remove(999);
        assert_eq!(store.tasks(), snapshot.as_slice());
    }

    #[test]
    fn test_update_preserves_order_and_other_tasks() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = empty_store(&dir);

        let a = store.add("First", None, None).unwrap();
        let b = store.add("Second", None, None).unwrap();
        let c = store.add("Third", None, None).unwrap();

        store.update(
            b,
            TaskPatch {
                title: Some("Second, revised".to_string()),
                ..TaskPatch::default()
            },
        );

        let titles: Vec<&str> = store.tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second, revised", "Third"]);
        assert_eq!(store.tasks()[0].id, a);
        assert_eq!(store.tasks()[2].id, c);
    }

    #[test]
    fn test_round_trip_through_durable_store() {
        let dir = tempfile::tempdir().unwrap();
        let due = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        let mut store = empty_store(&dir);
        store.add("Buy milk", Some(due), Some(Priority::High)).unwrap();
        store.add("Call bank", None, None).unwrap();
        let original = store.tasks().to_vec();
        drop(store);

        let rehydrated = empty_store(&dir);
        assert_eq!(rehydrated.tasks(), original.as_slice());
    }

    #[test]
    fn test_malformed_payload_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let durable = DurableStore::at(dir.path().to_path_buf());
        durable.write(TASKS_KEY, "{not json");

        let store = TaskStore::load(DurableStore::at(dir.path().to_path_buf()));
        assert!(store.is_empty());
    }

    #[test]
    fn test_unknown_schema_version_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let durable = DurableStore::at(dir.path().to_path_buf());
        durable.write(
            TASKS_KEY,
            r#"{"version": 99, "tasks": [{"id": 1, "title": "Old", "completed": false}]}"#,
        );

        let store = TaskStore::load(DurableStore::at(dir.path().to_path_buf()));
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_continues_id_sequence_past_stored_ids() {
        let dir = tempfile::tempdir().unwrap();
        let durable = DurableStore::at(dir.path().to_path_buf());
        // A stored id far in the future must not be reissued
        let far_future = i64::MAX - 10;
        durable.write(
            TASKS_KEY,
            &format!(
                r#"{{"version": 1, "tasks": [{{"id": {}, "title": "Old", "completed": false}}]}}"#,
                far_future
            ),
        );

        let mut store = TaskStore::load(DurableStore::at(dir.path().to_path_buf()));
        let new_id = store.add("New", None, None).unwrap();
        assert!(new_id > far_future);
    }

    #[test]
    fn test_mutation_survives_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone");
        let mut store = TaskStore::load(DurableStore::at(missing));

        // Writes silently fail, but the in-memory collection is correct
        let id = store.add("Buy milk", None, None).unwrap();
        store.toggle_completed(id);
        assert_eq!(store.len(), 1);
        assert!(store.tasks()[0].completed);
    }
}
