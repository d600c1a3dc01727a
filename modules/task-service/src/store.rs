//! In-memory todo list with completion and search.

use chrono::Utc;
use record_store::{RecordStore, SequentialKeys, StoreError};
use task_types::{Task, TaskDraft, TaskUpdate};

pub const EMPTY_UPDATE: &str = "At least one field is required to update";

#[derive(Default)]
pub struct TaskStore {
    records: RecordStore<Task, SequentialKeys>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, draft: TaskDraft) -> Task {
        self.records
            .insert_with(|id| Task::new(id, draft, Utc::now()))
    }

    pub fn list(&self) -> Vec<Task> {
        self.records.list()
    }

    pub fn get(&self, id: i64) -> Result<Task, StoreError> {
        self.records.get(&id)
    }

    /// Overwrites title and description. Creation time and completion survive.
    pub fn replace(&mut self, id: i64, draft: TaskDraft) -> Result<Task, StoreError> {
        self.records.update(&id, |task| {
            task.title = draft.title;
            task.description = draft.description;
            task.touch(Utc::now());
        })
    }

    /// Applies the non-empty fields of `update`. Rejects updates with nothing
    /// to change before looking the task up.
    pub fn update(&mut self, update: TaskUpdate) -> Result<Task, StoreError> {
        if update.is_empty() {
            return Err(StoreError::validation(EMPTY_UPDATE));
        }
        self.records.update(&update.id, |task| {
            if let Some(title) = update.title() {
                task.title = title.to_string();
            }
            if let Some(description) = update.description() {
                task.description = description.to_string();
            }
            task.touch(Utc::now());
        })
    }

    pub fn delete(&mut self, id: i64) -> Result<(), StoreError> {
        self.records.remove(&id).map(|_| ())
    }

    pub fn mark_complete(&mut self, id: i64) -> Result<Task, StoreError> {
        self.records.update(&id, |task| {
            task.is_completed = true;
            task.touch(Utc::now());
        })
    }

    pub fn search(&self, query: &str) -> Vec<Task> {
        let needle = query.to_lowercase();
        self.records.filter(|task| task.matches(&needle))
    }
}
