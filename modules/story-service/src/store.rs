//! In-memory story collection.

use record_store::{RecordStore, StoreError, UuidKeys};
use story_types::{Story, StoryDraft, StoryPatch};

#[derive(Default)]
pub struct StoryStore {
    records: RecordStore<Story, UuidKeys>,
}

impl StoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, draft: StoryDraft) -> Story {
        self.records.insert_with(|id| Story::from_draft(id, draft))
    }

    pub fn list(&self) -> Vec<Story> {
        self.records.list()
    }

    pub fn get(&self, id: &str) -> Result<Story, StoreError> {
        self.records.get(&id.to_string())
    }

    pub fn replace(&mut self, id: &str, draft: StoryDraft) -> Result<Story, StoreError> {
        let id = id.to_string();
        self.records.replace(&id, Story::from_draft(id.clone(), draft))
    }

    /// An empty patch is a no-op that returns the stored story.
    pub fn patch(&mut self, id: &str, patch: StoryPatch) -> Result<Story, StoreError> {
        if patch.is_empty() {
            log::debug!("[story] empty patch for {}", id);
        }
        self.records.update(&id.to_string(), |story| story.apply(patch))
    }

    pub fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        self.records.remove(&id.to_string()).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, content: &str) -> StoryDraft {
        StoryDraft {
            title: title.into(),
            content: content.into(),
        }
    }

    #[test]
    fn test_add_then_get() {
        let mut store = StoryStore::new();
        let created = store.add(draft("Dune", "sand"));
        assert!(!created.id.is_empty());
        assert_eq!(store.get(&created.id).unwrap(), created);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut store = StoryStore::new();
        let a = store.add(draft("a", "a"));
        let b = store.add(draft("a", "a"));
        assert_ne!(a.id, b.id);
        assert_eq!(store.list().len(), 2);
    }

    #[test]
    fn test_replace_overwrites_all_fields() {
        let mut store = StoryStore::new();
        let first = store.add(draft("one", "1"));
        let second = store.add(draft("two", "2"));
        let replaced = store.replace(&first.id, draft("uno", "I")).unwrap();
        assert_eq!(replaced.id, first.id);
        assert_eq!(store.get(&first.id).unwrap(), replaced);
        let ids: Vec<_> = store.list().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let mut store = StoryStore::new();
        let created = store.add(draft("t", "c"));
        let patched = store.patch(&created.id, StoryPatch::default()).unwrap();
        assert_eq!(patched, created);
    }

    #[test]
    fn test_patch_title_only() {
        let mut store = StoryStore::new();
        let created = store.add(draft("t", "c"));
        let patched = store
            .patch(
                &created.id,
                StoryPatch {
                    title: Some("T".into()),
                    content: None,
                },
            )
            .unwrap();
        assert_eq!(patched.title, "T");
        assert_eq!(patched.content, "c");
    }

    #[test]
    fn test_missing_story_errors() {
        let mut store = StoryStore::new();
        assert_eq!(store.get("nope").unwrap_err().to_string(), "story not found");
        assert!(store.replace("nope", draft("a", "b")).is_err());
        assert!(store.patch("nope", StoryPatch::default()).is_err());
        assert!(store.delete("nope").is_err());
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_delete_then_get_fails() {
        let mut store = StoryStore::new();
        let a = store.add(draft("a", "a"));
        let b = store.add(draft("b", "b"));
        store.delete(&a.id).unwrap();
        assert!(store.get(&a.id).is_err());
        assert_eq!(store.get(&b.id).unwrap(), b);
    }
}
