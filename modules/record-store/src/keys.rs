//! Key minting for new records.

use uuid::Uuid;

/// Produces a fresh key on every call. Implementations must never repeat a key.
pub trait KeySource<K> {
    fn next_key(&mut self) -> K;
}

/// Integer keys counting up from 1. Deleting a record never rewinds the counter.
#[derive(Debug, Clone)]
pub struct SequentialKeys {
    next: i64,
}

impl SequentialKeys {
    pub fn new() -> Self {
        Self { next: 1 }
    }
}

impl Default for SequentialKeys {
    fn default() -> Self {
        Self::new()
    }
}

impl KeySource<i64> for SequentialKeys {
    fn next_key(&mut self) -> i64 {
        let key = self.next;
        self.next += 1;
        key
    }
}

/// Opaque string keys backed by random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidKeys;

impl KeySource<String> for UuidKeys {
    fn next_key(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}
