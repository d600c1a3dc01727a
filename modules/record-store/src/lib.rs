//! Ordered in-memory record storage shared by the story and task services.
//!
//! A [`RecordStore`] owns its records and hands out clones. Keys are minted by a
//! [`KeySource`] when a record is inserted and are never reassigned afterwards.

mod error;
mod keys;

pub use error::StoreError;
pub use keys::{KeySource, SequentialKeys, UuidKeys};

use std::fmt::Display;

/// A value carrying a store-assigned identity.
pub trait Record: Clone {
    type Key: Clone + PartialEq + Display;

    /// Label used in not-found messages.
    const KIND: &'static str;

    fn key(&self) -> &Self::Key;

    fn set_key(&mut self, key: Self::Key);
}

pub struct RecordStore<R: Record, S> {
    records: Vec<R>,
    keys: S,
}

impl<R, S> RecordStore<R, S>
where
    R: Record,
    S: KeySource<R::Key>,
{
    pub fn new(keys: S) -> Self {
        Self {
            records: Vec::new(),
            keys,
        }
    }

    /// Mints a fresh key, builds the record around it and appends it.
    pub fn insert_with(&mut self, build: impl FnOnce(R::Key) -> R) -> R {
        let key = self.keys.next_key();
        let mut record = build(key.clone());
        record.set_key(key);
        debug_assert!(
            self.position(record.key()).is_none(),
            "key source repeated a key"
        );
        log::debug!("[{}] inserted {}", R::KIND, record.key());
        self.records.push(record.clone());
        record
    }

    /// All records in insertion order.
    pub fn list(&self) -> Vec<R> {
        self.records.clone()
    }

    pub fn get(&self, key: &R::Key) -> Result<R, StoreError> {
        let idx = self.locate(key)?;
        Ok(self.records[idx].clone())
    }

    /// Overwrites the stored record in place. The stored key always wins over
    /// whatever key `record` carries.
    pub fn replace(&mut self, key: &R::Key, mut record: R) -> Result<R, StoreError> {
        let idx = self.locate(key)?;
        record.set_key(key.clone());
        self.records[idx] = record.clone();
        log::debug!("[{}] replaced {}", R::KIND, key);
        Ok(record)
    }

    /// Applies `mutate` to the stored record. Changes to the key are reverted.
    pub fn update(
        &mut self,
        key: &R::Key,
        mutate: impl FnOnce(&mut R),
    ) -> Result<R, StoreError> {
        let idx = self.locate(key)?;
        let record = &mut self.records[idx];
        mutate(record);
        record.set_key(key.clone());
        log::debug!("[{}] updated {}", R::KIND, key);
        Ok(record.clone())
    }

    /// Removes the record, keeping the order of the rest.
    pub fn remove(&mut self, key: &R::Key) -> Result<R, StoreError> {
        let idx = self.locate(key)?;
        let removed = self.records.remove(idx);
        log::debug!("[{}] removed {}", R::KIND, key);
        Ok(removed)
    }

    /// Records matching `pred`, in insertion order.
    pub fn filter(&self, pred: impl Fn(&R) -> bool) -> Vec<R> {
        self.records.iter().filter(|r| pred(r)).cloned().collect()
    }

    fn position(&self, key: &R::Key) -> Option<usize> {
        self.records.iter().position(|r| r.key() == key)
    }

    fn locate(&self, key: &R::Key) -> Result<usize, StoreError> {
        self.position(key)
            .ok_or_else(|| StoreError::not_found(R::KIND, key))
    }
}

impl<R, S> Default for RecordStore<R, S>
where
    R: Record,
    S: KeySource<R::Key> + Default,
{
    fn default() -> Self {
        Self::new(S::default())
    }
}
