// Copyright (c) Redstash Project Authors.

//! In-memory store implementation.
//!
//! This module provides a process-local backend with the same observable
//! semantics as the external store: plain values, counters stored as their
//! decimal rendering, lists, and wrong-kind errors when a key is accessed
//! as the wrong shape.

use std::{collections::HashMap, sync::Arc};

use parking_lot::Mutex;

use redstash_store::{Error, KeyValueStore, Result};

/// A slot holds either a raw value or a list, never both.
#[derive(Debug, Clone)]
enum Slot {
    Value(Vec<u8>),
    List(Vec<Vec<u8>>),
}

/// An in-memory key-value store.
///
/// Cloning produces another handle onto the same store, matching the
/// shared-connection behavior of a real backend handle.
///
/// # Examples
///
/// ```
/// use redstash_memory::InMemoryStore;
/// use redstash_store::KeyValueStore;
/// # futures::executor::block_on(async {
///
/// let store = InMemoryStore::new();
///
/// store.set("key", b"hello".to_vec()).await?;
/// let value = store.get("key").await?;
/// assert_eq!(value, Some(b"hello".to_vec()));
/// # Ok::<(), redstash_store::Error>(())
/// # });
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    slots: Arc<Mutex<HashMap<String, Slot>>>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of keys currently stored, values and lists alike.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.slots.lock().len() as u64
    }

    /// Returns `true` if the store contains no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.lock().is_empty()
    }
}

fn wrong_kind(key: &str) -> Error {
    Error::from_message(format!("wrong kind of value at key {key:?}"))
}

fn parse_counter(raw: &[u8]) -> Result<i64> {
    std::str::from_utf8(raw)
        .map_err(Error::caused_by)?
        .parse::<i64>()
        .map_err(Error::caused_by)
}

impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        match self.slots.lock().get(key) {
            Some(Slot::Value(raw)) => Ok(Some(raw.clone())),
            Some(Slot::List(_)) => Err(wrong_kind(key)),
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<()> {
        self.slots.lock().insert(key.to_owned(), Slot::Value(value));
        Ok(())
    }

    async fn increment(&self, key: &str) -> Result<i64> {
        let mut slots = self.slots.lock();
        let current = match slots.get(key) {
            Some(Slot::Value(raw)) => parse_counter(raw)?,
            Some(Slot::List(_)) => return Err(wrong_kind(key)),
            None => 0,
        };
        let next = current + 1;
        slots.insert(key.to_owned(), Slot::Value(next.to_string().into_bytes()));
        Ok(next)
    }

    async fn push(&self, key: &str, element: Vec<u8>) -> Result<u64> {
        let mut slots = self.slots.lock();
        match slots
            .entry(key.to_owned())
            .or_insert_with(|| Slot::List(Vec::new()))
        {
            Slot::List(entries) => {
                entries.push(element);
                Ok(entries.len() as u64)
            }
            Slot::Value(_) => Err(wrong_kind(key)),
        }
    }

    async fn list(&self, key: &str) -> Result<Vec<Vec<u8>>> {
        match self.slots.lock().get(key) {
            Some(Slot::List(entries)) => Ok(entries.clone()),
            Some(Slot::Value(_)) => Err(wrong_kind(key)),
            None => Ok(Vec::new()),
        }
    }

    async fn flush(&self) -> Result<()> {
        self.slots.lock().clear();
        Ok(())
    }
}
