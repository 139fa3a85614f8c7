// Copyright (c) Redstash Project Authors.
// Licensed under the MIT License.

//! Mock store implementation for testing.
//!
//! This module provides `MockStore`, a configurable in-memory backend that
//! records all operations and supports failure injection for testing error
//! paths.

use std::{collections::HashMap, sync::Arc};

use parking_lot::Mutex;

use crate::{Error, KeyValueStore, Result};

/// Recorded store operation with full context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOp {
    /// A get operation was performed with the given key.
    Get(String),
    /// A set operation was performed with the given key and value.
    Set {
        /// The key that was written.
        key: String,
        /// The raw value that was written.
        value: Vec<u8>,
    },
    /// An increment operation was performed with the given key.
    Increment(String),
    /// A push operation was performed with the given key and element.
    Push {
        /// The list key that was appended to.
        key: String,
        /// The element that was appended.
        element: Vec<u8>,
    },
    /// A list operation was performed with the given key.
    List(String),
    /// A flush operation was performed.
    Flush,
}

type FailPredicate = Box<dyn Fn(&StoreOp) -> bool + Send + Sync>;

#[derive(Default)]
struct State {
    values: HashMap<String, Vec<u8>>,
    lists: HashMap<String, Vec<Vec<u8>>>,
}

/// A configurable mock store for testing.
///
/// This backend keeps values and lists in memory and can be configured to
/// fail operations on demand, making it useful for testing error handling
/// paths. All operations are recorded for later verification.
///
/// # Examples
///
/// ```no_run
/// use redstash_store::testing::{MockStore, StoreOp};
/// use redstash_store::KeyValueStore;
///
/// # async fn example() {
/// let store = MockStore::new();
///
/// store.set("key", b"42".to_vec()).await.unwrap();
/// let value = store.get("key").await.unwrap();
/// assert_eq!(value, Some(b"42".to_vec()));
///
/// assert_eq!(store.operations(), vec![
///     StoreOp::Set { key: "key".to_string(), value: b"42".to_vec() },
///     StoreOp::Get("key".to_string()),
/// ]);
/// # }
/// ```
///
/// # Failure Injection
///
/// ```no_run
/// use redstash_store::testing::{MockStore, StoreOp};
/// use redstash_store::KeyValueStore;
///
/// # async fn example() {
/// let store = MockStore::new();
///
/// // Fail all increments
/// store.fail_when(|op| matches!(op, StoreOp::Increment(_)));
/// assert!(store.increment("counter").await.is_err());
/// # }
/// ```
pub struct MockStore {
    state: Arc<Mutex<State>>,
    operations: Arc<Mutex<Vec<StoreOp>>>,
    fail_when: Arc<Mutex<Option<FailPredicate>>>,
}

impl std::fmt::Debug for MockStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockStore")
            .field("operations", &self.operations)
            .field("fail_when", &self.fail_when.lock().is_some())
            .finish()
    }
}

impl Clone for MockStore {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            operations: Arc::clone(&self.operations),
            fail_when: Arc::clone(&self.fail_when),
        }
    }
}

impl Default for MockStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MockStore {
    /// Creates a new empty mock store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State::default())),
            operations: Arc::new(Mutex::new(Vec::new())),
            fail_when: Arc::new(Mutex::new(None)),
        }
    }

    /// Sets a predicate that determines when operations should fail.
    ///
    /// The predicate receives the operation and returns `true` if it should
    /// fail. Failed operations are still recorded.
    pub fn fail_when<F>(&self, predicate: F)
    where
        F: Fn(&StoreOp) -> bool + Send + Sync + 'static,
    {
        *self.fail_when.lock() = Some(Box::new(predicate));
    }

    /// Clears the failure predicate, allowing all operations to succeed.
    pub fn clear_failures(&self) {
        *self.fail_when.lock() = None;
    }

    /// Returns a clone of all recorded operations.
    #[must_use]
    pub fn operations(&self) -> Vec<StoreOp> {
        self.operations.lock().clone()
    }

    /// Clears all recorded operations.
    pub fn clear_operations(&self) {
        self.operations.lock().clear();
    }

    /// Returns the number of plain values currently stored.
    #[must_use]
    pub fn value_count(&self) -> usize {
        self.state.lock().values.len()
    }

    fn record(&self, op: StoreOp) {
        self.operations.lock().push(op);
    }

    fn should_fail(&self, op: &StoreOp) -> bool {
        self.fail_when.lock().as_ref().is_some_and(|predicate| predicate(op))
    }
}

impl KeyValueStore for MockStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let op = StoreOp::Get(key.to_owned());
        if self.should_fail(&op) {
            self.record(op);
            return Err(Error::from_message("mock: get failed"));
        }
        self.record(op);
        Ok(self.state.lock().values.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<()> {
        let op = StoreOp::Set {
            key: key.to_owned(),
            value: value.clone(),
        };
        if self.should_fail(&op) {
            self.record(op);
            return Err(Error::from_message("mock: set failed"));
        }
        self.record(op);
        self.state.lock().values.insert(key.to_owned(), value);
        Ok(())
    }

    async fn increment(&self, key: &str) -> Result<i64> {
        let op = StoreOp::Increment(key.to_owned());
        if self.should_fail(&op) {
            self.record(op);
            return Err(Error::from_message("mock: increment failed"));
        }
        self.record(op);
        let mut state = self.state.lock();
        let current = match state.values.get(key) {
            Some(raw) => std::str::from_utf8(raw)
                .map_err(Error::caused_by)?
                .parse::<i64>()
                .map_err(Error::caused_by)?,
            None => 0,
        };
        let next = current + 1;
        state.values.insert(key.to_owned(), next.to_string().into_bytes());
        Ok(next)
    }

    async fn push(&self, key: &str, element: Vec<u8>) -> Result<u64> {
        let op = StoreOp::Push {
            key: key.to_owned(),
            element: element.clone(),
        };
        if self.should_fail(&op) {
            self.record(op);
            return Err(Error::from_message("mock: push failed"));
        }
        self.record(op);
        let mut state = self.state.lock();
        let entries = state.lists.entry(key.to_owned()).or_default();
        entries.push(element);
        Ok(entries.len() as u64)
    }

    async fn list(&self, key: &str) -> Result<Vec<Vec<u8>>> {
        let op = StoreOp::List(key.to_owned());
        if self.should_fail(&op) {
            self.record(op);
            return Err(Error::from_message("mock: list failed"));
        }
        self.record(op);
        Ok(self.state.lock().lists.get(key).cloned().unwrap_or_default())
    }

    async fn flush(&self) -> Result<()> {
        let op = StoreOp::Flush;
        if self.should_fail(&op) {
            self.record(op);
            return Err(Error::from_message("mock: flush failed"));
        }
        self.record(op);
        let mut state = self.state.lock();
        state.values.clear();
        state.lists.clear();
        Ok(())
    }
}
