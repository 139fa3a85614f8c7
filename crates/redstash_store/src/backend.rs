// Copyright (c) Redstash Project Authors.
// Licensed under the MIT License.

//! The core trait for key-value storage backends.
//!
//! [`KeyValueStore`] defines the interface that all storage backends must
//! implement. This trait is designed for composition: implement the raw
//! store primitives, then use `redstash` to layer the cache facade and the
//! call-tracking wrappers on top.

use crate::Result;

/// Trait for key-value store backends.
///
/// Implement this trait to connect the facade to a storage backend. The
/// primitives mirror what the external store offers: raw value reads and
/// writes, an atomic counter, list append and retrieval, and a full flush
/// of the current database.
///
/// Each primitive is individually atomic at the backend; no atomicity is
/// implied across a sequence of calls.
pub trait KeyValueStore: Send + Sync {
    /// Gets the raw value stored under `key`.
    ///
    /// An absent key yields `Ok(None)`; only backend failures are errors.
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<Vec<u8>>>> + Send;

    /// Writes a raw value under `key`, replacing any previous value.
    fn set(&self, key: &str, value: Vec<u8>) -> impl Future<Output = Result<()>> + Send;

    /// Atomically increments the counter stored under `key` and returns the
    /// new count.
    ///
    /// A missing key counts from zero. An existing value that does not
    /// parse as a decimal integer is an error.
    fn increment(&self, key: &str) -> impl Future<Output = Result<i64>> + Send;

    /// Appends `element` to the list stored under `key`, creating the list
    /// if missing, and returns the new list length.
    fn push(&self, key: &str, element: Vec<u8>) -> impl Future<Output = Result<u64>> + Send;

    /// Returns the full contents of the list stored under `key`.
    ///
    /// A missing key yields an empty list.
    fn list(&self, key: &str) -> impl Future<Output = Result<Vec<Vec<u8>>>> + Send;

    /// Erases all data in the backend's current database. Irreversible.
    fn flush(&self) -> impl Future<Output = Result<()>> + Send;
}
