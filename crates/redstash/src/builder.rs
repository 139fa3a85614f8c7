// Copyright (c) Redstash Project Authors.

//! Cache builder for selecting a storage backend.
//!
//! This module provides the builder used to construct a [`Cache`] over any
//! [`KeyValueStore`] backend.

use tracing::warn;

use redstash_store::{KeyValueStore, Result};

use crate::Cache;

#[cfg(feature = "memory")]
use redstash_memory::InMemoryStore;

/// Builder for constructing a [`Cache`] over a storage backend.
///
/// Created by [`Cache::builder`]. Select a backend with
/// [`storage`](Self::storage) or [`memory`](Self::memory), then call
/// [`build`](Self::build).
///
/// # Examples
///
/// ```
/// use redstash::Cache;
/// # futures::executor::block_on(async {
///
/// let cache = Cache::builder().memory().build().await?;
/// # Ok::<(), redstash::Error>(())
/// # });
/// ```
#[derive(Debug)]
pub struct CacheBuilder<S = ()> {
    storage: S,
}

impl CacheBuilder<()> {
    pub(crate) fn new() -> Self {
        Self { storage: () }
    }

    /// Sets a custom storage backend for the cache.
    ///
    /// Use this to provide your own [`KeyValueStore`] implementation, such
    /// as `redstash_redis::RedisStore`, instead of the built-in options.
    pub fn storage<S>(self, storage: S) -> CacheBuilder<S>
    where
        S: KeyValueStore + Clone,
    {
        CacheBuilder { storage }
    }

    /// Configures the cache to use process-local in-memory storage.
    ///
    /// Useful for tests, demos, and embedded use where no server is
    /// available.
    #[cfg(feature = "memory")]
    #[must_use]
    pub fn memory(self) -> CacheBuilder<InMemoryStore> {
        self.storage(InMemoryStore::new())
    }
}

impl<S> CacheBuilder<S>
where
    S: KeyValueStore + Clone,
{
    /// Builds the cache facade over the configured backend.
    ///
    /// **This erases all existing data in the backend's current database.**
    /// The facade's contract starts from a clean slate on every
    /// construction; connect a dedicated database if the backend holds
    /// anything worth keeping.
    ///
    /// # Errors
    ///
    /// Returns an error if the flush fails.
    pub async fn build(self) -> Result<Cache<S>> {
        warn!("erasing all existing data in the connected store database");
        self.storage.flush().await?;
        Ok(Cache::new(self.storage))
    }
}
