// Copyright (c) Redstash Project Authors.
// Licensed under the MIT License.

//! The cache facade over a key-value store backend.

use tracing::debug;

use redstash_store::{Error, Key, KeyValueStore, Result, Value};

use crate::{
    builder::CacheBuilder,
    instrument::{CountCalls, RecordHistory},
    operation::{OpName, Operation},
};

/// The fully-qualified name of the facade's store operation.
///
/// The invocation counter lives at this key in the backend; the history
/// lists live at `Cache::store:inputs` and `Cache::store:outputs`.
pub const STORE_OP: OpName = "Cache::store";

/// The innermost store operation: generate a fresh key, write the value.
#[derive(Debug)]
pub(crate) struct StoreValue<S> {
    store: S,
}

impl<S> StoreValue<S> {
    pub(crate) fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S> Operation<Value> for StoreValue<S>
where
    S: KeyValueStore,
{
    type Out = Key;

    async fn invoke(&self, value: Value) -> Result<Key> {
        let key = Key::generate();
        self.store.set(key.as_str(), value.to_bytes()).await?;
        Ok(key)
    }
}

/// A keyed cache facade over an external key-value store.
///
/// `Cache` writes opaque payloads under generated keys and reads them back
/// with typed converters. Its store operation is instrumented with call
/// counting and call history recording, both kept in the backend itself.
///
/// Construct via [`Cache::builder`]; note that building **erases all
/// existing data** in the backend's current database (see
/// [`CacheBuilder::build`]).
///
/// # Examples
///
/// ```
/// use redstash::Cache;
/// # futures::executor::block_on(async {
///
/// let cache = Cache::builder().memory().build().await?;
///
/// let key = cache.store(42_i64).await?;
/// assert_eq!(cache.get_int(&key).await?, Some(42));
/// # Ok::<(), redstash::Error>(())
/// # });
/// ```
#[derive(Debug)]
pub struct Cache<S> {
    store: S,
    store_op: CountCalls<S, RecordHistory<S, StoreValue<S>>>,
}

impl Cache<()> {
    /// Creates a new cache builder.
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
    #[must_use]
    pub fn builder() -> CacheBuilder<()> {
        CacheBuilder::new()
    }
}

impl<S> Cache<S>
where
    S: KeyValueStore + Clone,
{
    pub(crate) fn new(store: S) -> Self {
        let store_op = CountCalls::new(
            STORE_OP,
            store.clone(),
            RecordHistory::new(STORE_OP, store.clone(), StoreValue::new(store.clone())),
        );
        Self { store, store_op }
    }

    /// Returns a reference to the backend handle.
    ///
    /// This allows reading backend state not exposed by the facade, such as
    /// the raw instrumentation keys.
    #[must_use]
    pub fn inner(&self) -> &S {
        &self.store
    }

    /// Stores a value under a freshly generated key and returns the key.
    ///
    /// Accepts text, binary, integer, and floating-point payloads via
    /// [`Value`]'s `From` impls. Every call generates a new unique key;
    /// keys are never reused. The call is instrumented: the invocation
    /// counter and history lists under [`STORE_OP`] are updated in the
    /// backend before and after the write.
    ///
    /// # Errors
    ///
    /// Returns an error if any backend operation fails. The bookkeeping
    /// and the write are not transactional; a failure mid-call can leave
    /// the counter, history, and stored value inconsistent.
    pub async fn store(&self, value: impl Into<Value> + Send) -> Result<Key> {
        let key = self.store_op.invoke(value.into()).await?;
        debug!(key = %key, "stored value");
        Ok(key)
    }

    /// Retrieves the value under `key`, converted by `convert`.
    ///
    /// An absent key yields `Ok(None)`; the converter is only applied to
    /// present values, and its failures propagate.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend read fails or the converter fails.
    pub async fn get<T>(
        &self,
        key: &Key,
        convert: impl FnOnce(Vec<u8>) -> Result<T> + Send,
    ) -> Result<Option<T>> {
        match self.store.get(key.as_str()).await? {
            Some(raw) => Ok(Some(convert(raw)?)),
            None => {
                debug!(key = %key, "lookup miss");
                Ok(None)
            }
        }
    }

    /// Retrieves the raw bytes under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend read fails.
    pub async fn get_bytes(&self, key: &Key) -> Result<Option<Vec<u8>>> {
        self.get(key, Ok).await
    }

    /// Retrieves the value under `key` decoded as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend read fails or the stored bytes are
    /// not valid UTF-8.
    pub async fn get_str(&self, key: &Key) -> Result<Option<String>> {
        self.get(key, |raw| String::from_utf8(raw).map_err(Error::caused_by))
            .await
    }

    /// Retrieves the value under `key` parsed as a decimal integer.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend read fails or the stored bytes do
    /// not parse as an integer.
    pub async fn get_int(&self, key: &Key) -> Result<Option<i64>> {
        self.get(key, |raw| {
            std::str::from_utf8(&raw)
                .map_err(Error::caused_by)?
                .parse::<i64>()
                .map_err(Error::caused_by)
        })
        .await
    }

    /// Renders the recorded call count and history of this facade's store
    /// operation as human-readable text.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend reads fail or the recorded counter
    /// is not numeric.
    pub async fn replay_store(&self) -> Result<String> {
        crate::replay::replay(&self.store, STORE_OP).await
    }
}
