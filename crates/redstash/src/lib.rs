// Copyright (c) Redstash Project Authors.
// Licensed under the MIT License.

//! An instrumented key-value cache facade.
//!
//! This crate provides a keyed cache facade over an external key-value
//! store, with composable call-tracking wrappers:
//! - [`Cache`] stores opaque payloads under generated keys and reads them
//!   back with typed converters
//! - [`CountCalls`] and [`RecordHistory`] decorate any [`Operation`] with
//!   call counting and input/output history, both recorded in the backend
//! - [`replay`] renders the recorded instrumentation data as text
//!
//! Storage, persistence, and eviction are the backend's responsibility;
//! see `redstash_redis` for the Redis backend and `redstash_memory` for a
//! process-local one.
//!
//! # Examples
//!
//! ## Storing and retrieving values
//!
//! ```
//! use redstash::Cache;
//! # futures::executor::block_on(async {
//!
//! let cache = Cache::builder().memory().build().await?;
//!
//! let key = cache.store("hello").await?;
//! assert_eq!(cache.get_str(&key).await?, Some("hello".to_string()));
//! # Ok::<(), redstash::Error>(())
//! # });
//! ```
//!
//! ## Replaying recorded calls
//!
//! ```
//! use redstash::Cache;
//! # futures::executor::block_on(async {
//!
//! let cache = Cache::builder().memory().build().await?;
//! cache.store(42_i64).await?;
//!
//! let report = cache.replay_store().await?;
//! assert!(report.starts_with("Cache::store was called 1 times:"));
//! # Ok::<(), redstash::Error>(())
//! # });
//! ```

pub mod builder;
pub mod cache;
mod instrument;
mod operation;
mod replay;

#[doc(inline)]
pub use builder::CacheBuilder;
#[doc(inline)]
pub use cache::{Cache, STORE_OP};
#[doc(inline)]
pub use instrument::{CountCalls, RecordHistory, inputs_key, outputs_key};
#[doc(inline)]
pub use operation::{OpName, Operation};
#[cfg(feature = "memory")]
#[doc(inline)]
pub use redstash_memory::InMemoryStore;
#[doc(inline)]
pub use redstash_store::{Error, Key, KeyValueStore, Result, Value};
#[cfg(any(feature = "test-util", test))]
#[doc(inline)]
pub use redstash_store::testing::{MockStore, StoreOp};
#[doc(inline)]
pub use replay::replay;
