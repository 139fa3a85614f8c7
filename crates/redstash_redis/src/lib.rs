// Copyright (c) Redstash Project Authors.
// Licensed under the MIT License.

//! Redis-backed storage backend for the redstash cache facade.
//!
//! This crate provides [`RedisStore`], an implementation of
//! `redstash_store::KeyValueStore` over a multiplexed Redis connection.
//! The store primitives map directly onto Redis commands: GET, SET, INCR,
//! RPUSH, LRANGE, and FLUSHDB.
//!
//! # Examples
//!
//! ```no_run
//! use redstash_redis::RedisStore;
//! use redstash_store::KeyValueStore;
//!
//! # async fn example() -> redstash_store::Result<()> {
//! let store = RedisStore::connect("redis://127.0.0.1/").await?;
//! store.set("greeting", b"hello".to_vec()).await?;
//! # Ok(())
//! # }
//! ```

mod store;

#[doc(inline)]
pub use store::{DEFAULT_URL, RedisStore};
