// Copyright (c) Redstash Project Authors.
// Licensed under the MIT License.

//! Core storage abstractions for building instrumented cache facades.
//!
//! This crate defines the [`KeyValueStore`] trait that all storage backends
//! must satisfy, along with the [`Value`] payload type, generated [`Key`]
//! identifiers, and [`Error`] types for fallible operations.
//!
//! # Overview
//!
//! The store abstraction separates the external key-value server from the
//! facade built on top of it. Implement [`KeyValueStore`] for your backend,
//! then use `redstash` to layer the cache facade, call counting, and call
//! history recording on top.
//!
//! # Implementing a Store Backend
//!
//! Implement all required methods of [`KeyValueStore`]:
//!
//! ```
//! use redstash_store::{Error, KeyValueStore, Result};
//! use std::collections::HashMap;
//! use std::sync::RwLock;
//!
//! struct SimpleStore(RwLock<HashMap<String, Vec<u8>>>);
//!
//! impl KeyValueStore for SimpleStore {
//!     async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
//!         Ok(self.0.read().unwrap().get(key).cloned())
//!     }
//!
//!     async fn set(&self, key: &str, value: Vec<u8>) -> Result<()> {
//!         self.0.write().unwrap().insert(key.to_owned(), value);
//!         Ok(())
//!     }
//!
//!     async fn increment(&self, key: &str) -> Result<i64> {
//!         let mut guard = self.0.write().unwrap();
//!         let current = match guard.get(key) {
//!             Some(raw) => std::str::from_utf8(raw)
//!                 .map_err(Error::caused_by)?
//!                 .parse::<i64>()
//!                 .map_err(Error::caused_by)?,
//!             None => 0,
//!         };
//!         let next = current + 1;
//!         guard.insert(key.to_owned(), next.to_string().into_bytes());
//!         Ok(next)
//!     }
//!
//!     async fn push(&self, _key: &str, _element: Vec<u8>) -> Result<u64> {
//!         Err(Error::from_message("lists not supported"))
//!     }
//!
//!     async fn list(&self, _key: &str) -> Result<Vec<Vec<u8>>> {
//!         Ok(Vec::new())
//!     }
//!
//!     async fn flush(&self) -> Result<()> {
//!         self.0.write().unwrap().clear();
//!         Ok(())
//!     }
//! }
//! ```

mod backend;
pub mod error;
mod key;
#[cfg(any(feature = "test-util", test))]
pub mod testing;
mod value;

#[doc(inline)]
pub use backend::KeyValueStore;
#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use key::Key;
#[doc(inline)]
pub use value::Value;
