// Copyright (c) Redstash Project Authors.
// Licensed under the MIT License.

//! In-memory storage backend for the redstash cache facade.
//!
//! This crate provides [`InMemoryStore`], a process-local implementation of
//! `redstash_store::KeyValueStore` with the external store's observable
//! semantics, including the counter and list primitives. It is intended for
//! tests, demos, and embedded use where no server is available.

mod store;

#[doc(inline)]
pub use store::InMemoryStore;
