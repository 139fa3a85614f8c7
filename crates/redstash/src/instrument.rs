// Copyright (c) Redstash Project Authors.
// Licensed under the MIT License.

//! Wrappers that add call tracking to operations.
//!
//! This module provides two orthogonal decorators, each implementing
//! [`Operation`] around an inner operation so they compose in any nesting
//! order:
//! - [`CountCalls`] keeps an invocation counter in the backend
//! - [`RecordHistory`] records the inputs and raw outputs of every call
//!
//! All bookkeeping lives in the backend under the operation's
//! fully-qualified name: the counter at the bare name, the history lists at
//! [`inputs_key`] and [`outputs_key`]. The key naming is part of the
//! observable contract; external tools may read these keys directly.

use std::fmt;

use redstash_store::{KeyValueStore, Result};

use crate::operation::{OpName, Operation};

/// Returns the backend key holding the recorded inputs for `name`.
#[must_use]
pub fn inputs_key(name: OpName) -> String {
    format!("{name}:inputs")
}

/// Returns the backend key holding the recorded outputs for `name`.
#[must_use]
pub fn outputs_key(name: OpName) -> String {
    format!("{name}:outputs")
}

/// Counts invocations of the wrapped operation.
///
/// Before invoking the inner operation, the counter stored under the
/// operation's name is atomically incremented, so the count reflects every
/// invocation, including ones whose result is never inspected and ones
/// where the inner operation fails.
#[derive(Debug)]
pub struct CountCalls<S, O> {
    name: OpName,
    store: S,
    inner: O,
}

impl<S, O> CountCalls<S, O> {
    /// Wraps `inner`, counting its invocations under `name` in `store`.
    pub fn new(name: OpName, store: S, inner: O) -> Self {
        Self { name, store, inner }
    }

    /// Returns the operation name this wrapper counts under.
    #[must_use]
    pub fn name(&self) -> OpName {
        self.name
    }

    /// Returns a reference to the wrapped operation.
    #[must_use]
    pub fn inner(&self) -> &O {
        &self.inner
    }
}

impl<S, O, In> Operation<In> for CountCalls<S, O>
where
    S: KeyValueStore,
    O: Operation<In>,
    In: Send,
{
    type Out = O::Out;

    async fn invoke(&self, input: In) -> Result<Self::Out> {
        self.store.increment(self.name).await?;
        self.inner.invoke(input).await
    }
}

/// Records the input and output of every invocation of the wrapped
/// operation.
///
/// Before invoking the inner operation, the input's stored representation
/// is appended to the inputs list; after a successful invocation, the raw
/// output's representation is appended to the outputs list. Both lists grow
/// without bound and stay the same length as long as every call succeeds;
/// a failing inner operation leaves an input entry with no matching output.
#[derive(Debug)]
pub struct RecordHistory<S, O> {
    name: OpName,
    store: S,
    inner: O,
}

impl<S, O> RecordHistory<S, O> {
    /// Wraps `inner`, recording its calls under `name` in `store`.
    pub fn new(name: OpName, store: S, inner: O) -> Self {
        Self { name, store, inner }
    }

    /// Returns the operation name this wrapper records under.
    #[must_use]
    pub fn name(&self) -> OpName {
        self.name
    }

    /// Returns a reference to the wrapped operation.
    #[must_use]
    pub fn inner(&self) -> &O {
        &self.inner
    }
}

impl<S, O, In> Operation<In> for RecordHistory<S, O>
where
    S: KeyValueStore,
    O: Operation<In>,
    In: fmt::Display + Send,
    O::Out: fmt::Display + Send,
{
    type Out = O::Out;

    async fn invoke(&self, input: In) -> Result<Self::Out> {
        let repr = input.to_string().into_bytes();
        self.store.push(&inputs_key(self.name), repr).await?;

        let output = self.inner.invoke(input).await?;

        let repr = output.to_string().into_bytes();
        self.store.push(&outputs_key(self.name), repr).await?;
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_naming_follows_the_contract() {
        assert_eq!(inputs_key("Cache::store"), "Cache::store:inputs");
        assert_eq!(outputs_key("Cache::store"), "Cache::store:outputs");
    }
}
