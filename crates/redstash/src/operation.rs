// Copyright (c) Redstash Project Authors.
// Licensed under the MIT License.

//! The typed operation seam that instrumentation wrappers attach to.

use redstash_store::Result;

/// The fully-qualified name of an instrumented operation.
///
/// Operation names key all instrumentation data in the backend, so every
/// instance of a facade shares one counter and one history per operation.
pub type OpName = &'static str;

/// An async operation `In -> Result<Out>` against the store.
///
/// This trait is the seam for composition: wrappers like
/// [`CountCalls`](crate::CountCalls) and
/// [`RecordHistory`](crate::RecordHistory) implement `Operation` around an
/// inner `Operation`, so cross-cutting bookkeeping can be layered around
/// any operation in any nesting order.
///
/// # Examples
///
/// ```
/// use redstash::Operation;
/// use redstash_store::Result;
///
/// struct Echo;
///
/// impl Operation<String> for Echo {
///     type Out = String;
///
///     async fn invoke(&self, input: String) -> Result<String> {
///         Ok(input)
///     }
/// }
/// ```
pub trait Operation<In>: Send + Sync {
    /// The output type produced by this operation.
    type Out;

    /// Performs the operation on the given input.
    fn invoke(&self, input: In) -> impl Future<Output = Result<Self::Out>> + Send;
}
