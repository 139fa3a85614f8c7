// Copyright (c) Redstash Project Authors.
// Licensed under the MIT License.

//! Error types for store operations.

/// An error from a store operation.
///
/// This is an opaque error type that can wrap any underlying error from a
/// storage backend. Use [`std::error::Error::source()`] to access the
/// underlying cause if needed.
///
/// # Example
///
/// ```
/// use redstash_store::Error;
///
/// let error = Error::from_message("operation failed");
/// ```
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct Error {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Creates a new error from a bare message, with no underlying cause.
    ///
    /// # Examples
    ///
    /// ```
    /// use redstash_store::Error;
    ///
    /// let error = Error::from_message("operation failed");
    /// ```
    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new error wrapping an underlying cause.
    ///
    /// The cause's display message becomes this error's message, and the
    /// cause itself is retained as the error source.
    pub fn caused_by(cause: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        let source = cause.into();
        Self {
            message: source.to_string(),
            source: Some(source),
        }
    }
}

/// A specialized [`Result`] type for store operations.
pub type Result<T> = std::result::Result<T, Error>;
