// Copyright (c) Redstash Project Authors.

use std::fmt;

use uuid::Uuid;

/// A generated identifier for a stored value.
///
/// Keys are random, unique, and never derived from the content they name.
/// The facade generates a fresh key for every store operation; keys are
/// never reused.
///
/// # Examples
///
/// ```
/// use redstash_store::Key;
///
/// let a = Key::generate();
/// let b = Key::generate();
/// assert_ne!(a, b);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Key(String);

impl Key {
    /// Generates a new universally-unique key.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the key and returns the underlying string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Key {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Key {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for Key {
    fn from(raw: &str) -> Self {
        Self(raw.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_keys_are_unique() {
        let keys: Vec<Key> = (0..64).map(|_| Key::generate()).collect();
        for (i, a) in keys.iter().enumerate() {
            for b in &keys[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn display_matches_as_str() {
        let key = Key::generate();
        assert_eq!(key.to_string(), key.as_str());
    }

    #[test]
    fn key_from_string_round_trips() {
        let key = Key::from("manual-key");
        assert_eq!(key.into_string(), "manual-key");
    }
}
