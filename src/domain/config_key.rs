// SPDX-License-Identifier: MIT OR Apache-2.0

//! Concrete configuration key newtype.
//!
//! This module provides the `ConfigKey` type, a newtype wrapper around `String`
//! for keys as they appear in a loaded configuration. The key text is kept exactly
//! as written, escapes included; [`ConfigKey::segments`] decodes it.

use crate::domain::segment;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A type-safe wrapper for concrete configuration keys.
///
/// # Examples
///
/// ```
/// use cfgvars::domain::config_key::ConfigKey;
///
/// let key = ConfigKey::from("multi_backend.backend\\.3.storage_backend");
/// assert_eq!(key.segments(), vec!["multi_backend", "backend.3", "storage_backend"]);
/// assert!(key.matches("multi_backend.$name.storage_backend"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Creates a new `ConfigKey` from a `String`.
    pub fn new(key: String) -> Self {
        ConfigKey(key)
    }

    /// Builds a key from decoded segments, escaping any dots inside them.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfgvars::domain::config_key::ConfigKey;
    ///
    /// let key = ConfigKey::from_segments(["listener", "10.0.0.1", "port"]);
    /// assert_eq!(key.as_str(), "listener.10\\.0\\.0\\.1.port");
    /// ```
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ConfigKey(segment::join(segments))
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `ConfigKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns the decoded segments of the key.
    pub fn segments(&self) -> Vec<String> {
        segment::tokenize(&self.0)
    }

    /// Returns the number of segments in the key.
    pub fn arity(&self) -> usize {
        self.segments().len()
    }

    /// Returns `true` if this key matches the given template.
    ///
    /// See [`crate::service::matches`].
    pub fn matches(&self, template: &str) -> bool {
        crate::service::matches(&self.0, template)
    }
}

impl From<String> for ConfigKey {
    fn from(s: String) -> Self {
        ConfigKey(s)
    }
}

impl From<&str> for ConfigKey {
    fn from(s: &str) -> Self {
        ConfigKey(s.to_string())
    }
}

impl From<ConfigKey> for String {
    fn from(key: ConfigKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Hash for ConfigKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}
