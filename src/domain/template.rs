// SPDX-License-Identifier: MIT OR Apache-2.0

//! Validated template keys.
//!
//! The free functions in [`crate::service`] accept any string as a template and
//! give a well-defined (if surprising) answer for templates with several
//! variables. `TemplateKey` is for callers that want malformed templates rejected
//! up front: it holds exactly one variable segment and no empty segments.

use crate::domain::binding::{Binding, VariableSplit};
use crate::domain::config_key::ConfigKey;
use crate::domain::errors::{Result, TemplateError};
use crate::domain::segment::{self, DELIMITER, SIGIL};
use crate::ports::KeySource;
use crate::service;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A template key with exactly one variable segment.
///
/// # Examples
///
/// ```
/// use cfgvars::domain::TemplateKey;
///
/// let template = TemplateKey::parse("multi_backend.$name.storage_backend").unwrap();
/// assert_eq!(template.variable(), "$name");
/// assert_eq!(template.name(), "name");
///
/// let key = template.substitute("backend9");
/// assert_eq!(key.as_str(), "multi_backend.backend9.storage_backend");
/// assert!(template.matches(key.as_str()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct TemplateKey {
    key: String,
    position: usize,
}

impl TemplateKey {
    /// Parses and validates a template key.
    ///
    /// # Errors
    ///
    /// Returns a [`TemplateError`] if the key is empty, has an empty segment, has a
    /// segment that is only the sigil, or does not have exactly one variable.
    pub fn parse(key: &str) -> Result<Self> {
        Self::validate(key)
            .inspect_err(|e| tracing::debug!("Rejected template key '{}': {}", key, e))
    }

    fn validate(key: &str) -> Result<Self> {
        if key.is_empty() {
            return Err(TemplateError::EmptyKey);
        }

        let mut variables = Vec::new();
        for (position, seg) in segment::split_plain(key).into_iter().enumerate() {
            if seg.is_empty() {
                return Err(TemplateError::EmptySegment {
                    key: key.to_string(),
                    position,
                });
            }
            if seg.strip_prefix(SIGIL) == Some("") {
                return Err(TemplateError::BareSigil {
                    key: key.to_string(),
                    position,
                });
            }
            if segment::is_variable(seg) {
                variables.push((position, seg));
            }
        }

        match variables.as_slice() {
            [] => Err(TemplateError::MissingVariable {
                key: key.to_string(),
            }),
            [(position, _)] => Ok(TemplateKey {
                key: key.to_string(),
                position: *position,
            }),
            _ => Err(TemplateError::MultipleVariables {
                key: key.to_string(),
                variables: variables.iter().map(|(_, v)| v.to_string()).collect(),
            }),
        }
    }

    /// Returns the template as written.
    pub fn as_str(&self) -> &str {
        &self.key
    }

    /// Returns the variable segment, sigil included.
    pub fn variable(&self) -> &str {
        self.key.split(DELIMITER).nth(self.position).unwrap_or("")
    }

    /// Returns the variable name without the sigil.
    pub fn name(&self) -> &str {
        &self.variable()[SIGIL.len_utf8()..]
    }

    /// Returns the zero-based index of the variable segment.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the number of segments in the template.
    pub fn arity(&self) -> usize {
        self.key.split(DELIMITER).count()
    }

    /// Splits the template around its variable.
    pub fn split(&self) -> VariableSplit {
        service::split_variable(&self.key)
    }

    /// Returns `true` if the concrete key matches this template.
    pub fn matches(&self, concrete: &str) -> bool {
        service::matches(concrete, &self.key)
    }

    /// Replaces the variable with `value`, producing a concrete key.
    pub fn substitute(&self, value: &str) -> ConfigKey {
        ConfigKey::from(service::substitute(&self.key, value))
    }

    /// Returns the binding for a single concrete key, if it matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfgvars::domain::TemplateKey;
    ///
    /// let template = TemplateKey::parse("listener.$name.port").unwrap();
    /// let binding = template.capture("listener.internal.port").unwrap();
    /// assert_eq!(binding.value(), "internal");
    /// assert!(template.capture("listener.internal.ip").is_none());
    /// ```
    pub fn capture(&self, concrete: &str) -> Option<Binding> {
        service::capture(concrete, &self.key).and_then(|bindings| bindings.into_iter().next())
    }

    /// Extracts bindings from every matching key of a config.
    ///
    /// See [`service::extract_bindings`] for ordering.
    pub fn bindings<S: KeySource + ?Sized>(&self, config: &S) -> Vec<Binding> {
        service::extract_bindings(&self.key, config)
    }

    /// Returns the distinct values bound to the variable across a config.
    pub fn bound_values<S: KeySource + ?Sized>(&self, config: &S) -> BTreeSet<String> {
        service::bound_values(&self.key, config)
    }
}

impl FromStr for TemplateKey {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self> {
        TemplateKey::parse(s)
    }
}

impl TryFrom<&str> for TemplateKey {
    type Error = TemplateError;

    fn try_from(s: &str) -> Result<Self> {
        TemplateKey::parse(s)
    }
}

impl TryFrom<String> for TemplateKey {
    type Error = TemplateError;

    fn try_from(s: String) -> Result<Self> {
        TemplateKey::parse(&s)
    }
}

impl From<TemplateKey> for String {
    fn from(template: TemplateKey) -> Self {
        template.key
    }
}

impl AsRef<str> for TemplateKey {
    fn as_ref(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)
    }
}
