// SPDX-License-Identifier: MIT OR Apache-2.0

//! Value types produced when resolving template keys.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// A variable segment together with the concrete segment it matched.
///
/// # Examples
///
/// ```
/// use cfgvars::domain::Binding;
///
/// let binding = Binding::new("$name", "backend1");
/// assert_eq!(binding.variable(), "$name");
/// assert_eq!(binding.value(), "backend1");
/// assert_eq!(binding.to_string(), "$name=backend1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binding {
    variable: String,
    value: String,
}

impl Binding {
    /// Creates a binding from a variable segment (sigil included) and its value.
    pub fn new(variable: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            value: value.into(),
        }
    }

    /// The variable segment as written in the template, sigil included.
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// The variable name without the sigil.
    pub fn name(&self) -> &str {
        self.variable
            .strip_prefix(crate::domain::segment::SIGIL)
            .unwrap_or(&self.variable)
    }

    /// The concrete segment the variable matched.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Consumes the binding and returns the bound value.
    pub fn into_value(self) -> String {
        self.value
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.variable, self.value)
    }
}

/// A template key decomposed around its rightmost variable segment.
///
/// Produced by [`split_variable`](crate::service::split_variable). `prefix` and
/// `suffix` are dot-joined; `variable` is empty when the template has no
/// variable segment, in which case every segment is in `suffix`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VariableSplit {
    /// Segments left of the variable.
    pub prefix: String,
    /// The variable segment, sigil included.
    pub variable: String,
    /// Segments right of the variable.
    pub suffix: String,
}

impl VariableSplit {
    /// Returns `true` if the split found a variable segment.
    pub fn has_variable(&self) -> bool {
        !self.variable.is_empty()
    }
}
