// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for template validation.
//!
//! Matching, substitution and binding extraction never fail. Errors only arise
//! when a caller asks for a strictly validated [`TemplateKey`](crate::domain::TemplateKey).

use thiserror::Error;

/// The reasons a string is rejected as a template key.
///
/// Marked `#[non_exhaustive]` so that further checks can be added without breaking
/// callers.
///
/// # Examples
///
/// ```
/// use cfgvars::domain::{TemplateError, TemplateKey};
///
/// let err = TemplateKey::parse("multi_backend.storage_backend").unwrap_err();
/// assert!(matches!(err, TemplateError::MissingVariable { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TemplateError {
    /// The template string is empty.
    #[error("Template key is empty")]
    EmptyKey,

    /// A segment between two dots (or at either end) is empty.
    #[error("Template key '{key}' has an empty segment at position {position}")]
    EmptySegment {
        /// The rejected template
        key: String,
        /// Zero-based index of the empty segment
        position: usize,
    },

    /// A segment consists of the sigil alone.
    #[error("Template key '{key}' has a variable without a name at position {position}")]
    BareSigil {
        /// The rejected template
        key: String,
        /// Zero-based index of the bare sigil segment
        position: usize,
    },

    /// No segment is a variable placeholder.
    #[error("Template key '{key}' has no variable segment")]
    MissingVariable {
        /// The rejected template
        key: String,
    },

    /// More than one segment is a variable placeholder.
    #[error("Template key '{key}' has more than one variable segment: {}", variables.join(", "))]
    MultipleVariables {
        /// The rejected template
        key: String,
        /// Every variable segment found, left to right
        variables: Vec<String>,
    },
}

/// A specialized Result type for template validation.
pub type Result<T> = std::result::Result<T, TemplateError>;
