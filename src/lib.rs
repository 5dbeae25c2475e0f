// SPDX-License-Identifier: MIT OR Apache-2.0

//! Templated configuration key matching.
//!
//! Configuration schemas often describe a family of keys with a placeholder
//! segment, for example `multi_backend.$name.storage_backend`. This crate matches
//! the concrete keys of a loaded configuration against such templates and reports
//! which values the placeholder took.
//!
//! # Key Format
//!
//! - Keys are dot-delimited paths: `database.primary.host`.
//! - A segment starting with `$` is a variable in a template key.
//! - A concrete key may contain a literal dot inside a segment by escaping it:
//!   `listener.10\.0\.0\.1.port` has three segments.
//! - Template keys are never escape-decoded when matching.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: key rules and types (`tokenize`, `ConfigKey`, `TemplateKey`,
//!   `Binding`, errors)
//! - **Ports**: the `KeySource` trait through which a configuration is read
//! - **Service**: matching, substitution and binding extraction
//!
//! # Feature Flags
//!
//! - `serde`: derive `Serialize`/`Deserialize` for the public types (default)
//!
//! # Quick Start
//!
//! ```rust
//! use cfgvars::prelude::*;
//!
//! let config = vec![
//!     ("multi_backend.backend1.storage_backend", "bitcask"),
//!     ("multi_backend.backend\\.2.storage_backend", "leveldb"),
//!     ("ring_size", "64"),
//! ];
//!
//! let template = "multi_backend.$name.storage_backend";
//! assert!(matches("multi_backend.backend1.storage_backend", template));
//!
//! let names: Vec<_> = bound_values(template, &config).into_iter().collect();
//! assert_eq!(names, vec!["backend.2", "backend1"]);
//!
//! assert_eq!(
//!     substitute(template, "backend9"),
//!     "multi_backend.backend9.storage_backend"
//! );
//! ```
//!
//! # Thread Safety
//!
//! Nothing in this crate holds state between calls. All operations borrow their
//! inputs immutably and may run concurrently against the same configuration.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and functions.
///
/// This module re-exports the most commonly used items for convenient access.
pub mod prelude {
    pub use crate::domain::segment::{tokenize, SIGIL};
    pub use crate::domain::{Binding, ConfigKey, Result, TemplateError, TemplateKey, VariableSplit};
    pub use crate::ports::KeySource;
    pub use crate::service::{
        bound_values, capture, extract_bindings, find_template, matches, split_variable,
        substitute,
    };
}
