// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types and key rules.
//!
//! This module holds the key tokenizer, the concrete and template key types, the
//! values produced by resolution, and the template validation errors. It has no
//! knowledge of where configuration keys come from.

pub mod binding;
pub mod config_key;
pub mod errors;
pub mod segment;
pub mod template;

// Re-export commonly used types
pub use binding::{Binding, VariableSplit};
pub use config_key::ConfigKey;
pub use errors::{Result, TemplateError};
pub use template::TemplateKey;
