// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the template resolution operations.
//!
//! Every operation is a pure function of its arguments. None of them fail: keys
//! that do not line up with a template simply do not match.

pub mod extractor;
pub mod matcher;

// Re-export commonly used functions
pub use extractor::{bound_values, extract_bindings};
pub use matcher::{capture, find_template, matches, split_variable, substitute};
