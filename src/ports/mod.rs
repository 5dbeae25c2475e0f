// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions for external collaborators.
//!
//! The resolver does not load configuration itself. Callers hand it whatever holds
//! their parsed keys through the [`KeySource`] trait.

pub mod source;

pub use source::KeySource;
