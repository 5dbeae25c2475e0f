// SPDX-License-Identifier: MIT OR Apache-2.0

//! Key source trait definition.
//!
//! This module defines the `KeySource` trait, the port through which the binding
//! extractor reads a loaded configuration. A configuration is an ordered
//! collection of concrete key/value pairs; the extractor only ever looks at the
//! keys, so values may be of any type.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// A trait for anything that can enumerate concrete configuration keys.
///
/// Implementations are provided for slices and vectors of `(key, value)` pairs,
/// `BTreeMap` and `HashMap`, for any key type that is `AsRef<str>`. Keys are
/// yielded as written in the configuration, escapes included.
///
/// # Ordering
///
/// The binding extractor reports bindings in the reverse of the order keys are
/// yielded here. Slices, vectors and `BTreeMap` have a stable order; `HashMap`
/// does not.
///
/// # Examples
///
/// ```rust
/// use cfgvars::ports::KeySource;
///
/// struct Flat(Vec<String>);
///
/// impl KeySource for Flat {
///     fn concrete_keys(&self) -> Box<dyn Iterator<Item = &str> + '_> {
///         Box::new(self.0.iter().map(String::as_str))
///     }
/// }
///
/// let source = Flat(vec!["a.b".to_string(), "a.c".to_string()]);
/// assert_eq!(source.concrete_keys().collect::<Vec<_>>(), vec!["a.b", "a.c"]);
/// ```
pub trait KeySource {
    /// Returns the concrete keys in iteration order.
    fn concrete_keys(&self) -> Box<dyn Iterator<Item = &str> + '_>;
}

impl<K: AsRef<str>, V> KeySource for [(K, V)] {
    fn concrete_keys(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.iter().map(|(k, _)| k.as_ref()))
    }
}

impl<K: AsRef<str>, V> KeySource for Vec<(K, V)> {
    fn concrete_keys(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        self.as_slice().concrete_keys()
    }
}

impl<K: AsRef<str>, V, const N: usize> KeySource for [(K, V); N] {
    fn concrete_keys(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        self.as_slice().concrete_keys()
    }
}

impl<K: AsRef<str>, V> KeySource for BTreeMap<K, V> {
    fn concrete_keys(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.keys().map(|k| k.as_ref()))
    }
}

impl<K: AsRef<str>, V, H: BuildHasher> KeySource for HashMap<K, V, H> {
    fn concrete_keys(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.keys().map(|k| k.as_ref()))
    }
}

impl<T: KeySource + ?Sized> KeySource for &T {
    fn concrete_keys(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        (**self).concrete_keys()
    }
}
