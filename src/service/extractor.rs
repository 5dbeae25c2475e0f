// SPDX-License-Identifier: MIT OR Apache-2.0

//! Extracting variable bindings across a whole configuration.

use crate::domain::segment::{self, is_variable};
use crate::domain::Binding;
use crate::ports::KeySource;
use crate::service::matcher::segment_matches;
use std::collections::BTreeSet;

/// Collects the binding of a template's variable from every matching key.
///
/// Keys whose segment count differs from the template's, or that do not match it,
/// contribute nothing. For a matching key, the first position where the template
/// has a variable and the concrete segment differs from it becomes the binding;
/// later variables in the same template are not reported. A matching key whose
/// variable segments all equal the template text contributes nothing.
///
/// Bindings are returned in the reverse of the order `config` yields its keys, and
/// duplicates are kept.
///
/// # Examples
///
/// ```
/// use cfgvars::domain::Binding;
/// use cfgvars::service::extract_bindings;
///
/// let config = vec![
///     ("multi_backend.backend1.storage_backend", "bitcask"),
///     ("multi_backend.backend1.data_root", "/var/lib/b1"),
///     ("multi_backend.backend\\.2.storage_backend", "leveldb"),
/// ];
///
/// let bindings = extract_bindings("multi_backend.$name.storage_backend", &config);
/// assert_eq!(
///     bindings,
///     vec![
///         Binding::new("$name", "backend.2"),
///         Binding::new("$name", "backend1"),
///     ]
/// );
/// ```
pub fn extract_bindings<S: KeySource + ?Sized>(template: &str, config: &S) -> Vec<Binding> {
    let template_segments = segment::split_plain(template);
    let mut bindings = Vec::new();
    let mut skipped = 0usize;

    for key in config.concrete_keys() {
        match first_binding(&template_segments, key) {
            Some(binding) => bindings.push(binding),
            None => skipped += 1,
        }
    }

    bindings.reverse();

    tracing::debug!(
        "Extracted {} bindings for template '{}' ({} keys skipped)",
        bindings.len(),
        template,
        skipped
    );

    bindings
}

/// Returns the distinct values bound to a template's variable across a config.
///
/// # Examples
///
/// ```
/// use cfgvars::service::bound_values;
///
/// let config = [
///     ("listener.http.port", 80),
///     ("listener.https.port", 443),
///     ("listener.http.port", 8080),
/// ];
/// let values: Vec<_> = bound_values("listener.$name.port", &config).into_iter().collect();
/// assert_eq!(values, vec!["http", "https"]);
/// ```
pub fn bound_values<S: KeySource + ?Sized>(template: &str, config: &S) -> BTreeSet<String> {
    extract_bindings(template, config)
        .into_iter()
        .map(Binding::into_value)
        .collect()
}

fn first_binding(template: &[&str], key: &str) -> Option<Binding> {
    let concrete = segment::tokenize(key);
    if concrete.len() != template.len() {
        tracing::trace!(
            "Skipping key '{}': {} segments, template has {}",
            key,
            concrete.len(),
            template.len()
        );
        return None;
    }

    let pairs: Vec<(&str, &str)> = template
        .iter()
        .copied()
        .zip(concrete.iter().map(String::as_str))
        .collect();

    if !pairs.iter().all(|&(t, c)| segment_matches(c, t)) {
        tracing::trace!("Skipping key '{}': literal segment mismatch", key);
        return None;
    }

    pairs
        .into_iter()
        .find(|&(t, c)| t != c && is_variable(t))
        .map(|(t, c)| Binding::new(t, c))
}
