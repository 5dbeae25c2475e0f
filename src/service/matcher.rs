// SPDX-License-Identifier: MIT OR Apache-2.0

//! Matching a single concrete key against a template, and rewriting templates.
//!
//! Concrete keys are always tokenized with the `\.` escape honoured. Template
//! keys are split on every dot, except in [`split_variable`], which tokenizes the
//! template the same way as a concrete key.

use crate::domain::segment::{self, is_variable};
use crate::domain::{Binding, VariableSplit};

/// Returns `true` if a concrete segment is accepted by a template segment.
pub(crate) fn segment_matches(concrete: &str, template: &str) -> bool {
    concrete == template || is_variable(template)
}

/// Returns `true` if the concrete key matches the template.
///
/// Both keys must have the same number of segments. Each template segment must
/// equal the concrete segment in the same position unless it is a variable, which
/// accepts any value.
///
/// # Examples
///
/// ```
/// use cfgvars::service::matches;
///
/// assert!(matches("alpha.bravo.anything.delta", "alpha.bravo.$charlie.delta"));
/// assert!(matches("alpha.bravo.any\\.thing.delta", "alpha.bravo.$charlie.delta"));
/// assert!(!matches("alpha.bravo.anything.delta", "alpha.bravo.charlie.delta"));
/// assert!(!matches("alpha.bravo", "alpha.bravo.$charlie"));
/// ```
pub fn matches(concrete: &str, template: &str) -> bool {
    let concrete = segment::tokenize(concrete);
    let template = segment::split_plain(template);

    concrete.len() == template.len()
        && concrete
            .iter()
            .zip(&template)
            .all(|(c, t)| segment_matches(c, t))
}

/// Splits a template into the part before its variable, the variable, and the
/// part after it.
///
/// Segments are scanned right to left and the first variable found wins, so with
/// several variables the *rightmost* one is returned and any others stay in the
/// prefix. With no variable, `variable` is empty and the whole key is the suffix.
///
/// # Examples
///
/// ```
/// use cfgvars::service::split_variable;
///
/// let split = split_variable("a.$b.c.d");
/// assert_eq!(split.prefix, "a");
/// assert_eq!(split.variable, "$b");
/// assert_eq!(split.suffix, "c.d");
///
/// let split = split_variable("$x.y.$z.w");
/// assert_eq!(split.prefix, "$x.y");
/// assert_eq!(split.variable, "$z");
/// ```
pub fn split_variable(template: &str) -> VariableSplit {
    let mut prefix = Vec::new();
    let mut variable = None;
    let mut suffix = Vec::new();

    for seg in segment::tokenize(template).into_iter().rev() {
        match variable {
            Some(_) => prefix.push(seg),
            None if is_variable(&seg) => variable = Some(seg),
            None => suffix.push(seg),
        }
    }

    prefix.reverse();
    suffix.reverse();

    VariableSplit {
        prefix: segment::join_plain(prefix),
        variable: variable.unwrap_or_default(),
        suffix: segment::join_plain(suffix),
    }
}

/// Replaces every variable segment of a template with `value`.
///
/// All variables receive the same value.
///
/// # Examples
///
/// ```
/// use cfgvars::service::substitute;
///
/// assert_eq!(
///     substitute("multi_backend.$name.storage_backend", "backend9"),
///     "multi_backend.backend9.storage_backend"
/// );
/// ```
pub fn substitute(template: &str, value: &str) -> String {
    segment::join_plain(
        segment::split_plain(template)
            .into_iter()
            .map(|seg| if is_variable(seg) { value } else { seg }),
    )
}

/// Captures the value of every variable segment for one concrete key.
///
/// Returns `None` if the key does not match the template. Otherwise returns one
/// binding per variable segment, left to right, including variables whose
/// concrete segment happens to be identical to the template text.
///
/// # Examples
///
/// ```
/// use cfgvars::domain::Binding;
/// use cfgvars::service::capture;
///
/// let bindings = capture("zone.eu.host.db1", "zone.$region.host.$name").unwrap();
/// assert_eq!(
///     bindings,
///     vec![Binding::new("$region", "eu"), Binding::new("$name", "db1")]
/// );
/// assert!(capture("zone.eu.port.db1", "zone.$region.host.$name").is_none());
/// ```
pub fn capture(concrete: &str, template: &str) -> Option<Vec<Binding>> {
    let concrete = segment::tokenize(concrete);
    let template = segment::split_plain(template);
    if concrete.len() != template.len() {
        return None;
    }

    let mut bindings = Vec::new();
    for (c, t) in concrete.into_iter().zip(template) {
        if is_variable(t) {
            bindings.push(Binding::new(t, c));
        } else if c != t {
            return None;
        }
    }
    Some(bindings)
}

/// Finds the first template a concrete key matches, with its captures.
///
/// # Examples
///
/// ```
/// use cfgvars::service::find_template;
///
/// let templates = ["listener.$name.ip", "listener.$name.port"];
/// let (template, bindings) = find_template("listener.http.port", &templates).unwrap();
/// assert_eq!(*template, "listener.$name.port");
/// assert_eq!(bindings[0].value(), "http");
/// ```
pub fn find_template<'t, T: AsRef<str>>(
    concrete: &str,
    templates: &'t [T],
) -> Option<(&'t T, Vec<Binding>)> {
    templates
        .iter()
        .find_map(|t| capture(concrete, t.as_ref()).map(|bindings| (t, bindings)))
}
