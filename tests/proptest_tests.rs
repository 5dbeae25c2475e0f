// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These tests check the tokenizer and matcher laws over arbitrary keys.

use cfgvars::domain::segment::{join, split_plain, tokenize};
use cfgvars::domain::{ConfigKey, TemplateKey};
use cfgvars::service::{bound_values, capture, matches, split_variable, substitute};
use proptest::prelude::*;

// Segments without dots, backslashes or sigils.
fn plain_segment() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{0,8}"
}

fn plain_segments() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(plain_segment(), 1..6)
}

// Keys without escapes round-trip through tokenize and a plain join
proptest! {
    #[test]
    fn test_tokenize_roundtrip_without_escapes(key in "[a-z0-9_.]{0,24}") {
        prop_assert_eq!(tokenize(&key).join("."), key);
    }
}

// Tokenizing a rejoined key gives the same segments back
proptest! {
    #[test]
    fn test_tokenize_idempotent(key in "[a-z0-9_.]{0,24}") {
        let first = tokenize(&key);
        let second = tokenize(&first.join("."));
        prop_assert_eq!(first, second);
    }
}

// Without escapes the tokenizer and the plain split agree
proptest! {
    #[test]
    fn test_tokenize_agrees_with_plain_split(key in "[a-z$_.]{0,24}") {
        let plain: Vec<String> = split_plain(&key).into_iter().map(String::from).collect();
        prop_assert_eq!(tokenize(&key), plain);
    }
}

// The segment count is one more than the number of unescaped dots
proptest! {
    #[test]
    fn test_tokenize_segment_count(segments in prop::collection::vec("[a-z.]{0,6}", 1..6)) {
        let key = join(&segments);
        prop_assert_eq!(tokenize(&key).len(), segments.len());
    }
}

// Escape-aware join is inverted by tokenize for backslash-free segments
proptest! {
    #[test]
    fn test_join_inverts_tokenize(segments in prop::collection::vec("[a-z0-9.$_]{0,6}", 1..6)) {
        prop_assert_eq!(tokenize(&join(&segments)), segments.clone());
        prop_assert_eq!(ConfigKey::from_segments(&segments).segments(), segments);
    }
}

// Tokenizing never panics on arbitrary input
proptest! {
    #[test]
    fn test_tokenize_total(key in "\\PC*") {
        let segments = tokenize(&key);
        prop_assert!(!segments.is_empty());
    }
}

// A key always matches itself when it has no escapes
proptest! {
    #[test]
    fn test_matches_reflexive(segments in plain_segments()) {
        let key = segments.join(".");
        prop_assert!(matches(&key, &key));
    }
}

// Keys of a different arity never match
proptest! {
    #[test]
    fn test_matches_arity_gate(
        concrete in plain_segments(),
        template in prop::collection::vec("\\$?[a-z]{1,4}", 1..6)
    ) {
        prop_assume!(concrete.len() != template.len());
        prop_assert!(!matches(&concrete.join("."), &template.join(".")));
    }
}

// An all-variable template matches any key of the same arity
proptest! {
    #[test]
    fn test_all_variable_template_matches(segments in plain_segments()) {
        let template = vec!["$v"; segments.len()].join(".");
        prop_assert!(matches(&segments.join("."), &template));
    }
}

// Substituting a value into a template yields a matching key that binds the value
proptest! {
    #[test]
    fn test_substitute_then_match(
        before in prop::collection::vec("[a-z]{1,6}", 0..3),
        after in prop::collection::vec("[a-z]{1,6}", 0..3),
        name in "[a-z]{1,6}",
        value in "[a-zA-Z0-9_-]{1,8}"
    ) {
        let mut parts = before.clone();
        parts.push(format!("${}", name));
        parts.extend(after.iter().cloned());
        let template = parts.join(".");

        let key = substitute(&template, &value);
        prop_assert!(matches(&key, &template));

        let bindings = capture(&key, &template).unwrap();
        prop_assert_eq!(bindings.len(), 1);
        prop_assert_eq!(bindings[0].value(), value.as_str());

        let values: Vec<String> = bound_values(&template, &[(key.as_str(), ())]).into_iter().collect();
        prop_assert_eq!(values, vec![value]);

        let split = split_variable(&template);
        prop_assert_eq!(split.prefix, before.join("."));
        prop_assert_eq!(split.suffix, after.join("."));
        prop_assert_eq!(split.variable, format!("${}", name));
    }
}

// Escaped values bind to their decoded form
proptest! {
    #[test]
    fn test_escaped_value_binds_decoded(parts in prop::collection::vec("[a-z0-9]{1,4}", 1..4)) {
        let decoded = parts.join(".");
        let key = ConfigKey::from_segments(["root", decoded.as_str(), "leaf"]);
        let values: Vec<String> = bound_values("root.$x.leaf", &[(key, ())]).into_iter().collect();
        prop_assert_eq!(values, vec![decoded]);
    }
}

// Templates with exactly one variable always validate
proptest! {
    #[test]
    fn test_template_key_accepts_single_variable(
        before in prop::collection::vec("[a-z]{1,6}", 0..3),
        name in "[a-z]{1,6}"
    ) {
        let mut parts = before.clone();
        parts.push(format!("${}", name));
        let template = TemplateKey::parse(&parts.join(".")).unwrap();
        prop_assert_eq!(template.name(), name.as_str());
        prop_assert_eq!(template.position(), before.len());
    }
}
