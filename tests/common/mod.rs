// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared helpers for integration tests.

use cfgvars::domain::{segment, ConfigKey};
use std::sync::Once;

static TRACING: Once = Once::new();

/// Installs a test-writer tracing subscriber once per test binary.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    });
}

/// Parses YAML into an ordered list of concrete keys and values.
///
/// Nested mappings become dotted keys. A dot inside a mapping key is escaped, so
/// `{"backend.3": {...}}` yields keys with a `backend\.3` segment. Document order
/// is preserved.
#[allow(dead_code)]
pub fn config_from_yaml(content: &str) -> Vec<(ConfigKey, String)> {
    let value: serde_yaml::Value = serde_yaml::from_str(content).expect("valid YAML fixture");
    let mut pairs = Vec::new();
    flatten(&value, &mut Vec::new(), &mut pairs);
    pairs
}

fn flatten(value: &serde_yaml::Value, path: &mut Vec<String>, out: &mut Vec<(ConfigKey, String)>) {
    match value {
        serde_yaml::Value::Mapping(map) => {
            for (key, val) in map {
                let segment = match key {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    _ => continue,
                };
                path.push(segment);
                flatten(val, path, out);
                path.pop();
            }
        }
        serde_yaml::Value::Sequence(seq) => {
            for (i, val) in seq.iter().enumerate() {
                path.push(i.to_string());
                flatten(val, path, out);
                path.pop();
            }
        }
        serde_yaml::Value::String(s) => out.push((key_for(path), s.clone())),
        serde_yaml::Value::Number(n) => out.push((key_for(path), n.to_string())),
        serde_yaml::Value::Bool(b) => out.push((key_for(path), b.to_string())),
        serde_yaml::Value::Null => out.push((key_for(path), String::new())),
        serde_yaml::Value::Tagged(tagged) => flatten(&tagged.value, path, out),
    }
}

fn key_for(path: &[String]) -> ConfigKey {
    ConfigKey::new(segment::join(path))
}
