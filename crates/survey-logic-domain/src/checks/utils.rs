use globset::{Glob, GlobSet, GlobSetBuilder};
use serde_json::Value;
use survey_logic_types::Dependency;

/// Compile allowlist entries (node-id globs, case-sensitive).
///
/// Patterns are validated by the settings layer; anything that still fails to compile is skipped.
pub fn build_allowlist(allow: &[String]) -> Option<GlobSet> {
    if allow.is_empty() {
        return None;
    }

    let mut builder = GlobSetBuilder::new();
    for pattern in allow {
        if let Ok(glob) = Glob::new(pattern) {
            builder.add(glob);
        }
    }
    builder.build().ok()
}

pub fn is_allowed(allow: Option<&GlobSet>, value: &str) -> bool {
    allow.map(|set| set.is_match(value)).unwrap_or(false)
}

pub fn rule_to_json(rule: &Dependency) -> Value {
    serde_json::to_value(rule).unwrap_or(Value::Null)
}
