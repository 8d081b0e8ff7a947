use std::collections::BTreeMap;
use survey_logic_domain::policy::{CheckPolicy, EffectiveConfig, FailOn};
use survey_logic_types::{Severity, ids};

pub const PROFILES: &[&str] = &["strict", "warn", "lenient"];

const ALL_CHECKS: &[&str] = &[
    ids::CHECK_SURVEY_UNIQUE_IDS,
    ids::CHECK_DEPS_NO_SELF_REFERENCE,
    ids::CHECK_DEPS_NO_CYCLES,
    ids::CHECK_DEPS_TARGET_EXISTS,
    ids::CHECK_DEPS_SKIP_TARGET,
    ids::CHECK_DEPS_WELL_FORMED,
];

/// Checks that guard the dependency graph itself; `lenient` keeps them at error.
const INTEGRITY_CHECKS: &[&str] = &[
    ids::CHECK_SURVEY_UNIQUE_IDS,
    ids::CHECK_DEPS_NO_SELF_REFERENCE,
    ids::CHECK_DEPS_NO_CYCLES,
];

/// Built-in profile by name. Unknown names get `strict`.
pub fn preset(profile: &str) -> EffectiveConfig {
    match profile {
        "warn" => warn_profile(),
        "lenient" => lenient_profile(),
        _ => strict_profile(),
    }
}

fn strict_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "strict".to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        checks: default_checks(|_| Severity::Error),
    }
}

fn warn_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "warn".to_string(),
        fail_on: FailOn::Warning,
        max_findings: 200,
        checks: default_checks(|_| Severity::Warning),
    }
}

fn lenient_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "lenient".to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        checks: default_checks(|id| {
            if INTEGRITY_CHECKS.contains(&id) {
                Severity::Error
            } else {
                Severity::Warning
            }
        }),
    }
}

fn default_checks(severity_for: impl Fn(&str) -> Severity) -> BTreeMap<String, CheckPolicy> {
    ALL_CHECKS
        .iter()
        .map(|id| (id.to_string(), CheckPolicy::enabled(severity_for(id))))
        .collect()
}
