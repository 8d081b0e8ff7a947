//! Builders shared by unit tests.

use crate::policy::{CheckPolicy, EffectiveConfig, FailOn};
use std::collections::BTreeMap;
use survey_logic_types::{
    Action, AnswerValue, Condition, Dependency, Question, Section, Severity, Survey,
    VisibilityCondition,
};

pub fn question(id: &str, required: bool, dependencies: Vec<Dependency>) -> Question {
    Question {
        id: id.into(),
        title: format!("Question {id}"),
        kind: None,
        required,
        dependencies,
        visibility_condition: None,
    }
}

pub fn section(id: &str, order: i64, questions: Vec<Question>) -> Section {
    Section {
        id: id.into(),
        title: format!("Section {id}"),
        order,
        dependencies: Vec::new(),
        visibility_condition: None,
        questions,
    }
}

pub fn survey(sections: Vec<Section>) -> Survey {
    Survey {
        id: "survey".to_string(),
        title: "Test survey".to_string(),
        sections,
    }
}

/// `show` when question `target` equals "yes".
pub fn depends_on(target: &str) -> Dependency {
    Dependency::new(
        VisibilityCondition::on_question(target, Condition::Equals, AnswerValue::from("yes")),
        Action::Show,
    )
}

/// Config with exactly one check enabled.
pub fn config_with_check(check_id: &str, severity: Severity) -> EffectiveConfig {
    let mut checks = BTreeMap::new();
    checks.insert(check_id.to_string(), CheckPolicy::enabled(severity));
    EffectiveConfig {
        profile: "test".to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        checks,
    }
}

pub fn config_with_check_allow(
    check_id: &str,
    severity: Severity,
    allow: Vec<&str>,
) -> EffectiveConfig {
    let mut cfg = config_with_check(check_id, severity);
    if let Some(policy) = cfg.checks.get_mut(check_id) {
        policy.allow = allow.into_iter().map(str::to_string).collect();
    }
    cfg
}
