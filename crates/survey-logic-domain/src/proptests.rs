//! Property-based tests for the domain crate.
//!
//! These cover:
//! - evaluation defaults and fail-closed behavior
//! - condition complement and membership semantics
//! - action precedence
//! - findings ordering determinism

use crate::answers::AnswerMap;
use crate::condition::matches;
use crate::engine::validate;
use crate::evaluate::{Visibility, evaluate};
use crate::policy::{CheckPolicy, EffectiveConfig, FailOn};
use crate::test_support::{question, section, survey};
use proptest::prelude::*;
use std::collections::BTreeMap;
use survey_logic_types::{
    Action, AnswerValue, Condition, Dependency, Severity, VisibilityCondition, ids,
};

// ============================================================================
// Strategies
// ============================================================================

fn arb_id() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9-]{0,7}").unwrap()
}

fn arb_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 ]{0,12}").unwrap()
}

fn arb_answer() -> impl Strategy<Value = AnswerValue> {
    prop_oneof![
        arb_text().prop_map(AnswerValue::Text),
        (-1000i64..1000).prop_map(AnswerValue::from),
        prop::collection::vec(arb_text(), 0..4).prop_map(AnswerValue::Multi),
    ]
}

fn arb_condition() -> impl Strategy<Value = Condition> {
    prop_oneof![
        Just(Condition::Equals),
        Just(Condition::NotEquals),
        Just(Condition::Contains),
        Just(Condition::GreaterThan),
        Just(Condition::LessThan),
    ]
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::Show),
        Just(Action::Hide),
        Just(Action::Require),
        Just(Action::Skip),
    ]
}

fn arb_dependency() -> impl Strategy<Value = Dependency> {
    (arb_id(), arb_condition(), arb_answer(), arb_action()).prop_map(
        |(target, condition, value, action)| {
            Dependency::new(
                VisibilityCondition::on_question(target, condition, value),
                action,
            )
        },
    )
}

fn all_checks_config() -> EffectiveConfig {
    let checks: BTreeMap<String, CheckPolicy> = [
        ids::CHECK_SURVEY_UNIQUE_IDS,
        ids::CHECK_DEPS_NO_SELF_REFERENCE,
        ids::CHECK_DEPS_NO_CYCLES,
        ids::CHECK_DEPS_TARGET_EXISTS,
        ids::CHECK_DEPS_SKIP_TARGET,
        ids::CHECK_DEPS_WELL_FORMED,
    ]
    .into_iter()
    .map(|id| (id.to_string(), CheckPolicy::enabled(Severity::Warning)))
    .collect();
    EffectiveConfig {
        profile: "test".to_string(),
        fail_on: FailOn::Error,
        max_findings: 1000,
        checks,
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn no_dependencies_means_default_visibility(
        answers in prop::collection::btree_map(arb_id(), arb_answer(), 0..5),
    ) {
        let answers: AnswerMap = answers.into_iter().collect();
        prop_assert_eq!(evaluate(&[], &answers), Visibility::default());
    }

    #[test]
    fn unanswered_targets_never_fire(deps in prop::collection::vec(arb_dependency(), 1..5)) {
        prop_assert_eq!(evaluate(&deps, &AnswerMap::new()), Visibility::default());
    }

    #[test]
    fn equals_and_not_equals_are_complements(a in arb_answer(), v in arb_answer()) {
        prop_assert_ne!(
            matches(&Condition::Equals, &a, &v),
            matches(&Condition::NotEquals, &a, &v)
        );
    }

    #[test]
    fn multi_contains_every_own_element(items in prop::collection::vec(arb_text(), 1..5)) {
        let answer = AnswerValue::Multi(items.clone());
        for item in &items {
            prop_assert!(matches(&Condition::Contains, &answer, &AnswerValue::from(item.as_str())));
        }
        prop_assert!(matches(&Condition::Contains, &answer, &AnswerValue::Multi(items)));
    }

    #[test]
    fn numeric_comparisons_are_strict(a in -1000i64..1000, b in -1000i64..1000) {
        let (av, bv) = (AnswerValue::from(a), AnswerValue::from(b));
        prop_assert_eq!(matches(&Condition::GreaterThan, &av, &bv), a > b);
        prop_assert_eq!(matches(&Condition::LessThan, &av, &bv), a < b);
    }

    #[test]
    fn hide_beats_any_other_fired_action(
        value in arb_text(),
        others in prop::collection::vec(arb_action(), 0..4),
        hide_at in 0usize..5,
    ) {
        let when = VisibilityCondition::on_question("q", Condition::Equals, AnswerValue::from(value.as_str()));
        let mut deps: Vec<Dependency> = others
            .into_iter()
            .map(|action| Dependency::new(when.clone(), action))
            .collect();
        let at = hide_at.min(deps.len());
        deps.insert(at, Dependency::new(when, Action::Hide));

        let answers: AnswerMap = [("q", value.as_str())].into_iter().collect();
        let v = evaluate(&deps, &answers);
        prop_assert!(!v.visible);
        prop_assert!(!v.required);
        prop_assert_eq!(v.fired, Some(Action::Hide));
    }

    #[test]
    fn validation_is_deterministic(
        targets in prop::collection::vec(arb_id(), 1..8),
    ) {
        let questions = targets
            .iter()
            .enumerate()
            .map(|(i, t)| {
                question(
                    &format!("q{i}"),
                    false,
                    vec![Dependency::new(
                        VisibilityCondition::on_question(t.as_str(), Condition::Equals, AnswerValue::from("x")),
                        Action::Hide,
                    )],
                )
            })
            .collect();
        let s = survey(vec![section("s1", 1, questions)]);
        let cfg = all_checks_config();

        let first = validate(&s, &cfg);
        let second = validate(&s, &cfg);
        prop_assert_eq!(first.findings, second.findings);
        prop_assert_eq!(first.data.findings_total, second.data.findings_total);
    }
}
