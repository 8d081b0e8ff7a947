use super::{
    no_cycles, no_self_reference, run_all, skip_target, target_exists, unique_ids, utils,
    well_formed,
};
use crate::policy::{CheckPolicy, EffectiveConfig, FailOn};
use crate::test_support::{
    config_with_check, config_with_check_allow, depends_on, question, section, survey,
};
use std::collections::BTreeMap;
use survey_logic_types::{
    Action, AnswerValue, Condition, Dependency, Severity, VisibilityCondition, ids,
};

fn rule(condition: Condition, value: Option<AnswerValue>, action: Action) -> Dependency {
    let mut when = VisibilityCondition::on_question("q1", condition, AnswerValue::from("x"));
    when.value = value;
    Dependency::new(when, action)
}

#[test]
fn unique_ids_flags_repeats_across_sections_and_questions() {
    let cfg = config_with_check(ids::CHECK_SURVEY_UNIQUE_IDS, Severity::Error);
    let s = survey(vec![
        section("s1", 1, vec![question("q1", false, vec![]), question("s2", false, vec![])]),
        section("s2", 2, vec![question("q1", false, vec![])]),
    ]);

    let mut out = Vec::new();
    unique_ids::run(&s, &cfg, &mut out);

    assert_eq!(out.len(), 2);
    assert!(out.iter().all(|f| f.code == ids::CODE_DUPLICATE_ID));
    assert_eq!(out[0].data["id"], "s2");
    assert_eq!(out[0].data["kind"], "section");
    assert_eq!(out[0].data["first"], "s1/s2");
    assert_eq!(out[1].data["id"], "q1");
    assert_eq!(out[1].location.as_ref().unwrap().path.as_str(), "s2/q1");
}

#[test]
fn unique_ids_respects_allowlist() {
    let cfg = config_with_check_allow(ids::CHECK_SURVEY_UNIQUE_IDS, Severity::Error, vec!["q*"]);
    let s = survey(vec![section(
        "s1",
        1,
        vec![question("q1", false, vec![]), question("q1", false, vec![])],
    )]);

    let mut out = Vec::new();
    unique_ids::run(&s, &cfg, &mut out);
    assert!(out.is_empty());
}

#[test]
fn self_reference_points_at_the_offending_rule() {
    let cfg = config_with_check(ids::CHECK_DEPS_NO_SELF_REFERENCE, Severity::Error);
    let s = survey(vec![section(
        "s1",
        1,
        vec![question("q1", false, vec![depends_on("q0"), depends_on("q1")])],
    )]);

    let mut out = Vec::new();
    no_self_reference::run(&s, &cfg, &mut out);

    assert_eq!(out.len(), 1);
    let loc = out[0].location.as_ref().unwrap();
    assert_eq!(loc.path.as_str(), "s1/q1");
    assert_eq!(loc.dependency, Some(1));
    assert_eq!(out[0].data["rule"]["dependsOnQuestionId"], "q1");
}

#[test]
fn cycles_are_reported_once_at_the_smallest_member() {
    let cfg = config_with_check(ids::CHECK_DEPS_NO_CYCLES, Severity::Error);
    let s = survey(vec![section(
        "s1",
        1,
        vec![
            question("b", false, vec![depends_on("a")]),
            question("a", false, vec![depends_on("b")]),
            question("c", false, vec![depends_on("c")]),
        ],
    )]);

    let mut out = Vec::new();
    no_cycles::run(&s, &cfg, &mut out);

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].code, ids::CODE_DEPENDENCY_CYCLE);
    assert_eq!(out[0].message, "dependency cycle: a -> b -> a");
    assert_eq!(out[0].location.as_ref().unwrap().path.as_str(), "s1/a");
    assert_eq!(out[0].data["cycle"], serde_json::json!(["a", "b"]));
}

#[test]
fn cycles_touching_allowlisted_ids_are_skipped() {
    let cfg = config_with_check_allow(ids::CHECK_DEPS_NO_CYCLES, Severity::Error, vec!["legacy-*"]);
    let s = survey(vec![section(
        "s1",
        1,
        vec![
            question("legacy-a", false, vec![depends_on("q")]),
            question("q", false, vec![depends_on("legacy-a")]),
        ],
    )]);

    let mut out = Vec::new();
    no_cycles::run(&s, &cfg, &mut out);
    assert!(out.is_empty());
}

#[test]
fn target_exists_handles_dangling_missing_and_section_targets() {
    let cfg = config_with_check(ids::CHECK_DEPS_TARGET_EXISTS, Severity::Warning);
    let mut no_target = depends_on("q1");
    no_target.when.depends_on_question_id = None;
    let on_section = Dependency::new(
        VisibilityCondition::on_section("s1", Condition::Equals, AnswerValue::from("x")),
        Action::Show,
    );
    let s = survey(vec![section(
        "s1",
        1,
        vec![
            question("q1", false, vec![]),
            question(
                "q2",
                false,
                vec![depends_on("ghost"), no_target, on_section, depends_on("q1")],
            ),
        ],
    )]);

    let mut out = Vec::new();
    target_exists::run(&s, &cfg, &mut out);

    let codes: Vec<&str> = out.iter().map(|f| f.code.as_str()).collect();
    assert_eq!(codes, vec![ids::CODE_DANGLING_TARGET, ids::CODE_MISSING_TARGET]);
    assert_eq!(out[0].data["target"], "ghost");
    assert_eq!(out[0].data["target_kind"], "question");
    assert_eq!(out[0].severity, Severity::Warning);
    assert_eq!(out[1].location.as_ref().unwrap().dependency, Some(1));
}

#[test]
fn skip_target_requires_an_existing_section() {
    let cfg = config_with_check(ids::CHECK_DEPS_SKIP_TARGET, Severity::Error);
    let when = VisibilityCondition::on_question("q1", Condition::Equals, AnswerValue::from("no"));
    let s = survey(vec![
        section(
            "s1",
            1,
            vec![
                question("q1", false, vec![]),
                question(
                    "q2",
                    false,
                    vec![
                        Dependency::new(when.clone(), Action::Skip),
                        Dependency::skip_to(when.clone(), "q1"),
                        Dependency::skip_to(when.clone(), "s2"),
                    ],
                ),
            ],
        ),
        section("s2", 2, vec![]),
    ]);

    let mut out = Vec::new();
    skip_target::run(&s, &cfg, &mut out);

    let codes: Vec<&str> = out.iter().map(|f| f.code.as_str()).collect();
    assert_eq!(
        codes,
        vec![ids::CODE_MISSING_SKIP_TARGET, ids::CODE_DANGLING_SKIP_TARGET]
    );
    assert_eq!(out[1].data["skip_to"], "q1");
}

#[test]
fn well_formed_flags_each_problem_separately() {
    let cfg = config_with_check(ids::CHECK_DEPS_WELL_FORMED, Severity::Warning);
    let s = survey(vec![section(
        "s1",
        1,
        vec![question(
            "q2",
            false,
            vec![
                rule(Condition::Unknown("matches".into()), Some("x".into()), Action::Show),
                rule(Condition::Equals, Some("x".into()), Action::Unknown("explode".into())),
                rule(Condition::Equals, None, Action::Hide),
                rule(Condition::GreaterThan, Some("ten".into()), Action::Hide),
                rule(Condition::LessThan, Some(" 10 ".into()), Action::Hide),
                rule(Condition::GreaterThan, Some(AnswerValue::Number(3.0)), Action::Require),
            ],
        )],
    )]);

    let mut out = Vec::new();
    well_formed::run(&s, &cfg, &mut out);

    let codes: Vec<&str> = out.iter().map(|f| f.code.as_str()).collect();
    assert_eq!(
        codes,
        vec![
            ids::CODE_UNKNOWN_CONDITION,
            ids::CODE_UNKNOWN_ACTION,
            ids::CODE_MISSING_VALUE,
            ids::CODE_NON_NUMERIC_OPERAND,
        ]
    );
    assert_eq!(out[3].data["value_type"], "text");
    assert!(out[0].message.contains("'matches'"));
}

#[test]
fn disabled_checks_emit_nothing() {
    let mut checks = BTreeMap::new();
    checks.insert(
        ids::CHECK_DEPS_TARGET_EXISTS.to_string(),
        CheckPolicy::disabled(),
    );
    let cfg = EffectiveConfig {
        profile: "test".to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        checks,
    };
    let s = survey(vec![section(
        "s1",
        1,
        vec![question("q1", false, vec![depends_on("ghost")])],
    )]);

    let mut out = Vec::new();
    run_all(&s, &cfg, &mut out);
    assert!(out.is_empty());
}

#[test]
fn allowlist_helpers_match_globs() {
    assert!(utils::build_allowlist(&[]).is_none());
    let set = utils::build_allowlist(&["intro-*".to_string()]);
    assert!(utils::is_allowed(set.as_ref(), "intro-1"));
    assert!(!utils::is_allowed(set.as_ref(), "outro-1"));
    assert!(!utils::is_allowed(None, "intro-1"));
}

#[test]
fn fingerprints_differ_per_target() {
    let cfg = config_with_check(ids::CHECK_DEPS_TARGET_EXISTS, Severity::Warning);
    let s = survey(vec![section(
        "s1",
        1,
        vec![question("q1", false, vec![depends_on("a"), depends_on("b")])],
    )]);

    let mut out = Vec::new();
    target_exists::run(&s, &cfg, &mut out);
    assert_eq!(out.len(), 2);
    assert_ne!(out[0].fingerprint, out[1].fingerprint);
    assert_eq!(out[0].fingerprint.as_ref().map(String::len), Some(64));
}
