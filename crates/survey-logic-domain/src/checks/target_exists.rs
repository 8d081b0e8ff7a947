use super::utils::{build_allowlist, is_allowed, rule_to_json};
use crate::fingerprint::fingerprint_for_node;
use crate::model::nodes;
use crate::policy::EffectiveConfig;
use serde_json::json;
use survey_logic_types::{Finding, Location, Survey, ids};

pub fn run(survey: &Survey, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let Some(policy) = cfg.check_policy(ids::CHECK_DEPS_TARGET_EXISTS) else {
        return;
    };
    let allow = build_allowlist(&policy.allow);

    for node in nodes(survey) {
        if is_allowed(allow.as_ref(), node.id.as_str()) {
            continue;
        }
        for (idx, rule) in node.rules.iter().enumerate() {
            let location = Location::rule(node.path.clone(), idx);
            match rule.target() {
                None => out.push(Finding {
                    severity: policy.severity,
                    check_id: ids::CHECK_DEPS_TARGET_EXISTS.to_string(),
                    code: ids::CODE_MISSING_TARGET.to_string(),
                    message: format!(
                        "rule #{idx} on '{}' has no dependsOnQuestionId or dependsOnSectionId",
                        node.id
                    ),
                    location: Some(location),
                    help: Some(
                        "Add the id of the question whose answer drives this rule.".to_string(),
                    ),
                    fingerprint: Some(fingerprint_for_node(
                        ids::CHECK_DEPS_TARGET_EXISTS,
                        ids::CODE_MISSING_TARGET,
                        &survey.id,
                        node.path.as_str(),
                        Some(&idx.to_string()),
                    )),
                    data: json!({ "rule": rule_to_json(rule) }),
                }),
                Some(target) if !survey.contains_node(target.id()) => out.push(Finding {
                    severity: policy.severity,
                    check_id: ids::CHECK_DEPS_TARGET_EXISTS.to_string(),
                    code: ids::CODE_DANGLING_TARGET.to_string(),
                    message: format!(
                        "'{}' depends on {} '{}', which is not in this survey",
                        node.id,
                        target.kind(),
                        target.id()
                    ),
                    location: Some(location),
                    help: Some(
                        "Fix the id, or delete the rule if the target was removed.".to_string(),
                    ),
                    fingerprint: Some(fingerprint_for_node(
                        ids::CHECK_DEPS_TARGET_EXISTS,
                        ids::CODE_DANGLING_TARGET,
                        &survey.id,
                        node.path.as_str(),
                        Some(target.id().as_str()),
                    )),
                    data: json!({
                        "target": target.id(),
                        "target_kind": target.kind(),
                    }),
                }),
                Some(_) => {}
            }
        }
    }
}
