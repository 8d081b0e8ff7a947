use super::utils::{build_allowlist, is_allowed, rule_to_json};
use crate::fingerprint::fingerprint_for_node;
use crate::model::nodes;
use crate::policy::EffectiveConfig;
use serde_json::json;
use survey_logic_types::{Finding, Location, Survey, ids};

pub fn run(survey: &Survey, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let Some(policy) = cfg.check_policy(ids::CHECK_DEPS_NO_SELF_REFERENCE) else {
        return;
    };
    let allow = build_allowlist(&policy.allow);

    for node in nodes(survey) {
        if is_allowed(allow.as_ref(), node.id.as_str()) {
            continue;
        }
        for (idx, rule) in node.rules.iter().enumerate() {
            let Some(target) = rule.target() else { continue };
            if target.id() != node.id {
                continue;
            }
            out.push(Finding {
                severity: policy.severity,
                check_id: ids::CHECK_DEPS_NO_SELF_REFERENCE.to_string(),
                code: ids::CODE_SELF_REFERENCE.to_string(),
                message: format!("{} '{}' depends on its own answer", node.kind.as_str(), node.id),
                location: Some(Location::rule(node.path.clone(), idx)),
                help: Some(
                    "Point the dependency at the earlier question that drives this one.".to_string(),
                ),
                fingerprint: Some(fingerprint_for_node(
                    ids::CHECK_DEPS_NO_SELF_REFERENCE,
                    ids::CODE_SELF_REFERENCE,
                    &survey.id,
                    node.path.as_str(),
                    Some(&idx.to_string()),
                )),
                data: json!({
                    "node": node.id,
                    "rule": rule_to_json(rule),
                }),
            });
        }
    }
}
