use super::utils::{build_allowlist, is_allowed};
use crate::fingerprint::fingerprint_for_node;
use crate::model::nodes;
use crate::policy::EffectiveConfig;
use serde_json::json;
use survey_logic_types::{Action, Finding, Location, Survey, ids};

pub fn run(survey: &Survey, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let Some(policy) = cfg.check_policy(ids::CHECK_DEPS_SKIP_TARGET) else {
        return;
    };
    let allow = build_allowlist(&policy.allow);

    for node in nodes(survey) {
        if is_allowed(allow.as_ref(), node.id.as_str()) {
            continue;
        }
        for (idx, rule) in node.rules.iter().enumerate() {
            if rule.action != Action::Skip {
                continue;
            }
            let location = Location::rule(node.path.clone(), idx);
            match &rule.skip_to_section_id {
                None => out.push(Finding {
                    severity: policy.severity,
                    check_id: ids::CHECK_DEPS_SKIP_TARGET.to_string(),
                    code: ids::CODE_MISSING_SKIP_TARGET.to_string(),
                    message: format!("skip rule #{idx} on '{}' has no skipToSectionId", node.id),
                    location: Some(location),
                    help: Some(
                        "Add skipToSectionId, or use `hide` if hiding was the intent.".to_string(),
                    ),
                    fingerprint: Some(fingerprint_for_node(
                        ids::CHECK_DEPS_SKIP_TARGET,
                        ids::CODE_MISSING_SKIP_TARGET,
                        &survey.id,
                        node.path.as_str(),
                        Some(&idx.to_string()),
                    )),
                    data: json!({ "node": node.id }),
                }),
                Some(dest) if survey.section(dest).is_none() => out.push(Finding {
                    severity: policy.severity,
                    check_id: ids::CHECK_DEPS_SKIP_TARGET.to_string(),
                    code: ids::CODE_DANGLING_SKIP_TARGET.to_string(),
                    message: format!(
                        "skip rule #{idx} on '{}' jumps to '{}', which is not a section",
                        node.id, dest
                    ),
                    location: Some(location),
                    help: Some("Point skipToSectionId at an existing section.".to_string()),
                    fingerprint: Some(fingerprint_for_node(
                        ids::CHECK_DEPS_SKIP_TARGET,
                        ids::CODE_DANGLING_SKIP_TARGET,
                        &survey.id,
                        node.path.as_str(),
                        Some(dest.as_str()),
                    )),
                    data: json!({ "node": node.id, "skip_to": dest }),
                }),
                Some(_) => {}
            }
        }
    }
}
