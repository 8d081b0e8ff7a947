use super::utils::{build_allowlist, is_allowed};
use crate::fingerprint::fingerprint_for_node;
use crate::model::nodes;
use crate::policy::EffectiveConfig;
use serde_json::json;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use survey_logic_types::{Finding, Location, NodeId, Survey, ids};

pub fn run(survey: &Survey, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let Some(policy) = cfg.check_policy(ids::CHECK_SURVEY_UNIQUE_IDS) else {
        return;
    };
    let allow = build_allowlist(&policy.allow);

    let mut first_seen: BTreeMap<&NodeId, String> = BTreeMap::new();
    for node in nodes(survey) {
        if is_allowed(allow.as_ref(), node.id.as_str()) {
            continue;
        }
        let first = match first_seen.entry(node.id) {
            Entry::Vacant(slot) => {
                slot.insert(node.path.as_str().to_string());
                continue;
            }
            Entry::Occupied(seen) => seen.get().clone(),
        };

        out.push(Finding {
            severity: policy.severity,
            check_id: ids::CHECK_SURVEY_UNIQUE_IDS.to_string(),
            code: ids::CODE_DUPLICATE_ID.to_string(),
            message: format!(
                "{} id '{}' is already used by '{}'",
                node.kind.as_str(),
                node.id,
                first
            ),
            location: Some(Location::node(node.path.clone())),
            help: Some("Give every question and section a distinct id.".to_string()),
            fingerprint: Some(fingerprint_for_node(
                ids::CHECK_SURVEY_UNIQUE_IDS,
                ids::CODE_DUPLICATE_ID,
                &survey.id,
                node.path.as_str(),
                Some(node.id.as_str()),
            )),
            data: json!({
                "id": node.id,
                "kind": node.kind.as_str(),
                "first": first,
            }),
        });
    }
}
