use super::utils::{build_allowlist, is_allowed};
use crate::fingerprint::fingerprint_for_node;
use crate::graph::{DependencyGraph, format_cycle};
use crate::model::path_of;
use crate::policy::EffectiveConfig;
use serde_json::json;
use survey_logic_types::{Finding, Location, NodePath, Survey, ids};

pub fn run(survey: &Survey, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let Some(policy) = cfg.check_policy(ids::CHECK_DEPS_NO_CYCLES) else {
        return;
    };
    let allow = build_allowlist(&policy.allow);

    let graph = DependencyGraph::from_survey(survey);
    for cycle in graph.cycles() {
        if cycle
            .iter()
            .any(|id| is_allowed(allow.as_ref(), id.as_str()))
        {
            continue;
        }
        let Some(first) = cycle.first() else { continue };
        let path = path_of(survey, first).unwrap_or_else(|| NodePath::new(first.as_str()));
        let rendered = format_cycle(&cycle);

        out.push(Finding {
            severity: policy.severity,
            check_id: ids::CHECK_DEPS_NO_CYCLES.to_string(),
            code: ids::CODE_DEPENDENCY_CYCLE.to_string(),
            message: format!("dependency cycle: {rendered}"),
            location: Some(Location::node(path.clone())),
            help: Some(
                "Remove one dependency in the loop so every node depends only on earlier ones."
                    .to_string(),
            ),
            fingerprint: Some(fingerprint_for_node(
                ids::CHECK_DEPS_NO_CYCLES,
                ids::CODE_DEPENDENCY_CYCLE,
                &survey.id,
                path.as_str(),
                Some(&rendered),
            )),
            data: json!({ "cycle": cycle }),
        });
    }
}
