use super::utils::{build_allowlist, is_allowed, rule_to_json};
use crate::fingerprint::fingerprint_for_node;
use crate::model::{SurveyNode, nodes};
use crate::policy::{CheckPolicy, EffectiveConfig};
use serde_json::{Value, json};
use survey_logic_types::{Action, Condition, Dependency, Finding, Location, Survey, ids};

pub fn run(survey: &Survey, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let Some(policy) = cfg.check_policy(ids::CHECK_DEPS_WELL_FORMED) else {
        return;
    };
    let allow = build_allowlist(&policy.allow);

    for node in nodes(survey) {
        if is_allowed(allow.as_ref(), node.id.as_str()) {
            continue;
        }
        for (idx, rule) in node.rules.iter().enumerate() {
            let mut emit = |code: &'static str, message: String, help: &str| {
                out.push(finding(survey, policy, &node, idx, rule, code, message, help));
            };

            if let Condition::Unknown(raw) = &rule.when.condition {
                emit(
                    ids::CODE_UNKNOWN_CONDITION,
                    format!("rule #{idx} on '{}' uses unknown condition '{raw}'", node.id),
                    "Use one of equals, notEquals, contains, greaterThan, lessThan.",
                );
            }
            if let Action::Unknown(raw) = &rule.action {
                emit(
                    ids::CODE_UNKNOWN_ACTION,
                    format!("rule #{idx} on '{}' uses unknown action '{raw}'", node.id),
                    "Use one of show, hide, require, skip.",
                );
            }
            match &rule.when.value {
                None => emit(
                    ids::CODE_MISSING_VALUE,
                    format!("rule #{idx} on '{}' has no comparison value", node.id),
                    "Add a value; a rule without one never fires.",
                ),
                Some(value) if rule.when.condition.is_numeric() && value.as_number().is_none() => {
                    emit(
                        ids::CODE_NON_NUMERIC_OPERAND,
                        format!(
                            "rule #{idx} on '{}' compares with {} against non-numeric {} value",
                            node.id,
                            rule.when.condition,
                            value.type_name()
                        ),
                        "Numeric comparisons need a number, or text that parses as one.",
                    )
                }
                Some(_) => {}
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn finding(
    survey: &Survey,
    policy: &CheckPolicy,
    node: &SurveyNode<'_>,
    idx: usize,
    rule: &Dependency,
    code: &str,
    message: String,
    help: &str,
) -> Finding {
    Finding {
        severity: policy.severity,
        check_id: ids::CHECK_DEPS_WELL_FORMED.to_string(),
        code: code.to_string(),
        message,
        location: Some(Location::rule(node.path.clone(), idx)),
        help: Some(help.to_string()),
        fingerprint: Some(fingerprint_for_node(
            ids::CHECK_DEPS_WELL_FORMED,
            code,
            &survey.id,
            node.path.as_str(),
            Some(&idx.to_string()),
        )),
        data: json!({
            "node": node.id,
            "rule": rule_to_json(rule),
            "value_type": rule.when.value.as_ref().map(|v| Value::from(v.type_name())),
        }),
    }
}
