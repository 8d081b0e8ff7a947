//! The `evaluate` use case: compute the display plan for one answer snapshot.

use crate::validate::parse_survey_json;
use anyhow::Context;
use serde_json::{Value, json};
use survey_logic_domain::model::nodes;
use survey_logic_domain::{AnswerMap, SurveyPlan, ensure_acyclic, plan_survey};
use survey_logic_types::{NodeId, Survey};

#[derive(Clone, Debug)]
pub struct EvaluateInput<'a> {
    /// Survey document as JSON.
    pub survey_text: &'a str,
    /// Answers as a JSON object of question id to value.
    pub answers_text: &'a str,
}

#[derive(Clone, Debug)]
pub struct EvaluateOutput {
    pub plan: SurveyPlan,
    /// Visible required questions still unanswered, in display order.
    pub missing_required: Vec<NodeId>,
}

impl EvaluateOutput {
    pub fn to_json(&self) -> Value {
        json!({
            "plan": self.plan,
            "missingRequired": self.missing_required,
        })
    }
}

pub fn parse_answers_json(text: &str) -> anyhow::Result<AnswerMap> {
    if text.trim().is_empty() {
        return Ok(AnswerMap::new());
    }
    serde_json::from_str(text).context("parse answers json")
}

pub fn run_evaluate(input: EvaluateInput<'_>) -> anyhow::Result<EvaluateOutput> {
    let survey = parse_survey_json(input.survey_text)?;
    let answers = parse_answers_json(input.answers_text)?;

    warn_on_authoring_problems(&survey);

    let plan = plan_survey(&survey, &answers);
    let missing_required = plan.missing_required(&answers);
    tracing::debug!(
        survey = %survey.id,
        answers = answers.len(),
        missing = missing_required.len(),
        "evaluated survey"
    );

    Ok(EvaluateOutput {
        plan,
        missing_required,
    })
}

/// Rules pointing at unknown nodes never fire; surface them without failing the evaluation.
fn warn_on_authoring_problems(survey: &Survey) {
    for node in nodes(survey) {
        for (idx, rule) in node.rules.iter().enumerate() {
            match rule.target() {
                Some(target) if !survey.contains_node(target.id()) => tracing::warn!(
                    node = %node.path,
                    rule = idx,
                    target = %target.id(),
                    "dependency target does not exist; rule will never fire"
                ),
                None => tracing::warn!(
                    node = %node.path,
                    rule = idx,
                    "dependency has no target; rule will never fire"
                ),
                Some(_) => {}
            }
        }
    }

    if let Err(err) = ensure_acyclic(survey) {
        tracing::warn!(survey = %survey.id, "{err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SURVEY: &str = r#"{
        "id": "onboarding",
        "sections": [
            {
                "id": "intro",
                "order": 1,
                "questions": [
                    { "id": "role", "required": true },
                    {
                        "id": "team",
                        "required": true,
                        "dependencies": [
                            { "dependsOnQuestionId": "role", "condition": "notEquals", "value": "eng", "action": "hide" }
                        ]
                    },
                    {
                        "id": "legacy",
                        "dependencies": [
                            { "dependsOnQuestionId": "removed", "condition": "equals", "value": "x", "action": "hide" }
                        ]
                    }
                ]
            }
        ]
    }"#;

    fn run(answers: &str) -> EvaluateOutput {
        run_evaluate(EvaluateInput {
            survey_text: SURVEY,
            answers_text: answers,
        })
        .expect("run_evaluate")
    }

    #[test]
    fn hidden_required_question_is_not_missing() {
        let out = run(r#"{"role": "sales"}"#);
        assert_eq!(out.plan.is_visible(&"team".into()), Some(false));
        assert!(out.missing_required.is_empty());
    }

    #[test]
    fn visible_required_question_is_missing_until_answered() {
        let out = run(r#"{"role": "eng"}"#);
        assert_eq!(out.missing_required, vec![NodeId::from("team")]);

        let out = run(r#"{"role": "eng", "team": "platform"}"#);
        assert!(out.missing_required.is_empty());
    }

    #[test]
    fn dangling_targets_do_not_fire_or_fail() {
        let out = run(r#"{"role": "eng", "removed": null}"#);
        assert_eq!(out.plan.is_visible(&"legacy".into()), Some(true));
    }

    #[test]
    fn empty_answers_text_means_no_answers() {
        let out = run("");
        assert_eq!(out.missing_required, vec![NodeId::from("role")]);
    }

    #[test]
    fn json_output_uses_camel_case() {
        let out = run(r#"{"role": "eng"}"#);
        let json = out.to_json();
        assert_eq!(json["missingRequired"], serde_json::json!(["team"]));
        assert_eq!(json["plan"]["surveyId"], "onboarding");
        assert_eq!(json["plan"]["sections"][0]["questions"][1]["id"], "team");
    }

    #[test]
    fn malformed_answers_are_errors() {
        let err = run_evaluate(EvaluateInput {
            survey_text: SURVEY,
            answers_text: "[1, 2]",
        })
        .unwrap_err();
        assert!(format!("{err:#}").contains("parse answers json"));
    }
}
