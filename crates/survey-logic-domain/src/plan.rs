use crate::answers::AnswerMap;
use crate::evaluate::evaluate;
use serde::Serialize;
use std::collections::BTreeMap;
use survey_logic_types::{NodeId, Survey};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPlan {
    pub id: NodeId,
    pub visible: bool,
    /// Own `required` flag or a fired `require` rule, and visible.
    pub required: bool,
    /// Bypassed by an earlier skip in the same section.
    pub skipped: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_to_section_id: Option<NodeId>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionPlan {
    pub id: NodeId,
    pub visible: bool,
    /// Bypassed by a skip jump from an earlier section.
    pub skipped: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_to_section_id: Option<NodeId>,
    pub questions: Vec<QuestionPlan>,
}

/// Display decisions for a whole survey under one answer snapshot.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyPlan {
    pub survey_id: String,
    /// Sections in display order.
    pub sections: Vec<SectionPlan>,
}

impl SurveyPlan {
    /// Visible, required questions without a non-blank answer, in display order.
    pub fn missing_required(&self, answers: &AnswerMap) -> Vec<NodeId> {
        self.questions()
            .filter(|q| q.visible && q.required && !answers.is_answered(&q.id))
            .map(|q| q.id.clone())
            .collect()
    }

    /// Visibility of a section or question; `None` if the id is not in the plan.
    pub fn is_visible(&self, id: &NodeId) -> Option<bool> {
        if let Some(s) = self.sections.iter().find(|s| &s.id == id) {
            return Some(s.visible);
        }
        self.questions().find(|q| &q.id == id).map(|q| q.visible)
    }

    pub fn questions(&self) -> impl Iterator<Item = &QuestionPlan> {
        self.sections.iter().flat_map(|s| s.questions.iter())
    }

    pub fn visible_questions(&self) -> impl Iterator<Item = &QuestionPlan> {
        self.questions().filter(|q| q.visible)
    }
}

/// Evaluate every section and question of `survey` against `answers`.
///
/// Sections are walked in display order. A skip fired by a section, or by a question of a
/// visible section, bypasses every later section until its destination. Destinations that are
/// unknown or not ahead of the current section are ignored.
pub fn plan_survey(survey: &Survey, answers: &AnswerMap) -> SurveyPlan {
    let ordered = survey.ordered_sections();

    let mut position: BTreeMap<&NodeId, usize> = BTreeMap::new();
    for (idx, section) in ordered.iter().enumerate() {
        position.entry(&section.id).or_insert(idx);
    }

    let mut sections = Vec::with_capacity(ordered.len());
    let mut skip_until: Option<usize> = None;

    for (idx, section) in ordered.iter().enumerate() {
        if let Some(target) = skip_until {
            if idx < target {
                sections.push(SectionPlan {
                    id: section.id.clone(),
                    visible: false,
                    skipped: true,
                    skip_to_section_id: None,
                    questions: section
                        .questions
                        .iter()
                        .map(|q| QuestionPlan {
                            id: q.id.clone(),
                            visible: false,
                            required: false,
                            skipped: true,
                            skip_to_section_id: None,
                        })
                        .collect(),
                });
                continue;
            }
            skip_until = None;
        }

        let decision = evaluate(&section.rules(), answers);
        let ahead = |target: &Option<NodeId>| {
            target
                .as_ref()
                .and_then(|t| position.get(t))
                .copied()
                .filter(|&pos| pos > idx)
        };
        let mut jump = ahead(&decision.skip_to_section_id);

        let mut questions = Vec::with_capacity(section.questions.len());
        for question in &section.questions {
            let skipped = jump.is_some() && decision.visible;
            if skipped || !decision.visible {
                questions.push(QuestionPlan {
                    id: question.id.clone(),
                    visible: false,
                    required: false,
                    skipped,
                    skip_to_section_id: None,
                });
                continue;
            }

            let q = evaluate(&question.rules(), answers);
            if let Some(target) = ahead(&q.skip_to_section_id) {
                jump = Some(target);
            }
            questions.push(QuestionPlan {
                id: question.id.clone(),
                visible: q.visible,
                required: q.visible && (question.required || q.required),
                skipped: false,
                skip_to_section_id: q.skip_to_section_id,
            });
        }

        skip_until = jump;

        sections.push(SectionPlan {
            id: section.id.clone(),
            visible: decision.visible,
            skipped: false,
            skip_to_section_id: decision.skip_to_section_id,
            questions,
        });
    }

    SurveyPlan {
        survey_id: survey.id.clone(),
        sections,
    }
}
