use crate::{Dependency, NodeId, VisibilityCondition};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A survey document as stored by the authoring side.
///
/// Fields default when absent so partially authored drafts still load.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Survey {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub sections: Vec<Section>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: NodeId,
    #[serde(default)]
    pub title: String,
    /// Display position; ties keep document order.
    #[serde(default)]
    pub order: i64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<Dependency>,
    /// Legacy single condition, read as a `show` dependency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility_condition: Option<VisibilityCondition>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: NodeId,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<Dependency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility_condition: Option<VisibilityCondition>,
}

impl Section {
    /// All rules attached to this section, legacy condition last.
    pub fn rules(&self) -> Vec<Dependency> {
        merge_rules(&self.dependencies, self.visibility_condition.as_ref())
    }
}

impl Question {
    pub fn rules(&self) -> Vec<Dependency> {
        merge_rules(&self.dependencies, self.visibility_condition.as_ref())
    }
}

fn merge_rules(deps: &[Dependency], legacy: Option<&VisibilityCondition>) -> Vec<Dependency> {
    let mut out = deps.to_vec();
    if let Some(cond) = legacy {
        out.push(Dependency::from(cond.clone()));
    }
    out
}

impl Survey {
    /// Sections in display order (stable on equal `order`).
    pub fn ordered_sections(&self) -> Vec<&Section> {
        let mut sections: Vec<&Section> = self.sections.iter().collect();
        sections.sort_by_key(|s| s.order);
        sections
    }

    pub fn section(&self, id: &NodeId) -> Option<&Section> {
        self.sections.iter().find(|s| &s.id == id)
    }

    pub fn question(&self, id: &NodeId) -> Option<&Question> {
        self.sections
            .iter()
            .flat_map(|s| s.questions.iter())
            .find(|q| &q.id == id)
    }

    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.section(id).is_some() || self.question(id).is_some()
    }

    pub fn question_count(&self) -> usize {
        self.sections.iter().map(|s| s.questions.len()).sum()
    }

    pub fn dependency_count(&self) -> usize {
        self.sections
            .iter()
            .map(|s| {
                s.rules().len() + s.questions.iter().map(|q| q.rules().len()).sum::<usize>()
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, Condition};

    fn sample() -> Survey {
        serde_json::from_str(
            r#"{
                "id": "onboarding",
                "title": "Onboarding",
                "sections": [
                    {"id": "later", "order": 2, "questions": []},
                    {"id": "first", "order": 1, "questions": [
                        {"id": "q1", "title": "Team?", "required": true},
                        {"id": "q2", "visibilityCondition":
                            {"dependsOnQuestionId": "q1", "condition": "equals", "value": "eng"}}
                    ]},
                    {"id": "also-first", "order": 1}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn ordered_sections_is_stable() {
        let survey = sample();
        let ids: Vec<&str> = survey
            .ordered_sections()
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, vec!["first", "also-first", "later"]);
    }

    #[test]
    fn legacy_visibility_condition_becomes_show_rule() {
        let survey = sample();
        let q2 = survey.question(&"q2".into()).unwrap();
        let rules = q2.rules();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].action, Action::Show);
        assert_eq!(rules[0].when.condition, Condition::Equals);
    }

    #[test]
    fn counts_and_lookups() {
        let survey = sample();
        assert_eq!(survey.question_count(), 2);
        assert_eq!(survey.dependency_count(), 1);
        assert!(survey.contains_node(&"later".into()));
        assert!(survey.contains_node(&"q1".into()));
        assert!(!survey.contains_node(&"q9".into()));
    }
}
