use crate::{AnswerValue, NodeId};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison applied between the target answer and the rule's `value`.
///
/// Unrecognized wire strings are preserved in `Unknown` instead of failing the whole document;
/// such conditions never match.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Condition {
    Equals,
    NotEquals,
    Contains,
    GreaterThan,
    LessThan,
    Unknown(String),
}

impl Condition {
    pub fn parse(s: &str) -> Self {
        match s {
            "equals" => Condition::Equals,
            "notEquals" => Condition::NotEquals,
            "contains" => Condition::Contains,
            "greaterThan" => Condition::GreaterThan,
            "lessThan" => Condition::LessThan,
            other => Condition::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Condition::Equals => "equals",
            Condition::NotEquals => "notEquals",
            Condition::Contains => "contains",
            Condition::GreaterThan => "greaterThan",
            Condition::LessThan => "lessThan",
            Condition::Unknown(s) => s,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Condition::GreaterThan | Condition::LessThan)
    }
}

impl Default for Condition {
    fn default() -> Self {
        Condition::Unknown(String::new())
    }
}

impl From<String> for Condition {
    fn from(s: String) -> Self {
        Condition::parse(&s)
    }
}

impl From<Condition> for String {
    fn from(c: Condition) -> Self {
        c.as_str().to_string()
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Effect of a dependency once all of its node's conditions hold.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Action {
    #[default]
    Show,
    Hide,
    Require,
    Skip,
    Unknown(String),
}

impl Action {
    pub fn parse(s: &str) -> Self {
        match s {
            "show" => Action::Show,
            "hide" => Action::Hide,
            "require" => Action::Require,
            "skip" => Action::Skip,
            other => Action::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Action::Show => "show",
            Action::Hide => "hide",
            Action::Require => "require",
            Action::Skip => "skip",
            Action::Unknown(s) => s,
        }
    }

    /// Resolution rank: lower wins when several actions fire together.
    ///
    /// `None` for unknown actions, which never fire.
    pub fn precedence(&self) -> Option<u8> {
        match self {
            Action::Hide => Some(0),
            Action::Skip => Some(1),
            Action::Require => Some(2),
            Action::Show => Some(3),
            Action::Unknown(_) => None,
        }
    }
}

impl From<String> for Action {
    fn from(s: String) -> Self {
        Action::parse(&s)
    }
}

impl From<Action> for String {
    fn from(a: Action) -> Self {
        a.as_str().to_string()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The node a condition reads its answer from.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DependencyTarget {
    Question(NodeId),
    Section(NodeId),
}

impl DependencyTarget {
    pub fn id(&self) -> &NodeId {
        match self {
            DependencyTarget::Question(id) | DependencyTarget::Section(id) => id,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            DependencyTarget::Question(_) => "question",
            DependencyTarget::Section(_) => "section",
        }
    }
}

/// A single condition on another node's answer.
///
/// Replaced as a whole when edited; never mutated in place.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityCondition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depends_on_question_id: Option<NodeId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depends_on_section_id: Option<NodeId>,

    #[schemars(with = "String")]
    #[serde(default)]
    pub condition: Condition,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<AnswerValue>,
}

impl VisibilityCondition {
    /// Resolved target. A question id takes priority when both are set.
    pub fn target(&self) -> Option<DependencyTarget> {
        if let Some(id) = &self.depends_on_question_id {
            return Some(DependencyTarget::Question(id.clone()));
        }
        self.depends_on_section_id
            .as_ref()
            .map(|id| DependencyTarget::Section(id.clone()))
    }

    pub fn on_question(id: impl Into<NodeId>, condition: Condition, value: AnswerValue) -> Self {
        Self {
            depends_on_question_id: Some(id.into()),
            depends_on_section_id: None,
            condition,
            value: Some(value),
        }
    }

    pub fn on_section(id: impl Into<NodeId>, condition: Condition, value: AnswerValue) -> Self {
        Self {
            depends_on_question_id: None,
            depends_on_section_id: Some(id.into()),
            condition,
            value: Some(value),
        }
    }
}

/// A visibility condition plus the action it triggers.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    #[serde(flatten)]
    pub when: VisibilityCondition,

    #[schemars(with = "String")]
    #[serde(default)]
    pub action: Action,

    /// Destination of a `skip` action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_to_section_id: Option<NodeId>,
}

impl Dependency {
    pub fn new(when: VisibilityCondition, action: Action) -> Self {
        Self {
            when,
            action,
            skip_to_section_id: None,
        }
    }

    pub fn skip_to(when: VisibilityCondition, section: impl Into<NodeId>) -> Self {
        Self {
            when,
            action: Action::Skip,
            skip_to_section_id: Some(section.into()),
        }
    }

    pub fn target(&self) -> Option<DependencyTarget> {
        self.when.target()
    }
}

impl From<VisibilityCondition> for Dependency {
    /// A bare condition (legacy `visibilityCondition`) means "show when".
    fn from(when: VisibilityCondition) -> Self {
        Dependency::new(when, Action::Show)
    }
}
