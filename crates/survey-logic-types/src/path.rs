use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a question or section inside one survey.
///
/// Questions and sections share a single namespace: a dependency may point at either, and answers
/// are keyed by the same ids.
#[derive(
    Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        NodeId::new(value)
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        NodeId::new(value)
    }
}

impl PartialEq<str> for NodeId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NodeId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Canonical locator of a node used in findings and reports.
///
/// Normalization rules are intentionally simple and deterministic:
/// - segments are joined with forward slashes (`section/question`)
/// - no leading or trailing `/`
/// - never empty (the survey root is `.`)
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct NodePath(String);

impl Default for NodePath {
    fn default() -> Self {
        NodePath::new(".")
    }
}

impl NodePath {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        let v = s.as_ref().replace('\\', "/");
        let v = v.trim_matches('/');
        if v.is_empty() {
            return Self(".".to_string());
        }
        Self(v.to_string())
    }

    pub fn section(section: &NodeId) -> Self {
        NodePath::new(section.as_str())
    }

    pub fn question(section: &NodeId, question: &NodeId) -> Self {
        NodePath::new(format!("{}/{}", section.as_str(), question.as_str()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn join(&self, segment: &str) -> NodePath {
        if self.0 == "." {
            return NodePath::new(segment);
        }
        NodePath::new(format!("{}/{}", self.0, segment))
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
