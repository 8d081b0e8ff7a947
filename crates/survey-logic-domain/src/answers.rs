use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use survey_logic_types::{AnswerValue, NodeId};

/// A respondent's in-progress answers for one session, keyed by question id.
///
/// Answers can be recorded or replaced but never removed. JSON `null` entries are read as
/// unanswered.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<NodeId, Option<AnswerValue>>",
    into = "BTreeMap<NodeId, AnswerValue>"
)]
pub struct AnswerMap(BTreeMap<NodeId, AnswerValue>);

impl AnswerMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &NodeId) -> Option<&AnswerValue> {
        self.0.get(id)
    }

    /// Record (or replace) the answer for `id`, returning the previous one.
    pub fn record(
        &mut self,
        id: impl Into<NodeId>,
        value: impl Into<AnswerValue>,
    ) -> Option<AnswerValue> {
        self.0.insert(id.into(), value.into())
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.0.contains_key(id)
    }

    /// Whether `id` has a non-blank answer.
    pub fn is_answered(&self, id: &NodeId) -> bool {
        self.get(id).is_some_and(|v| !v.is_blank())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, &AnswerValue)> {
        self.0.iter()
    }
}

impl From<BTreeMap<NodeId, Option<AnswerValue>>> for AnswerMap {
    fn from(raw: BTreeMap<NodeId, Option<AnswerValue>>) -> Self {
        Self(
            raw.into_iter()
                .filter_map(|(k, v)| v.map(|v| (k, v)))
                .collect(),
        )
    }
}

impl From<AnswerMap> for BTreeMap<NodeId, AnswerValue> {
    fn from(map: AnswerMap) -> Self {
        map.0
    }
}

impl<K: Into<NodeId>, V: Into<AnswerValue>> FromIterator<(K, V)> for AnswerMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
