use crate::answers::AnswerMap;
use crate::condition::condition_holds;
use serde::Serialize;
use survey_logic_types::{Action, Dependency, NodeId};

/// Display decision for one question or section.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Visibility {
    pub visible: bool,
    /// Forced by a `require` rule; the node's own `required` flag is applied by the caller.
    pub required: bool,
    pub skip_to_section_id: Option<NodeId>,
    /// The action that decided the result, if any fired.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fired: Option<Action>,
}

impl Default for Visibility {
    fn default() -> Self {
        Self {
            visible: true,
            required: false,
            skip_to_section_id: None,
            fired: None,
        }
    }
}

/// Decide how a node with `dependencies` is displayed under `answers`.
///
/// All dependencies must hold for any action to fire. When they do, the single
/// highest-precedence action wins: `hide` > `skip` > `require` > `show`. Unknown actions never
/// fire. With no dependencies, or when any condition fails, the node is shown and not forced
/// required.
pub fn evaluate(dependencies: &[Dependency], answers: &AnswerMap) -> Visibility {
    if dependencies.is_empty() {
        return Visibility::default();
    }

    if !dependencies
        .iter()
        .all(|dep| condition_holds(&dep.when, answers))
    {
        return Visibility::default();
    }

    // `min_by_key` keeps the first of equal keys, so document order breaks ties.
    let winner = dependencies
        .iter()
        .filter_map(|dep| dep.action.precedence().map(|rank| (rank, dep)))
        .min_by_key(|(rank, _)| *rank)
        .map(|(_, dep)| dep);

    let Some(dep) = winner else {
        return Visibility::default();
    };

    let fired = Some(dep.action.clone());
    match dep.action {
        Action::Hide => Visibility {
            visible: false,
            required: false,
            skip_to_section_id: None,
            fired,
        },
        Action::Skip => Visibility {
            visible: false,
            required: false,
            skip_to_section_id: dep.skip_to_section_id.clone(),
            fired,
        },
        Action::Require => Visibility {
            visible: true,
            required: true,
            skip_to_section_id: None,
            fired,
        },
        Action::Show | Action::Unknown(_) => Visibility {
            fired,
            ..Visibility::default()
        },
    }
}
