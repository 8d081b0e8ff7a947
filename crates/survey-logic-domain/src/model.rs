use survey_logic_types::{Dependency, NodeId, NodePath, Survey};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Section,
    Question,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Section => "section",
            NodeKind::Question => "question",
        }
    }
}

/// A question or section flattened out of the survey tree, with its effective rule list.
#[derive(Clone, Debug)]
pub struct SurveyNode<'a> {
    pub kind: NodeKind,
    pub id: &'a NodeId,
    pub path: NodePath,
    pub rules: Vec<Dependency>,
}

/// All nodes in document order: each section followed by its questions.
pub fn nodes(survey: &Survey) -> Vec<SurveyNode<'_>> {
    let mut out = Vec::new();
    for section in &survey.sections {
        out.push(SurveyNode {
            kind: NodeKind::Section,
            id: &section.id,
            path: NodePath::section(&section.id),
            rules: section.rules(),
        });
        for question in &section.questions {
            out.push(SurveyNode {
                kind: NodeKind::Question,
                id: &question.id,
                path: NodePath::question(&section.id, &question.id),
                rules: question.rules(),
            });
        }
    }
    out
}

/// Path of the first node carrying `id`, if any.
pub fn path_of(survey: &Survey, id: &NodeId) -> Option<NodePath> {
    for section in &survey.sections {
        if &section.id == id {
            return Some(NodePath::section(&section.id));
        }
        if let Some(q) = section.questions.iter().find(|q| &q.id == id) {
            return Some(NodePath::question(&section.id, &q.id));
        }
    }
    None
}
