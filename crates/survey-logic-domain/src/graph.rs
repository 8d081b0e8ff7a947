//! Dependency graph over question/section ids.
//!
//! Nodes are every section and question id plus every id a rule points at (dangling targets are
//! leaf nodes). Edges run from a node to the nodes it depends on.

use std::collections::{BTreeMap, BTreeSet};
use survey_logic_types::{Dependency, NodeId, Survey};

/// Save-time rejection reasons for a survey's dependency structure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("'{node}' depends on itself")]
    SelfReference { node: NodeId },

    #[error("dependency cycle: {}", format_cycle(.cycle))]
    Cycle { cycle: Vec<NodeId> },
}

/// Render a cycle as `a -> b -> a`.
pub fn format_cycle(cycle: &[NodeId]) -> String {
    let mut parts: Vec<&str> = cycle.iter().map(NodeId::as_str).collect();
    if let Some(first) = cycle.first() {
        parts.push(first.as_str());
    }
    parts.join(" -> ")
}

#[derive(Clone, Debug, Default)]
pub struct DependencyGraph {
    edges: BTreeMap<NodeId, BTreeSet<NodeId>>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnStack,
    Done,
}

impl DependencyGraph {
    pub fn from_survey(survey: &Survey) -> Self {
        let mut graph = DependencyGraph::default();
        for section in &survey.sections {
            graph.add_node(&section.id, &section.rules());
            for question in &section.questions {
                graph.add_node(&question.id, &question.rules());
            }
        }
        graph
    }

    fn add_node(&mut self, id: &NodeId, rules: &[Dependency]) {
        let targets: Vec<NodeId> = rules
            .iter()
            .filter_map(|r| r.target().map(|t| t.id().clone()))
            .collect();
        for t in &targets {
            self.edges.entry(t.clone()).or_default();
        }
        self.edges.entry(id.clone()).or_default().extend(targets);
    }

    pub fn add_edge(&mut self, from: impl Into<NodeId>, to: impl Into<NodeId>) {
        let to = to.into();
        self.edges.entry(to.clone()).or_default();
        self.edges.entry(from.into()).or_default().insert(to);
    }

    pub fn node_count(&self) -> usize {
        self.edges.len()
    }

    pub fn depends_on(&self, id: &NodeId) -> impl Iterator<Item = &NodeId> {
        self.edges.get(id).into_iter().flat_map(|s| s.iter())
    }

    /// Nodes with an edge to themselves, in id order.
    pub fn self_references(&self) -> Vec<NodeId> {
        self.edges
            .iter()
            .filter(|(id, deps)| deps.contains(*id))
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// Cycles of two or more nodes found by depth-first search.
    ///
    /// Every cyclic component yields at least one cycle. Each cycle is rotated to start at its
    /// smallest id and reported once; output is sorted.
    pub fn cycles(&self) -> Vec<Vec<NodeId>> {
        let mut marks: BTreeMap<&NodeId, Mark> =
            self.edges.keys().map(|k| (k, Mark::Unvisited)).collect();
        let mut stack: Vec<&NodeId> = Vec::new();
        let mut found: BTreeSet<Vec<NodeId>> = BTreeSet::new();

        for start in self.edges.keys() {
            if marks[start] == Mark::Unvisited {
                self.visit(start, &mut marks, &mut stack, &mut found);
            }
        }

        found.into_iter().collect()
    }

    fn visit<'a>(
        &'a self,
        start: &'a NodeId,
        marks: &mut BTreeMap<&'a NodeId, Mark>,
        stack: &mut Vec<&'a NodeId>,
        found: &mut BTreeSet<Vec<NodeId>>,
    ) {
        // Explicit frames so long dependency chains cannot exhaust the call stack.
        let mut frames = vec![(start, self.depends_on(start))];
        marks.insert(start, Mark::OnStack);
        stack.push(start);

        while let Some((node, successors)) = frames.last_mut() {
            let node: &'a NodeId = *node;
            let Some(next) = successors.next() else {
                frames.pop();
                stack.pop();
                marks.insert(node, Mark::Done);
                continue;
            };
            if next == node {
                continue;
            }
            match marks.get(next).copied().unwrap_or(Mark::Done) {
                Mark::Unvisited => {
                    marks.insert(next, Mark::OnStack);
                    stack.push(next);
                    frames.push((next, self.depends_on(next)));
                }
                Mark::OnStack => {
                    if let Some(pos) = stack.iter().position(|n| *n == next) {
                        found.insert(canonical_cycle(&stack[pos..]));
                    }
                }
                Mark::Done => {}
            }
        }
    }
}

fn canonical_cycle(nodes: &[&NodeId]) -> Vec<NodeId> {
    let min = nodes
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.cmp(b))
        .map(|(i, _)| i)
        .unwrap_or(0);
    nodes[min..]
        .iter()
        .chain(nodes[..min].iter())
        .map(|n| (*n).clone())
        .collect()
}

/// Reject surveys whose dependencies reference themselves or form a cycle.
///
/// Intended as the gate before a survey version is persisted.
pub fn ensure_acyclic(survey: &Survey) -> Result<(), GraphError> {
    let graph = DependencyGraph::from_survey(survey);
    if let Some(node) = graph.self_references().into_iter().next() {
        return Err(GraphError::SelfReference { node });
    }
    if let Some(cycle) = graph.cycles().into_iter().next() {
        return Err(GraphError::Cycle { cycle });
    }
    Ok(())
}
