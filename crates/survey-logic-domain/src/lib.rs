//! Pure survey logic (no IO).
//!
//! Two entry points share the same rule semantics:
//! - [`evaluate`] decides visibility/requiredness/skip for one node from a respondent's answers.
//! - [`validate`] lints a whole survey document at authoring time and produces findings.
//!
//! [`plan_survey`] applies [`evaluate`] across a survey for rendering and submission.

#![forbid(unsafe_code)]

pub mod answers;
pub mod checks;
pub mod condition;
pub mod graph;
pub mod model;
pub mod plan;
pub mod policy;
pub mod report;

mod engine;
mod evaluate;
mod fingerprint;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod test_support;

pub use answers::AnswerMap;
pub use engine::validate;
pub use evaluate::{Visibility, evaluate};
pub use graph::{DependencyGraph, GraphError, ensure_acyclic};
pub use plan::{QuestionPlan, SectionPlan, SurveyPlan, plan_survey};
