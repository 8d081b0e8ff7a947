//! Stable DTOs and IDs used across the survey-logic workspace.
//!
//! This crate is intentionally boring:
//! - the survey document shape (sections, questions, dependency rules)
//! - respondent answer values
//! - data types for the emitted validation report
//! - stable string IDs and codes
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod answer;
pub mod explain;
pub mod ids;
pub mod path;
pub mod receipt;
pub mod rule;
pub mod survey;

pub use answer::AnswerValue;
pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use path::{NodeId, NodePath};
pub use receipt::{
    Finding, Location, ReportEnvelope, SCHEMA_REPORT_V1, Severity, SurveyLogicData,
    SurveyLogicReport, ToolMeta, Verdict,
};
pub use rule::{Action, Condition, Dependency, DependencyTarget, VisibilityCondition};
pub use survey::{Question, Section, Survey};
