//! Use case orchestration for survey-logic.
//!
//! Coordinates parsing, settings, the domain, and rendering. The CLI depends on this and only
//! handles argument parsing and file IO.

#![forbid(unsafe_code)]

mod evaluate;
mod explain;
mod render;
mod report;
mod validate;

pub use evaluate::{EvaluateInput, EvaluateOutput, parse_answers_json, run_evaluate};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use render::{plan_to_renderable, render_markdown, render_plan_markdown, write_text};
pub use report::{parse_report_json, runtime_error_report, serialize_report, to_renderable};
pub use validate::{
    ValidateInput, ValidateOutput, parse_survey_json, run_validate, verdict_exit_code,
};
