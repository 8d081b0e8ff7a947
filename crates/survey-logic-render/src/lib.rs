//! Markdown renderers for validation reports and display plans.
//!
//! Inputs are render-only models so this crate does not depend on the domain.

#![forbid(unsafe_code)]

mod markdown;
mod model;
mod plan;

pub use markdown::render_markdown;
pub use model::{
    RenderableData, RenderableFinding, RenderableLocation, RenderablePlan, RenderableQuestion,
    RenderableReport, RenderableSection, RenderableSeverity, RenderableVerdictStatus,
};
pub use plan::render_plan_markdown;
