//! Render use cases and text output helpers.

use anyhow::Context;
use camino::Utf8Path;
use survey_logic_domain::SurveyPlan;
use survey_logic_render::{RenderablePlan, RenderableQuestion, RenderableReport, RenderableSection};
use survey_logic_types::NodeId;

pub fn render_markdown(report: &RenderableReport) -> String {
    survey_logic_render::render_markdown(report)
}

pub fn render_plan_markdown(plan: &SurveyPlan, missing_required: &[NodeId]) -> String {
    survey_logic_render::render_plan_markdown(&plan_to_renderable(plan, missing_required))
}

pub fn plan_to_renderable(plan: &SurveyPlan, missing_required: &[NodeId]) -> RenderablePlan {
    RenderablePlan {
        survey_id: plan.survey_id.clone(),
        sections: plan
            .sections
            .iter()
            .map(|s| RenderableSection {
                id: s.id.to_string(),
                visible: s.visible,
                skipped: s.skipped,
                skip_to: s.skip_to_section_id.as_ref().map(NodeId::to_string),
                questions: s
                    .questions
                    .iter()
                    .map(|q| RenderableQuestion {
                        id: q.id.to_string(),
                        visible: q.visible,
                        required: q.required,
                        skipped: q.skipped,
                        skip_to: q.skip_to_section_id.as_ref().map(NodeId::to_string),
                    })
                    .collect(),
            })
            .collect(),
        missing_required: missing_required.iter().map(NodeId::to_string).collect(),
    }
}

/// Write `text` to `path`, creating parent directories.
pub fn write_text(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create dir {parent}"))?;
    }
    std::fs::write(path, text).with_context(|| format!("write {path}"))
}
