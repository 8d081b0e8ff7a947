use crate::RenderablePlan;

fn flag(on: bool) -> &'static str {
    if on { "yes" } else { "no" }
}

/// Table cells cannot hold a raw `|`.
fn cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Render a display plan as a table of sections and questions.
pub fn render_plan_markdown(plan: &RenderablePlan) -> String {
    let mut out = String::new();

    out.push_str(&format!("# Display plan: `{}`\n\n", plan.survey_id));
    out.push_str("| Node | Visible | Required | Skipped | Skip to |\n");
    out.push_str("|---|---|---|---|---|\n");

    for section in &plan.sections {
        out.push_str(&format!(
            "| **{}** | {} | | {} | {} |\n",
            cell(&section.id),
            flag(section.visible),
            flag(section.skipped),
            cell(section.skip_to.as_deref().unwrap_or(""))
        ));
        for q in &section.questions {
            out.push_str(&format!(
                "| {}/{} | {} | {} | {} | {} |\n",
                cell(&section.id),
                cell(&q.id),
                flag(q.visible),
                flag(q.required),
                flag(q.skipped),
                cell(q.skip_to.as_deref().unwrap_or(""))
            ));
        }
    }

    out.push('\n');
    if plan.missing_required.is_empty() {
        out.push_str("All required questions answered.\n");
    } else {
        out.push_str("## Missing required answers\n\n");
        for id in &plan.missing_required {
            out.push_str(&format!("- `{}`\n", id));
        }
    }

    out
}
