use crate::{RenderableReport, RenderableSeverity, RenderableVerdictStatus};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Survey logic report\n\n");
    let verdict = match report.verdict {
        RenderableVerdictStatus::Pass => "PASS",
        RenderableVerdictStatus::Warn => "WARN",
        RenderableVerdictStatus::Fail => "FAIL",
    };
    let data = &report.data;
    if !data.survey_id.is_empty() {
        out.push_str(&format!("- Survey: `{}`\n", data.survey_id));
    }
    if !data.profile.is_empty() {
        out.push_str(&format!("- Profile: {}\n", data.profile));
    }
    out.push_str(&format!(
        "- Verdict: **{}**\n- Scanned: {} sections, {} questions, {} dependencies\n- Findings: {} (emitted) / {} (total)\n\n",
        verdict,
        data.sections_scanned,
        data.questions_scanned,
        data.dependencies_scanned,
        data.findings_emitted,
        data.findings_total
    ));

    if let Some(r) = &data.truncated_reason {
        out.push_str(&format!("> Note: {}\n\n", r));
    }

    if report.findings.is_empty() {
        out.push_str("No findings.\n");
        return out;
    }

    out.push_str("## Findings\n\n");

    for f in &report.findings {
        let sev = match f.severity {
            RenderableSeverity::Info => "INFO",
            RenderableSeverity::Warning => "WARN",
            RenderableSeverity::Error => "ERROR",
        };

        out.push_str(&format!(
            "- [{}] `{}` / `{}`: {}",
            sev,
            f.check_id.as_deref().unwrap_or(""),
            f.code,
            f.message
        ));
        match &f.location {
            Some(loc) => match loc.dependency {
                Some(idx) => out.push_str(&format!(" (`{}` rule #{})\n", loc.path, idx)),
                None => out.push_str(&format!(" (`{}`)\n", loc.path)),
            },
            None => out.push('\n'),
        }

        if let Some(help) = &f.help {
            out.push_str(&format!("  - help: {}\n", help));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RenderableData, RenderableFinding, RenderableLocation};

    #[test]
    fn renders_empty_report() {
        let report = RenderableReport {
            verdict: RenderableVerdictStatus::Pass,
            findings: Vec::new(),
            data: RenderableData::default(),
        };
        let md = render_markdown(&report);
        assert!(md.contains("Verdict: **PASS**"));
        assert!(md.contains("No findings"));
        assert!(!md.contains("- Survey:"));
    }

    #[test]
    fn renders_findings_with_location_help_and_truncation() {
        let report = RenderableReport {
            verdict: RenderableVerdictStatus::Fail,
            findings: vec![
                RenderableFinding {
                    severity: RenderableSeverity::Warning,
                    check_id: Some("deps.target_exists".to_string()),
                    code: "dangling_target".to_string(),
                    message: "'q2' depends on question 'ghost'".to_string(),
                    location: Some(RenderableLocation {
                        path: "intro/q2".to_string(),
                        dependency: Some(0),
                    }),
                    help: Some("fix the id".to_string()),
                },
                RenderableFinding {
                    severity: RenderableSeverity::Error,
                    check_id: Some("deps.no_cycles".to_string()),
                    code: "dependency_cycle".to_string(),
                    message: "dependency cycle: a -> b -> a".to_string(),
                    location: Some(RenderableLocation {
                        path: "intro/a".to_string(),
                        dependency: None,
                    }),
                    help: None,
                },
            ],
            data: RenderableData {
                survey_id: "onboarding".to_string(),
                profile: "strict".to_string(),
                sections_scanned: 1,
                questions_scanned: 3,
                dependencies_scanned: 3,
                findings_emitted: 2,
                findings_total: 5,
                truncated_reason: Some("truncated".to_string()),
            },
        };

        let md = render_markdown(&report);
        assert!(md.contains("- Survey: `onboarding`"));
        assert!(md.contains("Verdict: **FAIL**"));
        assert!(md.contains("Scanned: 1 sections, 3 questions, 3 dependencies"));
        assert!(md.contains("2 (emitted) / 5 (total)"));
        assert!(md.contains("> Note: truncated"));
        assert!(md.contains("[WARN] `deps.target_exists` / `dangling_target`"));
        assert!(md.contains("(`intro/q2` rule #0)"));
        assert!(md.contains("(`intro/a`)\n"));
        assert!(md.contains("  - help: fix the id"));
    }

    #[test]
    fn renders_finding_without_location() {
        let report = RenderableReport {
            verdict: RenderableVerdictStatus::Fail,
            findings: vec![RenderableFinding {
                severity: RenderableSeverity::Error,
                check_id: None,
                code: "runtime_error".to_string(),
                message: "boom".to_string(),
                location: None,
                help: None,
            }],
            data: RenderableData {
                findings_emitted: 1,
                findings_total: 1,
                ..RenderableData::default()
            },
        };

        let md = render_markdown(&report);
        assert!(md.contains("[ERROR] `` / `runtime_error`: boom\n"));
    }
}
