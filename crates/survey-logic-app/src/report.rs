use anyhow::Context;
use serde_json::json;
use survey_logic_render::{
    RenderableData, RenderableFinding, RenderableLocation, RenderableReport, RenderableSeverity,
    RenderableVerdictStatus,
};
use survey_logic_types::{
    Finding, ReportEnvelope, SCHEMA_REPORT_V1, Severity, SurveyLogicData, SurveyLogicReport,
    ToolMeta, Verdict, ids,
};
use time::OffsetDateTime;

pub fn parse_report_json(text: &str) -> anyhow::Result<SurveyLogicReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema:?} (expected {SCHEMA_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse survey-logic report")
}

pub fn serialize_report(report: &SurveyLogicReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn to_renderable(report: &SurveyLogicReport) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdictStatus::Pass,
            Verdict::Warn => RenderableVerdictStatus::Warn,
            Verdict::Fail => RenderableVerdictStatus::Fail,
        },
        findings: report.findings.iter().map(renderable_finding).collect(),
        data: RenderableData {
            survey_id: report.data.survey_id.clone(),
            profile: report.data.profile.clone(),
            sections_scanned: report.data.sections_scanned,
            questions_scanned: report.data.questions_scanned,
            dependencies_scanned: report.data.dependencies_scanned,
            findings_emitted: report.data.findings_emitted,
            findings_total: report.data.findings_total,
            truncated_reason: report.data.truncated_reason.clone(),
        },
    }
}

fn renderable_finding(f: &Finding) -> RenderableFinding {
    RenderableFinding {
        severity: match f.severity {
            Severity::Info => RenderableSeverity::Info,
            Severity::Warning => RenderableSeverity::Warning,
            Severity::Error => RenderableSeverity::Error,
        },
        check_id: Some(f.check_id.clone()),
        code: f.code.clone(),
        message: f.message.clone(),
        location: f.location.as_ref().map(|loc| RenderableLocation {
            path: loc.path.as_str().to_string(),
            dependency: loc.dependency,
        }),
        help: f.help.clone(),
    }
}

/// A failing report carrying a single `tool.runtime` finding, written when validation could not
/// run (unreadable survey, bad config, ...).
pub fn runtime_error_report(profile: &str, message: &str) -> SurveyLogicReport {
    let now = OffsetDateTime::now_utc();
    ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "survey-logic".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at: now,
        finished_at: now,
        verdict: Verdict::Fail,
        findings: vec![Finding {
            severity: Severity::Error,
            check_id: ids::CHECK_TOOL_RUNTIME.to_string(),
            code: ids::CODE_RUNTIME_ERROR.to_string(),
            message: message.to_string(),
            location: None,
            help: Some("Fix the input or configuration and re-run validation.".to_string()),
            fingerprint: None,
            data: json!({ "error": message }),
        }],
        data: SurveyLogicData {
            profile: profile.to_string(),
            findings_total: 1,
            findings_emitted: 1,
            ..SurveyLogicData::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_error_report_round_trips() {
        let report = runtime_error_report("strict", "parse survey json: EOF");
        let bytes = serialize_report(&report).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let back = parse_report_json(&text).unwrap();
        assert_eq!(back, report);
        assert_eq!(back.findings[0].check_id, ids::CHECK_TOOL_RUNTIME);
        assert_eq!(back.verdict, Verdict::Fail);
    }

    #[test]
    fn rejects_foreign_schemas() {
        let err = parse_report_json(r#"{"schema":"sensor.report.v1"}"#).unwrap_err();
        assert!(err.to_string().contains("unknown report schema"));
        assert!(parse_report_json("not json").is_err());
    }

    #[test]
    fn renderable_keeps_locations_and_counts() {
        let mut report = runtime_error_report("warn", "boom");
        report.findings[0].location = Some(survey_logic_types::Location::rule(
            survey_logic_types::NodePath::question(&"intro".into(), &"q1".into()),
            2,
        ));
        let r = to_renderable(&report);
        assert_eq!(r.verdict, RenderableVerdictStatus::Fail);
        assert_eq!(r.data.profile, "warn");
        let loc = r.findings[0].location.as_ref().unwrap();
        assert_eq!(loc.path, "intro/q1");
        assert_eq!(loc.dependency, Some(2));
    }
}
