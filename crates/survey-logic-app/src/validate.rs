//! The `validate` use case: lint a survey document and produce a report.

use anyhow::Context;
use survey_logic_settings::{Overrides, ResolvedConfig};
use survey_logic_types::{
    ReportEnvelope, SCHEMA_REPORT_V1, Survey, SurveyLogicReport, ToolMeta, Verdict,
};
use time::OffsetDateTime;

#[derive(Clone, Debug)]
pub struct ValidateInput<'a> {
    /// Survey document as JSON.
    pub survey_text: &'a str,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    pub overrides: Overrides,
}

#[derive(Clone, Debug)]
pub struct ValidateOutput {
    pub report: SurveyLogicReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

pub fn parse_survey_json(text: &str) -> anyhow::Result<Survey> {
    serde_json::from_str(text).context("parse survey json")
}

/// Parse config and survey, run every enabled check, and wrap the result in a report envelope.
pub fn run_validate(input: ValidateInput<'_>) -> anyhow::Result<ValidateOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Empty config is allowed; defaults apply.
    let cfg = if input.config_text.trim().is_empty() {
        survey_logic_settings::SurveyLogicConfigV1::default()
    } else {
        survey_logic_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved = survey_logic_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;

    let survey = parse_survey_json(input.survey_text)?;

    let domain_report = survey_logic_domain::validate(&survey, &resolved.effective);
    tracing::debug!(
        survey = %survey.id,
        findings = domain_report.data.findings_total,
        errors = domain_report.counts.error,
        warnings = domain_report.counts.warning,
        "validated survey"
    );

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "survey-logic".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        verdict: domain_report.verdict,
        findings: domain_report.findings,
        data: domain_report.data,
    };

    Ok(ValidateOutput {
        report,
        resolved_config: resolved,
    })
}

/// Map verdict to exit code: 0 = pass/warn, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Fail => 2,
    }
}
