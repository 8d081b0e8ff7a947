//! CLI entry point for survey-logic.
//!
//! Handles argument parsing, file IO, and exit codes. Everything else lives in
//! `survey-logic-app`.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};
use survey_logic_app::{
    EvaluateInput, ExplainOutput, ValidateInput, parse_report_json, render_markdown,
    render_plan_markdown, run_evaluate, run_explain, run_validate, runtime_error_report,
    serialize_report, to_renderable, verdict_exit_code, write_text,
};
use survey_logic_settings::Overrides;
use survey_logic_types::{Survey, SurveyLogicReport};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "survey-logic",
    version,
    about = "Conditional display logic checker for survey documents"
)]
struct Cli {
    /// Path to survey-logic config TOML.
    #[arg(long, global = true, default_value = "survey-logic.toml")]
    config: Utf8PathBuf,

    /// Override profile (strict|warn|lenient).
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Override maximum findings to emit.
    #[arg(long, global = true)]
    max_findings: Option<u32>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Lint a survey's dependency rules and write a JSON report.
    Validate {
        /// Survey document (JSON).
        #[arg(long)]
        survey: Utf8PathBuf,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/survey-logic/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/survey-logic/report.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Show which sections and questions are visible, required, or skipped for a set of answers.
    Evaluate {
        /// Survey document (JSON).
        #[arg(long)]
        survey: Utf8PathBuf,

        /// Answers (JSON object of question id to value).
        #[arg(long)]
        answers: Utf8PathBuf,

        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/survey-logic/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (stdout if omitted).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Explain a check_id or code with remediation guidance.
    Explain {
        /// The check_id (e.g. "deps.no_cycles") or code (e.g. "dangling_target").
        identifier: String,
    },

    /// Print a JSON Schema.
    Schema {
        #[arg(value_enum)]
        kind: SchemaKind,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Json,
    Markdown,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SchemaKind {
    Report,
    Config,
    Survey,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "survey_logic=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Validate {
            ref survey,
            ref report_out,
            write_markdown,
            ref markdown_out,
        } => cmd_validate(&cli, survey, report_out, write_markdown, markdown_out),
        Commands::Evaluate {
            ref survey,
            ref answers,
            format,
        } => cmd_evaluate(survey, answers, format),
        Commands::Md {
            ref report,
            ref output,
        } => cmd_md(report, output.as_deref()),
        Commands::Explain { ref identifier } => cmd_explain(identifier),
        Commands::Schema { kind } => cmd_schema(kind),
    }
}

fn cmd_validate(
    cli: &Cli,
    survey_path: &Utf8Path,
    report_out: &Utf8Path,
    write_markdown: bool,
    markdown_out: &Utf8Path,
) -> anyhow::Result<()> {
    let overrides = Overrides {
        profile: cli.profile.clone(),
        max_findings: cli.max_findings,
    };

    let result = (|| -> anyhow::Result<i32> {
        // Missing config file is allowed; defaults apply.
        let cfg_text = std::fs::read_to_string(&cli.config).unwrap_or_default();
        let survey_text = std::fs::read_to_string(survey_path)
            .with_context(|| format!("read survey: {survey_path}"))?;

        let output = run_validate(ValidateInput {
            survey_text: &survey_text,
            config_text: &cfg_text,
            overrides: overrides.clone(),
        })?;

        write_report_file(report_out, &output.report).context("write report json")?;
        if write_markdown {
            let md = render_markdown(&to_renderable(&output.report));
            write_text(markdown_out, &md).context("write markdown")?;
        }

        Ok(verdict_exit_code(output.report.verdict))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            let profile = overrides.profile.as_deref().unwrap_or("strict");
            let report = runtime_error_report(profile, &format!("{err:#}"));
            if let Err(write_err) = write_report_file(report_out, &report) {
                tracing::warn!("could not write runtime error report: {write_err:#}");
            }
            eprintln!("survey-logic error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn cmd_evaluate(
    survey_path: &Utf8Path,
    answers_path: &Utf8Path,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let survey_text = std::fs::read_to_string(survey_path)
        .with_context(|| format!("read survey: {survey_path}"))?;
    let answers_text = std::fs::read_to_string(answers_path)
        .with_context(|| format!("read answers: {answers_path}"))?;

    let output = run_evaluate(EvaluateInput {
        survey_text: &survey_text,
        answers_text: &answers_text,
    })?;

    match format {
        OutputFormat::Json => {
            let text =
                serde_json::to_string_pretty(&output.to_json()).context("serialize plan")?;
            println!("{text}");
        }
        OutputFormat::Markdown => {
            print!(
                "{}",
                render_plan_markdown(&output.plan, &output.missing_required)
            );
        }
    }

    Ok(())
}

fn write_report_file(path: &Utf8Path, report: &SurveyLogicReport) -> anyhow::Result<()> {
    let data = serialize_report(report)?;
    let text = String::from_utf8(data).context("report is not utf-8")?;
    write_text(path, &text)
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {report_path}"))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&to_renderable(&report));

    match output {
        Some(out_path) => write_text(out_path, &md).context("write markdown output")?,
        None => print!("{md}"),
    }

    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", survey_logic_app::format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_check_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                survey_logic_app::format_not_found(
                    &identifier,
                    available_check_ids,
                    available_codes
                )
            );
            std::process::exit(1);
        }
    }
}

fn cmd_schema(kind: SchemaKind) -> anyhow::Result<()> {
    let schema = match kind {
        SchemaKind::Report => schemars::schema_for!(SurveyLogicReport),
        SchemaKind::Config => schemars::schema_for!(survey_logic_settings::SurveyLogicConfigV1),
        SchemaKind::Survey => schemars::schema_for!(Survey),
    };
    let text = serde_json::to_string_pretty(&schema).context("serialize schema")?;
    println!("{text}");
    Ok(())
}
