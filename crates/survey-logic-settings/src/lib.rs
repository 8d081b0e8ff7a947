//! Config parsing and profile/preset resolution.
//!
//! No IO here: configuration arrives as a string and leaves as an
//! [`survey_logic_domain::policy::EffectiveConfig`].

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{CheckConfig, SurveyLogicConfigV1};
pub use presets::{PROFILES, preset};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `survey-logic.toml` into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<SurveyLogicConfigV1> {
    let cfg: SurveyLogicConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the config the engine runs with: preset, then file, then overrides.
pub fn resolve_config(
    cfg: SurveyLogicConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
