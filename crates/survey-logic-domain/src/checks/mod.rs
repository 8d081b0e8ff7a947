use crate::policy::EffectiveConfig;
use survey_logic_types::{Finding, Survey};

mod no_cycles;
mod no_self_reference;
mod skip_target;
mod target_exists;
mod unique_ids;
mod utils;
mod well_formed;

#[cfg(test)]
mod tests;

pub fn run_all(survey: &Survey, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    unique_ids::run(survey, cfg, out);
    no_self_reference::run(survey, cfg, out);
    no_cycles::run(survey, cfg, out);
    target_exists::run(survey, cfg, out);
    skip_target::run(survey, cfg, out);
    well_formed::run(survey, cfg, out);
}
