//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_SURVEY_UNIQUE_IDS: &str = "survey.unique_ids";
pub const CHECK_DEPS_NO_SELF_REFERENCE: &str = "deps.no_self_reference";
pub const CHECK_DEPS_NO_CYCLES: &str = "deps.no_cycles";
pub const CHECK_DEPS_TARGET_EXISTS: &str = "deps.target_exists";
pub const CHECK_DEPS_SKIP_TARGET: &str = "deps.skip_target";
pub const CHECK_DEPS_WELL_FORMED: &str = "deps.well_formed";

// Codes: survey.unique_ids
pub const CODE_DUPLICATE_ID: &str = "duplicate_id";

// Codes: deps.no_self_reference
pub const CODE_SELF_REFERENCE: &str = "self_reference";

// Codes: deps.no_cycles
pub const CODE_DEPENDENCY_CYCLE: &str = "dependency_cycle";

// Codes: deps.target_exists
pub const CODE_DANGLING_TARGET: &str = "dangling_target";
pub const CODE_MISSING_TARGET: &str = "missing_target";

// Codes: deps.skip_target
pub const CODE_MISSING_SKIP_TARGET: &str = "missing_skip_target";
pub const CODE_DANGLING_SKIP_TARGET: &str = "dangling_skip_target";

// Codes: deps.well_formed
pub const CODE_UNKNOWN_CONDITION: &str = "unknown_condition";
pub const CODE_UNKNOWN_ACTION: &str = "unknown_action";
pub const CODE_MISSING_VALUE: &str = "missing_value";
pub const CODE_NON_NUMERIC_OPERAND: &str = "non_numeric_operand";

// Tool-level
pub const CHECK_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";
