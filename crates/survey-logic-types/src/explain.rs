//! Explain registry for checks and codes.
//!
//! Maps check IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after document snippets.
    pub examples: ExamplePair,
}

/// Before and after JSON snippets.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Snippet that would trigger a finding.
    pub before: &'static str,
    /// Snippet that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Check IDs
        ids::CHECK_SURVEY_UNIQUE_IDS | ids::CODE_DUPLICATE_ID => Some(explain_unique_ids()),
        ids::CHECK_DEPS_NO_SELF_REFERENCE | ids::CODE_SELF_REFERENCE => {
            Some(explain_self_reference())
        }
        ids::CHECK_DEPS_NO_CYCLES | ids::CODE_DEPENDENCY_CYCLE => Some(explain_cycles()),
        ids::CHECK_DEPS_TARGET_EXISTS => Some(explain_target_exists()),
        ids::CHECK_DEPS_SKIP_TARGET => Some(explain_skip_target()),
        ids::CHECK_DEPS_WELL_FORMED => Some(explain_well_formed()),

        // Codes
        ids::CODE_DANGLING_TARGET => Some(explain_dangling_target()),
        ids::CODE_MISSING_TARGET => Some(explain_missing_target()),
        ids::CODE_MISSING_SKIP_TARGET => Some(explain_missing_skip_target()),
        ids::CODE_DANGLING_SKIP_TARGET => Some(explain_dangling_skip_target()),
        ids::CODE_UNKNOWN_CONDITION => Some(explain_unknown_condition()),
        ids::CODE_UNKNOWN_ACTION => Some(explain_unknown_action()),
        ids::CODE_MISSING_VALUE => Some(explain_missing_value()),
        ids::CODE_NON_NUMERIC_OPERAND => Some(explain_non_numeric_operand()),

        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[
        ids::CHECK_SURVEY_UNIQUE_IDS,
        ids::CHECK_DEPS_NO_SELF_REFERENCE,
        ids::CHECK_DEPS_NO_CYCLES,
        ids::CHECK_DEPS_TARGET_EXISTS,
        ids::CHECK_DEPS_SKIP_TARGET,
        ids::CHECK_DEPS_WELL_FORMED,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_DUPLICATE_ID,
        ids::CODE_SELF_REFERENCE,
        ids::CODE_DEPENDENCY_CYCLE,
        ids::CODE_DANGLING_TARGET,
        ids::CODE_MISSING_TARGET,
        ids::CODE_MISSING_SKIP_TARGET,
        ids::CODE_DANGLING_SKIP_TARGET,
        ids::CODE_UNKNOWN_CONDITION,
        ids::CODE_UNKNOWN_ACTION,
        ids::CODE_MISSING_VALUE,
        ids::CODE_NON_NUMERIC_OPERAND,
    ]
}

// --- Check-level explanations ---

fn explain_unique_ids() -> Explanation {
    Explanation {
        title: "Unique Node IDs",
        description: "\
Questions and sections share one id namespace. Answers are keyed by question id and
dependencies point at ids, so two nodes with the same id make every rule that reads
that id ambiguous.",
        remediation: "Rename one of the nodes and update any dependency that referenced it.",
        examples: ExamplePair {
            before: r#"{"id": "about", "questions": [{"id": "about"}]}"#,
            after: r#"{"id": "about", "questions": [{"id": "about-role"}]}"#,
        },
    }
}

fn explain_self_reference() -> Explanation {
    Explanation {
        title: "No Self-Referencing Dependencies",
        description: "\
A question or section must not depend on its own answer. The rule can never be
satisfied before the node is shown, so it either does nothing or hides the node
permanently once answered.",
        remediation: "Point the dependency at the earlier question that drives this one, or remove it.",
        examples: ExamplePair {
            before: r#"{"id": "q2", "dependencies": [{"dependsOnQuestionId": "q2", "condition": "equals", "value": "yes", "action": "hide"}]}"#,
            after: r#"{"id": "q2", "dependencies": [{"dependsOnQuestionId": "q1", "condition": "equals", "value": "yes", "action": "hide"}]}"#,
        },
    }
}

fn explain_cycles() -> Explanation {
    Explanation {
        title: "No Dependency Cycles",
        description: "\
Dependencies form a graph from each node to the nodes it reads. A cycle (q1 reads q2,
q2 reads q1) means neither node can be decided first, and respondents can get stuck
with both hidden.",
        remediation: "Break the cycle by removing one edge; usually the later question should depend on the earlier one only.",
        examples: ExamplePair {
            before: r#"[{"id": "q1", "dependencies": [{"dependsOnQuestionId": "q2", "condition": "equals", "value": "a", "action": "show"}]},
 {"id": "q2", "dependencies": [{"dependsOnQuestionId": "q1", "condition": "equals", "value": "b", "action": "show"}]}]"#,
            after: r#"[{"id": "q1"},
 {"id": "q2", "dependencies": [{"dependsOnQuestionId": "q1", "condition": "equals", "value": "b", "action": "show"}]}]"#,
        },
    }
}

fn explain_target_exists() -> Explanation {
    Explanation {
        title: "Dependency Targets Exist",
        description: "\
Every dependency must name a question or section of the same survey. A rule whose
target is missing is never satisfied, so its action silently never fires.",
        remediation: "Fix the id, or delete the rule if the target question was removed.",
        examples: ExamplePair {
            before: r#"{"dependsOnQuestionId": "deleted-question", "condition": "equals", "value": "yes", "action": "require"}"#,
            after: r#"{"dependsOnQuestionId": "q1", "condition": "equals", "value": "yes", "action": "require"}"#,
        },
    }
}

fn explain_skip_target() -> Explanation {
    Explanation {
        title: "Skip Destinations Exist",
        description: "\
A `skip` action jumps the respondent to `skipToSectionId`. Without a valid destination
the node is only hidden and nothing is skipped.",
        remediation: "Set `skipToSectionId` to a section that comes after the node.",
        examples: ExamplePair {
            before: r#"{"dependsOnQuestionId": "q1", "condition": "equals", "value": "no", "action": "skip"}"#,
            after: r#"{"dependsOnQuestionId": "q1", "condition": "equals", "value": "no", "action": "skip", "skipToSectionId": "wrap-up"}"#,
        },
    }
}

fn explain_well_formed() -> Explanation {
    Explanation {
        title: "Well-Formed Rules",
        description: "\
Rules with an unrecognized condition or action, a missing comparison value, or a
non-numeric value for `greaterThan`/`lessThan` are treated as unsatisfied at
runtime. The survey stays usable but the rule is dead.",
        remediation: "Use one of equals, notEquals, contains, greaterThan, lessThan and one of show, hide, require, skip.",
        examples: ExamplePair {
            before: r#"{"dependsOnQuestionId": "age", "condition": "greater", "value": "adult", "action": "show"}"#,
            after: r#"{"dependsOnQuestionId": "age", "condition": "greaterThan", "value": 17, "action": "show"}"#,
        },
    }
}

// --- Code-level explanations ---

fn explain_dangling_target() -> Explanation {
    Explanation {
        title: "Dangling Dependency Target",
        description: "The dependency names an id that is not a question or section of this survey.",
        remediation: "Fix the id, or delete the rule if the target was removed.",
        examples: ExamplePair {
            before: r#"{"dependsOnQuestionId": "q-old", "condition": "equals", "value": "x", "action": "hide"}"#,
            after: r#"{"dependsOnQuestionId": "q1", "condition": "equals", "value": "x", "action": "hide"}"#,
        },
    }
}

fn explain_missing_target() -> Explanation {
    Explanation {
        title: "Missing Dependency Target",
        description: "The dependency has neither `dependsOnQuestionId` nor `dependsOnSectionId`.",
        remediation: "Add the id of the question whose answer drives this rule.",
        examples: ExamplePair {
            before: r#"{"condition": "equals", "value": "x", "action": "hide"}"#,
            after: r#"{"dependsOnQuestionId": "q1", "condition": "equals", "value": "x", "action": "hide"}"#,
        },
    }
}

fn explain_missing_skip_target() -> Explanation {
    Explanation {
        title: "Skip Without Destination",
        description: "A `skip` rule has no `skipToSectionId`; it only hides the node.",
        remediation: "Add `skipToSectionId`, or use `hide` if hiding was the intent.",
        examples: ExamplePair {
            before: r#"{"dependsOnQuestionId": "q1", "condition": "equals", "value": "no", "action": "skip"}"#,
            after: r#"{"dependsOnQuestionId": "q1", "condition": "equals", "value": "no", "action": "skip", "skipToSectionId": "end"}"#,
        },
    }
}

fn explain_dangling_skip_target() -> Explanation {
    Explanation {
        title: "Unknown Skip Destination",
        description: "`skipToSectionId` does not name a section of this survey.",
        remediation: "Point `skipToSectionId` at an existing section.",
        examples: ExamplePair {
            before: r#"{"action": "skip", "skipToSectionId": "gone"}"#,
            after: r#"{"action": "skip", "skipToSectionId": "wrap-up"}"#,
        },
    }
}

fn explain_unknown_condition() -> Explanation {
    Explanation {
        title: "Unknown Condition",
        description: "The condition is not one of equals, notEquals, contains, greaterThan, lessThan. It never matches.",
        remediation: "Use a supported condition name (camelCase).",
        examples: ExamplePair {
            before: r#"{"condition": "not_equals"}"#,
            after: r#"{"condition": "notEquals"}"#,
        },
    }
}

fn explain_unknown_action() -> Explanation {
    Explanation {
        title: "Unknown Action",
        description: "The action is not one of show, hide, require, skip. It never fires.",
        remediation: "Use a supported action name.",
        examples: ExamplePair {
            before: r#"{"action": "mandatory"}"#,
            after: r#"{"action": "require"}"#,
        },
    }
}

fn explain_missing_value() -> Explanation {
    Explanation {
        title: "Missing Comparison Value",
        description: "The rule has no `value`, so there is nothing to compare the answer with. It never matches.",
        remediation: "Add the value the answer is compared against.",
        examples: ExamplePair {
            before: r#"{"dependsOnQuestionId": "q1", "condition": "equals"}"#,
            after: r#"{"dependsOnQuestionId": "q1", "condition": "equals", "value": "yes"}"#,
        },
    }
}

fn explain_non_numeric_operand() -> Explanation {
    Explanation {
        title: "Non-Numeric Comparison Value",
        description: "`greaterThan` and `lessThan` compare numbers; a value that is not a number never matches.",
        remediation: "Use a number (or numeric string) as the value.",
        examples: ExamplePair {
            before: r#"{"condition": "lessThan", "value": "ten"}"#,
            after: r#"{"condition": "lessThan", "value": 10}"#,
        },
    }
}
