//! Condition matching.
//!
//! Every function here fails closed: a missing target, answer, or value, or an unrecognized
//! condition, is "not satisfied".

use crate::answers::AnswerMap;
use std::cmp::Ordering;
use survey_logic_types::{AnswerValue, Condition, VisibilityCondition};

/// Whether `when` holds against the respondent's current answers.
pub fn condition_holds(when: &VisibilityCondition, answers: &AnswerMap) -> bool {
    let Some(target) = when.target() else {
        return false;
    };
    let Some(answer) = answers.get(target.id()) else {
        return false;
    };
    let Some(value) = when.value.as_ref() else {
        return false;
    };
    matches(&when.condition, answer, value)
}

/// Apply `condition` with the respondent's `answer` on the left and the rule `value` on the right.
pub fn matches(condition: &Condition, answer: &AnswerValue, value: &AnswerValue) -> bool {
    match condition {
        Condition::Equals => values_equal(answer, value),
        Condition::NotEquals => !values_equal(answer, value),
        Condition::Contains => contains(answer, value),
        Condition::GreaterThan => compare_numeric(answer, value) == Some(Ordering::Greater),
        Condition::LessThan => compare_numeric(answer, value) == Some(Ordering::Less),
        Condition::Unknown(_) => false,
    }
}

fn values_equal(answer: &AnswerValue, value: &AnswerValue) -> bool {
    match (answer, value) {
        (AnswerValue::Multi(a), AnswerValue::Multi(b)) => a == b,
        _ => answer.normalized() == value.normalized(),
    }
}

fn contains(answer: &AnswerValue, value: &AnswerValue) -> bool {
    match answer {
        AnswerValue::Multi(items) => match value {
            AnswerValue::Multi(needles) => {
                !needles.is_empty() && needles.iter().all(|n| items.contains(n))
            }
            other => {
                let needle = other.normalized();
                items.iter().any(|item| *item == needle)
            }
        },
        _ => answer.normalized().contains(&value.normalized()),
    }
}

fn compare_numeric(answer: &AnswerValue, value: &AnswerValue) -> Option<Ordering> {
    answer.as_number()?.partial_cmp(&value.as_number()?)
}
