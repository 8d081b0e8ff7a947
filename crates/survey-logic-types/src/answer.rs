use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// A respondent answer, or the comparison operand of a rule.
///
/// Documents carry these as plain JSON scalars or arrays. Booleans are folded into `Text`
/// (`"true"`/`"false"`) and non-string array elements are stringified, so every value fits one of
/// the three shapes.
#[derive(Clone, Debug, PartialEq, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum AnswerValue {
    Text(String),
    Number(f64),
    Multi(Vec<String>),
}

impl AnswerValue {
    /// String-normalized form used by equality and substring tests.
    ///
    /// Integral numbers print without a fractional part; arrays are joined with `,`.
    pub fn normalized(&self) -> String {
        match self {
            AnswerValue::Text(s) => s.clone(),
            AnswerValue::Number(n) => format_number(*n),
            AnswerValue::Multi(items) => items.join(","),
        }
    }

    /// Numeric view of the value, if it has one.
    pub fn as_number(&self) -> Option<f64> {
        let n = match self {
            AnswerValue::Number(n) => *n,
            AnswerValue::Text(s) => s.trim().parse::<f64>().ok()?,
            AnswerValue::Multi(_) => return None,
        };
        (!n.is_nan()).then_some(n)
    }

    pub fn as_multi(&self) -> Option<&[String]> {
        match self {
            AnswerValue::Multi(items) => Some(items),
            _ => None,
        }
    }

    /// Whether the value counts as "no answer" for required-question checks.
    pub fn is_blank(&self) -> bool {
        match self {
            AnswerValue::Text(s) => s.trim().is_empty(),
            AnswerValue::Number(n) => n.is_nan(),
            AnswerValue::Multi(items) => items.is_empty(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            AnswerValue::Text(_) => "text",
            AnswerValue::Number(_) => "number",
            AnswerValue::Multi(_) => "multi",
        }
    }
}

fn format_number(n: f64) -> String {
    // `Display` for f64 already drops a trailing `.0`.
    format!("{n}")
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Flag(bool),
    Number(f64),
    Text(String),
}

impl RawScalar {
    fn into_string(self) -> String {
        match self {
            RawScalar::Flag(b) => b.to_string(),
            RawScalar::Number(n) => format_number(n),
            RawScalar::Text(s) => s,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAnswer {
    Flag(bool),
    Number(f64),
    Text(String),
    Multi(Vec<RawScalar>),
}

impl<'de> Deserialize<'de> for AnswerValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawAnswer::deserialize(deserializer)?;
        Ok(match raw {
            RawAnswer::Flag(b) => AnswerValue::Text(b.to_string()),
            RawAnswer::Number(n) => AnswerValue::Number(n),
            RawAnswer::Text(s) => AnswerValue::Text(s),
            RawAnswer::Multi(items) => {
                AnswerValue::Multi(items.into_iter().map(RawScalar::into_string).collect())
            }
        })
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        AnswerValue::Text(s.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(s: String) -> Self {
        AnswerValue::Text(s)
    }
}

impl From<f64> for AnswerValue {
    fn from(n: f64) -> Self {
        AnswerValue::Number(n)
    }
}

impl From<i64> for AnswerValue {
    fn from(n: i64) -> Self {
        AnswerValue::Number(n as f64)
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(items: Vec<String>) -> Self {
        AnswerValue::Multi(items)
    }
}

impl From<Vec<&str>> for AnswerValue {
    fn from(items: Vec<&str>) -> Self {
        AnswerValue::Multi(items.into_iter().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_scalars_bools_and_arrays() {
        let v: AnswerValue = serde_json::from_str("\"yes\"").unwrap();
        assert_eq!(v, AnswerValue::Text("yes".into()));

        let v: AnswerValue = serde_json::from_str("42").unwrap();
        assert_eq!(v, AnswerValue::Number(42.0));

        let v: AnswerValue = serde_json::from_str("true").unwrap();
        assert_eq!(v, AnswerValue::Text("true".into()));

        let v: AnswerValue = serde_json::from_str(r#"["a", 2, false]"#).unwrap();
        assert_eq!(v, AnswerValue::from(vec!["a", "2", "false"]));
    }

    #[test]
    fn normalized_drops_integral_fraction() {
        assert_eq!(AnswerValue::Number(5.0).normalized(), "5");
        assert_eq!(AnswerValue::Number(2.5).normalized(), "2.5");
        assert_eq!(AnswerValue::from(vec!["a", "b"]).normalized(), "a,b");
    }

    #[test]
    fn as_number_parses_trimmed_text_and_rejects_arrays() {
        assert_eq!(AnswerValue::from(" 18 ").as_number(), Some(18.0));
        assert_eq!(AnswerValue::from("eighteen").as_number(), None);
        assert_eq!(AnswerValue::from("NaN").as_number(), None);
        assert_eq!(AnswerValue::from(vec!["1"]).as_number(), None);
    }

    #[test]
    fn blank_values() {
        assert!(AnswerValue::from("   ").is_blank());
        assert!(AnswerValue::Multi(Vec::new()).is_blank());
        assert!(!AnswerValue::Number(0.0).is_blank());
    }

    #[test]
    fn serializes_untagged() {
        let json = serde_json::to_string(&AnswerValue::from(vec!["x"])).unwrap();
        assert_eq!(json, r#"["x"]"#);
    }
}
