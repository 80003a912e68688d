//! Alignment between generated columns and the model's feature names

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// What to do when generated columns and model features disagree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaPolicy {
    /// Zero-fill missing features and drop unknown columns, with a warning
    #[default]
    Lenient,
    /// Refuse to build vectors unless the columns match exactly
    Strict,
}

/// Columns that could not be aligned with the model's feature names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SchemaReport {
    /// Model features the builder never produces; always encoded as 0
    pub zero_filled: Vec<String>,
    /// Produced columns the model does not know about; discarded
    pub dropped: Vec<String>,
}

impl SchemaReport {
    /// Compare generated column names against the model's feature names.
    /// Both lists keep their original order.
    pub fn compare(generated: &[String], feature_names: &[String]) -> Self {
        let generated_set: HashSet<&str> = generated.iter().map(String::as_str).collect();
        let feature_set: HashSet<&str> = feature_names.iter().map(String::as_str).collect();

        Self {
            zero_filled: feature_names
                .iter()
                .filter(|name| !generated_set.contains(name.as_str()))
                .cloned()
                .collect(),
            dropped: generated
                .iter()
                .filter(|name| !feature_set.contains(name.as_str()))
                .cloned()
                .collect(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.zero_filled.is_empty() && self.dropped.is_empty()
    }
}

impl fmt::Display for SchemaReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_clean() {
            return write!(f, "columns aligned");
        }

        write!(
            f,
            "zero-filled [{}], dropped [{}]",
            self.zero_filled.join(", "),
            self.dropped.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_clean_report() {
        let report = SchemaReport::compare(&names(&["Ram", "Pixels"]), &names(&["Pixels", "Ram"]));
        assert!(report.is_clean());
        assert_eq!(report.to_string(), "columns aligned");
    }

    #[test]
    fn test_zero_filled_and_dropped() {
        let report = SchemaReport::compare(
            &names(&["Ram", "Company_Vero"]),
            &names(&["Ram", "Company_Razer", "Company_Xiaomi"]),
        );

        assert_eq!(report.zero_filled, names(&["Company_Razer", "Company_Xiaomi"]));
        assert_eq!(report.dropped, names(&["Company_Vero"]));
        assert_eq!(
            report.to_string(),
            "zero-filled [Company_Razer, Company_Xiaomi], dropped [Company_Vero]"
        );
    }

    #[test]
    fn test_policy_deserialization() {
        assert_eq!(
            serde_json::from_str::<SchemaPolicy>("\"strict\"").unwrap(),
            SchemaPolicy::Strict
        );
        assert_eq!(
            serde_json::from_str::<SchemaPolicy>("\"lenient\"").unwrap(),
            SchemaPolicy::Lenient
        );
        assert_eq!(SchemaPolicy::default(), SchemaPolicy::Lenient);
    }
}
