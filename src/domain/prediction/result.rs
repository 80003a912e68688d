//! Prediction output types

use serde::Serialize;

/// Signed influence of one feature on the predicted price
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contribution {
    pub feature: String,
    pub value: f64,
}

impl Contribution {
    pub fn new(feature: impl Into<String>, value: f64) -> Self {
        Self {
            feature: feature.into(),
            value,
        }
    }
}

/// Predicted price and its contribution breakdown, largest first
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    pub price: f64,
    pub contributions: Vec<Contribution>,
}

impl PredictionResult {
    /// Sorts contributions descending; ties keep feature order
    pub fn new(price: f64, mut contributions: Vec<Contribution>) -> Self {
        contributions.sort_by(|a, b| b.value.total_cmp(&a.value));
        Self {
            price,
            contributions,
        }
    }

    /// The `limit` largest contributions
    pub fn top_contributions(&self, limit: usize) -> &[Contribution] {
        &self.contributions[..limit.min(self.contributions.len())]
    }

    pub fn contribution_total(&self) -> f64 {
        self.contributions.iter().map(|c| c.value).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_descending() {
        let result = PredictionResult::new(
            500.0,
            vec![
                Contribution::new("Ram", 10.0),
                Contribution::new("Weight", -40.0),
                Contribution::new("Pixels", 75.5),
            ],
        );

        let order: Vec<&str> = result
            .contributions
            .iter()
            .map(|c| c.feature.as_str())
            .collect();
        assert_eq!(order, vec!["Pixels", "Ram", "Weight"]);
    }

    #[test]
    fn test_ties_keep_feature_order() {
        let result = PredictionResult::new(
            0.0,
            vec![
                Contribution::new("a", 1.0),
                Contribution::new("b", 1.0),
                Contribution::new("c", 1.0),
            ],
        );
        assert_eq!(result.contributions[0].feature, "a");
        assert_eq!(result.contributions[2].feature, "c");
    }

    #[test]
    fn test_top_contributions() {
        let contributions = (0..15)
            .map(|i| Contribution::new(format!("f{}", i), i as f64))
            .collect();
        let result = PredictionResult::new(0.0, contributions);

        assert_eq!(result.top_contributions(10).len(), 10);
        assert_eq!(result.top_contributions(10)[0].feature, "f14");
        assert_eq!(result.top_contributions(100).len(), 15);
        assert!(result.top_contributions(0).is_empty());
    }
}
