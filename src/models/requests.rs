use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{FilterCriteria, SortKey, WeightConfig};

/// Request to match colleges against a user's preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct MatchRequest {
    #[serde(default)]
    #[validate(nested)]
    pub filters: FilterCriteria,
    #[serde(default)]
    #[validate(nested)]
    pub weights: WeightConfig,
    #[serde(rename = "sortBy", alias = "sort_by", default)]
    pub sort_by: SortKey,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_uses_defaults() {
        let req: MatchRequest = serde_json::from_str("{}").unwrap();

        assert_eq!(req.filters, FilterCriteria::default());
        assert_eq!(req.weights, WeightConfig::default());
        assert_eq!(req.sort_by, SortKey::MatchScore);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_weight_out_of_range_rejected() {
        let req: MatchRequest =
            serde_json::from_str(r#"{"weights": {"budget": 5}}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_negative_budget_rejected() {
        let req: MatchRequest =
            serde_json::from_str(r#"{"filters": {"maxBudget": -10}}"#).unwrap();
        assert!(req.validate().is_err());
    }
}
