use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use validator::Validate;

/// Label used by the dataset and the UI for "no constraint"
pub const ANY_SENTINEL: &str = "Any";

/// One row of the college dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollegeRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grad_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub median_debt: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub median_earnings: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acceptance_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demographic_type: Option<String>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub childcare_available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub childcare_cost: Option<f64>,
}

/// A college that passed the hard filters, annotated with its match score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCollege {
    #[serde(flatten)]
    pub college: CollegeRecord,
    /// Unrounded weighted score in `[0, 100]`
    #[serde(rename = "matchScore")]
    pub match_score: f64,
}

/// User-supplied thresholds. `None` means the criterion is unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct FilterCriteria {
    #[serde(rename = "maxBudget", default)]
    #[validate(range(min = 0.0))]
    pub max_budget: Option<f64>,
    #[serde(rename = "minGradRate", default)]
    #[validate(range(min = 0.0, max = 100.0))]
    pub min_grad_rate: Option<f64>,
    #[serde(rename = "maxDebt", default)]
    #[validate(range(min = 0.0))]
    pub max_debt: Option<f64>,
    #[serde(
        rename = "statePreference",
        default,
        deserialize_with = "deserialize_any_sentinel",
        serialize_with = "serialize_any_sentinel"
    )]
    pub state_preference: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_any_sentinel",
        serialize_with = "serialize_any_sentinel"
    )]
    pub demographic: Option<String>,
    #[serde(rename = "isStudentParent", default, deserialize_with = "deserialize_flag")]
    pub is_student_parent: bool,
}

/// Per-criterion importance as sent by the client (1 = weak, 3 = strong)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct WeightConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = 3))]
    pub budget: Option<u8>,
    #[serde(rename = "gradRate", default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = 3))]
    pub grad_rate: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = 3))]
    pub state: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = 3))]
    pub debt: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = 3))]
    pub childcare: Option<u8>,
}

impl WeightConfig {
    /// Fill every missing key with the default weight of 1
    pub fn resolve(&self) -> ResolvedWeights {
        let or_default = |w: Option<u8>| f64::from(w.unwrap_or(DEFAULT_WEIGHT));
        ResolvedWeights {
            budget: or_default(self.budget),
            grad_rate: or_default(self.grad_rate),
            state: or_default(self.state),
            debt: or_default(self.debt),
            childcare: or_default(self.childcare),
        }
    }
}

const DEFAULT_WEIGHT: u8 = 1;

/// Weights with every key present, ready for scoring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedWeights {
    pub budget: f64,
    pub grad_rate: f64,
    pub state: f64,
    pub debt: f64,
    pub childcare: f64,
}

impl Default for ResolvedWeights {
    fn default() -> Self {
        WeightConfig::default().resolve()
    }
}

/// Ordering applied to the eligible set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    MatchScore,
    LowestCost,
    HighestGradRate,
    HighestEarnings,
}

impl From<&str> for SortKey {
    fn from(value: &str) -> Self {
        match value {
            "lowestCost" => SortKey::LowestCost,
            "highestGradRate" => SortKey::HighestGradRate,
            "highestEarnings" => SortKey::HighestEarnings,
            // "matchScore" and anything unrecognised
            _ => SortKey::MatchScore,
        }
    }
}

impl From<String> for SortKey {
    fn from(value: String) -> Self {
        SortKey::from(value.as_str())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSortKey {
    Text(String),
    Other(IgnoredAny),
}

/// Unknown names, `null` and non-string values all fall back to `MatchScore`
impl<'de> Deserialize<'de> for SortKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawSortKey::deserialize(deserializer)? {
            RawSortKey::Text(name) => SortKey::from(name.as_str()),
            RawSortKey::Other(_) => SortKey::MatchScore,
        })
    }
}

/// Decode "Any" and blank strings as "no constraint"
fn deserialize_any_sentinel<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ANY_SENTINEL) {
            None
        } else {
            Some(trimmed.to_string())
        }
    }))
}

fn serialize_any_sentinel<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(value.as_deref().unwrap_or(ANY_SENTINEL))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFlag {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

/// Accept booleans as spreadsheets export them: true/false, 1/0, yes/no, or blank
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<RawFlag> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(false),
        Some(RawFlag::Bool(b)) => Ok(b),
        Some(RawFlag::Int(n)) => Ok(n != 0),
        Some(RawFlag::Float(n)) => Ok(n != 0.0),
        Some(RawFlag::Text(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "" | "false" | "no" | "n" | "0" => Ok(false),
            "true" | "yes" | "y" | "1" => Ok(true),
            other => Err(serde::de::Error::custom(format!(
                "invalid boolean value '{}'",
                other
            ))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_weights_resolve_to_one() {
        let weights = WeightConfig {
            budget: Some(3),
            ..Default::default()
        };
        let resolved = weights.resolve();

        assert_eq!(resolved.budget, 3.0);
        assert_eq!(resolved.grad_rate, 1.0);
        assert_eq!(resolved.state, 1.0);
        assert_eq!(resolved.debt, 1.0);
        assert_eq!(resolved.childcare, 1.0);
    }

    #[test]
    fn test_any_sentinel_is_none() {
        let filters: FilterCriteria = serde_json::from_str(
            r#"{"statePreference": "Any", "demographic": "Hispanic-Serving Institution"}"#,
        )
        .unwrap();

        assert_eq!(filters.state_preference, None);
        assert_eq!(
            filters.demographic.as_deref(),
            Some("Hispanic-Serving Institution")
        );
        assert_eq!(filters.max_budget, None);
    }

    #[test]
    fn test_any_sentinel_round_trips_as_any() {
        let json = serde_json::to_value(FilterCriteria::default()).unwrap();
        assert_eq!(json["statePreference"], "Any");
        assert_eq!(json["demographic"], "Any");
    }

    #[test]
    fn test_sort_key_parsing() {
        let key: SortKey = serde_json::from_str(r#""lowestCost""#).unwrap();
        assert_eq!(key, SortKey::LowestCost);

        let key: SortKey = serde_json::from_str(r#""alphabetical""#).unwrap();
        assert_eq!(key, SortKey::MatchScore);

        assert_eq!(
            serde_json::to_string(&SortKey::HighestEarnings).unwrap(),
            r#""highestEarnings""#
        );
    }

    #[test]
    fn test_null_or_non_string_sort_key_falls_back() {
        for body in [
            r#"{"sortBy": null}"#,
            r#"{"sortBy": 7}"#,
            r#"{"sortBy": {"field": "cost"}}"#,
        ] {
            let req: crate::models::MatchRequest = serde_json::from_str(body).unwrap();
            assert_eq!(req.sort_by, SortKey::MatchScore, "body: {}", body);
        }

        let req: crate::models::MatchRequest =
            serde_json::from_str(r#"{"sortBy": "lowestCost"}"#).unwrap();
        assert_eq!(req.sort_by, SortKey::LowestCost);
    }

    #[test]
    fn test_student_parent_tolerates_null() {
        let filters: FilterCriteria =
            serde_json::from_str(r#"{"isStudentParent": null}"#).unwrap();
        assert!(!filters.is_student_parent);

        let filters: FilterCriteria =
            serde_json::from_str(r#"{"isStudentParent": true}"#).unwrap();
        assert!(filters.is_student_parent);

        let filters: FilterCriteria = serde_json::from_str("{}").unwrap();
        assert!(!filters.is_student_parent);
    }

    #[test]
    fn test_scored_college_serializes_flat() {
        let scored = ScoredCollege {
            college: CollegeRecord {
                name: "Lakeshore College".to_string(),
                net_price: Some(21000.0),
                ..Default::default()
            },
            match_score: 87.5,
        };
        let json = serde_json::to_value(&scored).unwrap();

        assert_eq!(json["name"], "Lakeshore College");
        assert_eq!(json["net_price"], 21000.0);
        assert_eq!(json["matchScore"], 87.5);
        assert!(json.get("median_earnings").is_none());
    }

    #[test]
    fn test_childcare_flag_from_json() {
        let record: CollegeRecord =
            serde_json::from_str(r#"{"name": "A", "childcare_available": "yes"}"#).unwrap();
        assert!(record.childcare_available);

        let record: CollegeRecord =
            serde_json::from_str(r#"{"name": "A", "childcare_available": false}"#).unwrap();
        assert!(!record.childcare_available);

        let record: CollegeRecord = serde_json::from_str(r#"{"name": "A"}"#).unwrap();
        assert!(!record.childcare_available);
    }
}
