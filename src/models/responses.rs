use serde::{Deserialize, Serialize};
use crate::models::domain::ScoredCollege;

/// Eligible, scored and ranked colleges
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub total: usize,
    pub colleges: Vec<ScoredCollege>,
    #[serde(rename = "topThree")]
    pub top_three: Vec<ScoredCollege>,
}

/// Aggregate figures over a matched set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchInsights {
    pub count: usize,
    #[serde(rename = "averageNetPrice")]
    pub average_net_price: Option<f64>,
    #[serde(rename = "averageGradRate")]
    pub average_grad_rate: Option<f64>,
    #[serde(rename = "averageMedianDebt")]
    pub average_median_debt: Option<f64>,
    #[serde(rename = "averageMedianEarnings")]
    pub average_median_earnings: Option<f64>,
    #[serde(rename = "statesRepresented")]
    pub states_represented: usize,
    #[serde(rename = "childcareAvailable")]
    pub childcare_available: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub colleges: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
