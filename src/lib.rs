//! College Match - find the colleges that best fit a student's preferences
//!
//! This library provides the matching engine behind the College Match service.
//! Hard filters decide eligibility, a weighted multi-criterion score ranks the
//! eligible colleges, and the first three results are highlighted.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{calculate_match_score, passes_hard_filters, Matcher};
pub use crate::models::{CollegeRecord, FilterCriteria, MatchRequest, MatchResult, ScoredCollege, SortKey, WeightConfig};
pub use crate::services::{CollegeDataset, DatasetError};
