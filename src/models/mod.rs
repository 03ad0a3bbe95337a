// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{CollegeRecord, FilterCriteria, ResolvedWeights, ScoredCollege, SortKey, WeightConfig, ANY_SENTINEL};
pub use requests::MatchRequest;
pub use responses::{ErrorResponse, HealthResponse, MatchInsights, MatchResult};
