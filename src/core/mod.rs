// Core algorithm exports
pub mod filters;
pub mod insights;
pub mod matcher;
pub mod scoring;

pub use filters::passes_hard_filters;
pub use insights::summarize;
pub use matcher::{sort_colleges, Matcher, TOP_MATCH_COUNT};
pub use scoring::{calculate_match_score, Criterion, CriterionKind, CRITERIA};
