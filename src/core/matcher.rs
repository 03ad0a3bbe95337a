use std::cmp::Ordering;

use crate::core::{filters::passes_hard_filters, scoring::calculate_match_score};
use crate::models::{CollegeRecord, MatchRequest, MatchResult, ScoredCollege, SortKey};

/// Number of leading results highlighted as the top matches
pub const TOP_MATCH_COUNT: usize = 3;

/// Main matching orchestrator
///
/// # Pipeline Stages
/// 1. Hard-filter eligibility
/// 2. Weighted scoring of each eligible college
/// 3. Ordering by the requested sort key
/// 4. Selection of the top matches
///
/// The matcher holds no state between calls and never mutates the dataset,
/// so a single instance can serve concurrent requests over one snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct Matcher;

impl Matcher {
    pub fn new() -> Self {
        Self
    }

    /// Find the colleges matching a request
    ///
    /// # Arguments
    /// * `colleges` - The full, immutable dataset snapshot
    /// * `request` - Filters, weights and sort key
    ///
    /// # Returns
    /// MatchResult containing every eligible college, scored and ordered,
    /// plus the first three as the highlighted top matches
    pub fn find_matches(&self, colleges: &[CollegeRecord], request: &MatchRequest) -> MatchResult {
        let weights = request.weights.resolve();
        let filters = &request.filters;

        let mut scored: Vec<ScoredCollege> = colleges
            .iter()
            // Stage 1: Hard filters
            .filter(|college| passes_hard_filters(college, filters))
            // Stage 2: Weighted score
            .map(|college| ScoredCollege {
                match_score: calculate_match_score(college, filters, &weights),
                college: college.clone(),
            })
            .collect();

        // Stage 3: Order
        sort_colleges(&mut scored, request.sort_by);

        tracing::debug!(
            "Matched {} of {} colleges (sort: {:?})",
            scored.len(),
            colleges.len(),
            request.sort_by
        );

        // Stage 4: Highlight
        let top_three = scored.iter().take(TOP_MATCH_COUNT).cloned().collect();

        MatchResult {
            total: scored.len(),
            colleges: scored,
            top_three,
        }
    }
}

/// Order scored colleges in place by the given key
///
/// The sort is stable, so ties keep dataset order. For `LowestCost` and
/// `HighestGradRate`, colleges missing the field sort last. For
/// `HighestEarnings`, missing earnings compare as 0.
pub fn sort_colleges(colleges: &mut [ScoredCollege], sort_by: SortKey) {
    match sort_by {
        SortKey::LowestCost => colleges.sort_by(|a, b| {
            ascending_missing_last(a.college.net_price, b.college.net_price)
        }),
        SortKey::HighestGradRate => colleges.sort_by(|a, b| {
            descending_missing_last(a.college.grad_rate, b.college.grad_rate)
        }),
        SortKey::HighestEarnings => colleges.sort_by(|a, b| {
            let a = a.college.median_earnings.unwrap_or(0.0);
            let b = b.college.median_earnings.unwrap_or(0.0);
            b.total_cmp(&a)
        }),
        SortKey::MatchScore => colleges.sort_by(|a, b| b.match_score.total_cmp(&a.match_score)),
    }
}

#[inline]
fn ascending_missing_last(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[inline]
fn descending_missing_last(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
