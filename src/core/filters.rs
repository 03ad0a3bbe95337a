use crate::models::{CollegeRecord, FilterCriteria};

/// Check whether a college is eligible at all under the user's thresholds
///
/// This is Stage 1 of the matching pipeline and is independent of scoring.
/// An unset threshold places no constraint on its field. A record missing
/// the field that a set threshold compares against is ineligible, since the
/// comparison cannot be asserted.
#[inline]
pub fn passes_hard_filters(college: &CollegeRecord, criteria: &FilterCriteria) -> bool {
    at_most(college.net_price, criteria.max_budget)
        && at_least(college.grad_rate, criteria.min_grad_rate)
        && at_most(college.median_debt, criteria.max_debt)
        && matches_label(college.state.as_deref(), criteria.state_preference.as_deref())
        && matches_label(
            college.demographic_type.as_deref(),
            criteria.demographic.as_deref(),
        )
}

#[inline]
fn at_most(value: Option<f64>, limit: Option<f64>) -> bool {
    match limit {
        None => true,
        Some(limit) => value.is_some_and(|v| v <= limit),
    }
}

#[inline]
fn at_least(value: Option<f64>, floor: Option<f64>) -> bool {
    match floor {
        None => true,
        Some(floor) => value.is_some_and(|v| v >= floor),
    }
}

#[inline]
fn matches_label(value: Option<&str>, wanted: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(wanted) => value == Some(wanted),
    }
}
