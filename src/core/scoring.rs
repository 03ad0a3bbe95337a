use crate::models::{CollegeRecord, FilterCriteria, ResolvedWeights};

const FULL_MARKS: f64 = 100.0;

/// The scoring dimensions a user can weight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CriterionKind {
    Budget,
    GradRate,
    State,
    Debt,
    Childcare,
}

impl CriterionKind {
    #[inline]
    pub fn weight(self, weights: &ResolvedWeights) -> f64 {
        match self {
            CriterionKind::Budget => weights.budget,
            CriterionKind::GradRate => weights.grad_rate,
            CriterionKind::State => weights.state,
            CriterionKind::Debt => weights.debt,
            CriterionKind::Childcare => weights.childcare,
        }
    }
}

/// A single scoring dimension
///
/// `evaluate` returns the sub-score in `[0, 100]`, or `None` when the
/// criterion does not apply to this combination of thresholds and record
/// fields. Criteria that do not apply add nothing to the weighted total or
/// to the total weight.
#[derive(Clone, Copy)]
pub struct Criterion {
    pub kind: CriterionKind,
    pub evaluate: fn(&CollegeRecord, &FilterCriteria) -> Option<f64>,
}

/// Every criterion the engine scores, evaluated in this order
pub const CRITERIA: [Criterion; 5] = [
    Criterion {
        kind: CriterionKind::Budget,
        evaluate: budget_score,
    },
    Criterion {
        kind: CriterionKind::GradRate,
        evaluate: grad_rate_score,
    },
    Criterion {
        kind: CriterionKind::State,
        evaluate: state_score,
    },
    Criterion {
        kind: CriterionKind::Debt,
        evaluate: debt_score,
    },
    Criterion {
        kind: CriterionKind::Childcare,
        evaluate: childcare_score,
    },
];

/// Calculate a match score (0-100) for a college
///
/// The score is the weighted mean of the sub-scores of the criteria that
/// apply:
///
/// score = sum(weight_i * subscore_i) / sum(weight_i)
///
/// When no criterion applies the score is 0.
pub fn calculate_match_score(
    college: &CollegeRecord,
    criteria: &FilterCriteria,
    weights: &ResolvedWeights,
) -> f64 {
    let (weighted_total, total_weight) = CRITERIA
        .iter()
        .filter_map(|criterion| {
            (criterion.evaluate)(college, criteria)
                .map(|subscore| (criterion.kind.weight(weights), subscore))
        })
        .fold((0.0, 0.0), |(sum, total), (weight, subscore)| {
            (sum + weight * subscore, total + weight)
        });

    if total_weight > 0.0 {
        bounded(weighted_total / total_weight)
    } else {
        0.0
    }
}

fn budget_score(college: &CollegeRecord, criteria: &FilterCriteria) -> Option<f64> {
    Some(ceiling_score(college.net_price?, criteria.max_budget?))
}

fn grad_rate_score(college: &CollegeRecord, criteria: &FilterCriteria) -> Option<f64> {
    let grad_rate = college.grad_rate?;
    let floor = criteria.min_grad_rate?;

    if grad_rate >= floor {
        Some(FULL_MARKS)
    } else {
        // Proportional credit below the floor
        Some(bounded(grad_rate / floor * FULL_MARKS))
    }
}

fn state_score(college: &CollegeRecord, criteria: &FilterCriteria) -> Option<f64> {
    let wanted = criteria.state_preference.as_deref()?;
    let state = college.state.as_deref()?;

    Some(if state == wanted { FULL_MARKS } else { 0.0 })
}

fn debt_score(college: &CollegeRecord, criteria: &FilterCriteria) -> Option<f64> {
    Some(ceiling_score(college.median_debt?, criteria.max_debt?))
}

/// Student parents are rewarded for childcare, never penalised for its absence
fn childcare_score(college: &CollegeRecord, criteria: &FilterCriteria) -> Option<f64> {
    (criteria.is_student_parent && college.childcare_available).then_some(FULL_MARKS)
}

/// Full marks within the limit, otherwise a linear penalty proportional to
/// the fractional overage, floored at 0
#[inline]
fn ceiling_score(value: f64, limit: f64) -> f64 {
    if value <= limit {
        return FULL_MARKS;
    }

    let overage = (value - limit) / limit;
    bounded(FULL_MARKS - overage * FULL_MARKS)
}

#[inline]
fn bounded(score: f64) -> f64 {
    if score.is_finite() {
        score.clamp(0.0, FULL_MARKS)
    } else {
        0.0
    }
}
