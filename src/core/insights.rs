use std::collections::HashSet;

use crate::models::{MatchInsights, ScoredCollege};

/// Summarise a matched set for the analytics panel
///
/// Averages are taken over the colleges that report the field; a field no
/// college reports yields `None`.
pub fn summarize(colleges: &[ScoredCollege]) -> MatchInsights {
    let states: HashSet<&str> = colleges
        .iter()
        .filter_map(|c| c.college.state.as_deref())
        .filter(|s| !s.is_empty())
        .collect();

    MatchInsights {
        count: colleges.len(),
        average_net_price: mean(colleges.iter().filter_map(|c| c.college.net_price)),
        average_grad_rate: mean(colleges.iter().filter_map(|c| c.college.grad_rate)),
        average_median_debt: mean(colleges.iter().filter_map(|c| c.college.median_debt)),
        average_median_earnings: mean(colleges.iter().filter_map(|c| c.college.median_earnings)),
        states_represented: states.len(),
        childcare_available: colleges
            .iter()
            .filter(|c| c.college.childcare_available)
            .count(),
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}
