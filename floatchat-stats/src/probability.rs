//! Percentile bands for the probability summary in general responses.

use crate::describe;
use floatchat_argo::{Dataset, Variable};
use serde::Serialize;

/// Percentile bands plus mean and spread, all rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Probabilities {
    pub p10: f64,
    pub p25: f64,
    pub median: f64,
    pub p75: f64,
    pub p90: f64,
    pub mean: f64,
    pub std: f64,
}

/// Percentile summary of the chosen variable over a subset.
///
/// Returns `None` on an empty subset; the engine serializes that as an
/// empty map rather than an error.
pub fn probabilities(subset: &Dataset, variable: Variable) -> Option<Probabilities> {
    if subset.is_empty() {
        return None;
    }
    let values = subset.values(variable);

    Some(Probabilities {
        p10: describe::round2(describe::percentile(&values, 10.0)),
        p25: describe::round2(describe::percentile(&values, 25.0)),
        median: describe::round2(describe::percentile(&values, 50.0)),
        p75: describe::round2(describe::percentile(&values, 75.0)),
        p90: describe::round2(describe::percentile(&values, 90.0)),
        mean: describe::round2(describe::mean(&values)),
        std: describe::round2(describe::stddev(&values)),
    })
}
