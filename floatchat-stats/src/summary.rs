//! Per-query descriptive statistics for the generic response path.

use crate::describe;
use floatchat_argo::{Dataset, Variable};
use serde::Serialize;

/// Descriptive statistics for one (filtered subset, variable) pair.
///
/// Serialized into the `stats` field of the general response payload and
/// attached as metadata to the assistant's conversation turn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryStats {
    pub variable: Variable,
    pub mean_value: f64,
    pub min_value: f64,
    pub max_value: f64,
    /// (shallowest, deepest) pressure in the subset, truncated to dbar.
    pub depth_range: (i64, i64),
    pub data_points: usize,
    pub total_records: usize,
}

/// Compute summary statistics over a filtered subset.
///
/// `total_records` is the size of the unfiltered dataset, reported so the
/// narrative can show coverage. Returns `None` on an empty subset.
pub fn query_stats(subset: &Dataset, variable: Variable, total_records: usize) -> Option<QueryStats> {
    if subset.is_empty() {
        return None;
    }
    let values = subset.values(variable);
    let pressures = subset.pressures();

    Some(QueryStats {
        variable,
        mean_value: describe::round2(describe::mean(&values)),
        min_value: describe::round2(describe::min(&values)),
        max_value: describe::round2(describe::max(&values)),
        depth_range: (
            describe::min(&pressures) as i64,
            describe::max(&pressures) as i64,
        ),
        data_points: subset.len(),
        total_records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use floatchat_argo::ProfileRecord;

    fn record(pressure: f64, temperature: f64) -> ProfileRecord {
        ProfileRecord {
            time: None,
            latitude: 0.0,
            longitude: 0.0,
            pressure,
            temperature,
            salinity: 35.0,
        }
    }

    #[test]
    fn stats_cover_range_and_depth() {
        let data = Dataset::new(vec![record(10.5, 20.0), record(1500.9, 4.0)]);
        let stats = query_stats(&data, Variable::Temperature, 10).unwrap();
        assert_eq!(stats.mean_value, 12.0);
        assert_eq!(stats.min_value, 4.0);
        assert_eq!(stats.max_value, 20.0);
        assert_eq!(stats.depth_range, (10, 1500));
        assert_eq!(stats.data_points, 2);
        assert_eq!(stats.total_records, 10);
    }

    #[test]
    fn empty_subset_yields_none() {
        assert!(query_stats(&Dataset::default(), Variable::Salinity, 0).is_none());
    }
}
