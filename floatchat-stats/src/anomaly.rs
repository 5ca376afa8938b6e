//! Anomaly detection over a filtered subset.
//!
//! Readings beyond two standard deviations of the subset mean are flagged
//! as one aggregate finding per direction (count plus mean of the flagged
//! values, not a per-row list). A separate sparsity finding fires when the
//! subset is too small for the statistics to mean much.

use crate::describe;
use floatchat_argo::{Dataset, Variable};
use serde::Serialize;

/// Subsets smaller than this get a data-sparsity finding.
const SPARSE_THRESHOLD: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyKind {
    HighAnomaly,
    LowAnomaly,
    DataSparse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Info,
}

/// One aggregated anomaly finding, recomputed per request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnomalyFinding {
    #[serde(rename = "type")]
    pub kind: AnomalyKind,
    pub severity: Severity,
    pub message: String,
    pub value: f64,
}

/// Flag out-of-band readings and sparse coverage.
///
/// Returns an empty list for an empty subset. The sparsity finding is
/// independent of the ±2σ checks.
pub fn find_anomalies(subset: &Dataset, variable: Variable) -> Vec<AnomalyFinding> {
    if subset.is_empty() {
        return Vec::new();
    }

    let values = subset.values(variable);
    let mean = describe::mean(&values);
    let std = describe::stddev(&values);

    let mut findings = Vec::new();

    let high: Vec<f64> = values.iter().copied().filter(|v| *v > mean + 2.0 * std).collect();
    if !high.is_empty() {
        findings.push(AnomalyFinding {
            kind: AnomalyKind::HighAnomaly,
            severity: Severity::Warning,
            message: format!(
                "Detected {} unusually high {} readings",
                high.len(),
                variable.name()
            ),
            value: describe::round2(describe::mean(&high)),
        });
    }

    let low: Vec<f64> = values.iter().copied().filter(|v| *v < mean - 2.0 * std).collect();
    if !low.is_empty() {
        findings.push(AnomalyFinding {
            kind: AnomalyKind::LowAnomaly,
            severity: Severity::Warning,
            message: format!(
                "Detected {} unusually low {} readings",
                low.len(),
                variable.name()
            ),
            value: describe::round2(describe::mean(&low)),
        });
    }

    if subset.len() < SPARSE_THRESHOLD {
        findings.push(AnomalyFinding {
            kind: AnomalyKind::DataSparse,
            severity: Severity::Info,
            message: "Limited data available for this region".to_string(),
            value: subset.len() as f64,
        });
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use floatchat_argo::ProfileRecord;

    fn with_temperature(temperature: f64) -> ProfileRecord {
        ProfileRecord {
            time: None,
            latitude: 0.0,
            longitude: 0.0,
            pressure: 100.0,
            temperature,
            salinity: 35.0,
        }
    }

    /// 98 readings near 10 °C plus one injected outlier in each direction,
    /// arranged so the series mean is exactly 10.
    fn with_outliers() -> Dataset {
        let mut records = Vec::new();
        for i in 0..98 {
            let temp = if i % 2 == 0 { 9.9 } else { 10.1 };
            records.push(with_temperature(temp));
        }
        records.push(with_temperature(50.0));
        records.push(with_temperature(-30.0));
        Dataset::new(records)
    }

    #[test]
    fn flags_exactly_the_injected_outliers() {
        let findings = find_anomalies(&with_outliers(), Variable::Temperature);
        assert_eq!(findings.len(), 2);

        let high = &findings[0];
        assert_eq!(high.kind, AnomalyKind::HighAnomaly);
        assert_eq!(high.severity, Severity::Warning);
        assert_eq!(high.message, "Detected 1 unusually high temperature readings");
        assert_eq!(high.value, 50.0);

        let low = &findings[1];
        assert_eq!(low.kind, AnomalyKind::LowAnomaly);
        assert_eq!(low.value, -30.0);
    }

    #[test]
    fn sparsity_fires_iff_below_fifty_records() {
        let sparse = Dataset::new(vec![with_temperature(10.0); 10]);
        let findings = find_anomalies(&sparse, Variable::Temperature);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, AnomalyKind::DataSparse);
        assert_eq!(findings[0].severity, Severity::Info);
        assert_eq!(findings[0].value, 10.0);

        let dense = Dataset::new(vec![with_temperature(10.0); 50]);
        assert!(find_anomalies(&dense, Variable::Temperature).is_empty());
    }

    #[test]
    fn empty_subset_has_no_findings() {
        assert!(find_anomalies(&Dataset::default(), Variable::Temperature).is_empty());
    }
}
