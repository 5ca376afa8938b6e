//! Risk scoring and regional ranking.

use crate::regions::TSUNAMI_REGIONS;
use floatchat_argo::Dataset;
use floatchat_stats::describe;
use serde::Serialize;

/// Regions need more than this many records to appear in the ranking.
const MIN_REGION_RECORDS: usize = 11;

/// Confidence saturates once a region has this many records.
const CONFIDENCE_SATURATION: f64 = 100.0;

/// Named variance indicators reported alongside each region's score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskIndicators {
    pub pressure_anomaly: f64,
    pub temp_variation: f64,
    pub salinity_variation: f64,
}

/// Risk assessment for one catalog region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionRisk {
    pub region: &'static str,
    /// Blended base + data risk, 0–100, one decimal.
    pub risk_score: f64,
    /// Data-availability confidence, 0–100, one decimal.
    pub confidence: f64,
    pub data_points: usize,
    pub indicators: RiskIndicators,
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Additive 0–100 risk heuristic over a regional subset.
///
/// Contributions: pressure spread (σ > 500 → 30, else σ > 300 → 15,
/// mutually exclusive tiers), temperature spread (σ > 5 → 20), cold deep
/// water displacement (mean < 5 °C → 15, independent of the spread check),
/// salinity spread (σ > 0.5 → 25), and irregular depth stepping (first
/// differences of the pressure sequence with σ > 100 → 10). The sum is
/// clamped at 100, not re-normalized.
pub fn score_region(subset: &Dataset) -> f64 {
    if subset.is_empty() {
        return 0.0;
    }

    let mut risk: f64 = 0.0;

    let pressures = subset.pressures();
    let pressure_std = describe::stddev(&pressures);
    if pressure_std > 500.0 {
        risk += 30.0;
    } else if pressure_std > 300.0 {
        risk += 15.0;
    }

    let temperatures = subset.temperatures();
    if describe::stddev(&temperatures) > 5.0 {
        risk += 20.0;
    }
    if describe::mean(&temperatures) < 5.0 {
        risk += 15.0;
    }

    if describe::stddev(&subset.salinities()) > 0.5 {
        risk += 25.0;
    }

    if describe::diff_stddev(&pressures) > 100.0 {
        risk += 10.0;
    }

    risk.min(100.0)
}

/// Score every catalog region against the full dataset.
///
/// Regions whose filtered subset has fewer than [`MIN_REGION_RECORDS`]
/// records are skipped entirely. Each surviving region blends its static
/// prior with the data-derived score and carries a confidence that
/// saturates at 100 data points. The result is stable-sorted descending
/// by risk score, so ties keep catalog order. An empty dataset yields an
/// empty ranking.
pub fn rank_regions(dataset: &Dataset) -> Vec<RegionRisk> {
    if dataset.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<RegionRisk> = Vec::new();
    for region in TSUNAMI_REGIONS {
        let subset = dataset.filter_box(&region.bbox);
        if subset.len() < MIN_REGION_RECORDS {
            continue;
        }

        let data_risk = score_region(&subset);
        let total_risk = (region.base_risk + data_risk) / 2.0;
        let confidence = (subset.len() as f64 / CONFIDENCE_SATURATION).min(1.0) * 100.0;

        results.push(RegionRisk {
            region: region.bbox.name,
            risk_score: round1(total_risk),
            confidence: round1(confidence),
            data_points: subset.len(),
            indicators: RiskIndicators {
                pressure_anomaly: describe::round2(describe::stddev(&subset.pressures())),
                temp_variation: describe::round2(describe::stddev(&subset.temperatures())),
                salinity_variation: describe::round2(describe::stddev(&subset.salinities())),
            },
        });
    }

    // Vec::sort_by is stable, so equal scores preserve catalog order.
    results.sort_by(|a, b| {
        b.risk_score
            .partial_cmp(&a.risk_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    log::info!("risk: ranked {} of {} catalog regions", results.len(), TSUNAMI_REGIONS.len());
    results
}

/// Map a risk score to a predicted threat timeframe.
///
/// Tier boundaries are inclusive on the lower bound.
pub fn timeframe(risk_score: f64) -> &'static str {
    if risk_score >= 70.0 {
        "High risk - Possible within 1-6 months"
    } else if risk_score >= 50.0 {
        "Moderate risk - Possible within 6-12 months"
    } else if risk_score >= 30.0 {
        "Low-moderate risk - Possible within 1-2 years"
    } else {
        "Low risk - No immediate threat detected"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use floatchat_argo::ProfileRecord;

    fn record(lat: f64, lon: f64, pressure: f64, temperature: f64, salinity: f64) -> ProfileRecord {
        ProfileRecord {
            time: None,
            latitude: lat,
            longitude: lon,
            pressure,
            temperature,
            salinity,
        }
    }

    /// Alternating extremes that trip every indicator at once.
    fn volatile_subset() -> Dataset {
        let records = (0..12)
            .map(|i| {
                if i % 2 == 0 {
                    record(0.0, 0.0, 0.0, -5.0, 34.0)
                } else {
                    record(0.0, 0.0, 2000.0, 7.0, 36.0)
                }
            })
            .collect();
        Dataset::new(records)
    }

    fn uniform_region(lat: f64, lon: f64, count: usize) -> Vec<ProfileRecord> {
        (0..count).map(|_| record(lat, lon, 100.0, 10.0, 35.0)).collect()
    }

    #[test]
    fn all_indicators_clamp_to_exactly_one_hundred() {
        // Every contribution fires: 30 + 20 + 15 + 25 + 10 = 100.
        assert_eq!(score_region(&volatile_subset()), 100.0);
    }

    #[test]
    fn pressure_tiers_are_mutually_exclusive_and_monotonic() {
        // Spread chosen so only the pressure-tier indicator fires:
        // temperatures warm and uniform, salinity uniform, smooth ramp.
        let ramp = |step: f64| {
            let records = (0..20)
                .map(|i| record(0.0, 0.0, i as f64 * step, 20.0, 35.0))
                .collect();
            Dataset::new(records)
        };
        let mid = score_region(&ramp(60.0)); // pressure σ ≈ 355
        let high = score_region(&ramp(120.0)); // pressure σ ≈ 710
        assert_eq!(mid, 15.0);
        assert_eq!(high, 30.0);
        assert!(high >= mid);
    }

    #[test]
    fn cold_mean_and_spread_are_independent_contributions() {
        let cold_flat = Dataset::new(vec![record(0.0, 0.0, 100.0, 2.0, 35.0); 12]);
        assert_eq!(score_region(&cold_flat), 15.0);
    }

    #[test]
    fn empty_subset_scores_zero() {
        assert_eq!(score_region(&Dataset::default()), 0.0);
    }

    #[test]
    fn sparse_regions_are_excluded_from_ranking() {
        let mut records = uniform_region(35.0, 140.0, 20); // Japan Coast
        records.extend(uniform_region(15.0, -70.0, 5)); // Caribbean, too few
        let ranking = rank_regions(&Dataset::new(records));
        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking[0].region, "Japan Coast");
        assert_eq!(ranking[0].risk_score, 15.0); // (30 + 0) / 2
        assert_eq!(ranking[0].confidence, 20.0);
        assert_eq!(ranking[0].data_points, 20);
    }

    #[test]
    fn ties_preserve_catalog_order() {
        // Alaska Coast and Peru Coast share base risk 25 and get identical
        // uniform data, so both score (25 + 15) / 2; Alaska is earlier in
        // the catalog and must stay first.
        let mut records = uniform_region(-10.0, -75.0, 15); // Peru Coast
        records.extend(uniform_region(60.0, -150.0, 15)); // Alaska Coast
        let mut cold = records.clone();
        for r in &mut cold {
            r.temperature = 2.0;
        }
        let ranking = rank_regions(&Dataset::new(cold));
        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking[0].risk_score, ranking[1].risk_score);
        assert_eq!(ranking[0].region, "Alaska Coast");
        assert_eq!(ranking[1].region, "Peru Coast");
    }

    #[test]
    fn ranking_sorts_descending() {
        let mut records = uniform_region(35.0, 140.0, 15); // Japan, base 30
        records.extend(uniform_region(15.0, -70.0, 15)); // Caribbean, base 18
        let ranking = rank_regions(&Dataset::new(records));
        assert_eq!(ranking[0].region, "Japan Coast");
        assert_eq!(ranking[1].region, "Caribbean");
        assert!(ranking[0].risk_score > ranking[1].risk_score);
    }

    #[test]
    fn empty_dataset_yields_empty_ranking() {
        assert!(rank_regions(&Dataset::default()).is_empty());
    }

    #[test]
    fn timeframe_tiers_are_inclusive_on_lower_bound() {
        assert_eq!(timeframe(70.0), "High risk - Possible within 1-6 months");
        assert_eq!(timeframe(69.9), "Moderate risk - Possible within 6-12 months");
        assert_eq!(timeframe(50.0), "Moderate risk - Possible within 6-12 months");
        assert_eq!(timeframe(30.0), "Low-moderate risk - Possible within 1-2 years");
        assert_eq!(timeframe(29.9), "Low risk - No immediate threat detected");
    }
}
