//! Narrative assembly for the tsunami response branch.

use crate::score::{rank_regions, timeframe, RegionRisk};
use chrono::Utc;
use floatchat_argo::Dataset;
use serde::Serialize;
use std::fmt::Write;

/// Fixed preparedness recommendations returned with every analysis.
pub static RECOMMENDATIONS: &[&str] = &[
    "Monitor seismic activity in high-risk regions",
    "Maintain tsunami early warning systems",
    "Conduct regular coastal evacuation drills",
    "Update emergency response protocols",
];

/// The full tsunami branch payload: narrative plus ranked regions.
#[derive(Debug, Clone, Serialize)]
pub struct TsunamiAnalysis {
    pub summary: String,
    /// The five highest-risk regions.
    pub top_risks: Vec<RegionRisk>,
    pub all_regions: Vec<RegionRisk>,
    pub recommendations: Vec<&'static str>,
    /// When this assessment was computed, ISO 8601.
    pub analysis_date: String,
}

/// Rank all catalog regions and compose the risk narrative.
///
/// With no rankable region (empty dataset, or none above the record
/// threshold) the summary reports insufficient data and every list is
/// empty; this is a well-formed response, not an error.
pub fn generate_analysis(dataset: &Dataset) -> TsunamiAnalysis {
    let ranking = rank_regions(dataset);

    if ranking.is_empty() {
        return TsunamiAnalysis {
            summary: "Insufficient data to perform tsunami risk analysis. \
                      Need geographic coverage of high-risk coastal regions."
                .to_string(),
            top_risks: Vec::new(),
            all_regions: Vec::new(),
            recommendations: Vec::new(),
            analysis_date: analysis_date(),
        };
    }

    let top3 = &ranking[..ranking.len().min(3)];

    let mut summary = format!(
        "Based on analysis of {} oceanographic measurements, tsunami risk assessment:\n\n",
        dataset.len()
    );
    for (i, region) in top3.iter().enumerate() {
        writeln!(
            summary,
            "{}. **{}** - Risk Score: {:.1}/100",
            i + 1,
            region.region,
            region.risk_score
        )
        .ok();
        writeln!(summary, "   Timeframe: {}", timeframe(region.risk_score)).ok();
        writeln!(
            summary,
            "   Confidence: {:.1}% (based on {} measurements)\n",
            region.confidence, region.data_points
        )
        .ok();
    }

    summary.push_str("\n**Key Indicators:**\n");
    for region in top3 {
        let mut notes: Vec<&str> = Vec::new();
        if region.indicators.pressure_anomaly > 300.0 {
            notes.push("High pressure variations");
        }
        if region.indicators.temp_variation > 3.0 {
            notes.push("Temperature anomalies");
        }
        if region.indicators.salinity_variation > 0.3 {
            notes.push("Salinity fluctuations");
        }
        let detail = if notes.is_empty() {
            "Normal conditions".to_string()
        } else {
            notes.join(", ")
        };
        writeln!(summary, "- {}: {}", region.region, detail).ok();
    }

    TsunamiAnalysis {
        top_risks: ranking.iter().take(5).cloned().collect(),
        all_regions: ranking,
        recommendations: RECOMMENDATIONS.to_vec(),
        analysis_date: analysis_date(),
        summary,
    }
}

fn analysis_date() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S").to_string()
}
