//! Qualitative location narrative derived from subset means.

use crate::describe;
use floatchat_argo::Dataset;
use std::fmt::Write;

/// Describe where the filtered data sits, qualitatively.
///
/// Sentence order is fixed: region (by mean latitude), depth zone (by mean
/// pressure), then the average temperature and salinity values.
pub fn location_insights(subset: &Dataset) -> String {
    if subset.is_empty() {
        return "No data available for analysis.".to_string();
    }

    let mut sentences: Vec<String> = Vec::new();

    let avg_lat = describe::mean(&subset.latitudes());
    sentences.push(
        if avg_lat > 60.0 {
            "Arctic region: Expect cold temperatures and seasonal ice coverage."
        } else if avg_lat < -60.0 {
            "Antarctic region: Extremely cold waters with high salinity."
        } else if avg_lat.abs() < 23.5 {
            "Tropical region: Warm surface waters with strong stratification."
        } else {
            "Mid-latitude region: Moderate temperatures with seasonal variations."
        }
        .to_string(),
    );

    let avg_depth = describe::mean(&subset.pressures());
    sentences.push(
        if avg_depth < 100.0 {
            "Surface layer: High biological activity and temperature variability."
        } else if avg_depth < 1000.0 {
            "Intermediate depth: Transition zone with decreasing temperature."
        } else {
            "Deep ocean: Cold, stable conditions with minimal variability."
        }
        .to_string(),
    );

    let mut temp_sentence = String::new();
    write!(
        temp_sentence,
        "Current average temperature: {}°C",
        describe::round2(describe::mean(&subset.temperatures()))
    )
    .ok();
    sentences.push(temp_sentence);

    let mut sal_sentence = String::new();
    write!(
        sal_sentence,
        "Current average salinity: {} PSU",
        describe::round2(describe::mean(&subset.salinities()))
    )
    .ok();
    sentences.push(sal_sentence);

    sentences.join(" ")
}
