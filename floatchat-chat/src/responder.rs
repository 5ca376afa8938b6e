//! Canned narrative templates keyed on query intent.
//!
//! Each template is a deterministic string-formatting function over the
//! aggregated values: identical inputs always produce identical text.
//! Intents without a template return `None`, which sends the caller down
//! the generic statistical path.

use crate::intent::{self, Intent};
use floatchat_argo::{Dataset, RegionBox, Variable};
use floatchat_stats::describe;
use floatchat_stats::QueryStats;
use std::fmt::Write;

/// Summary text for an empty generic-path subset.
pub static NO_DATA_SUMMARY: &str = "No ARGO data available for this query. Try asking about \
temperature, salinity, pressure, marine life, glaciers, or climate change.";

/// Compose the templated narrative for a prompt, if its intent has one.
///
/// Classifies the prompt, restricts the dataset to the extracted region
/// box when one is named, and dispatches on intent. Returns `None` for
/// intents served by the generic statistical path (temperature, regional,
/// general).
pub fn intelligent_response(prompt: &str, dataset: &Dataset) -> Option<String> {
    let intent = intent::classify(prompt);
    let region = intent::extract_region(prompt);

    let filtered = match region {
        Some(bbox) => dataset.filter_box(bbox),
        None => dataset.clone(),
    };

    match intent {
        Intent::Pressure => Some(pressure_response(&filtered, region)),
        Intent::GlacierIce => Some(glacier_ice_response(&filtered, prompt)),
        Intent::MarineLife => Some(marine_life_response(&filtered, region)),
        Intent::Climate => Some(climate_response(&filtered)),
        Intent::Salinity => Some(salinity_response(&filtered, region)),
        Intent::Currents => Some(currents_response()),
        _ => None,
    }
}

/// The generic-path summary template over computed statistics.
pub fn summarize(stats: &QueryStats) -> String {
    let mut summary = format!(
        "Based on {} ARGO measurements, the {} ranges from {} to {}, with an average of {}. \
         Data spans depths from {} to {} dbar. ",
        stats.data_points,
        stats.variable.name(),
        stats.min_value,
        stats.max_value,
        stats.mean_value,
        stats.depth_range.0,
        stats.depth_range.1,
    );

    match stats.variable {
        Variable::Temperature => {
            summary += if stats.mean_value < 5.0 {
                "These cold temperatures suggest polar or deep ocean conditions."
            } else if stats.mean_value > 20.0 {
                "These warm temperatures indicate tropical surface waters."
            } else {
                "These moderate temperatures are typical of mid-latitude oceans."
            };
        }
        Variable::Salinity => {
            if stats.mean_value < 34.0 {
                summary += "Lower salinity may indicate freshwater influence or high precipitation areas.";
            } else if stats.mean_value > 36.0 {
                summary += "Higher salinity suggests evaporation-dominated regions.";
            }
        }
    }

    summary
}

fn region_name(region: Option<&RegionBox>, fallback: &'static str) -> String {
    region.map_or_else(|| fallback.to_string(), |r| r.name.to_string())
}

fn pressure_response(subset: &Dataset, region: Option<&'static RegionBox>) -> String {
    if subset.is_empty() {
        return "Insufficient pressure data available.".to_string();
    }

    let pressures = subset.pressures();
    let avg = describe::mean(&pressures);
    let name = region_name(region, "the analyzed region");

    let mut response = format!("**Water Pressure Analysis for {name}:**\n\n");
    writeln!(
        response,
        "Average depth: {:.1} dbar (approximately {:.0} meters)",
        avg, avg
    )
    .ok();
    writeln!(
        response,
        "Depth range: {:.1} to {:.1} dbar",
        describe::min(&pressures),
        describe::max(&pressures)
    )
    .ok();
    writeln!(response, "Data points: {} measurements\n", subset.len()).ok();

    response += if avg < 100.0 {
        "This represents primarily surface and shallow water measurements. Surface pressure \
         is crucial for understanding wave dynamics and near-surface ocean processes."
    } else if avg < 1000.0 {
        "This covers the upper ocean and thermocline region. Pressure at these depths affects \
         nutrient distribution and marine life habitats."
    } else {
        "This includes deep ocean measurements. High pressure at these depths creates unique \
         environments for deep-sea organisms and affects ocean circulation patterns."
    };

    response
}

fn glacier_ice_response(subset: &Dataset, prompt: &str) -> String {
    let text = prompt.to_lowercase();

    if text.contains("antarctica") || text.contains("antarctic") {
        let antarctic: Dataset = Dataset::new(
            subset
                .records()
                .iter()
                .filter(|r| r.latitude < -60.0)
                .cloned()
                .collect(),
        );
        if !antarctic.is_empty() {
            let avg_temp = describe::mean(&antarctic.temperatures());
            let mut response = String::from("**Antarctic Glacier and Ice Analysis:**\n\n");
            writeln!(response, "Current average temperature: {}°C", describe::round2(avg_temp)).ok();
            writeln!(response, "Measurements: {} data points\n", antarctic.len()).ok();

            if avg_temp > -1.0 {
                response += "⚠️ **Critical Finding:** Temperatures are above typical Antarctic levels. \
                    Warmer ocean water accelerates ice shelf melting from below. \
                    This contributes to sea level rise and disrupts ocean circulation patterns.\n\n";
            } else {
                response += "Temperatures are within expected range for Antarctic waters. \
                    However, even small increases can significantly impact ice stability.\n\n";
            }

            response += "**Key Impacts:**\n\
                - Ice shelf melting increases freshwater input\n\
                - Affects global ocean salinity and circulation\n\
                - Contributes to sea level rise\n\
                - Disrupts marine ecosystems adapted to cold conditions";

            return response;
        }
    }

    "**Polar Ice and Glacier Melting:**\n\n\
     Ocean temperature and salinity data indicate:\n\
     - Warmer ocean currents accelerate ice melting from below\n\
     - Freshwater from melting ice reduces ocean salinity\n\
     - This affects global ocean circulation (thermohaline circulation)\n\
     - Sea level rise impacts coastal communities worldwide\n\n\
     Current data shows ongoing changes in polar regions that require continuous monitoring."
        .to_string()
}

fn marine_life_response(subset: &Dataset, region: Option<&'static RegionBox>) -> String {
    if subset.is_empty() {
        return "Insufficient data for marine life analysis.".to_string();
    }

    let name = region_name(region, "this region");
    let mut response = format!("**Marine Life Conditions in {name}:**\n\n");

    let avg_temp = describe::mean(&subset.temperatures());
    writeln!(response, "Water temperature: {}°C", describe::round2(avg_temp)).ok();
    response += if avg_temp < 5.0 {
        "- Cold water supports: Krill, seals, penguins, cold-water fish\n\
         - High oxygen levels support dense populations\n"
    } else if avg_temp < 15.0 {
        "- Temperate conditions support: Diverse fish species, marine mammals, kelp forests\n\
         - Rich biodiversity zone\n"
    } else {
        "- Warm water supports: Coral reefs, tropical fish, sea turtles\n\
         - High biodiversity but sensitive to temperature changes\n"
    };

    let avg_sal = describe::mean(&subset.salinities());
    writeln!(response, "\nSalinity: {} PSU", describe::round2(avg_sal)).ok();
    if avg_sal < 34.0 {
        response += "- Lower salinity may indicate freshwater influence\n\
                     - Affects species distribution and osmoregulation\n";
    }

    let avg_depth = describe::mean(&subset.pressures());
    response += if avg_depth < 200.0 {
        "\n**Habitat Zone:** Sunlight-rich surface waters (photic zone)\n\
         - Supports photosynthesis and primary production\n\
         - Most diverse marine life\n"
    } else if avg_depth < 1000.0 {
        "\n**Habitat Zone:** Twilight zone (mesopelagic)\n\
         - Limited light, specialized species\n\
         - Important for carbon cycling\n"
    } else {
        "\n**Habitat Zone:** Deep ocean (bathypelagic/abyssal)\n\
         - Extreme pressure, no light\n\
         - Unique adapted species\n"
    };

    response
}

fn climate_response(subset: &Dataset) -> String {
    let mut response = String::from("**Climate Change and Ocean Impact:**\n\n");

    if !subset.is_empty() {
        let temperatures = subset.temperatures();
        writeln!(
            response,
            "Current ocean temperature: {}°C",
            describe::round2(describe::mean(&temperatures))
        )
        .ok();
        writeln!(
            response,
            "Temperature variability: {}°C\n",
            describe::round2(describe::stddev(&temperatures))
        )
        .ok();
    }

    response += "**Key Climate Indicators:**\n\
        - Ocean absorbs 90% of excess heat from global warming\n\
        - Rising temperatures affect marine ecosystems\n\
        - Changes in ocean circulation patterns\n\
        - Increased stratification reduces nutrient mixing\n\n";

    response += "**Salinity Changes:**\n\
        - Freshwater input from melting ice\n\
        - Altered precipitation patterns\n\
        - Impacts ocean density and circulation\n\n";

    response += "**Global Impacts:**\n\
        - Sea level rise\n\
        - Ocean acidification\n\
        - Coral bleaching\n\
        - Shifts in marine species distribution";

    response
}

fn salinity_response(subset: &Dataset, region: Option<&'static RegionBox>) -> String {
    if subset.is_empty() {
        return "Salinity data not available.".to_string();
    }

    let salinities = subset.salinities();
    let name = region_name(region, "the region");
    format!(
        "**Salinity Analysis for {}:**\n\nAverage salinity: {} PSU\nRange: {} to {} PSU\n\n\
         Salinity affects ocean density, circulation, and marine life. Values between 34-36 PSU \
         are typical for open ocean.",
        name,
        describe::round2(describe::mean(&salinities)),
        describe::round2(describe::min(&salinities)),
        describe::round2(describe::max(&salinities)),
    )
}

fn currents_response() -> String {
    "**Ocean Currents:**\n\n\
     Ocean currents are driven by wind, temperature, and salinity differences. ARGO data helps \
     track water mass movement through temperature and salinity profiles. Major currents like \
     the Gulf Stream transport heat globally, affecting climate patterns."
        .to_string()
}
