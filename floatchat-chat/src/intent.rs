//! Keyword-based intent classification and prompt parsing.
//!
//! Classification is an ordered rule table over lowercased substring
//! matches. Precedence is part of the contract: the first matching rule
//! wins, so a prompt mentioning both "pressure" and "temperature" is a
//! temperature query (the pressure rule explicitly excludes it), and any
//! tsunami keyword beats everything else.

use floatchat_argo::region::OCEAN_REGIONS;
use floatchat_argo::{NamedRegion, QueryKind, RegionBox, StructuredQuery};

/// Discrete query intents, one per response template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Tsunami,
    GlacierIce,
    MarineLife,
    Pressure,
    Salinity,
    Temperature,
    Currents,
    Climate,
    Regional,
    General,
}

/// One classification rule: matches when any `any` keyword is present
/// and none of the `none` keywords are.
struct Rule {
    intent: Intent,
    any: &'static [&'static str],
    none: &'static [&'static str],
}

const fn rule(intent: Intent, any: &'static [&'static str]) -> Rule {
    Rule { intent, any, none: &[] }
}

/// The rule table, in match precedence order.
static RULES: &[Rule] = &[
    rule(Intent::Tsunami, &["tsunami", "disaster", "flood", "earthquake", "hazard"]),
    rule(Intent::GlacierIce, &["glacier", "ice", "melting", "arctic", "antarctic", "polar"]),
    rule(
        Intent::MarineLife,
        &["fish", "whale", "marine life", "coral", "ecosystem", "species", "biodiversity"],
    ),
    Rule {
        intent: Intent::Pressure,
        any: &["pressure"],
        none: &["temperature", "salinity"],
    },
    Rule {
        intent: Intent::Salinity,
        any: &["salinity"],
        none: &["temperature", "pressure"],
    },
    rule(Intent::Temperature, &["temperature", "warm", "cold", "heat"]),
    rule(Intent::Currents, &["current", "circulation", "flow", "gulf stream"]),
    rule(Intent::Climate, &["climate", "warming", "change", "carbon"]),
    rule(
        Intent::Regional,
        &["indian ocean", "pacific", "atlantic", "southern ocean", "arctic ocean"],
    ),
];

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

/// Classify prompt text into an [`Intent`].
///
/// Always returns a tag; prompts matching no rule are [`Intent::General`].
pub fn classify(prompt: &str) -> Intent {
    let text = prompt.to_lowercase();
    RULES
        .iter()
        .find(|r| contains_any(&text, r.any) && !contains_any(&text, r.none))
        .map(|r| r.intent)
        .unwrap_or(Intent::General)
}

/// Keywords that route the generic path to the tsunami branch. A wider
/// net than the classifier's tsunami rule.
static TSUNAMI_QUERY_WORDS: &[&str] = &["tsunami", "flood", "disaster", "risk", "threat", "hazard"];

/// Parse a prompt into a [`StructuredQuery`] for the generic path.
///
/// Temperature is the silent default variable: only a literal "salinity"
/// switches it. "deep" and "surface" are mutually exclusive depth classes
/// with "deep" checked first.
pub fn parse_prompt(prompt: &str) -> StructuredQuery {
    let text = prompt.to_lowercase();
    let mut query = StructuredQuery::default();

    if contains_any(&text, TSUNAMI_QUERY_WORDS) {
        query.query_type = QueryKind::Tsunami;
        return query;
    }

    if text.contains("salinity") {
        query.variable = floatchat_argo::Variable::Salinity;
    }

    if text.contains("deep") {
        query.min_depth = Some(1000.0);
    } else if text.contains("surface") {
        query.max_depth = Some(50.0);
    }

    if text.contains("antarctica") || text.contains("southern ocean") {
        query.region = Some(NamedRegion::Southern);
    }

    query
}

/// Extract a named ocean region from prompt text.
///
/// Checked in fixed precedence order; the southern rule runs before the
/// arctic one so "antarctic" never falls through to the Arctic box.
pub fn extract_region(prompt: &str) -> Option<&'static RegionBox> {
    let text = prompt.to_lowercase();

    if text.contains("indian ocean") || text.contains("india") {
        Some(&OCEAN_REGIONS[0])
    } else if text.contains("pacific") {
        Some(&OCEAN_REGIONS[1])
    } else if text.contains("atlantic") {
        Some(&OCEAN_REGIONS[2])
    } else if text.contains("southern ocean") || text.contains("antarctica") || text.contains("antarctic") {
        Some(&OCEAN_REGIONS[3])
    } else if text.contains("arctic") {
        Some(&OCEAN_REGIONS[4])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use floatchat_argo::Variable;

    #[test]
    fn tsunami_keywords_beat_everything() {
        assert_eq!(classify("tsunami risk near the warm pacific"), Intent::Tsunami);
        assert_eq!(classify("Earthquake and salinity and temperature"), Intent::Tsunami);
        assert_eq!(classify("coastal flood hazard"), Intent::Tsunami);
    }

    #[test]
    fn temperature_beats_pressure_when_both_present() {
        assert_eq!(classify("pressure and temperature at depth"), Intent::Temperature);
        assert_eq!(classify("water pressure down deep"), Intent::Pressure);
    }

    #[test]
    fn salinity_rule_requires_absence_of_other_variables() {
        assert_eq!(classify("salinity levels"), Intent::Salinity);
        // "pressure" knocks out the salinity-specific rule; the prompt
        // then falls through to the later rules and ends up General.
        assert_eq!(classify("salinity and pressure"), Intent::General);
    }

    #[test]
    fn remaining_rules_fire_in_order() {
        assert_eq!(classify("are the glaciers melting"), Intent::GlacierIce);
        assert_eq!(classify("whale migration routes"), Intent::MarineLife);
        assert_eq!(classify("the gulf stream circulation"), Intent::Currents);
        assert_eq!(classify("carbon and climate"), Intent::Climate);
        assert_eq!(classify("the atlantic in general"), Intent::Regional);
        assert_eq!(classify("hello there"), Intent::General);
    }

    #[test]
    fn parse_prompt_short_circuits_on_tsunami_words() {
        let query = parse_prompt("what is the flood threat this year");
        assert_eq!(query.query_type, floatchat_argo::QueryKind::Tsunami);
        assert_eq!(query.min_depth, None);
    }

    #[test]
    fn parse_prompt_depth_classes_are_exclusive() {
        let deep = parse_prompt("deep water temperature");
        assert_eq!(deep.min_depth, Some(1000.0));
        assert_eq!(deep.max_depth, None);

        let surface = parse_prompt("surface salinity");
        assert_eq!(surface.max_depth, Some(50.0));
        assert_eq!(surface.variable, Variable::Salinity);

        // "deep" wins when both appear.
        let both = parse_prompt("deep and surface readings");
        assert_eq!(both.min_depth, Some(1000.0));
        assert_eq!(both.max_depth, None);
    }

    #[test]
    fn parse_prompt_defaults_to_temperature() {
        let query = parse_prompt("what does the data say");
        assert_eq!(query.variable, Variable::Temperature);
        assert_eq!(query.region, None);
    }

    #[test]
    fn parse_prompt_detects_southern_region() {
        let query = parse_prompt("conditions near antarctica");
        assert_eq!(query.region, Some(floatchat_argo::query::NamedRegion::Southern));
    }

    #[test]
    fn region_extraction_precedence() {
        assert_eq!(extract_region("the indian ocean").unwrap().name, "Indian Ocean");
        assert_eq!(extract_region("pacific storms").unwrap().name, "Pacific Ocean");
        assert_eq!(
            extract_region("antarctic shelf").unwrap().name,
            "Southern Ocean/Antarctica"
        );
        assert_eq!(extract_region("arctic ice").unwrap().name, "Arctic Ocean");
        assert!(extract_region("open water").is_none());
    }
}
