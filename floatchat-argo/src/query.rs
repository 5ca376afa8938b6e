//! Structured queries derived from free-text prompts.

use serde::{Deserialize, Serialize};

/// The measured variable a query is asking about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variable {
    Temperature,
    Salinity,
}

impl Variable {
    /// Lowercase wire/display name, matching the response payload fields.
    pub fn name(&self) -> &'static str {
        match self {
            Variable::Temperature => "temperature",
            Variable::Salinity => "salinity",
        }
    }
}

/// Coarse query class: the tsunami branch bypasses the statistical path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryKind {
    General,
    Tsunami,
}

/// Named region tags usable in a [`StructuredQuery`].
///
/// Only the southern ocean is recognized on the generic path; it maps to a
/// `latitude < -40` predicate rather than a bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamedRegion {
    Southern,
}

/// A filter query derived from prompt text.
///
/// Constructed fresh per request and never mutated afterwards. Depth
/// bounds are inclusive and expressed in dbar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructuredQuery {
    pub variable: Variable,
    pub min_depth: Option<f64>,
    pub max_depth: Option<f64>,
    pub region: Option<NamedRegion>,
    pub query_type: QueryKind,
}

impl Default for StructuredQuery {
    fn default() -> Self {
        StructuredQuery {
            variable: Variable::Temperature,
            min_depth: None,
            max_depth: None,
            region: None,
            query_type: QueryKind::General,
        }
    }
}
