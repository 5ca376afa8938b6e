//! Rule-based tsunami risk scoring over fixed coastal regions.
//!
//! This is a heuristic indicator blend, not a seismic model: variance in
//! the oceanographic readings inside each catalog region is converted to
//! an additive 0–100 score, averaged with a static prior per region, and
//! ranked. Regions with too few observations are excluded rather than
//! scored on noise.

pub mod analysis;
pub mod regions;
pub mod score;

pub use analysis::{generate_analysis, TsunamiAnalysis, RECOMMENDATIONS};
pub use regions::{RiskRegion, TSUNAMI_REGIONS};
pub use score::{rank_regions, score_region, timeframe, RegionRisk, RiskIndicators};
