//! Statistics aggregation over filtered ocean profile datasets.
//!
//! Everything here is a pure function of a dataset subset and a chosen
//! variable: descriptive summaries, percentile bands, anomaly findings
//! and the qualitative location narrative. Empty inputs always produce
//! neutral/empty results, never errors; emptiness is a normal outcome of
//! filtering, not a fault.

pub mod anomaly;
pub mod describe;
pub mod insights;
pub mod probability;
pub mod summary;

pub use anomaly::{find_anomalies, AnomalyFinding, AnomalyKind, Severity};
pub use insights::location_insights;
pub use probability::{probabilities, Probabilities};
pub use summary::{query_stats, QueryStats};
