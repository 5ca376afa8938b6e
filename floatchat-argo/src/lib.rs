//! Core types and dataset handling for ARGO ocean profile data.
//!
//! An ARGO profile record carries a position (latitude/longitude), a
//! pressure reading (dbar, used as a depth proxy) and the measured
//! temperature (°C) and salinity (PSU). This crate loads pre-cleaned CSV
//! exports of those records into an in-memory [`Dataset`] and provides
//! the query predicates ([`StructuredQuery`], [`RegionBox`]) the rest of
//! the workspace filters with.
//!
//! The dataset is loaded once at startup and treated as read-only for the
//! lifetime of the process; every filter produces a fresh subset and never
//! mutates its source.

pub mod dataset;
pub mod query;
pub mod record;
pub mod region;

pub use dataset::Dataset;
pub use query::{NamedRegion, QueryKind, StructuredQuery, Variable};
pub use record::ProfileRecord;
pub use region::{RegionBox, OCEAN_REGIONS};
