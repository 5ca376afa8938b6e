//! A single ARGO profile observation and its CSV row parsing.

use chrono::NaiveDateTime;
use csv::StringRecord;
use serde::{Deserialize, Serialize};

/// Timestamp formats accepted in the optional `time` column.
const TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// One oceanographic observation from an ARGO float.
///
/// All numeric fields are guaranteed present after ingestion; rows with
/// missing or unparseable values are dropped by the loader. Only `time`
/// may be absent (some exports strip it during preprocessing).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub time: Option<NaiveDateTime>,
    /// Degrees north, -90..90.
    pub latitude: f64,
    /// Degrees east, -180..180.
    pub longitude: f64,
    /// Pressure in dbar, used as a depth proxy.
    pub pressure: f64,
    /// Temperature in °C.
    pub temperature: f64,
    /// Salinity in PSU.
    pub salinity: f64,
}

/// Column positions resolved from a CSV header row.
///
/// Accepts both the canonical column names and the raw ARGO export names
/// (`pres_adjusted`, `temp_adjusted`, `psal_adjusted`).
#[derive(Debug, Clone)]
pub struct ColumnIndex {
    time: Option<usize>,
    latitude: usize,
    longitude: usize,
    pressure: usize,
    temperature: usize,
    salinity: usize,
}

impl ColumnIndex {
    /// Resolve column positions from a header row.
    ///
    /// Returns `None` when any required column is missing.
    pub fn from_headers(headers: &StringRecord) -> Option<Self> {
        let find = |names: &[&str]| {
            headers
                .iter()
                .position(|h| names.contains(&h.trim().to_lowercase().as_str()))
        };

        Some(ColumnIndex {
            time: find(&["time", "date", "juld"]),
            latitude: find(&["latitude", "lat"])?,
            longitude: find(&["longitude", "lon"])?,
            pressure: find(&["pressure", "pres_adjusted", "pres"])?,
            temperature: find(&["temperature", "temp_adjusted", "temp"])?,
            salinity: find(&["salinity", "psal_adjusted", "psal"])?,
        })
    }

    /// Parse one data row into a [`ProfileRecord`].
    ///
    /// Returns `None` when any required field is missing or non-numeric;
    /// an unparseable `time` value degrades to `None` rather than dropping
    /// the row.
    pub fn parse_row(&self, row: &StringRecord) -> Option<ProfileRecord> {
        let field = |idx: usize| -> Option<f64> { row.get(idx)?.trim().parse().ok() };

        let time = self
            .time
            .and_then(|idx| row.get(idx))
            .map(str::trim)
            .and_then(parse_time);

        Some(ProfileRecord {
            time,
            latitude: field(self.latitude)?,
            longitude: field(self.longitude)?,
            pressure: field(self.pressure)?,
            temperature: field(self.temperature)?,
            salinity: field(self.salinity)?,
        })
    }
}

fn parse_time(s: &str) -> Option<NaiveDateTime> {
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}
