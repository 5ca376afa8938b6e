//! In-memory dataset of profile records, with CSV loading and filtering.
//!
//! The dataset is an ordered, possibly empty collection of
//! [`ProfileRecord`]s. It is loaded once (from a CSV file or a directory
//! of CSV files) and then only ever read; filters clone the matching
//! records into a new `Dataset` so the shared source is never mutated.

use crate::query::{NamedRegion, StructuredQuery, Variable};
use crate::record::{ColumnIndex, ProfileRecord};
use crate::region::RegionBox;
use std::path::Path;

/// Southern-region queries select everything south of this latitude.
const SOUTHERN_LATITUDE_CUTOFF: f64 = -40.0;

/// An ordered, read-only collection of ARGO profile records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<ProfileRecord>,
}

impl Dataset {
    pub fn new(records: Vec<ProfileRecord>) -> Self {
        Dataset { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ProfileRecord] {
        &self.records
    }

    /// Parse CSV data into a dataset.
    ///
    /// The first row must be a header row; both canonical names and raw
    /// ARGO export names are accepted (see [`ColumnIndex`]). Lines
    /// starting with `#` are skipped, as are rows with missing or
    /// non-numeric values.
    pub fn from_csv_str(csv_data: &str) -> anyhow::Result<Dataset> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .comment(Some(b'#'))
            .from_reader(csv_data.as_bytes());

        let headers = rdr.headers()?.clone();
        let Some(columns) = ColumnIndex::from_headers(&headers) else {
            anyhow::bail!("CSV is missing required profile columns: {:?}", headers);
        };

        let mut records = Vec::new();
        let mut skipped = 0u32;
        for result in rdr.records() {
            let row = match result {
                Ok(r) => r,
                Err(_) => {
                    skipped += 1;
                    continue;
                }
            };
            match columns.parse_row(&row) {
                Some(record) => records.push(record),
                None => skipped += 1,
            }
        }
        log::info!(
            "loader: parsed {} profile records, skipped {} bad rows",
            records.len(),
            skipped
        );
        Ok(Dataset { records })
    }

    /// Load a dataset from a CSV file, or from every `*.csv` file in a
    /// directory (concatenated in directory-entry order).
    pub fn load(path: &Path) -> anyhow::Result<Dataset> {
        let mut combined = Vec::new();
        let mut files = 0u32;

        if path.is_dir() {
            for entry in std::fs::read_dir(path)? {
                let entry = entry?;
                let file = entry.path();
                if file.extension().map_or(false, |ext| ext == "csv") {
                    let data = std::fs::read_to_string(&file)?;
                    combined.extend(Dataset::from_csv_str(&data)?.records);
                    files += 1;
                }
            }
        } else {
            let data = std::fs::read_to_string(path)?;
            combined.extend(Dataset::from_csv_str(&data)?.records);
            files = 1;
        }

        log::info!(
            "loader: {} records loaded from {} file(s) at {}",
            combined.len(),
            files,
            path.display()
        );
        Ok(Dataset { records: combined })
    }

    /// Values of the requested query variable, in record order.
    pub fn values(&self, variable: Variable) -> Vec<f64> {
        self.records
            .iter()
            .map(|r| match variable {
                Variable::Temperature => r.temperature,
                Variable::Salinity => r.salinity,
            })
            .collect()
    }

    pub fn pressures(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.pressure).collect()
    }

    pub fn temperatures(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.temperature).collect()
    }

    pub fn salinities(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.salinity).collect()
    }

    pub fn latitudes(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.latitude).collect()
    }

    /// Apply a structured query's depth and region predicates.
    ///
    /// Depth bounds are inclusive on `pressure`; the southern region tag
    /// selects `latitude < -40`. All predicates are conjunctive. The
    /// result may be empty; callers check emptiness before computing
    /// ratios or means.
    pub fn filter(&self, query: &StructuredQuery) -> Dataset {
        let records = self
            .records
            .iter()
            .filter(|r| {
                if let Some(min) = query.min_depth {
                    if r.pressure < min {
                        return false;
                    }
                }
                if let Some(max) = query.max_depth {
                    if r.pressure > max {
                        return false;
                    }
                }
                match query.region {
                    Some(NamedRegion::Southern) => r.latitude < SOUTHERN_LATITUDE_CUTOFF,
                    None => true,
                }
            })
            .cloned()
            .collect();
        Dataset { records }
    }

    /// Keep only the records inside a bounding box (inclusive bounds).
    pub fn filter_box(&self, bbox: &RegionBox) -> Dataset {
        let records = self
            .records
            .iter()
            .filter(|r| bbox.contains(r.latitude, r.longitude))
            .cloned()
            .collect();
        Dataset { records }
    }
}
