//! Launch dataset
//!
//! Loaded once at startup and shared read-only (`Arc<Dataset>`) by every
//! request handler for the lifetime of the process.

mod record;

pub use record::{LaunchRecord, Outcome};

use csv::ReaderBuilder;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

use crate::errors::{DashboardError, Result};

/// Columns every dataset must provide
pub const REQUIRED_COLUMNS: [&str; 4] = [
    "Launch Site",
    "Payload Mass (kg)",
    "class",
    "Booster Version Category",
];

/// Inclusive payload bounds observed in the dataset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadBounds {
    pub min: f64,
    pub max: f64,
}

/// Per-site success/failure tally
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SiteSummary {
    pub launches: usize,
    pub successes: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
}

impl Dataset {
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        Self { records }
    }

    /// Load the dataset from a CSV file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            DashboardError::dataset_load(format!(
                "Failed to open dataset {}: {}",
                path.display(),
                e
            ))
        })?;

        let dataset = Self::from_reader(BufReader::new(file))?;
        info!(
            "Loaded {} launch records from {}",
            dataset.len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Parse CSV content from any reader
    ///
    /// Header names are trimmed, field values are kept byte-for-byte. A
    /// missing required column or an unparsable row aborts the load.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|col| !headers.iter().any(|h| h == *col))
            .collect();
        if !missing.is_empty() {
            return Err(DashboardError::dataset_schema(format!(
                "Missing required column(s): {}",
                missing.join(", ")
            )));
        }

        let mut records = Vec::new();
        for (row_idx, result) in csv_reader.deserialize::<LaunchRecord>().enumerate() {
            let row_num = row_idx + 2; // 1-based, header is row 1
            let record = result.map_err(|e| {
                DashboardError::dataset_schema(format!("Row {}: {}", row_num, e))
            })?;
            if !record.payload_mass_kg.is_finite() || record.payload_mass_kg < 0.0 {
                return Err(DashboardError::dataset_schema(format!(
                    "Row {}: payload mass must be a non-negative number, got {}",
                    row_num, record.payload_mass_kg
                )));
            }
            records.push(record);
        }

        debug!("Parsed {} dataset rows", records.len());
        Ok(Self { records })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LaunchRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Min and max payload mass; `None` for an empty dataset
    pub fn payload_bounds(&self) -> Option<PayloadBounds> {
        let mut iter = self.records.iter().map(|r| r.payload_mass_kg);
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        Some(PayloadBounds { min, max })
    }

    /// Distinct launch sites in order of first appearance
    pub fn sites(&self) -> Vec<&str> {
        let mut sites: Vec<&str> = Vec::new();
        for record in &self.records {
            if !sites.contains(&record.launch_site.as_str()) {
                sites.push(&record.launch_site);
            }
        }
        sites
    }

    /// Launch and success counts grouped by site
    pub fn site_summaries(&self) -> BTreeMap<&str, SiteSummary> {
        let mut summaries: BTreeMap<&str, SiteSummary> = BTreeMap::new();
        for record in &self.records {
            let entry = summaries.entry(record.launch_site.as_str()).or_default();
            entry.launches += 1;
            if record.is_success() {
                entry.successes += 1;
            }
        }
        summaries
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a LaunchRecord;
    type IntoIter = std::slice::Iter<'a, LaunchRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
