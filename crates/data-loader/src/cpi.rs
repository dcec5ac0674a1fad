//! Consumer-price-index table used for inflation adjustment.
//!
//! `adjusted = value * index[reference_year] / index[release_year]`, where
//! the reference year is the last year in the table. The table is validated
//! when it is built; a release year the table doesn't cover is surfaced as a
//! typed error by [`CpiTable::validate_coverage`] before any adjustment runs.

use crate::error::{DataLoadError, Result};
use crate::types::Year;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CpiRow {
    #[serde(rename = "Year")]
    year: Year,
    #[serde(rename = "CPI")]
    cpi: f64,
}

/// Year-indexed price multipliers, immutable once built.
#[derive(Debug, Clone)]
pub struct CpiTable {
    entries: BTreeMap<Year, f64>,
}

impl CpiTable {
    /// Build a table from (year, index) pairs.
    ///
    /// Fails on an empty table, a duplicate year, or a non-positive index
    /// value (the adjustment divides by it).
    pub fn from_entries(entries: impl IntoIterator<Item = (Year, f64)>) -> Result<Self> {
        let mut table = BTreeMap::new();
        for (year, cpi) in entries {
            if cpi <= 0.0 || !cpi.is_finite() {
                return Err(DataLoadError::InvalidValue {
                    field: "CPI".to_string(),
                    value: format!("{cpi} (year {year})"),
                });
            }
            if table.insert(year, cpi).is_some() {
                return Err(DataLoadError::ValidationError(format!(
                    "duplicate CPI entry for year {year}"
                )));
            }
        }
        if table.is_empty() {
            return Err(DataLoadError::EmptyTable("CPI index".to_string()));
        }
        Ok(Self { entries: table })
    }

    /// Load the table from a `Year,CPI` CSV file.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|_| DataLoadError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let mut reader = csv::Reader::from_reader(file);

        let mut entries = Vec::new();
        for row in reader.deserialize::<CpiRow>() {
            let row = row.map_err(|source| DataLoadError::CsvError {
                file: path.display().to_string(),
                source,
            })?;
            entries.push((row.year, row.cpi));
        }
        Self::from_entries(entries)
    }

    /// The year adjusted values are expressed in: the table's last year.
    pub fn reference_year(&self) -> Year {
        // from_entries rejects empty tables
        *self.entries.keys().next_back().unwrap_or(&0)
    }

    /// The index value for a year, if the table covers it.
    pub fn index(&self, year: Year) -> Option<f64> {
        self.entries.get(&year).copied()
    }

    /// Rescale `value` from `year` purchasing power to the reference year's.
    ///
    /// Returns `None` when the table has no entry for `year`.
    pub fn adjust(&self, value: f64, year: Year) -> Option<f64> {
        let year_index = self.index(year)?;
        let reference_index = self.index(self.reference_year())?;
        Some(value * reference_index / year_index)
    }

    /// Check up front that every given release year has an index entry.
    pub fn validate_coverage(&self, years: impl IntoIterator<Item = Year>) -> Result<()> {
        for year in years {
            if !self.entries.contains_key(&year) {
                return Err(DataLoadError::MissingCpiYear { year });
            }
        }
        Ok(())
    }
}
