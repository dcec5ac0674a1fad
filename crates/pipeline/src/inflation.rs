//! Inflation adjustment of the opening-weekend figure.
//!
//! A 1995 weekend and a 2019 weekend are not comparable dollars, so the
//! popularity component of the seed score uses the CPI-adjusted figure. The
//! stage validates index coverage for every release year up front instead
//! of letting a missing year surface as a silent absent value mid-table.

use crate::traits::Stage;
use anyhow::{Context, Result};
use data_loader::{CpiTable, MovieRecord};
use std::collections::BTreeSet;

/// Writes `Opening_Weekend_USA_Adjusted` from the CPI table.
pub struct InflationStage {
    cpi: CpiTable,
}

impl InflationStage {
    pub fn new(cpi: CpiTable) -> Self {
        Self { cpi }
    }
}

impl Stage for InflationStage {
    fn name(&self) -> &str {
        "InflationStage"
    }

    fn apply(&self, mut records: Vec<MovieRecord>) -> Result<Vec<MovieRecord>> {
        let years: BTreeSet<u16> = records.iter().map(|record| record.year).collect();
        self.cpi
            .validate_coverage(years)
            .context("CPI index does not cover every release year")?;

        for record in &mut records {
            record.opening_weekend_adjusted = record
                .opening_weekend
                .and_then(|value| self.cpi.adjust(value as f64, record.year));
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::Studio;

    fn cpi() -> CpiTable {
        CpiTable::from_entries([(1995, 152.4), (2019, 255.7), (2020, 258.8)]).unwrap()
    }

    fn record(title: &str, year: u16, opening_weekend: Option<u64>) -> MovieRecord {
        let mut record = MovieRecord::new(title, Studio::Pixar, year);
        record.opening_weekend = opening_weekend;
        record
    }

    #[test]
    fn test_adjusts_to_reference_year_dollars() {
        let stage = InflationStage::new(cpi());
        let out = stage
            .apply(vec![record("Toy Story", 1995, Some(29_000_000))])
            .unwrap();

        let adjusted = out[0].opening_weekend_adjusted.unwrap();
        assert!((adjusted - 29_000_000.0 * 258.8 / 152.4).abs() < 1e-6);
    }

    #[test]
    fn test_reference_year_value_is_unchanged() {
        let stage = InflationStage::new(cpi());
        let out = stage
            .apply(vec![record("Soul", 2020, Some(10_000_000))])
            .unwrap();
        let adjusted = out[0].opening_weekend_adjusted.unwrap();
        assert!((adjusted - 10_000_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_absent_figure_stays_absent() {
        let stage = InflationStage::new(cpi());
        let out = stage.apply(vec![record("Toy Story", 1995, None)]).unwrap();
        assert_eq!(out[0].opening_weekend_adjusted, None);
    }

    #[test]
    fn test_uncovered_release_year_fails_the_stage() {
        let stage = InflationStage::new(cpi());
        let err = stage
            .apply(vec![record("Snow White", 1937, Some(1_000_000))])
            .unwrap_err();
        assert!(err.to_string().contains("CPI"));
    }
}
