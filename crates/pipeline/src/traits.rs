//! Core traits for the preprocessing pipeline.
//!
//! This module defines the Stage trait that allows the ordered
//! preprocessing steps to be composed into a PreprocessPipeline.

use anyhow::Result;
use data_loader::MovieRecord;

/// Core trait for a preprocessing step over one cohort of records.
///
/// ## Design Note
/// - `Send + Sync` allows stages to be used in concurrent contexts
/// - Stages take ownership of the Vec<MovieRecord> and return the
///   transformed Vec, so derivation steps can mutate rows in place
pub trait Stage: Send + Sync {
    /// Returns the name of this stage (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this stage to a cohort of records.
    ///
    /// # Arguments
    /// * `records` - The cohort to transform (takes ownership)
    ///
    /// # Returns
    /// * `Ok(Vec<MovieRecord>)` - The transformed cohort
    /// * `Err` - If the stage fails (missing CPI year, unscalable column, ...)
    fn apply(&self, records: Vec<MovieRecord>) -> Result<Vec<MovieRecord>>;
}
