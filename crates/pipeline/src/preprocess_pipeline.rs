//! The PreprocessPipeline orchestrates the derivation stages.
//!
//! This module provides the main PreprocessPipeline struct that chains
//! the ordered stages together using the builder pattern.

use crate::traits::Stage;
use anyhow::Result;
use data_loader::MovieRecord;
use tracing;

/// Chains preprocessing stages into an ordered pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = PreprocessPipeline::new()
///     .add_stage(InflationStage::new(cpi))
///     .add_stage(ScaleStage)
///     .add_stage(ScoreStage);
///
/// let scored = pipeline.apply(records)?;
/// ```
pub struct PreprocessPipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl PreprocessPipeline {
    /// Create a new empty PreprocessPipeline.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Add a stage to the pipeline (builder pattern).
    pub fn add_stage(mut self, stage: impl Stage + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Apply all stages in sequence to the cohort.
    ///
    /// # Arguments
    /// * `records` - The cohort to preprocess
    ///
    /// # Returns
    /// * `Ok(Vec<MovieRecord>)` - The cohort after every stage
    /// * `Err` - If any stage fails
    pub fn apply(&self, records: Vec<MovieRecord>) -> Result<Vec<MovieRecord>> {
        let mut current = records;
        for stage in &self.stages {
            tracing::debug!(
                "Applying stage: {} (record count: {})",
                stage.name(),
                current.len()
            );
            current = stage.apply(current)?;
        }
        Ok(current)
    }
}

impl Default for PreprocessPipeline {
    fn default() -> Self {
        Self::new()
    }
}
