//! Preprocessing pipeline: merge, inflation adjustment, scaling, scoring.
//!
//! This crate provides:
//! - Stage trait and the PreprocessPipeline for composing the ordered steps
//! - merge_sources for joining the two cleaned sources on title
//! - InflationStage, ScaleStage and ScoreStage implementations
//! - seed_tables / score_dataset for running whole cohorts
//!
//! ## Architecture
//! The pipeline processes one cohort at a time:
//! 1. InflationStage rewrites the opening weekend in reference-year dollars
//! 2. ScaleStage fits the nine scaled columns into [0,1]
//! 3. ScoreStage combines scaled columns into `Seed_Score`
//!
//! Scaling is fit per cohort, so the `pixar`, `disney` and `total` tables
//! each run the pipeline on their own copy of the rows.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::score_dataset;
//!
//! let dataset = data_loader::RawDataset::load_from_dir("data".as_ref())?;
//! let tables = score_dataset(&dataset)?;
//!
//! for record in &tables.total {
//!     println!("{}: {:?}", record.title, record.seed_score);
//! }
//! ```

pub mod boxcox;
pub mod inflation;
pub mod merge;
pub mod preprocess_pipeline;
pub mod scale;
pub mod score;
pub mod traits;

// Re-export main types
pub use inflation::InflationStage;
pub use merge::merge_sources;
pub use preprocess_pipeline::PreprocessPipeline;
pub use scale::{normalize, Column, ScaleError, ScaleStage};
pub use score::{seed_score, ScoreStage};
pub use traits::Stage;

use anyhow::{Context, Result};
use data_loader::{CpiTable, MovieRecord, RawDataset, Studio};
use sources::{clean_imdb, clean_rotten, ImdbMovie, RottenMovie};

/// The three scored cohorts.
#[derive(Debug, Clone)]
pub struct SeedTables {
    pub pixar: Vec<MovieRecord>,
    pub disney: Vec<MovieRecord>,
    pub total: Vec<MovieRecord>,
}

impl SeedTables {
    /// The cohort for one studio, or the combined table.
    pub fn cohort(&self, studio: Option<Studio>) -> &[MovieRecord] {
        match studio {
            Some(Studio::Disney) => &self.disney,
            Some(Studio::Pixar) => &self.pixar,
            None => &self.total,
        }
    }
}

/// The ordered stages every cohort runs through.
pub fn standard_pipeline(cpi: CpiTable) -> PreprocessPipeline {
    PreprocessPipeline::new()
        .add_stage(InflationStage::new(cpi))
        .add_stage(ScaleStage)
        .add_stage(ScoreStage)
}

/// Merge the cleaned sources and score all three cohorts.
pub fn seed_tables(
    imdb: &[ImdbMovie],
    rotten: &[RottenMovie],
    cpi: &CpiTable,
) -> Result<SeedTables> {
    let total = merge_sources(imdb, rotten)?;
    let disney: Vec<MovieRecord> = total
        .iter()
        .filter(|record| record.studio == Studio::Disney)
        .cloned()
        .collect();
    let pixar: Vec<MovieRecord> = total
        .iter()
        .filter(|record| record.studio == Studio::Pixar)
        .cloned()
        .collect();

    let pipeline = standard_pipeline(cpi.clone());
    Ok(SeedTables {
        pixar: pipeline.apply(pixar).context("scoring the pixar cohort")?,
        disney: pipeline.apply(disney).context("scoring the disney cohort")?,
        total: pipeline.apply(total).context("scoring the combined cohort")?,
    })
}

/// Clean both sources for both studios and score the whole dataset.
pub fn score_dataset(dataset: &RawDataset) -> Result<SeedTables> {
    let mut imdb = clean_imdb(&dataset.imdb_disney, &dataset.disney_titles, Studio::Disney);
    imdb.extend(clean_imdb(
        &dataset.imdb_pixar,
        &dataset.pixar_titles,
        Studio::Pixar,
    ));

    let mut rotten = clean_rotten(
        &dataset.rotten_disney,
        &dataset.disney_titles,
        Studio::Disney,
    );
    rotten.extend(clean_rotten(
        &dataset.rotten_pixar,
        &dataset.pixar_titles,
        Studio::Pixar,
    ));

    tracing::info!(
        imdb_rows = imdb.len(),
        rotten_rows = rotten.len(),
        "sources cleaned"
    );
    seed_tables(&imdb, &rotten, &dataset.cpi)
}
