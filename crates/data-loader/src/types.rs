//! Core domain types for the seed-scoring dataset.
//!
//! Key Rust concepts demonstrated here:
//! - Type aliases for domain clarity (Year)
//! - Structs with public fields
//! - Option<T> for values a source may not have
//! - Serde derives with per-field column renames
//!
//! Two families of types live here:
//! - `Raw*Record`: one row of a raw scraped CSV, exactly as the scrapers
//!   persisted it. Numeric fields that may be blank are `Option`s.
//! - `MovieRecord`: one merged row per title, carrying every derived field
//!   the pipeline computes on the way to `Seed_Score`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Release year of a movie
pub type Year = u16;

/// The year yearly gross and vote rates are measured against
pub const REFERENCE_YEAR: Year = 2021;

// =============================================================================
// Studio
// =============================================================================

/// The studio a title belongs to.
///
/// Rust concept: Enums can represent discrete categories
///
/// Serialized as the `Company` column of the output CSVs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Studio {
    Disney,
    Pixar,
}

impl fmt::Display for Studio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Studio::Disney => write!(f, "Disney"),
            Studio::Pixar => write!(f, "Pixar"),
        }
    }
}

// =============================================================================
// Raw scraped rows
// =============================================================================

/// One row of a raw IMDB CSV (`imdb_disney_raw.csv` / `imdb_pixar_raw.csv`).
///
/// Only the columns the pipeline consumes are modelled; serde skips the rest
/// (runtimes, countries, color info, ...). `genres` is the scraper's
/// stringified list (e.g. `"['Animation', 'Adventure']"`) and is matched by
/// substring, not parsed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawImdbRecord {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Genres")]
    pub genres: String,
    /// Rust concept: `Option<T>` represents a value that may or may not exist
    /// - `Some(blob)` means the scraper found a box-office table
    /// - `None` means the IMDB page had none
    #[serde(rename = "Box office")]
    pub box_office: Option<String>,
    #[serde(rename = "Rating")]
    pub rating: Option<f64>,
    #[serde(rename = "Votes")]
    pub votes: Option<u64>,
    #[serde(rename = "Year")]
    pub year: Option<Year>,
    #[serde(rename = "Kind")]
    pub kind: String,
}

/// One row of a raw Rotten Tomatoes CSV (`disney_raw.csv` / `pixar_raw.csv`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRottenRecord {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Audience_Score")]
    pub audience_score: Option<f64>,
    #[serde(rename = "Audience_Rating")]
    pub audience_rating: Option<f64>,
    #[serde(rename = "Audience_Count")]
    pub audience_count: Option<u64>,
    #[serde(rename = "Critic_Score")]
    pub critic_score: Option<f64>,
    #[serde(rename = "Critic_Rating")]
    pub critic_rating: Option<f64>,
    #[serde(rename = "Release_Date")]
    pub release_date: Option<String>,
}

// =============================================================================
// Merged record
// =============================================================================

/// One merged row per title: IMDB and Rotten Tomatoes signals, derived
/// fields, per-column scaled values in [0,1] and the final seed score.
///
/// Field names serialize to the column names of the output CSVs. Scaled
/// fields and `seed_score` start out `None` and are filled by the pipeline
/// stages; every other `Option` means the source simply didn't have the
/// value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieRecord {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Company")]
    pub studio: Studio,
    #[serde(rename = "Year")]
    pub year: Year,

    // IMDB signals
    #[serde(rename = "I_Audience_Rating")]
    pub i_audience_rating: Option<f64>,
    #[serde(rename = "I_Audience_Votes")]
    pub i_audience_votes: Option<u64>,

    // Box office
    #[serde(rename = "Budget")]
    pub budget: Option<u64>,
    #[serde(rename = "Cumulative Worldwide Gross")]
    pub gross: Option<u64>,
    #[serde(rename = "Opening_Weekend_USA")]
    pub opening_weekend: Option<u64>,
    #[serde(rename = "Opening_Weekend_USA_Adjusted")]
    pub opening_weekend_adjusted: Option<f64>,

    // Yearly rates relative to REFERENCE_YEAR
    #[serde(rename = "Yearly_Gross")]
    pub yearly_gross: Option<f64>,
    #[serde(rename = "Yearly_Votes")]
    pub yearly_votes: Option<f64>,

    // Rotten Tomatoes signals
    #[serde(rename = "R_Audience_Score")]
    pub r_audience_score: Option<f64>,
    #[serde(rename = "R_Audience_Rating")]
    pub r_audience_rating: Option<f64>,
    #[serde(rename = "R_Audience_Count")]
    pub r_audience_count: Option<u64>,
    #[serde(rename = "R_Critic_Score")]
    pub r_critic_score: Option<f64>,
    #[serde(rename = "R_Critic_Rating")]
    pub r_critic_rating: Option<f64>,

    // Scaled columns, filled by the scaling stage
    #[serde(rename = "I_Audience_Rating_Scaled")]
    pub i_audience_rating_scaled: Option<f64>,
    #[serde(rename = "R_Audience_Score_Scaled")]
    pub r_audience_score_scaled: Option<f64>,
    #[serde(rename = "R_Audience_Rating_Scaled")]
    pub r_audience_rating_scaled: Option<f64>,
    #[serde(rename = "R_Critic_Score_Scaled")]
    pub r_critic_score_scaled: Option<f64>,
    #[serde(rename = "R_Critic_Rating_Scaled")]
    pub r_critic_rating_scaled: Option<f64>,
    #[serde(rename = "Cumulative Worldwide Gross_Scaled")]
    pub gross_scaled: Option<f64>,
    #[serde(rename = "Opening_Weekend_USA_Scaled")]
    pub opening_weekend_scaled: Option<f64>,
    #[serde(rename = "Opening_Weekend_USA_Adjusted_Scaled")]
    pub opening_weekend_adjusted_scaled: Option<f64>,
    #[serde(rename = "Yearly_Votes_Scaled")]
    pub yearly_votes_scaled: Option<f64>,

    #[serde(rename = "Seed_Score")]
    pub seed_score: Option<f64>,
}

impl MovieRecord {
    /// Create a record with nothing but its identity filled in.
    pub fn new(title: impl Into<String>, studio: Studio, year: Year) -> Self {
        Self {
            title: title.into(),
            studio,
            year,
            i_audience_rating: None,
            i_audience_votes: None,
            budget: None,
            gross: None,
            opening_weekend: None,
            opening_weekend_adjusted: None,
            yearly_gross: None,
            yearly_votes: None,
            r_audience_score: None,
            r_audience_rating: None,
            r_audience_count: None,
            r_critic_score: None,
            r_critic_rating: None,
            i_audience_rating_scaled: None,
            r_audience_score_scaled: None,
            r_audience_rating_scaled: None,
            r_critic_score_scaled: None,
            r_critic_rating_scaled: None,
            gross_scaled: None,
            opening_weekend_scaled: None,
            opening_weekend_adjusted_scaled: None,
            yearly_votes_scaled: None,
            seed_score: None,
        }
    }
}
