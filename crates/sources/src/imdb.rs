//! Cleaning of the raw IMDB scrape.
//!
//! The scraper casts a wide net (it keeps every search hit whose production
//! companies mention the studio), so the raw table contains shorts, TV
//! entries and remakes. Cleaning narrows it to the canonical animated
//! features and extracts the numeric features scoring needs.
//!
//! ## Learning Goals
//! - HashSet for deduplication and O(1) canonical lookups
//! - Filtering and sorting borrowed rows before cloning
//! - let-else for early continue on absent fields

use crate::box_office;
use crate::corrections;
use data_loader::{RawImdbRecord, Studio, Year, REFERENCE_YEAR};
use std::collections::HashSet;

/// Release years from this one on use their true elapsed time when deriving
/// yearly rates; older titles all share the fixed window below.
const RATE_CUTOFF_YEAR: Year = 2010;

/// A cleaned IMDB row for one canonical title.
#[derive(Debug, Clone)]
pub struct ImdbMovie {
    pub title: String,
    pub studio: Studio,
    pub year: Year,
    pub rating: Option<f64>,
    pub votes: Option<u64>,
    pub budget: Option<u64>,
    pub gross: Option<u64>,
    pub opening_weekend: Option<u64>,
    pub yearly_gross: Option<f64>,
    pub yearly_votes: Option<f64>,
}

/// Clean a raw IMDB table down to one row per canonical title.
///
/// ## Algorithm
/// 1. Keep rows with `Kind == "movie"`, an `Animation` genre entry and a
///    canonical title; rows without a release year are dropped (the year
///    keys both ordering and inflation adjustment).
/// 2. Order by release year and de-duplicate by title, keeping the first.
/// 3. Extract budget / gross / opening weekend from the box-office blob.
/// 4. Derive yearly gross and vote rates relative to [`REFERENCE_YEAR`].
/// 5. Apply the static opening-weekend overrides.
pub fn clean_imdb(raw: &[RawImdbRecord], canonical_titles: &[String], studio: Studio) -> Vec<ImdbMovie> {
    let canonical: HashSet<&str> = canonical_titles.iter().map(String::as_str).collect();

    let mut kept: Vec<&RawImdbRecord> = raw
        .iter()
        .filter(|record| {
            record.kind == "movie"
                && record.genres.contains("Animation")
                && canonical.contains(record.title.as_str())
        })
        .collect();

    let dropped_years = kept.iter().filter(|record| record.year.is_none()).count();
    if dropped_years > 0 {
        tracing::warn!(
            count = dropped_years,
            studio = %studio,
            "dropping IMDB rows without a release year"
        );
    }
    kept.retain(|record| record.year.is_some());
    kept.sort_by_key(|record| record.year);

    let mut seen: HashSet<&str> = HashSet::new();
    let mut movies = Vec::new();
    for record in kept {
        if !seen.insert(record.title.as_str()) {
            continue;
        }
        // retain() above guarantees the year
        let Some(year) = record.year else { continue };

        let extracted = record
            .box_office
            .as_deref()
            .map(box_office::parse_box_office)
            .unwrap_or_default();

        let mut movie = ImdbMovie {
            title: record.title.clone(),
            studio,
            year,
            rating: record.rating,
            votes: record.votes,
            budget: extracted.budget,
            gross: extracted.gross,
            opening_weekend: extracted.opening_weekend,
            yearly_gross: extracted.gross.map(|gross| yearly_rate(gross as f64, year)),
            yearly_votes: record.votes.map(|votes| yearly_rate(votes as f64, year)),
        };

        if let Some(value) = corrections::opening_weekend_override(&movie.title) {
            movie.opening_weekend = Some(value);
        }

        movies.push(movie);
    }
    movies
}

/// Spread a cumulative figure over the years since release.
///
/// Titles released before [`RATE_CUTOFF_YEAR`] all divide by the same fixed
/// window so decades of accumulation don't drown recent releases. A title
/// from the reference year itself divides by zero; the resulting non-finite
/// rate is replaced during column scaling.
fn yearly_rate(value: f64, year: Year) -> f64 {
    let window = if year >= RATE_CUTOFF_YEAR {
        f64::from(REFERENCE_YEAR) - f64::from(year)
    } else {
        f64::from(REFERENCE_YEAR - RATE_CUTOFF_YEAR)
    };
    value / window
}
