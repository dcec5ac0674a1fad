//! Merging the two cleaned sources into one table.
//!
//! The join is keyed by exact title string; the alias remapping in the
//! sources crate has already reconciled the spellings. Titles present in
//! only one source drop out (inner join). Duplicate titles are rejected
//! outright instead of silently multiplying rows.

use anyhow::{bail, Result};
use data_loader::MovieRecord;
use sources::{ImdbMovie, RottenMovie};
use std::collections::{HashMap, HashSet};

/// Inner-join cleaned IMDB and Rotten Tomatoes rows on title.
///
/// Row order follows the IMDB side. The studio tag is taken from the Rotten
/// side of the join.
pub fn merge_sources(imdb: &[ImdbMovie], rotten: &[RottenMovie]) -> Result<Vec<MovieRecord>> {
    let mut rotten_by_title: HashMap<&str, &RottenMovie> = HashMap::new();
    for movie in rotten {
        if rotten_by_title.insert(&movie.title, movie).is_some() {
            bail!("duplicate Rotten Tomatoes title after cleaning: {}", movie.title);
        }
    }

    let mut seen: HashSet<&str> = HashSet::new();
    let mut records = Vec::new();
    for movie in imdb {
        if !seen.insert(&movie.title) {
            bail!("duplicate IMDB title after cleaning: {}", movie.title);
        }
        let Some(rotten_movie) = rotten_by_title.get(movie.title.as_str()) else {
            tracing::debug!(title = %movie.title, "no Rotten Tomatoes row, dropping from merge");
            continue;
        };

        let mut record = MovieRecord::new(movie.title.as_str(), rotten_movie.studio, movie.year);
        record.i_audience_rating = movie.rating;
        record.i_audience_votes = movie.votes;
        record.budget = movie.budget;
        record.gross = movie.gross;
        record.opening_weekend = movie.opening_weekend;
        record.yearly_gross = movie.yearly_gross;
        record.yearly_votes = movie.yearly_votes;
        record.r_audience_score = rotten_movie.audience_score;
        record.r_audience_rating = rotten_movie.audience_rating;
        record.r_audience_count = rotten_movie.audience_count;
        record.r_critic_score = rotten_movie.critic_score;
        record.r_critic_rating = rotten_movie.critic_rating;

        records.push(record);
    }
    Ok(records)
}
