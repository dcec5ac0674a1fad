//! Cleaning of the raw Rotten Tomatoes scrape.
//!
//! Rotten Tomatoes spells several titles differently from the canonical
//! lists, so rows go through the static alias tables before the canonical
//! filter. The Disney export arrives unordered and with long-form release
//! dates; the Pixar export is already in release order.
//!
//! ## Learning Goals
//! - filter_map for filter-and-transform in one pass
//! - retain with a HashSet for stable first-wins deduplication
//! - Parsing substrings with rsplit and str::parse

use crate::corrections;
use data_loader::{RawRottenRecord, Studio, Year};
use std::collections::HashSet;

/// A cleaned Rotten Tomatoes row for one canonical title.
#[derive(Debug, Clone)]
pub struct RottenMovie {
    pub title: String,
    pub studio: Studio,
    pub audience_score: Option<f64>,
    pub audience_rating: Option<f64>,
    pub audience_count: Option<u64>,
    pub critic_score: Option<f64>,
    pub critic_rating: Option<f64>,
    pub release_year: Option<Year>,
}

/// Clean a raw Rotten Tomatoes table down to one row per canonical title.
///
/// ## Algorithm
/// 1. Remap titles through the per-studio alias table.
/// 2. Keep canonical titles only.
/// 3. Disney only: parse the release year from the trailing `", YYYY"` of
///    the long-form release date, drop rows without one, and order by it.
/// 4. De-duplicate by title, keeping the first.
pub fn clean_rotten(
    raw: &[RawRottenRecord],
    canonical_titles: &[String],
    studio: Studio,
) -> Vec<RottenMovie> {
    let canonical: HashSet<&str> = canonical_titles.iter().map(String::as_str).collect();

    let mut movies: Vec<RottenMovie> = raw
        .iter()
        .filter_map(|record| {
            let title = corrections::remap_title(studio, &record.title);
            if !canonical.contains(title) {
                return None;
            }
            Some(RottenMovie {
                title: title.to_string(),
                studio,
                audience_score: record.audience_score,
                audience_rating: record.audience_rating,
                audience_count: record.audience_count,
                critic_score: record.critic_score,
                critic_rating: record.critic_rating,
                release_year: record.release_date.as_deref().and_then(parse_release_year),
            })
        })
        .collect();

    if studio == Studio::Disney {
        movies.retain(|movie| movie.release_year.is_some());
        movies.sort_by_key(|movie| movie.release_year);
    }

    let mut seen: HashSet<String> = HashSet::new();
    movies.retain(|movie| seen.insert(movie.title.clone()));
    movies
}

/// Pull the year out of a long-form release date.
///
/// `"November 22, 2019"` → `Some(2019)`; a bare `"2019"` also parses.
fn parse_release_year(date: &str) -> Option<Year> {
    date.rsplit(", ").next()?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(title: &str, release_date: Option<&str>) -> RawRottenRecord {
        RawRottenRecord {
            title: title.to_string(),
            audience_score: Some(90.0),
            audience_rating: Some(4.3),
            audience_count: Some(100_000),
            critic_score: Some(95.0),
            critic_rating: Some(8.2),
            release_date: release_date.map(str::to_string),
        }
    }

    fn canon(titles: &[&str]) -> Vec<String> {
        titles.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_parse_release_year() {
        assert_eq!(parse_release_year("November 22, 2019"), Some(2019));
        assert_eq!(parse_release_year("2019"), Some(2019));
        assert_eq!(parse_release_year("sometime soon"), None);
    }

    #[test]
    fn test_alias_remap_joins_canonical_list() {
        let rows = vec![raw("Atlantis - The Lost Empire", Some("June 8, 2001"))];
        let movies = clean_rotten(&rows, &canon(&["Atlantis: The Lost Empire"]), Studio::Disney);
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "Atlantis: The Lost Empire");
    }

    #[test]
    fn test_disney_rows_without_release_date_are_dropped() {
        let rows = vec![
            raw("Cinderella", None),
            raw("Frozen II", Some("November 22, 2019")),
        ];
        let movies = clean_rotten(&rows, &canon(&["Cinderella", "Frozen II"]), Studio::Disney);
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "Frozen II");
    }

    #[test]
    fn test_disney_rows_are_ordered_by_release_year() {
        let rows = vec![
            raw("Frozen II", Some("November 22, 2019")),
            raw("Cinderella", Some("February 15, 1950")),
        ];
        let movies = clean_rotten(&rows, &canon(&["Cinderella", "Frozen II"]), Studio::Disney);
        assert_eq!(movies[0].title, "Cinderella");
        assert_eq!(movies[1].title, "Frozen II");
    }

    #[test]
    fn test_pixar_keeps_rows_without_release_date() {
        let rows = vec![raw("Toy Story", None)];
        let movies = clean_rotten(&rows, &canon(&["Toy Story"]), Studio::Pixar);
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].release_year, None);
    }

    #[test]
    fn test_dedup_keeps_first_row() {
        let mut first = raw("Toy Story", None);
        first.audience_score = Some(92.0);
        let mut second = raw("Toy Story", None);
        second.audience_score = Some(10.0);

        let movies = clean_rotten(&[first, second], &canon(&["Toy Story"]), Studio::Pixar);
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].audience_score, Some(92.0));
    }

    #[test]
    fn test_non_canonical_titles_are_dropped() {
        let rows = vec![raw("Some Other Film", Some("May 1, 2000"))];
        assert!(clean_rotten(&rows, &canon(&["Toy Story"]), Studio::Pixar).is_empty());
    }
}
