//! Readers and writers for the CSV tables.
//!
//! Rust concepts you'll learn here:
//! - Deserializing CSV rows into structs with serde
//! - Error handling with the `?` operator
//! - Generic functions with trait bounds (DeserializeOwned)
//! - Working with file I/O
//!
//! The raw scrapes quote freely (the IMDB box-office blob contains commas),
//! so everything goes through the `csv` crate with serde rather than
//! hand-splitting lines. Canonical title lists are plain text, one title per
//! line.

use crate::error::{DataLoadError, Result};
use crate::types::{MovieRecord, RawImdbRecord, RawRottenRecord};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::path::Path;

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Deserialize every row of a headed CSV file.
fn read_csv<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path).map_err(|_| DataLoadError::FileNotFound {
        path: path.display().to_string(),
    })?;
    let label = file_label(path);

    let mut reader = csv::Reader::from_reader(file);
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row.map_err(|source| DataLoadError::CsvError {
            file: label.clone(),
            source,
        })?);
    }
    Ok(rows)
}

/// Read a raw IMDB scrape (`imdb_disney_raw.csv` / `imdb_pixar_raw.csv`).
pub fn read_imdb_csv(path: &Path) -> Result<Vec<RawImdbRecord>> {
    read_csv(path)
}

/// Read a raw Rotten Tomatoes scrape (`disney_raw.csv` / `pixar_raw.csv`).
pub fn read_rotten_csv(path: &Path) -> Result<Vec<RawRottenRecord>> {
    read_csv(path)
}

/// Load a canonical title list: one title per line, blank lines skipped.
pub fn load_titles(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|_| DataLoadError::FileNotFound {
        path: path.display().to_string(),
    })?;

    let titles: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if titles.is_empty() {
        return Err(DataLoadError::EmptyTable(file_label(path)));
    }
    Ok(titles)
}

/// Write scored records out with the original column names.
pub fn write_movie_csv(path: &Path, records: &[MovieRecord]) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);
    let label = file_label(path);

    for record in records {
        writer
            .serialize(record)
            .map_err(|source| DataLoadError::CsvError {
                file: label.clone(),
                source,
            })?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Studio;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_imdb_csv_blank_fields_are_absent() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "Title,Genres,Box office,Rating,Votes,Year,Kind").unwrap();
        writeln!(
            tmp,
            "Toy Story,\"['Animation', 'Comedy']\",\"{{'Budget': '$30,000,000 (estimated)'}}\",8.3,900000,1995,movie"
        )
        .unwrap();
        writeln!(tmp, "Mystery Short,\"['Animation']\",,,,,movie").unwrap();

        let rows = read_imdb_csv(tmp.path()).unwrap();
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].title, "Toy Story");
        assert_eq!(rows[0].rating, Some(8.3));
        assert_eq!(rows[0].votes, Some(900_000));
        assert_eq!(rows[0].year, Some(1995));
        assert!(rows[0].box_office.as_deref().unwrap().contains("Budget"));

        assert!(rows[1].rating.is_none());
        assert!(rows[1].year.is_none());
        assert!(rows[1].box_office.is_none());
    }

    #[test]
    fn test_read_rotten_csv() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(
            tmp,
            "Title,Audience_Score,Audience_Rating,Audience_Count,Critic_Score,Critic_Rating,Release_Date"
        )
        .unwrap();
        writeln!(tmp, "Frozen II,92.0,4.4,25000,77.0,6.9,\"November 22, 2019\"").unwrap();

        let rows = read_rotten_csv(tmp.path()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].audience_score, Some(92.0));
        assert_eq!(rows[0].release_date.as_deref(), Some("November 22, 2019"));
    }

    #[test]
    fn test_load_titles_skips_blank_lines() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "Toy Story").unwrap();
        writeln!(tmp).unwrap();
        writeln!(tmp, "  Finding Nemo  ").unwrap();

        let titles = load_titles(tmp.path()).unwrap();
        assert_eq!(titles, vec!["Toy Story", "Finding Nemo"]);
    }

    #[test]
    fn test_load_titles_empty_file_is_an_error() {
        let tmp = NamedTempFile::new().unwrap();
        assert!(load_titles(tmp.path()).is_err());
    }

    #[test]
    fn test_movie_csv_round_trip_column_names() {
        let mut record = crate::types::MovieRecord::new("Toy Story", Studio::Pixar, 1995);
        record.seed_score = Some(0.87);
        record.opening_weekend = Some(29_000_000);

        let tmp = NamedTempFile::new().unwrap();
        write_movie_csv(tmp.path(), &[record]).unwrap();

        let content = std::fs::read_to_string(tmp.path()).unwrap();
        let header = content.lines().next().unwrap();
        assert!(header.contains("Company"));
        assert!(header.contains("Cumulative Worldwide Gross"));
        assert!(header.contains("Opening_Weekend_USA_Adjusted_Scaled"));
        assert!(header.contains("Seed_Score"));
        assert!(content.contains("Pixar"));
        assert!(content.contains("29000000"));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = read_imdb_csv(Path::new("does-not-exist.csv")).unwrap_err();
        assert!(err.to_string().contains("does-not-exist.csv"));
    }
}
