//! Loading the whole raw dataset from a data directory.
//!
//! Rust concepts you'll learn:
//! - Using Rayon for parallel file loading
//! - Destructuring nested tuples
//! - Propagating errors out of parallel closures
//!
//! Expected layout under the data directory:
//!
//! ```text
//! titles/disney.txt           canonical Disney titles, one per line
//! titles/pixar.txt            canonical Pixar titles
//! IMDB/imdb_disney_raw.csv    raw IMDB scrape per studio
//! IMDB/imdb_pixar_raw.csv
//! RottenTomatoes/disney_raw.csv
//! RottenTomatoes/pixar_raw.csv
//! cpi.csv                     Year,CPI price index
//! ```

use crate::cpi::CpiTable;
use crate::error::Result;
use crate::parser;
use crate::types::{RawImdbRecord, RawRottenRecord};
use std::path::Path;

/// Every raw input table, loaded and validated but not yet cleaned.
#[derive(Debug)]
pub struct RawDataset {
    pub disney_titles: Vec<String>,
    pub pixar_titles: Vec<String>,
    pub imdb_disney: Vec<RawImdbRecord>,
    pub imdb_pixar: Vec<RawImdbRecord>,
    pub rotten_disney: Vec<RawRottenRecord>,
    pub rotten_pixar: Vec<RawRottenRecord>,
    pub cpi: CpiTable,
}

impl RawDataset {
    /// Load every input table from `data_dir`.
    ///
    /// The seven files are independent, so they are read with nested
    /// `rayon::join` calls rather than one after the other.
    pub fn load_from_dir(data_dir: &Path) -> Result<Self> {
        let disney_titles_path = data_dir.join("titles/disney.txt");
        let pixar_titles_path = data_dir.join("titles/pixar.txt");
        let imdb_disney_path = data_dir.join("IMDB/imdb_disney_raw.csv");
        let imdb_pixar_path = data_dir.join("IMDB/imdb_pixar_raw.csv");
        let rotten_disney_path = data_dir.join("RottenTomatoes/disney_raw.csv");
        let rotten_pixar_path = data_dir.join("RottenTomatoes/pixar_raw.csv");
        let cpi_path = data_dir.join("cpi.csv");

        // Read all seven files IN PARALLEL using Rayon
        // Rayon's `join` runs two closures in parallel
        // We nest joins to fan out across the whole input set
        let ((titles, imdb), (rotten, cpi)) = rayon::join(
            || {
                rayon::join(
                    || {
                        rayon::join(
                            || parser::load_titles(&disney_titles_path),
                            || parser::load_titles(&pixar_titles_path),
                        )
                    },
                    || {
                        rayon::join(
                            || parser::read_imdb_csv(&imdb_disney_path),
                            || parser::read_imdb_csv(&imdb_pixar_path),
                        )
                    },
                )
            },
            || {
                rayon::join(
                    || {
                        rayon::join(
                            || parser::read_rotten_csv(&rotten_disney_path),
                            || parser::read_rotten_csv(&rotten_pixar_path),
                        )
                    },
                    || CpiTable::load(&cpi_path),
                )
            },
        );

        // Handle errors from the parallel reads
        // The ? operator works because every closure returned Result<T>
        let (disney_titles, pixar_titles) = titles;
        let (imdb_disney, imdb_pixar) = imdb;
        let (rotten_disney, rotten_pixar) = rotten;

        let dataset = Self {
            disney_titles: disney_titles?,
            pixar_titles: pixar_titles?,
            imdb_disney: imdb_disney?,
            imdb_pixar: imdb_pixar?,
            rotten_disney: rotten_disney?,
            rotten_pixar: rotten_pixar?,
            cpi: cpi?,
        };

        tracing::info!(
            disney_titles = dataset.disney_titles.len(),
            pixar_titles = dataset.pixar_titles.len(),
            imdb_rows = dataset.imdb_disney.len() + dataset.imdb_pixar.len(),
            rotten_rows = dataset.rotten_disney.len() + dataset.rotten_pixar.len(),
            cpi_reference_year = dataset.cpi.reference_year(),
            "raw dataset loaded"
        );

        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;

    fn write_file(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        let mut file = fs::File::create(path).unwrap();
        write!(file, "{content}").unwrap();
    }

    #[test]
    fn test_load_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();

        write_file(&root.join("titles/disney.txt"), "Frozen II\n");
        write_file(&root.join("titles/pixar.txt"), "Toy Story\n");
        write_file(
            &root.join("IMDB/imdb_disney_raw.csv"),
            "Title,Genres,Box office,Rating,Votes,Year,Kind\n\
             Frozen II,\"['Animation']\",,6.8,150000,2019,movie\n",
        );
        write_file(
            &root.join("IMDB/imdb_pixar_raw.csv"),
            "Title,Genres,Box office,Rating,Votes,Year,Kind\n\
             Toy Story,\"['Animation']\",,8.3,900000,1995,movie\n",
        );
        write_file(
            &root.join("RottenTomatoes/disney_raw.csv"),
            "Title,Audience_Score,Audience_Rating,Audience_Count,Critic_Score,Critic_Rating,Release_Date\n\
             Frozen II,92.0,4.4,25000,77.0,6.9,\"November 22, 2019\"\n",
        );
        write_file(
            &root.join("RottenTomatoes/pixar_raw.csv"),
            "Title,Audience_Score,Audience_Rating,Audience_Count,Critic_Score,Critic_Rating,Release_Date\n\
             Toy Story,92.0,4.4,1000000,100.0,9.0,\"November 22, 1995\"\n",
        );
        write_file(&root.join("cpi.csv"), "Year,CPI\n1995,152.4\n2020,258.8\n");

        let dataset = RawDataset::load_from_dir(root).unwrap();
        assert_eq!(dataset.disney_titles, vec!["Frozen II"]);
        assert_eq!(dataset.pixar_titles, vec!["Toy Story"]);
        assert_eq!(dataset.imdb_disney.len(), 1);
        assert_eq!(dataset.imdb_pixar.len(), 1);
        assert_eq!(dataset.rotten_disney.len(), 1);
        assert_eq!(dataset.rotten_pixar.len(), 1);
        assert_eq!(dataset.cpi.reference_year(), 2020);
    }

    #[test]
    fn test_missing_file_fails_the_load() {
        let dir = tempfile::tempdir().unwrap();
        assert!(RawDataset::load_from_dir(dir.path()).is_err());
    }
}
