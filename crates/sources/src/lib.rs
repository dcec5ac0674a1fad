//! # Sources Crate
//!
//! This crate cleans the two scraped metadata sources down to one row per
//! canonical title, ready for merging.
//!
//! ## Components
//!
//! ### IMDB Source
//! Audience rating, vote counts and the box-office figures:
//! - Filters the raw scrape to canonical animated features
//! - Extracts budget / gross / opening weekend from the box-office blob
//! - Derives yearly gross and vote rates
//! - Applies the static opening-weekend corrections
//!
//! ### Rotten Tomatoes Source
//! Audience and critic scores:
//! - Remaps scraped titles through the static alias tables
//! - Parses release years from long-form dates (Disney export)
//! - De-duplicates per title
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{RawDataset, Studio};
//! use sources::{clean_imdb, clean_rotten};
//!
//! let dataset = RawDataset::load_from_dir("data".as_ref())?;
//!
//! let imdb = clean_imdb(&dataset.imdb_pixar, &dataset.pixar_titles, Studio::Pixar);
//! let rotten = clean_rotten(&dataset.rotten_pixar, &dataset.pixar_titles, Studio::Pixar);
//! ```

// Public modules
pub mod box_office;
pub mod corrections;
pub mod imdb;
pub mod rotten;

// Re-export commonly used types
pub use box_office::{parse_box_office, BoxOffice};
pub use imdb::{clean_imdb, ImdbMovie};
pub use rotten::{clean_rotten, RottenMovie};
