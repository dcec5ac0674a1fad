//! # Data Loader Crate
//!
//! This crate handles loading the raw scraped movie tables and the CPI
//! price index.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Studio, RawImdbRecord, RawRottenRecord,
//!   MovieRecord)
//! - **parser**: Read the raw CSVs and title lists, write scored CSVs
//! - **cpi**: The year-indexed price table used for inflation adjustment
//! - **dataset**: Load the whole input directory in one call
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::RawDataset;
//! use std::path::Path;
//!
//! // Load every raw table
//! let dataset = RawDataset::load_from_dir(Path::new("data"))?;
//!
//! println!(
//!     "{} Disney titles, {} Pixar titles, CPI reference year {}",
//!     dataset.disney_titles.len(),
//!     dataset.pixar_titles.len(),
//!     dataset.cpi.reference_year()
//! );
//! ```
//!
//! ## Learning Goals
//!
//! This crate demonstrates several key Rust concepts:
//!
//! 1. **Ownership and Borrowing**: RawDataset owns the tables, callers borrow slices
//! 2. **Error Handling**: Using Result<T> and custom error types
//! 3. **Optionality**: Option<T> makes "field absent" a first-class state
//! 4. **Serde**: Deriving Serialize/Deserialize and renaming columns
//! 5. **Collections**: BTreeMap for the sorted CPI index
//! 6. **Modules**: Organizing code into logical units
//! 7. **Parallel Processing**: Using Rayon for data-parallel loading

// Public modules
pub mod cpi;
pub mod dataset;
pub mod error;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use cpi::CpiTable;
pub use dataset::RawDataset;
pub use error::{DataLoadError, Result};
pub use types::{
    // Type aliases and constants
    Year,
    REFERENCE_YEAR,
    // Core types
    MovieRecord,
    RawImdbRecord,
    RawRottenRecord,
    // Enums
    Studio,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_identity() {
        let record = MovieRecord::new("Cinderella", Studio::Disney, 1950);
        assert_eq!(record.studio, Studio::Disney);
        assert!(record.seed_score.is_none());
    }

    #[test]
    fn test_reference_year_constant() {
        // Yearly rates divide by years elapsed to this year
        assert_eq!(REFERENCE_YEAR, 2021);
    }
}
