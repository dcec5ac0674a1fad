//! Column scaling: min-fill, outlier compression, Box–Cox, min-max.
//!
//! Scaling is fit per cohort, so the same title carries different scaled
//! values in its studio table and in the combined table. The steps, in
//! order, for one column:
//!
//! 1. fill missing values with the column minimum (over present, finite
//!    values)
//! 2. replace non-finite values with the same minimum
//! 3. compress the three largest values to the largest of the three,
//!    a deliberate smoothing heuristic that spreads the mid-field apart
//! 4. Box–Cox transform with maximum-likelihood λ
//! 5. min-max scale into [0,1]
//! 6. round to two decimals

use crate::boxcox;
use crate::traits::Stage;
use anyhow::Result;
use data_loader::MovieRecord;
use rayon::prelude::*;
use thiserror::Error;

/// Errors from scaling one column.
#[derive(Error, Debug, PartialEq)]
pub enum ScaleError {
    /// No present, finite value to derive the fill minimum from
    #[error("column {column} has no usable values")]
    EmptyColumn { column: &'static str },

    /// Box–Cox needs strictly positive input, even after min-fill
    #[error("column {column} holds non-positive value {value} after min-fill")]
    NonPositive { column: &'static str, value: f64 },
}

/// The nine columns the scaling stage fits, by output column name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    IAudienceRating,
    RAudienceScore,
    RAudienceRating,
    RCriticScore,
    RCriticRating,
    Gross,
    OpeningWeekend,
    OpeningWeekendAdjusted,
    YearlyVotes,
}

impl Column {
    pub const SCALED: [Column; 9] = [
        Column::IAudienceRating,
        Column::RAudienceScore,
        Column::RAudienceRating,
        Column::RCriticScore,
        Column::RCriticRating,
        Column::Gross,
        Column::OpeningWeekend,
        Column::OpeningWeekendAdjusted,
        Column::YearlyVotes,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Column::IAudienceRating => "I_Audience_Rating",
            Column::RAudienceScore => "R_Audience_Score",
            Column::RAudienceRating => "R_Audience_Rating",
            Column::RCriticScore => "R_Critic_Score",
            Column::RCriticRating => "R_Critic_Rating",
            Column::Gross => "Cumulative Worldwide Gross",
            Column::OpeningWeekend => "Opening_Weekend_USA",
            Column::OpeningWeekendAdjusted => "Opening_Weekend_USA_Adjusted",
            Column::YearlyVotes => "Yearly_Votes",
        }
    }

    /// The raw value this column scales from.
    pub fn raw(&self, record: &MovieRecord) -> Option<f64> {
        match self {
            Column::IAudienceRating => record.i_audience_rating,
            Column::RAudienceScore => record.r_audience_score,
            Column::RAudienceRating => record.r_audience_rating,
            Column::RCriticScore => record.r_critic_score,
            Column::RCriticRating => record.r_critic_rating,
            Column::Gross => record.gross.map(|v| v as f64),
            Column::OpeningWeekend => record.opening_weekend.map(|v| v as f64),
            Column::OpeningWeekendAdjusted => record.opening_weekend_adjusted,
            Column::YearlyVotes => record.yearly_votes,
        }
    }

    fn set_scaled(&self, record: &mut MovieRecord, value: f64) {
        let slot = match self {
            Column::IAudienceRating => &mut record.i_audience_rating_scaled,
            Column::RAudienceScore => &mut record.r_audience_score_scaled,
            Column::RAudienceRating => &mut record.r_audience_rating_scaled,
            Column::RCriticScore => &mut record.r_critic_score_scaled,
            Column::RCriticRating => &mut record.r_critic_rating_scaled,
            Column::Gross => &mut record.gross_scaled,
            Column::OpeningWeekend => &mut record.opening_weekend_scaled,
            Column::OpeningWeekendAdjusted => &mut record.opening_weekend_adjusted_scaled,
            Column::YearlyVotes => &mut record.yearly_votes_scaled,
        };
        *slot = Some(value);
    }
}

/// Scale one column of values into [0,1].
pub fn normalize(column: &'static str, values: &[Option<f64>]) -> Result<Vec<f64>, ScaleError> {
    let fill = values
        .iter()
        .flatten()
        .copied()
        .filter(|v| v.is_finite())
        .fold(f64::INFINITY, f64::min);
    if !fill.is_finite() {
        return Err(ScaleError::EmptyColumn { column });
    }

    let mut filled: Vec<f64> = values
        .iter()
        .map(|value| match value {
            Some(v) if v.is_finite() => *v,
            _ => fill,
        })
        .collect();

    compress_top_outliers(&mut filled);

    if let Some(&bad) = filled.iter().find(|v| **v <= 0.0) {
        return Err(ScaleError::NonPositive { column, value: bad });
    }

    let lambda = boxcox::estimate_lambda(&filled);
    let transformed: Vec<f64> = filled
        .iter()
        .map(|&v| boxcox::transform(v, lambda))
        .collect();

    Ok(min_max(&transformed).iter().map(|&v| round2(v)).collect())
}

/// Give the three largest values the same (largest) value.
///
/// Flattens the top of the distribution so the gap to the runaway hits
/// doesn't crush every other title into the bottom of the scale.
fn compress_top_outliers(values: &mut [f64]) {
    if values.len() < 3 {
        return;
    }
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| {
        values[b]
            .partial_cmp(&values[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let peak = values[order[0]];
    for &index in &order[..3] {
        values[index] = peak;
    }
}

fn min_max(values: &[f64]) -> Vec<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    if range <= 0.0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|v| (v - min) / range).collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Fits and writes the nine scaled columns for one cohort.
pub struct ScaleStage;

impl Stage for ScaleStage {
    fn name(&self) -> &str {
        "ScaleStage"
    }

    fn apply(&self, mut records: Vec<MovieRecord>) -> Result<Vec<MovieRecord>> {
        if records.is_empty() {
            return Ok(records);
        }

        // Columns are independent, fit them in parallel
        let scaled: Vec<(Column, Result<Vec<f64>, ScaleError>)> = Column::SCALED
            .par_iter()
            .map(|column| {
                let values: Vec<Option<f64>> =
                    records.iter().map(|record| column.raw(record)).collect();
                (*column, normalize(column.name(), &values))
            })
            .collect();

        for (column, result) in scaled {
            let values = result?;
            for (record, value) in records.iter_mut().zip(values) {
                column.set_scaled(record, value);
            }
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::Studio;

    fn present(values: &[f64]) -> Vec<Option<f64>> {
        values.iter().copied().map(Some).collect()
    }

    #[test]
    fn test_normalize_bounds_and_extremes() {
        let scaled = normalize("test", &present(&[2.0, 3.0, 5.0, 9.0, 17.0, 33.0])).unwrap();
        assert!(scaled.iter().all(|v| (0.0..=1.0).contains(v)));
        assert_eq!(scaled[0], 0.0);
        assert_eq!(scaled[5], 1.0);
        // Outlier compression ties the top three
        assert_eq!(scaled[3], 1.0);
        assert_eq!(scaled[4], 1.0);
    }

    #[test]
    fn test_normalize_fills_missing_with_column_minimum() {
        let mut values = present(&[2.0, 4.0, 8.0, 16.0, 32.0]);
        values.insert(1, None);
        let scaled = normalize("test", &values).unwrap();
        // The filled slot scales exactly like the minimum
        assert_eq!(scaled[1], scaled[0]);
        assert_eq!(scaled[0], 0.0);
    }

    #[test]
    fn test_normalize_replaces_non_finite_with_minimum() {
        let values = vec![
            Some(2.0),
            Some(f64::INFINITY),
            Some(4.0),
            Some(8.0),
            Some(16.0),
            Some(32.0),
        ];
        let scaled = normalize("test", &values).unwrap();
        assert_eq!(scaled[1], 0.0);
    }

    #[test]
    fn test_normalize_rejects_non_positive_input() {
        // The zero sits below the top three, so compression leaves it alone
        let err = normalize("test", &present(&[0.0, 1.0, 2.0, 3.0])).unwrap_err();
        assert!(matches!(err, ScaleError::NonPositive { .. }));
    }

    #[test]
    fn test_normalize_rejects_all_missing_column() {
        let err = normalize("test", &[None, None]).unwrap_err();
        assert_eq!(err, ScaleError::EmptyColumn { column: "test" });
    }

    #[test]
    fn test_constant_column_scales_to_zero() {
        let scaled = normalize("test", &present(&[5.0, 5.0, 5.0, 5.0])).unwrap();
        assert_eq!(scaled, vec![0.0; 4]);
    }

    #[test]
    fn test_compress_top_outliers_is_idempotent() {
        let mut once = vec![1.0, 2.0, 3.0, 10.0, 50.0, 100.0];
        compress_top_outliers(&mut once);
        assert_eq!(once, vec![1.0, 2.0, 3.0, 100.0, 100.0, 100.0]);

        let mut twice = once.clone();
        compress_top_outliers(&mut twice);
        assert_eq!(twice, once);
    }

    #[test]
    fn test_compress_skips_tiny_columns() {
        let mut values = vec![1.0, 2.0];
        compress_top_outliers(&mut values);
        assert_eq!(values, vec![1.0, 2.0]);
    }

    #[test]
    fn test_min_max_is_idempotent() {
        let scaled = min_max(&[3.0, 7.0, 11.0]);
        assert_eq!(min_max(&scaled), scaled);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(0.666_666), 0.67);
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(1.0), 1.0);
    }

    #[test]
    fn test_scale_stage_fills_every_scaled_column() {
        let mut records = Vec::new();
        for (i, year) in (0..6).zip([1995u16, 1998, 2001, 2004, 2007, 2010]) {
            let mut record = MovieRecord::new(format!("Movie {i}"), Studio::Pixar, year);
            let base = (i + 1) as f64;
            record.i_audience_rating = Some(5.0 + base * 0.5);
            record.r_audience_score = Some(50.0 + base * 8.0);
            record.r_audience_rating = Some(2.0 + base * 0.4);
            record.r_critic_score = Some(40.0 + base * 9.0);
            record.r_critic_rating = Some(3.0 + base * 0.9);
            record.gross = Some(50_000_000 * (i + 1));
            record.opening_weekend = Some(10_000_000 * (i + 1));
            record.opening_weekend_adjusted = Some(12_000_000.0 * base);
            record.yearly_votes = Some(8_000.0 * base);
            records.push(record);
        }

        let out = ScaleStage.apply(records).unwrap();
        for record in &out {
            for column in Column::SCALED {
                let scaled = match column {
                    Column::IAudienceRating => record.i_audience_rating_scaled,
                    Column::RAudienceScore => record.r_audience_score_scaled,
                    Column::RAudienceRating => record.r_audience_rating_scaled,
                    Column::RCriticScore => record.r_critic_score_scaled,
                    Column::RCriticRating => record.r_critic_rating_scaled,
                    Column::Gross => record.gross_scaled,
                    Column::OpeningWeekend => record.opening_weekend_scaled,
                    Column::OpeningWeekendAdjusted => record.opening_weekend_adjusted_scaled,
                    Column::YearlyVotes => record.yearly_votes_scaled,
                };
                let value = scaled.expect("scaled column missing");
                assert!((0.0..=1.0).contains(&value));
            }
        }
    }

    #[test]
    fn test_scale_stage_passes_empty_cohort_through() {
        let out = ScaleStage.apply(Vec::new()).unwrap();
        assert!(out.is_empty());
    }
}
