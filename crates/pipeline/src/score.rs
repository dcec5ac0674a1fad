//! The composite seed score.
//!
//! ```text
//! imdb_component   = scaled(I_Audience_Rating)
//! rotten_component = mean of the four scaled Rotten columns
//! popularity       = mean of scaled(Opening_Weekend_USA_Adjusted)
//!                    and scaled(Yearly_Votes)
//! Seed_Score       = (imdb_component + rotten_component + popularity) / 3
//! ```
//!
//! With every input in [0,1] the score is in [0,1]. IMDB carries a full
//! third on its own because its vote base dwarfs the Rotten rating counts.

use crate::traits::Stage;
use anyhow::{anyhow, Result};
use data_loader::MovieRecord;

/// Compute the seed score from a record's scaled columns.
///
/// Pure and deterministic; `None` when any required scaled column is
/// missing (the scaling stage fills all of them, so a `None` here means the
/// record never went through scaling).
pub fn seed_score(record: &MovieRecord) -> Option<f64> {
    let imdb_component = record.i_audience_rating_scaled?;
    let rotten_component = (record.r_audience_score_scaled?
        + record.r_audience_rating_scaled?
        + record.r_critic_score_scaled?
        + record.r_critic_rating_scaled?)
        / 4.0;
    let popularity =
        record.opening_weekend_adjusted_scaled? / 2.0 + record.yearly_votes_scaled? / 2.0;

    Some((imdb_component + rotten_component + popularity) / 3.0)
}

/// Writes `Seed_Score` for every record in the cohort.
pub struct ScoreStage;

impl Stage for ScoreStage {
    fn name(&self) -> &str {
        "ScoreStage"
    }

    fn apply(&self, mut records: Vec<MovieRecord>) -> Result<Vec<MovieRecord>> {
        for record in &mut records {
            let score = seed_score(record)
                .ok_or_else(|| anyhow!("record {} is missing scaled columns", record.title))?;
            record.seed_score = Some(score);
        }
        Ok(records)
    }
}
