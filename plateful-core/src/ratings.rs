//! Per-recipe star ratings, one per rater.
//!
//! Raters are identified by an opaque id derived from their bearer token, so a
//! second rating from the same rater replaces the first instead of skewing
//! the average.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use thiserror::Error;

/// Bucket used when the client does not say which recipe it is rating.
pub const GLOBAL_RECIPE_ID: &str = "global";

pub const MIN_STARS: u8 = 1;
pub const MAX_STARS: u8 = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RatingError {
    #[error("Rating must be between 1 and 5, got {0}")]
    OutOfRange(i64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RatingSummary {
    pub recipe_id: String,
    /// Mean star value rounded to one decimal, 0 when nobody has rated yet
    pub average_rating: f64,
    pub total_ratings: u64,
}

/// Thread-safe ratings store: recipe id -> (rater id -> stars).
#[derive(Debug, Default)]
pub struct RatingsStore {
    ratings: RwLock<HashMap<String, HashMap<String, u8>>>,
}

impl RatingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `stars` from `rater_id` for `recipe_id`, replacing any earlier
    /// rating by the same rater, and return the updated summary.
    pub fn rate(
        &self,
        recipe_id: &str,
        rater_id: &str,
        stars: i64,
    ) -> Result<RatingSummary, RatingError> {
        let stars = u8::try_from(stars)
            .ok()
            .filter(|s| (MIN_STARS..=MAX_STARS).contains(s))
            .ok_or(RatingError::OutOfRange(stars))?;

        let mut ratings = self.ratings.write().unwrap_or_else(PoisonError::into_inner);
        let by_rater = ratings.entry(recipe_id.to_string()).or_default();
        by_rater.insert(rater_id.to_string(), stars);

        Ok(summarize(recipe_id, by_rater))
    }

    pub fn summary(&self, recipe_id: &str) -> RatingSummary {
        let ratings = self.ratings.read().unwrap_or_else(PoisonError::into_inner);
        match ratings.get(recipe_id) {
            Some(by_rater) => summarize(recipe_id, by_rater),
            None => summarize(recipe_id, &HashMap::new()),
        }
    }
}

fn summarize(recipe_id: &str, by_rater: &HashMap<String, u8>) -> RatingSummary {
    let total = by_rater.len() as u64;
    let average_rating = if total == 0 {
        0.0
    } else {
        let sum: u64 = by_rater.values().map(|&s| u64::from(s)).sum();
        (sum as f64 / total as f64 * 10.0).round() / 10.0
    };

    RatingSummary {
        recipe_id: recipe_id.to_string(),
        average_rating,
        total_ratings: total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_summary() {
        let store = RatingsStore::new();
        let summary = store.summary("r1");
        assert_eq!(summary.total_ratings, 0);
        assert_eq!(summary.average_rating, 0.0);
    }

    #[test]
    fn test_average_rounds_to_one_decimal() {
        let store = RatingsStore::new();
        store.rate("r1", "alice", 5).unwrap();
        store.rate("r1", "bob", 4).unwrap();
        let summary = store.rate("r1", "carol", 4).unwrap();
        assert_eq!(summary.total_ratings, 3);
        assert_eq!(summary.average_rating, 4.3);
    }

    #[test]
    fn test_same_rater_replaces_rating() {
        let store = RatingsStore::new();
        store.rate("r1", "alice", 1).unwrap();
        let summary = store.rate("r1", "alice", 5).unwrap();
        assert_eq!(summary.total_ratings, 1);
        assert_eq!(summary.average_rating, 5.0);
    }

    #[test]
    fn test_recipes_are_independent() {
        let store = RatingsStore::new();
        store.rate("r1", "alice", 2).unwrap();
        store.rate("r2", "alice", 4).unwrap();
        assert_eq!(store.summary("r1").average_rating, 2.0);
        assert_eq!(store.summary("r2").average_rating, 4.0);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let store = RatingsStore::new();
        assert_eq!(store.rate("r1", "alice", 0), Err(RatingError::OutOfRange(0)));
        assert_eq!(store.rate("r1", "alice", 6), Err(RatingError::OutOfRange(6)));
        assert_eq!(
            store.rate("r1", "alice", -3),
            Err(RatingError::OutOfRange(-3))
        );
        assert_eq!(store.summary("r1").total_ratings, 0);
    }
}
