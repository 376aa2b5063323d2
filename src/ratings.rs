// Rating and review store - durable per-movie user state
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::storage::Storage;

// Key prefixes shared with every earlier version of the app. Changing them
// orphans previously persisted ratings and reviews.
const RATING_KEY_PREFIX: &str = "cineplus-rating-";
const COMMENTS_KEY_PREFIX: &str = "cineplus-comments-";

/// A persisted movie review. Append-only; never edited or deleted.
///
/// Field order is the serialized on-disk layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub text: String,
    pub rating: u8,
    pub date: String,
}

/// Per-movie star ratings and reviews over an injected storage backend.
///
/// The current rating is transient state for the star widget: it is loaded
/// from storage on first access per movie, overwritten by `set_rating`, and
/// zeroed by `reset_rating` without touching the persisted value.
pub struct RatingStore {
    storage: Arc<dyn Storage>,
    current: Mutex<HashMap<String, u8>>,
}

impl RatingStore {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            current: Mutex::new(HashMap::new()),
        }
    }

    fn rating_key(movie_id: &str) -> String {
        format!("{RATING_KEY_PREFIX}{movie_id}")
    }

    fn comments_key(movie_id: &str) -> String {
        format!("{COMMENTS_KEY_PREFIX}{movie_id}")
    }

    /// Current rating for the movie, 0 if never set.
    pub fn rating(&self, movie_id: &str) -> u8 {
        let mut current = self.current.lock().unwrap();
        if let Some(&value) = current.get(movie_id) {
            return value;
        }

        // First access for this movie: load the persisted value
        let loaded = self
            .storage
            .get(&Self::rating_key(movie_id))
            .and_then(|value| value.parse::<u8>().ok())
            .filter(|value| (1..=5).contains(value))
            .unwrap_or(0);

        current.insert(movie_id.to_string(), loaded);
        loaded
    }

    /// Overwrite the rating and persist it immediately.
    pub fn set_rating(&self, movie_id: &str, value: u8) -> Result<()> {
        if !(1..=5).contains(&value) {
            return Err(Error::RatingOutOfRange(value));
        }

        self.storage
            .set(&Self::rating_key(movie_id), &value.to_string())?;
        self.current
            .lock()
            .unwrap()
            .insert(movie_id.to_string(), value);
        Ok(())
    }

    /// Zero the transient rating. The persisted value is left alone and
    /// comes back on the next fresh load.
    pub fn reset_rating(&self, movie_id: &str) {
        self.current.lock().unwrap().insert(movie_id.to_string(), 0);
    }

    /// All reviews for the movie, oldest first; empty if none.
    ///
    /// A malformed stored list is discarded rather than crashing the page.
    pub fn reviews(&self, movie_id: &str) -> Vec<Review> {
        let Some(raw) = self.storage.get(&Self::comments_key(movie_id)) else {
            return Vec::new();
        };

        match serde_json::from_str(&raw) {
            Ok(reviews) => reviews,
            Err(err) => {
                tracing::warn!("discarding corrupt review list for {movie_id}: {err}");
                Vec::new()
            }
        }
    }

    /// Append a review and persist the full updated list. Returns the
    /// stored review. Input validation is the detail controller's job.
    pub fn add_review(&self, movie_id: &str, text: &str, rating: u8) -> Result<Review> {
        let mut reviews = self.reviews(movie_id);

        // Wall-clock millis, bumped past the last id so ids stay strictly
        // increasing even when two reviews land in the same millisecond
        let mut id = Utc::now().timestamp_millis();
        if let Some(last) = reviews.last() {
            if id <= last.id {
                id = last.id + 1;
            }
        }

        let review = Review {
            id,
            text: text.to_string(),
            rating,
            date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        reviews.push(review.clone());

        let serialized = serde_json::to_string(&reviews)?;
        self.storage.set(&Self::comments_key(movie_id), &serialized)?;

        tracing::info!("stored review {} for {}", review.id, movie_id);
        Ok(review)
    }
}

#[cfg(test)]
#[path = "tests/ratings_tests.rs"]
mod tests;
