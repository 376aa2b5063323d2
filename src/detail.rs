// Detail controller - one movie plus its ratings, reviews and related titles
use crate::catalog::{CatalogStore, Movie};
use crate::error::{Error, Result};
use crate::ratings::{RatingStore, Review};

/// How many related titles the detail page shows.
const RELATED_LIMIT: usize = 3;

/// Everything the detail page renders for one movie.
#[derive(Debug, Clone)]
pub struct MovieDetails {
    pub movie: Movie,
    pub user_rating: u8,
    pub reviews: Vec<Review>,
    pub related: Vec<Movie>,
}

/// Controller for the movie detail page.
pub struct DetailController {
    catalog: CatalogStore,
    ratings: RatingStore,
}

impl DetailController {
    pub fn new(catalog: CatalogStore, ratings: RatingStore) -> Self {
        Self { catalog, ratings }
    }

    /// Resolve the movie and compose everything the page needs.
    ///
    /// An unknown (or empty) id is `MovieNotFound`, which the rendering
    /// surface shows as its error state.
    pub fn load(&self, movie_id: &str) -> Result<MovieDetails> {
        let movie = self
            .catalog
            .get(movie_id)
            .cloned()
            .ok_or_else(|| Error::MovieNotFound(movie_id.to_string()))?;

        Ok(MovieDetails {
            user_rating: self.ratings.rating(movie_id),
            reviews: self.ratings.reviews(movie_id),
            related: self.catalog.related(movie_id, &movie.category, RELATED_LIMIT),
            movie,
        })
    }

    /// Star-widget click.
    pub fn rate(&self, movie_id: &str, value: u8) -> Result<()> {
        self.ratings.set_rating(movie_id, value)
    }

    /// Current transient rating, for the star widget.
    pub fn rating(&self, movie_id: &str) -> u8 {
        self.ratings.rating(movie_id)
    }

    /// Validate and store a review, then clear the transient rating the way
    /// the submit form does. Returns the updated list for re-render.
    pub fn submit_review(&self, movie_id: &str, text: &str) -> Result<Vec<Review>> {
        if text.trim().is_empty() {
            return Err(Error::EmptyReviewText);
        }

        let rating = self.ratings.rating(movie_id);
        if rating == 0 {
            return Err(Error::RatingRequired);
        }

        self.ratings.add_review(movie_id, text, rating)?;
        self.ratings.reset_rating(movie_id);

        Ok(self.ratings.reviews(movie_id))
    }
}

#[cfg(test)]
#[path = "tests/detail_tests.rs"]
mod tests;
