// Movie catalog - the built-in movie list and its query operations
mod data;

use serde::Serialize;

/// A single catalog entry. Records are immutable; the catalog is fixed at
/// build time and never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub category: String,
    pub image: String,
    pub description: String,
    /// Editorial rating; `None` renders as "Not rated".
    pub rating: Option<f32>,
    pub video_url: String,
    pub download_url: String,
}

/// Read-only queries over the movie catalog.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    movies: Vec<Movie>,
}

impl CatalogStore {
    /// Store over the built-in catalog.
    pub fn new() -> Self {
        Self {
            movies: data::builtin_movies(),
        }
    }

    /// Snapshot of the full catalog, in fixed insertion order.
    pub fn all(&self) -> Vec<Movie> {
        self.movies.clone()
    }

    /// Exact-match lookup by id.
    pub fn get(&self, id: &str) -> Option<&Movie> {
        self.movies.iter().find(|movie| movie.id == id)
    }

    /// Case-insensitive substring match against titles.
    ///
    /// Plain substring filtering: an empty query matches every title. The
    /// gallery controller owns the "blank input shows everything" policy.
    pub fn search(&self, query: &str) -> Vec<Movie> {
        let term = query.to_lowercase();
        self.movies
            .iter()
            .filter(|movie| movie.title.to_lowercase().contains(&term))
            .cloned()
            .collect()
    }

    /// Movies with exactly the given category, in catalog order.
    pub fn by_category(&self, category: &str) -> Vec<Movie> {
        self.movies
            .iter()
            .filter(|movie| movie.category == category)
            .cloned()
            .collect()
    }

    /// Up to `limit` movies sharing `category`, excluding `exclude_id`.
    /// Catalog order; no ranking, no randomization.
    pub fn related(&self, exclude_id: &str, category: &str, limit: usize) -> Vec<Movie> {
        self.movies
            .iter()
            .filter(|movie| movie.id != exclude_id && movie.category == category)
            .take(limit)
            .cloned()
            .collect()
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
