// Gallery controller - search, category filter and pagination state
use crate::catalog::{CatalogStore, Movie};

/// Movies shown per gallery page.
pub const PAGE_SIZE: usize = 3;

/// Pagination and filter state for the gallery page.
///
/// Search and category filter are mutually exclusive: applying either one
/// replaces the filtered set wholesale and returns to page 1.
pub struct GalleryController {
    catalog: CatalogStore,
    filtered: Vec<Movie>,
    page: usize,
}

impl GalleryController {
    /// Controller showing the full catalog, on page 1.
    pub fn new(catalog: CatalogStore) -> Self {
        let filtered = catalog.all();
        Self {
            catalog,
            filtered,
            page: 1,
        }
    }

    /// Filter by title search. A blank query restores the full catalog.
    pub fn apply_search(&mut self, query: &str) {
        self.filtered = if query.trim().is_empty() {
            self.catalog.all()
        } else {
            self.catalog.search(query)
        };
        self.page = 1;
    }

    /// Filter by category. An empty selection restores the full catalog.
    pub fn apply_filter(&mut self, category: &str) {
        self.filtered = if category.is_empty() {
            self.catalog.all()
        } else {
            self.catalog.by_category(category)
        };
        self.page = 1;
    }

    /// Move `delta` pages; out-of-range moves are silently ignored.
    pub fn change_page(&mut self, delta: i64) {
        let target = self.page as i64 + delta;
        if target >= 1 && target <= self.total_pages() as i64 {
            self.page = target as usize;
        }
    }

    pub fn next_page(&mut self) {
        self.change_page(1);
    }

    pub fn prev_page(&mut self) {
        self.change_page(-1);
    }

    /// The slice of the filtered set visible on the current page.
    pub fn visible(&self) -> &[Movie] {
        let start = (self.page - 1) * PAGE_SIZE;
        if start >= self.filtered.len() {
            return &[];
        }
        let end = (start + PAGE_SIZE).min(self.filtered.len());
        &self.filtered[start..end]
    }

    /// 1-based current page, for the page indicator.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total_pages(&self) -> usize {
        self.filtered.len().div_ceil(PAGE_SIZE)
    }

    /// Disables the previous-page control.
    pub fn is_first_page(&self) -> bool {
        self.page == 1
    }

    /// Disables the next-page control. True for an empty filtered set.
    pub fn is_last_page(&self) -> bool {
        self.page >= self.total_pages()
    }
}

#[cfg(test)]
#[path = "tests/gallery_tests.rs"]
mod tests;
