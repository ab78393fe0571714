use serde::Serialize;

/// Number of products shown per listing page.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 24;

/// Page request applied to list queries (1-based pages).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    /// Row offset for this page; page numbers below 1 are treated as 1.
    /// Offsets past the end of the addressable range saturate.
    pub fn offset(&self) -> usize {
        (self.page.max(1) - 1).saturating_mul(self.per_page)
    }
}

/// A single page of items along with navigation metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, page: usize, total_items: usize, per_page: usize) -> Self {
        Self {
            items,
            page: page.max(1),
            total_pages: total_items.div_ceil(per_page.max(1)),
            total_items,
        }
    }
}
