//! Catalog search with bounded pagination
//!
//! The catalog reports huge totals for broad queries but rarely serves deep
//! offsets well, so the number of reachable results is capped at
//! [`MAX_RESULTS`] before page counts are derived from it.

use serde::Serialize;

use crate::domain::{BookCatalog, BookSummary, VolumePage, VolumeSearch};

/// Results shown per page
pub const PAGE_SIZE: u32 = 21;
/// Width of the page-number strip. Declared for the UI but not applied:
/// `page_numbers` always lists every page.
pub const MAX_VISIBLE_PAGES: u32 = 5;
/// Ceiling on reachable results
pub const MAX_RESULTS: u64 = PAGE_SIZE as u64 * 5;

/// A search request as received from the outside world
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    pub page: u32,
}

impl SearchQuery {
    /// Build a query from raw request parameters.
    ///
    /// The text is trimmed, so whitespace-only text counts as an empty query
    /// and never reaches the catalog.
    pub fn from_params(text: Option<&str>, page: Option<&str>) -> Self {
        Self {
            text: text.map(str::trim).unwrap_or_default().to_string(),
            page: parse_page(page),
        }
    }

    /// Index of the first result of this page
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(PAGE_SIZE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResultPage {
    pub items: Vec<BookSummary>,
    pub query: String,
    pub current_page: u32,
    pub total_pages: u32,
    pub page_numbers: Vec<u32>,
}

/// Parse an untrusted page parameter; anything that is not a positive integer is page 1
pub fn parse_page(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|&page| page >= 1)
        .unwrap_or(1)
}

/// Number of pages for a catalog-reported total, after capping at [`MAX_RESULTS`]
pub fn total_pages(reported_total: u64) -> u32 {
    let effective_total = reported_total.min(MAX_RESULTS);
    // bounded by MAX_RESULTS / PAGE_SIZE, always fits
    effective_total.div_ceil(u64::from(PAGE_SIZE)) as u32
}

/// Run one paginated title search against the catalog.
///
/// Catalog failures never reach the caller: they are logged and rendered as
/// an empty result set. The requested page is not clamped to the page count.
pub async fn search(catalog: &dyn BookCatalog, query: SearchQuery) -> SearchResultPage {
    if query.text.is_empty() {
        return SearchResultPage {
            items: Vec::new(),
            query: query.text,
            current_page: query.page,
            total_pages: 0,
            page_numbers: Vec::new(),
        };
    }

    let request = VolumeSearch {
        query: format!("intitle:{}", query.text),
        start_index: query.offset(),
        max_results: PAGE_SIZE,
    };

    let mut page = match catalog.search_volumes(&request).await {
        Ok(page) => page,
        Err(e) => {
            tracing::warn!("Catalog search for {:?} failed: {}", query.text, e);
            VolumePage::default()
        }
    };

    // the catalog may ignore maxResults
    page.items.truncate(PAGE_SIZE as usize);

    let total_pages = total_pages(page.total_items);
    tracing::debug!(
        "Catalog search {:?} page {}: {} items, {} reported, {} pages",
        query.text,
        query.page,
        page.items.len(),
        page.total_items,
        total_pages
    );

    SearchResultPage {
        items: page.items,
        query: query.text,
        current_page: query.page,
        total_pages,
        page_numbers: (1..=total_pages).collect(),
    }
}
