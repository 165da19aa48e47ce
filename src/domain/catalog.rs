//! External catalog abstractions
//!
//! The catalog is the third-party volumes API queried for titles, authors and
//! metadata. The HTTP implementation lives in `modules::integrations`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Placeholder used when the catalog omits a title
pub const UNTITLED: &str = "Untitled";
/// Placeholder used when the catalog omits authors, publisher or date
pub const UNKNOWN: &str = "Unknown";

/// One bulk-search request against the catalog. Only books are ever requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeSearch {
    /// Full query expression, field prefixes included (e.g. `intitle:dune`)
    pub query: String,
    pub start_index: u64,
    pub max_results: u32,
}

/// A catalog entry normalized for display.
///
/// Serialized with the same field names the add-book form expects, so a
/// search result can be posted back as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSummary {
    #[serde(rename = "google_book_id")]
    pub external_id: String,
    pub title: String,
    pub authors: String,
    pub publisher: String,
    pub published_date: String,
    #[serde(rename = "thumbnail")]
    pub thumbnail_url: Option<String>,
}

/// One page of raw catalog results
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VolumePage {
    /// Total number of matches the catalog claims to have
    pub total_items: u64,
    pub items: Vec<BookSummary>,
}

/// Full metadata for a single volume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeDetail {
    #[serde(flatten)]
    pub summary: BookSummary,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub page_count: Option<u32>,
    #[serde(default)]
    pub categories: Vec<String>,
    pub language: Option<String>,
    pub preview_link: Option<String>,
}

/// Failures talking to the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Catalog API returned status {status}")]
    Api { status: u16 },

    #[error("Invalid response from catalog: {0}")]
    InvalidResponse(String),
}

/// Read access to the external book catalog
#[async_trait]
pub trait BookCatalog: Send + Sync {
    /// Run one bulk search
    async fn search_volumes(&self, request: &VolumeSearch) -> Result<VolumePage, CatalogError>;

    /// Fetch a single volume by its catalog id.
    /// `Ok(None)` means the catalog answered but has no such volume.
    async fn get_volume(&self, volume_id: &str) -> Result<Option<VolumeDetail>, CatalogError>;
}
