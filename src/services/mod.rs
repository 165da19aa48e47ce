//! Services Layer
//!
//! This module contains pure business logic extracted from HTTP handlers.

pub mod reading_list_service;
pub mod search_service;

// Re-export for convenience
pub use reading_list_service::*;
pub use search_service::{SearchQuery, SearchResultPage};
