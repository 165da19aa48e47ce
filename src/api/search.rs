use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::infrastructure::AppState;
use crate::services::search_service::{self, SearchQuery, SearchResultPage};

/// Raw query string; `page` stays a string so bad input can fall back to page 1
#[derive(Debug, Deserialize, Clone)]
pub struct SearchParams {
    pub q: Option<String>,
    pub page: Option<String>,
}

pub async fn search_books(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResultPage> {
    let query = SearchQuery::from_params(params.q.as_deref(), params.page.as_deref());
    Json(search_service::search(state.catalog.as_ref(), query).await)
}
