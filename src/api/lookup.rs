use axum::{
    Json,
    extract::{Path, State},
};

use crate::domain::{DomainError, VolumeDetail};
use crate::infrastructure::AppState;
use crate::services::reading_list_service;

pub async fn lookup_book(
    State(state): State<AppState>,
    Path(volume_id): Path<String>,
) -> Result<Json<VolumeDetail>, DomainError> {
    let detail = reading_list_service::lookup_volume(state.catalog.as_ref(), &volume_id).await?;
    Ok(Json(detail))
}
