pub mod auth;
pub mod error;
pub mod health;
pub mod lookup;
pub mod reading_list;
pub mod search;

use axum::{
    Router,
    routing::{get, post},
};

use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Accounts
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .route("/me", get(auth::me))
        // Catalog
        .route("/search", get(search::search_books))
        .route("/books/:volume_id", get(lookup::lookup_book))
        // Reading list
        .route("/profile", get(reading_list::profile))
        .route("/add-book", post(reading_list::add_book))
        .route("/remove-book/:id", post(reading_list::remove_book))
        .route("/update-status/:id", post(reading_list::update_status))
        .with_state(state)
}
