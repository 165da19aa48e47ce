//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{BookCatalog, ReadingListRepository, SavedBookRepository};
use crate::infrastructure::{SeaOrmBookRepository, SeaOrmReadingListRepository};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection (account handlers query it directly)
    db: DatabaseConnection,
    /// External book catalog
    pub catalog: Arc<dyn BookCatalog>,
    /// Shared book records
    pub book_repo: Arc<dyn SavedBookRepository>,
    /// Per-user list entries
    pub reading_list_repo: Arc<dyn ReadingListRepository>,
}

impl AppState {
    /// Create a new AppState with all repositories initialized
    pub fn new(db: DatabaseConnection, catalog: Arc<dyn BookCatalog>) -> Self {
        let book_repo = Arc::new(SeaOrmBookRepository::new(db.clone()));
        let reading_list_repo = Arc::new(SeaOrmReadingListRepository::new(db.clone()));

        Self {
            db,
            catalog,
            book_repo,
            reading_list_repo,
        }
    }
}

// Implement FromRef to allow extracting DatabaseConnection from AppState
impl axum::extract::FromRef<AppState> for DatabaseConnection {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}
