//! SeaORM implementation of SavedBookRepository

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};

use crate::domain::{DomainError, NewSavedBook, SavedBook, SavedBookRepository};
use crate::models::book::{ActiveModel, Column, Entity as BookEntity};

/// SeaORM-based implementation of SavedBookRepository
pub struct SeaOrmBookRepository {
    db: DatabaseConnection,
}

impl SeaOrmBookRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SavedBookRepository for SeaOrmBookRepository {
    async fn find_by_google_id(
        &self,
        google_book_id: &str,
    ) -> Result<Option<SavedBook>, DomainError> {
        let book = BookEntity::find()
            .filter(Column::GoogleBookId.eq(google_book_id))
            .one(&self.db)
            .await?;

        Ok(book.map(SavedBook::from))
    }

    async fn find_or_create(&self, book: NewSavedBook) -> Result<SavedBook, DomainError> {
        let google_book_id = book.google_book_id.clone();

        let new_book = ActiveModel {
            google_book_id: Set(book.google_book_id),
            title: Set(book.title),
            authors: Set(book.authors),
            publisher: Set(book.publisher),
            published_date: Set(book.published_date),
            thumbnail: Set(book.thumbnail),
            ..Default::default()
        };

        // The unique index on google_book_id arbitrates concurrent first adds
        let inserted = match BookEntity::insert(new_book)
            .on_conflict(OnConflict::column(Column::GoogleBookId).do_nothing().to_owned())
            .exec_without_returning(&self.db)
            .await
        {
            Ok(rows) => rows > 0,
            Err(DbErr::RecordNotInserted) => false,
            Err(e) => return Err(e.into()),
        };

        if inserted {
            tracing::info!("Saved new catalog book {}", google_book_id);
        }

        self.find_by_google_id(&google_book_id)
            .await?
            .ok_or_else(|| DomainError::Internal(format!("book {} vanished", google_book_id)))
    }
}
