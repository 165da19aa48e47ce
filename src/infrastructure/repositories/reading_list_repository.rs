//! SeaORM implementation of ReadingListRepository

use async_trait::async_trait;
use chrono::SecondsFormat;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::{DomainError, EntryWithBook, ListEntry, ReadingListRepository, ReadingStatus};
use crate::models::book::Entity as BookEntity;
use crate::models::user_book::{ActiveModel, Column, Entity as UserBookEntity, Model};

/// SeaORM-based implementation of ReadingListRepository
pub struct SeaOrmReadingListRepository {
    db: DatabaseConnection,
}

impl SeaOrmReadingListRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_owned_model(
        &self,
        user_id: i32,
        entry_id: i32,
    ) -> Result<Option<Model>, DomainError> {
        Ok(UserBookEntity::find()
            .filter(Column::Id.eq(entry_id))
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await?)
    }
}

#[async_trait]
impl ReadingListRepository for SeaOrmReadingListRepository {
    async fn find_or_create(
        &self,
        user_id: i32,
        book_id: i32,
        status: ReadingStatus,
    ) -> Result<(ListEntry, bool), DomainError> {
        // Fixed-width UTC timestamps so lexical order is chronological
        let now = chrono::Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);

        let new_entry = ActiveModel {
            user_id: Set(user_id),
            book_id: Set(book_id),
            status: Set(status.as_str().to_string()),
            added_at: Set(now),
            ..Default::default()
        };

        // UNIQUE (user_id, book_id) decides which of two identical requests wins
        let created = match UserBookEntity::insert(new_entry)
            .on_conflict(
                OnConflict::columns([Column::UserId, Column::BookId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
        {
            Ok(rows) => rows > 0,
            Err(DbErr::RecordNotInserted) => false,
            Err(e) => return Err(e.into()),
        };

        let model = UserBookEntity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::BookId.eq(book_id))
            .one(&self.db)
            .await?
            .ok_or_else(|| {
                DomainError::Internal(format!("entry for book {} vanished", book_id))
            })?;

        Ok((ListEntry::try_from(model)?, created))
    }

    async fn find_owned(
        &self,
        user_id: i32,
        entry_id: i32,
    ) -> Result<Option<ListEntry>, DomainError> {
        self.find_owned_model(user_id, entry_id)
            .await?
            .map(ListEntry::try_from)
            .transpose()
    }

    async fn delete_owned(&self, user_id: i32, entry_id: i32) -> Result<(), DomainError> {
        let result = UserBookEntity::delete_many()
            .filter(Column::Id.eq(entry_id))
            .filter(Column::UserId.eq(user_id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound);
        }

        Ok(())
    }

    async fn set_status(
        &self,
        user_id: i32,
        entry_id: i32,
        status: ReadingStatus,
    ) -> Result<ListEntry, DomainError> {
        let existing = self
            .find_owned_model(user_id, entry_id)
            .await?
            .ok_or(DomainError::NotFound)?;

        let mut active: ActiveModel = existing.into();
        active.status = Set(status.as_str().to_string());

        let result = active.update(&self.db).await?;
        ListEntry::try_from(result)
    }

    async fn list_for_user(
        &self,
        user_id: i32,
        status: Option<ReadingStatus>,
    ) -> Result<Vec<EntryWithBook>, DomainError> {
        let mut query = UserBookEntity::find().filter(Column::UserId.eq(user_id));

        if let Some(status) = status {
            query = query.filter(Column::Status.eq(status.as_str()));
        }

        let rows = query
            .order_by_desc(Column::AddedAt)
            .order_by_desc(Column::Id)
            .find_also_related(BookEntity)
            .all(&self.db)
            .await?;

        let mut entries = Vec::with_capacity(rows.len());
        for (entry_model, book_model) in rows {
            let Some(book_model) = book_model else {
                tracing::warn!("Entry {} points to a missing book", entry_model.id);
                continue;
            };

            let entry = ListEntry::try_from(entry_model)?;
            entries.push(EntryWithBook {
                status_label: entry.status.label(),
                entry,
                book: book_model.into(),
            });
        }

        Ok(entries)
    }
}
