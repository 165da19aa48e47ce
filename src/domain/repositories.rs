//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;

use super::{DomainError, EntryWithBook, ListEntry, NewSavedBook, ReadingStatus, SavedBook};

/// Repository trait for the shared book records
#[async_trait]
pub trait SavedBookRepository: Send + Sync {
    /// Find a book by its catalog id
    async fn find_by_google_id(&self, google_book_id: &str)
    -> Result<Option<SavedBook>, DomainError>;

    /// Return the book with this catalog id, inserting it from `book` if absent.
    /// Existing rows are never overwritten.
    async fn find_or_create(&self, book: NewSavedBook) -> Result<SavedBook, DomainError>;
}

/// Repository trait for per-user list entries.
///
/// Every lookup is scoped by `user_id`; an entry owned by someone else is
/// indistinguishable from a missing one.
#[async_trait]
pub trait ReadingListRepository: Send + Sync {
    /// Return the entry for `(user_id, book_id)`, creating it with `status` if absent.
    /// The flag is `true` when a new row was inserted.
    async fn find_or_create(
        &self,
        user_id: i32,
        book_id: i32,
        status: ReadingStatus,
    ) -> Result<(ListEntry, bool), DomainError>;

    /// Find an entry owned by `user_id`
    async fn find_owned(&self, user_id: i32, entry_id: i32)
    -> Result<Option<ListEntry>, DomainError>;

    /// Delete an entry owned by `user_id`
    async fn delete_owned(&self, user_id: i32, entry_id: i32) -> Result<(), DomainError>;

    /// Change the status of an entry owned by `user_id`
    async fn set_status(
        &self,
        user_id: i32,
        entry_id: i32,
        status: ReadingStatus,
    ) -> Result<ListEntry, DomainError>;

    /// All entries of a user with their books, newest first
    async fn list_for_user(
        &self,
        user_id: i32,
        status: Option<ReadingStatus>,
    ) -> Result<Vec<EntryWithBook>, DomainError>;
}
