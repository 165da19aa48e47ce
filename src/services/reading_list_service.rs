//! Reading list operations
//!
//! Every operation takes the acting user's id explicitly; ownership is part
//! of each lookup rather than a check after the fact.

use crate::domain::{
    AddOutcome, BookCatalog, DomainError, EntryWithBook, NewSavedBook, ReadingListRepository,
    ReadingStatus, SavedBookRepository, StatusUpdate, VolumeDetail,
};

pub const ADDED_MESSAGE: &str = "Book added to your list";
pub const ALREADY_LISTED_MESSAGE: &str = "This book is already in your list";

impl AddOutcome {
    /// User-facing message for this outcome
    pub fn message(&self) -> &'static str {
        if self.created {
            ADDED_MESSAGE
        } else {
            ALREADY_LISTED_MESSAGE
        }
    }
}

fn normalize(book: NewSavedBook) -> Result<NewSavedBook, DomainError> {
    let google_book_id = book.google_book_id.trim().to_string();
    if google_book_id.is_empty() {
        return Err(DomainError::Validation("google_book_id is required".to_string()));
    }

    let title = book.title.trim().to_string();
    if title.is_empty() {
        return Err(DomainError::Validation("title is required".to_string()));
    }

    Ok(NewSavedBook {
        google_book_id,
        title,
        authors: book.authors.trim().to_string(),
        publisher: book.publisher.trim().to_string(),
        published_date: book.published_date.trim().to_string(),
        thumbnail: book
            .thumbnail
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty()),
    })
}

/// Put a catalog book on the user's list.
///
/// Idempotent: the shared book row and the user's entry are each created at
/// most once. A repeated add returns the existing entry with `created = false`.
pub async fn add_to_list(
    books: &dyn SavedBookRepository,
    entries: &dyn ReadingListRepository,
    user_id: i32,
    book: NewSavedBook,
) -> Result<AddOutcome, DomainError> {
    let book = books.find_or_create(normalize(book)?).await?;
    let (entry, created) = entries
        .find_or_create(user_id, book.id, ReadingStatus::default())
        .await?;

    if created {
        tracing::info!(
            "User {} added '{}' ({}) to their list",
            user_id,
            book.title,
            book.google_book_id
        );
    } else {
        tracing::debug!("User {} already lists {}", user_id, book.google_book_id);
    }

    Ok(AddOutcome {
        entry,
        book,
        created,
    })
}

/// Remove one of the user's entries. Entries of other users are not found.
pub async fn remove_from_list(
    entries: &dyn ReadingListRepository,
    user_id: i32,
    entry_id: i32,
) -> Result<(), DomainError> {
    entries.delete_owned(user_id, entry_id).await?;
    tracing::info!("User {} removed entry {}", user_id, entry_id);
    Ok(())
}

/// Change an entry's status.
///
/// Unrecognized status values leave the entry untouched and are reported as
/// [`StatusUpdate::Ignored`], not as an error.
pub async fn update_status(
    entries: &dyn ReadingListRepository,
    user_id: i32,
    entry_id: i32,
    raw_status: &str,
) -> Result<StatusUpdate, DomainError> {
    let entry = entries
        .find_owned(user_id, entry_id)
        .await?
        .ok_or(DomainError::NotFound)?;

    let Ok(status) = raw_status.trim().parse::<ReadingStatus>() else {
        tracing::debug!(
            "Ignoring unknown status {:?} for entry {}",
            raw_status,
            entry_id
        );
        return Ok(StatusUpdate::Ignored(entry));
    };

    if status == entry.status {
        return Ok(StatusUpdate::Updated(entry));
    }

    let entry = entries.set_status(user_id, entry_id, status).await?;
    tracing::info!("User {} set entry {} to {}", user_id, entry_id, status);
    Ok(StatusUpdate::Updated(entry))
}

/// The user's list, newest first. An unrecognized filter lists everything.
pub async fn list_entries(
    entries: &dyn ReadingListRepository,
    user_id: i32,
    status_filter: Option<&str>,
) -> Result<Vec<EntryWithBook>, DomainError> {
    let status = status_filter
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<ReadingStatus>().ok());

    entries.list_for_user(user_id, status).await
}

/// Full metadata for one catalog volume. Any catalog failure is a not-found.
pub async fn lookup_volume(
    catalog: &dyn BookCatalog,
    volume_id: &str,
) -> Result<VolumeDetail, DomainError> {
    let volume_id = volume_id.trim();
    if volume_id.is_empty() {
        return Err(DomainError::NotFound);
    }

    match catalog.get_volume(volume_id).await {
        Ok(Some(detail)) => Ok(detail),
        Ok(None) => Err(DomainError::NotFound),
        Err(e) => {
            tracing::warn!("Catalog lookup for {:?} failed: {}", volume_id, e);
            Err(DomainError::NotFound)
        }
    }
}
