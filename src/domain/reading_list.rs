//! Reading list domain types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where a user stands with a book on their list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingStatus {
    #[default]
    Planned,
    Reading,
    Completed,
    Dropped,
}

impl ReadingStatus {
    pub const ALL: [ReadingStatus; 4] = [
        ReadingStatus::Planned,
        ReadingStatus::Reading,
        ReadingStatus::Completed,
        ReadingStatus::Dropped,
    ];

    /// Stored and wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingStatus::Planned => "planned",
            ReadingStatus::Reading => "reading",
            ReadingStatus::Completed => "completed",
            ReadingStatus::Dropped => "dropped",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            ReadingStatus::Planned => "Plan to read",
            ReadingStatus::Reading => "Reading",
            ReadingStatus::Completed => "Completed",
            ReadingStatus::Dropped => "Dropped",
        }
    }
}

impl fmt::Display for ReadingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown reading status '{}'", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for ReadingStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReadingStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// A catalog book persisted once any user has added it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavedBook {
    pub id: i32,
    pub google_book_id: String,
    pub title: String,
    pub authors: String,
    pub publisher: String,
    pub published_date: String,
    pub thumbnail: Option<String>,
}

/// Fields submitted when adding a book; only used if the book is new
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewSavedBook {
    #[serde(default)]
    pub google_book_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub authors: String,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub published_date: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

/// One user's tracking record for one book
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    pub id: i32,
    pub user_id: i32,
    pub book_id: i32,
    pub status: ReadingStatus,
    pub added_at: String,
}

/// A list entry together with its book, for profile listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryWithBook {
    #[serde(flatten)]
    pub entry: ListEntry,
    pub status_label: &'static str,
    pub book: SavedBook,
}

/// Result of an add-to-list request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOutcome {
    pub entry: ListEntry,
    pub book: SavedBook,
    /// `false` when the book was already on the user's list
    pub created: bool,
}

/// Result of an update-status request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusUpdate {
    Updated(ListEntry),
    /// The submitted value was not a known status; the entry is unchanged
    Ignored(ListEntry),
}

impl StatusUpdate {
    pub fn entry(&self) -> &ListEntry {
        match self {
            StatusUpdate::Updated(entry) | StatusUpdate::Ignored(entry) => entry,
        }
    }

    pub fn was_updated(&self) -> bool {
        matches!(self, StatusUpdate::Updated(_))
    }
}
