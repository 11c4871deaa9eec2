use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A content item as seen by the annotation engine.
///
/// The hosting platform supplies these fields; all of them are treated
/// as opaque inputs. `display_date` is the locale-formatted date of the
/// reference instant, preformatted by the caller (the engine does no
/// localization).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    /// Platform content type (e.g. "post", "page").
    pub item_type: String,
    pub status: ItemStatus,
    pub title: String,
    /// BCP 47 language tag of the content.
    pub language: String,
    pub canonical_url: String,
    pub published: Option<DateTime<Utc>>,
    pub modified: Option<DateTime<Utc>>,
    /// Locale-formatted reference date for the `{published_date}` token.
    pub display_date: String,
}

/// Publication status. Only published items are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ItemStatus {
    Published,
    Draft,
    Pending,
    Private,
    Trash,
    /// Any status the platform reports that we don't recognize.
    Unknown,
}

impl ItemStatus {
    /// Parse a platform status string. Unknown values never error.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            // "publish" is the legacy platform spelling.
            "published" | "publish" => Self::Published,
            "draft" => Self::Draft,
            "pending" => Self::Pending,
            "private" => Self::Private,
            "trash" => Self::Trash,
            _ => Self::Unknown,
        }
    }

    pub fn is_published(self) -> bool {
        self == Self::Published
    }
}

impl From<String> for ItemStatus {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}
