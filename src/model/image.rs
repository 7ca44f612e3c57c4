use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Opaque identifier of an image record, unique within a collection
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageId(pub String);

impl ImageId {
    pub fn new(id: impl Into<String>) -> Self {
        ImageId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageId {
    fn from(s: &str) -> Self {
        ImageId(s.to_string())
    }
}

/// Dominant-colour label from the fixed palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageColor {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Black,
}

impl ImageColor {
    /// Palette order, as shown in the colour filter
    pub const ALL: [ImageColor; 6] = [
        ImageColor::Red,
        ImageColor::Blue,
        ImageColor::Green,
        ImageColor::Yellow,
        ImageColor::Purple,
        ImageColor::Black,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ImageColor::Red => "red",
            ImageColor::Blue => "blue",
            ImageColor::Green => "green",
            ImageColor::Yellow => "yellow",
            ImageColor::Purple => "purple",
            ImageColor::Black => "black",
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            ImageColor::Red => "Red",
            ImageColor::Blue => "Blue",
            ImageColor::Green => "Green",
            ImageColor::Yellow => "Yellow",
            ImageColor::Purple => "Purple",
            ImageColor::Black => "Black",
        }
    }

    /// Swatch colour as `#RRGGBB`
    pub fn swatch_hex(self) -> &'static str {
        match self {
            ImageColor::Red => "#EF4444",
            ImageColor::Blue => "#3B82F6",
            ImageColor::Green => "#10B981",
            ImageColor::Yellow => "#F59E0B",
            ImageColor::Purple => "#A855F7",
            ImageColor::Black => "#1F2937",
        }
    }
}

impl fmt::Display for ImageColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color: {0} (expected one of red, blue, green, yellow, purple, black)")]
pub struct UnknownColor(pub String);

impl FromStr for ImageColor {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ImageColor::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownColor(s.to_string()))
    }
}

/// A single image in the gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRecord {
    pub id: ImageId,
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Creation date, `YYYY-MM-DD`
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ImageColor>,
    /// Folder label (not to be confused with the gallery's collection of records)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,
}

impl ImageRecord {
    /// Build a record from a draft and a freshly assigned id
    pub fn from_draft(id: ImageId, draft: ImageDraft) -> Self {
        ImageRecord {
            id,
            url: draft.url,
            title: draft.title,
            tags: draft.tags,
            date: draft.date,
            memo: draft.memo,
            source_url: draft.source_url,
            is_favorite: draft.is_favorite,
            color: draft.color,
            collection: draft.collection,
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Every field of a record except its id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDraft {
    pub url: String,
    pub title: String,
    pub tags: Vec<String>,
    pub date: NaiveDate,
    pub memo: Option<String>,
    pub source_url: Option<String>,
    pub is_favorite: bool,
    pub color: Option<ImageColor>,
    pub collection: Option<String>,
}

/// A required field missing at creation time
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("an image URL is required")]
    MissingUrl,
    #[error("a title is required")]
    MissingTitle,
    #[error("at least one tag is required")]
    NoTags,
}

impl ImageDraft {
    /// A draft with only the required fields set
    pub fn new(url: impl Into<String>, title: impl Into<String>, tags: Vec<String>, date: NaiveDate) -> Self {
        ImageDraft {
            url: url.into(),
            title: title.into(),
            tags,
            date,
            memo: None,
            source_url: None,
            is_favorite: false,
            color: None,
            collection: None,
        }
    }

    /// Check the creation-time requirements: url, title and at least one tag
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.trim().is_empty() {
            return Err(ValidationError::MissingUrl);
        }
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if self.tags.is_empty() {
            return Err(ValidationError::NoTags);
        }
        Ok(())
    }
}
