use chrono::NaiveDate;

use super::image::{ImageDraft, ImageRecord, ValidationError};

/// Form state of the upload dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadDraft {
    pub url: String,
    pub title: String,
    pub memo: String,
    pub source_url: String,
    pub selected_tags: Vec<String>,
}

impl UploadDraft {
    /// Select the tag if it is not selected, deselect it otherwise
    pub fn toggle_tag(&mut self, tag: &str) {
        if let Some(pos) = self.selected_tags.iter().position(|t| t == tag) {
            self.selected_tags.remove(pos);
        } else {
            self.selected_tags.push(tag.to_string());
        }
    }

    pub fn is_selected(&self, tag: &str) -> bool {
        self.selected_tags.iter().any(|t| t == tag)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.trim().is_empty() {
            return Err(ValidationError::MissingUrl);
        }
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if self.selected_tags.is_empty() {
            return Err(ValidationError::NoTags);
        }
        Ok(())
    }

    pub fn is_submittable(&self) -> bool {
        self.validate().is_ok()
    }

    /// Convert to a creation draft dated `today`. Empty optional inputs become absent.
    pub fn to_image_draft(&self, today: NaiveDate) -> ImageDraft {
        let mut draft = ImageDraft::new(
            self.url.trim(),
            self.title.trim(),
            self.selected_tags.clone(),
            today,
        );
        draft.memo = non_empty(&self.memo);
        draft.source_url = non_empty(&self.source_url);
        draft
    }

    /// Pre-fill from a dropped file: its url and a suggested title
    pub fn prefill(&mut self, url: String, title: String) {
        self.url = url;
        self.title = title;
    }

    pub fn reset(&mut self) {
        *self = UploadDraft::default();
    }
}

/// Form state of the detail dialog (memo, source, tags, folder)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailDraft {
    pub memo: String,
    pub source_url: String,
    pub tags: Vec<String>,
    pub collection: String,
    /// Tag being typed, not yet added
    pub new_tag: String,
}

impl DetailDraft {
    pub fn from_record(record: &ImageRecord) -> Self {
        DetailDraft {
            memo: record.memo.clone().unwrap_or_default(),
            source_url: record.source_url.clone().unwrap_or_default(),
            tags: record.tags.clone(),
            collection: record.collection.clone().unwrap_or_default(),
            new_tag: String::new(),
        }
    }

    /// Append a tag unless it is empty or already present. Clears the input either way.
    pub fn add_tag(&mut self, tag: &str) {
        let tag = tag.trim();
        if !tag.is_empty() && !self.tags.iter().any(|t| t == tag) {
            self.tags.push(tag.to_string());
        }
        self.new_tag.clear();
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    /// Whether saving would change the record. Absent fields compare as empty.
    pub fn has_changes(&self, record: &ImageRecord) -> bool {
        self.memo != record.memo.as_deref().unwrap_or("")
            || self.source_url != record.source_url.as_deref().unwrap_or("")
            || self.tags != record.tags
            || self.collection != record.collection.as_deref().unwrap_or("")
    }

    /// The record with this draft's fields written over it
    pub fn apply(&self, record: &ImageRecord) -> ImageRecord {
        ImageRecord {
            memo: non_empty(&self.memo),
            source_url: non_empty(&self.source_url),
            tags: self.tags.clone(),
            collection: non_empty(&self.collection),
            ..record.clone()
        }
    }
}

/// Form state of the quick-edit dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuickEditDraft {
    pub title: String,
    pub memo: String,
}

impl QuickEditDraft {
    pub fn from_record(record: &ImageRecord) -> Self {
        QuickEditDraft {
            title: record.title.clone(),
            memo: record.memo.clone().unwrap_or_default(),
        }
    }

    pub fn apply(&self, record: &ImageRecord) -> ImageRecord {
        ImageRecord {
            title: self.title.clone(),
            memo: non_empty(&self.memo),
            ..record.clone()
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
