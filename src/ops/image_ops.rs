use chrono::{Local, NaiveDate, Utc};

use crate::model::image::{ImageDraft, ImageId, ImageRecord, ValidationError};

/// Error type for gallery mutations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GalleryError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("image not found: {0}")]
    NotFound(ImageId),
    #[error("duplicate image id: {0}")]
    DuplicateId(ImageId),
}

/// Title given to records created by URL import
pub const IMPORTED_TITLE: &str = "Imported Image";

/// Tag given to records created by URL import
pub const IMPORTED_TAG: &str = "Web";

/// Today's date in local time
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

// ---------------------------------------------------------------------------
// Id generation
// ---------------------------------------------------------------------------

/// Issues decimal ids from the millisecond clock, strictly increasing,
/// and never one already present in the collection.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        IdGenerator::default()
    }

    pub fn next_id(&mut self, existing: &[ImageRecord]) -> ImageId {
        self.next_id_at(Utc::now().timestamp_millis(), existing)
    }

    /// Like `next_id`, with the clock reading supplied
    pub fn next_id_at(&mut self, now_millis: i64, existing: &[ImageRecord]) -> ImageId {
        let mut candidate = now_millis.max(self.last + 1);
        loop {
            let id = ImageId::new(candidate.to_string());
            if !existing.iter().any(|r| r.id == id) {
                self.last = candidate;
                return id;
            }
            candidate += 1;
        }
    }
}

// ---------------------------------------------------------------------------
// Copy-on-write operations
// ---------------------------------------------------------------------------

/// Prepend a new record built from `draft` under `id`. The id must not
/// already be in use.
pub fn add_image(
    images: &[ImageRecord],
    id: ImageId,
    draft: ImageDraft,
) -> Result<Vec<ImageRecord>, GalleryError> {
    draft.validate()?;
    if images.iter().any(|r| r.id == id) {
        return Err(GalleryError::DuplicateId(id));
    }
    let mut next = Vec::with_capacity(images.len() + 1);
    next.push(ImageRecord::from_draft(id, draft));
    next.extend_from_slice(images);
    Ok(next)
}

/// Replace the record whose id matches `updated.id`, keeping its position.
/// The stored id and creation date are kept; every other field is taken from `updated`.
pub fn update_image(
    images: &[ImageRecord],
    updated: ImageRecord,
) -> Result<Vec<ImageRecord>, GalleryError> {
    let pos = position(images, &updated.id)?;
    let mut next = images.to_vec();
    let date = next[pos].date;
    next[pos] = ImageRecord { date, ..updated };
    Ok(next)
}

/// Flip the favorite flag of one record. Returns the new collection and the new flag.
pub fn toggle_favorite(
    images: &[ImageRecord],
    id: &ImageId,
) -> Result<(Vec<ImageRecord>, bool), GalleryError> {
    let pos = position(images, id)?;
    let mut next = images.to_vec();
    let favorite = !next[pos].is_favorite;
    next[pos].is_favorite = favorite;
    Ok((next, favorite))
}

/// The draft an import from `url` creates, dated `date`
pub fn import_draft(url: &str, date: NaiveDate) -> Result<ImageDraft, GalleryError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(ValidationError::MissingUrl.into());
    }
    Ok(ImageDraft::new(
        url,
        IMPORTED_TITLE,
        vec![IMPORTED_TAG.to_string()],
        date,
    ))
}

fn position(images: &[ImageRecord], id: &ImageId) -> Result<usize, GalleryError> {
    images
        .iter()
        .position(|r| &r.id == id)
        .ok_or_else(|| GalleryError::NotFound(id.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample::sample_images;
    use pretty_assertions::assert_eq;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_add_prepends() {
        let images = sample_images();
        let draft = ImageDraft::new("https://x/y.png", "New", vec!["UI".into()], date("2024-12-01"));
        let next = add_image(&images, ImageId::from("100"), draft).unwrap();
        assert_eq!(next.len(), 7);
        assert_eq!(next[0].id, ImageId::from("100"));
        assert_eq!(next[0].title, "New");
        assert_eq!(&next[1..], &images[..]);
    }

    #[test]
    fn test_add_rejects_invalid_draft() {
        let images = sample_images();
        let draft = ImageDraft::new("https://x/y.png", "New", vec![], date("2024-12-01"));
        let err = add_image(&images, ImageId::from("100"), draft).unwrap_err();
        assert_eq!(err, GalleryError::Validation(ValidationError::NoTags));
    }

    #[test]
    fn test_add_rejects_existing_id() {
        let images = sample_images();
        let draft = ImageDraft::new("https://x/y.png", "New", vec!["UI".into()], date("2024-12-01"));
        let err = add_image(&images, ImageId::from("3"), draft).unwrap_err();
        assert_eq!(err, GalleryError::DuplicateId(ImageId::from("3")));
        assert_eq!(err.to_string(), "duplicate image id: 3");
    }

    #[test]
    fn test_update_keeps_position_id_and_date() {
        let images = sample_images();
        let mut updated = images[2].clone();
        updated.title = "Renamed".into();
        updated.tags.clear();
        updated.date = date("1999-01-01");
        let next = update_image(&images, updated).unwrap();
        assert_eq!(next[2].title, "Renamed");
        assert!(next[2].tags.is_empty());
        assert_eq!(next[2].date, images[2].date);
        assert_eq!(next.len(), images.len());
        // Untouched neighbours
        assert_eq!(next[1], images[1]);
        assert_eq!(next[3], images[3]);
        // The input snapshot is never modified
        assert_eq!(images[2].title, "Logo Inspiration");
    }

    #[test]
    fn test_update_unknown_id() {
        let images = sample_images();
        let mut ghost = images[0].clone();
        ghost.id = ImageId::from("missing");
        let err = update_image(&images, ghost).unwrap_err();
        assert_eq!(err, GalleryError::NotFound(ImageId::from("missing")));
    }

    #[test]
    fn test_toggle_favorite_twice_restores() {
        let images = sample_images();
        let id = ImageId::from("3");
        let (once, fav) = toggle_favorite(&images, &id).unwrap();
        assert!(fav);
        assert!(once[2].is_favorite);
        let (twice, fav) = toggle_favorite(&once, &id).unwrap();
        assert!(!fav);
        assert_eq!(twice, images);
    }

    #[test]
    fn test_toggle_unknown_id() {
        let images = sample_images();
        assert!(matches!(
            toggle_favorite(&images, &ImageId::from("nope")),
            Err(GalleryError::NotFound(_))
        ));
    }

    #[test]
    fn test_import_draft() {
        let draft = import_draft("  https://example.com/pic.jpg ", date("2024-12-24")).unwrap();
        assert_eq!(draft.url, "https://example.com/pic.jpg");
        assert_eq!(draft.title, "Imported Image");
        assert_eq!(draft.tags, vec!["Web"]);
        assert!(!draft.is_favorite);
        assert_eq!(draft.memo, None);

        assert_eq!(
            import_draft("   ", date("2024-12-24")).unwrap_err(),
            GalleryError::Validation(ValidationError::MissingUrl)
        );
    }

    #[test]
    fn test_id_generator_same_millisecond() {
        let mut ids = IdGenerator::new();
        let a = ids.next_id_at(1_700_000_000_000, &[]);
        let b = ids.next_id_at(1_700_000_000_000, &[]);
        let c = ids.next_id_at(1_699_999_999_000, &[]);
        assert_eq!(a.as_str(), "1700000000000");
        assert_eq!(b.as_str(), "1700000000001");
        assert_eq!(c.as_str(), "1700000000002");
    }

    #[test]
    fn test_id_generator_skips_existing() {
        let mut images = sample_images();
        images[0].id = ImageId::from("42");
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_id_at(42, &images).as_str(), "43");
        // Sample ids "2".."6" are skipped too
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_id_at(2, &images).as_str(), "7");
    }
}
