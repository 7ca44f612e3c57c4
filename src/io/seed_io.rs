use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::image::{ImageId, ImageRecord};

/// Error type for loading a seed collection
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse seed collection: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("duplicate image id in seed collection: {0}")]
    DuplicateId(ImageId),
    #[error("image {id} has an empty {field}")]
    EmptyField { id: ImageId, field: &'static str },
}

/// Parse a JSON array of records and check ids are unique and required
/// fields non-empty.
pub fn parse_seed(text: &str) -> Result<Vec<ImageRecord>, SeedError> {
    let images: Vec<ImageRecord> = serde_json::from_str(text)?;
    let mut seen = HashSet::new();
    for image in &images {
        if !seen.insert(&image.id) {
            return Err(SeedError::DuplicateId(image.id.clone()));
        }
        if image.url.trim().is_empty() {
            return Err(SeedError::EmptyField {
                id: image.id.clone(),
                field: "url",
            });
        }
        if image.title.trim().is_empty() {
            return Err(SeedError::EmptyField {
                id: image.id.clone(),
                field: "title",
            });
        }
    }
    Ok(images)
}

/// Read a seed collection from disk. Nothing is ever written back.
pub fn read_seed(path: &Path) -> Result<Vec<ImageRecord>, SeedError> {
    let text = fs::read_to_string(path).map_err(|e| SeedError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let images = parse_seed(&text)?;
    tracing::debug!(count = images.len(), path = %path.display(), "seed collection loaded");
    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample::sample_images;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_sample_round_trips_through_json() {
        let text = serde_json::to_string_pretty(&sample_images()).unwrap();
        assert_eq!(parse_seed(&text).unwrap(), sample_images());
    }

    #[test]
    fn test_minimal_records() {
        let text = r#"[
            {"id": "a", "url": "https://x/a.png", "title": "A", "date": "2024-01-02"},
            {"id": "b", "url": "https://x/b.png", "title": "B", "tags": ["UI"], "date": "2024-01-03"}
        ]"#;
        let images = parse_seed(text).unwrap();
        assert_eq!(images.len(), 2);
        assert!(images[0].tags.is_empty());
        assert!(!images[0].is_favorite);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let text = r#"[
            {"id": "a", "url": "u", "title": "A", "date": "2024-01-02"},
            {"id": "a", "url": "u", "title": "B", "date": "2024-01-03"}
        ]"#;
        assert!(matches!(parse_seed(text), Err(SeedError::DuplicateId(id)) if id.as_str() == "a"));
    }

    #[test]
    fn test_empty_title_rejected() {
        let text = r#"[{"id": "a", "url": "u", "title": " ", "date": "2024-01-02"}]"#;
        assert!(matches!(
            parse_seed(text),
            Err(SeedError::EmptyField { field: "title", .. })
        ));
    }

    #[test]
    fn test_bad_date_is_parse_error() {
        let text = r#"[{"id": "a", "url": "u", "title": "A", "date": "yesterday"}]"#;
        assert!(matches!(parse_seed(text), Err(SeedError::ParseError(_))));
    }

    #[test]
    fn test_read_seed_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("seed.json");
        fs::write(&path, serde_json::to_string(&sample_images()).unwrap()).unwrap();
        assert_eq!(read_seed(&path).unwrap().len(), 6);
        assert!(matches!(
            read_seed(&tmp.path().join("missing.json")),
            Err(SeedError::ReadError { .. })
        ));
    }
}
