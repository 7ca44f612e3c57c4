use std::path::{Path, PathBuf};

/// File extensions accepted as images
const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "svg", "avif", "tif", "tiff",
];

/// A dropped image file, ready to pre-fill the upload dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedImage {
    /// `file://` URL of the absolute path
    pub url: String,
    /// File name with its last extension removed
    pub suggested_title: String,
}

/// Whether the path names an image file, judged by extension
pub fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
}

/// Interpret pasted text as a dropped file.
///
/// Terminals deliver a drag-and-drop as a pasted path, sometimes quoted,
/// `file://`-prefixed or with escaped spaces. Returns None unless the text
/// names an existing image file.
pub fn dropped_image(pasted: &str) -> Option<DroppedImage> {
    let path = clean_pasted_path(pasted)?;
    if !is_image_path(&path) || !path.is_file() {
        return None;
    }
    let absolute = std::fs::canonicalize(&path).unwrap_or(path);
    let suggested_title = absolute.file_stem()?.to_string_lossy().into_owned();
    Some(DroppedImage {
        url: format!("file://{}", absolute.display()),
        suggested_title,
    })
}

fn clean_pasted_path(pasted: &str) -> Option<PathBuf> {
    let mut s = pasted.trim();
    if s.is_empty() || s.contains('\n') {
        return None;
    }
    for quote in ['\'', '"'] {
        if s.len() >= 2 && s.starts_with(quote) && s.ends_with(quote) {
            s = &s[1..s.len() - 1];
        }
    }
    let s = s.strip_prefix("file://").unwrap_or(s);
    Some(PathBuf::from(s.replace("\\ ", " ")))
}
