use indexmap::IndexSet;

use crate::model::controls::ALL_TAGS;
use crate::model::image::ImageRecord;

/// Every distinct tag in first-seen order: collection order, then tag order
/// within each record.
pub fn distinct_tags(images: &[ImageRecord]) -> Vec<String> {
    let set: IndexSet<&str> = images
        .iter()
        .flat_map(|image| image.tags.iter().map(String::as_str))
        .collect();
    set.into_iter().map(str::to_string).collect()
}

/// The tag filter options: `"All"` followed by the distinct tags
pub fn tag_options(images: &[ImageRecord]) -> Vec<String> {
    let mut options = vec![ALL_TAGS.to_string()];
    options.extend(distinct_tags(images));
    options
}

/// Suggested tags not yet on the record that contain `typed` (case-insensitive)
pub fn suggest_tags<'a>(suggested: &'a [String], current: &[String], typed: &str) -> Vec<&'a str> {
    let needle = typed.to_lowercase();
    suggested
        .iter()
        .filter(|tag| !current.contains(tag))
        .filter(|tag| tag.to_lowercase().contains(&needle))
        .map(String::as_str)
        .collect()
}
