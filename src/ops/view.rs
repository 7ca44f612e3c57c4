use std::cmp::Ordering;

use crate::model::controls::{ColorFilter, SortBy, TagFilter, ViewControls};
use crate::model::image::ImageRecord;

// ---------------------------------------------------------------------------
// Filter clauses
// ---------------------------------------------------------------------------

/// Tag clause: exact, case-sensitive membership
pub fn matches_tag(image: &ImageRecord, filter: &TagFilter) -> bool {
    match filter {
        TagFilter::All => true,
        TagFilter::Tag(tag) => image.has_tag(tag),
    }
}

/// Search clause: case-insensitive substring of title, memo or any tag.
/// An empty query matches everything; an absent memo never matches.
pub fn matches_query(image: &ImageRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    image.title.to_lowercase().contains(&needle)
        || image
            .memo
            .as_ref()
            .is_some_and(|memo| memo.to_lowercase().contains(&needle))
        || image
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle))
}

/// Colour clause: exact palette match; an absent colour only passes `all`
pub fn matches_color(image: &ImageRecord, filter: ColorFilter) -> bool {
    match filter {
        ColorFilter::All => true,
        ColorFilter::Only(color) => image.color == Some(color),
    }
}

/// A record is visible iff all three clauses hold
pub fn is_visible(image: &ImageRecord, controls: &ViewControls) -> bool {
    matches_tag(image, &controls.tag)
        && matches_query(image, &controls.query)
        && matches_color(image, controls.color)
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Comparator for a sort mode. Stable sorts keep equal records in collection order.
fn compare(sort: SortBy, a: &ImageRecord, b: &ImageRecord) -> Ordering {
    match sort {
        SortBy::Newest => b.date.cmp(&a.date),
        SortBy::Favorite => b
            .is_favorite
            .cmp(&a.is_favorite)
            .then_with(|| b.date.cmp(&a.date)),
        SortBy::Updated => Ordering::Equal,
    }
}

// ---------------------------------------------------------------------------
// Derived view
// ---------------------------------------------------------------------------

/// Compute the ordered, visible subset of `images` for the given controls.
///
/// Pure: the result depends only on the arguments. Filtering happens first,
/// then a stable sort, so records that compare equal keep their collection
/// order (for `Updated`, which has no comparator, that is the whole order).
pub fn derived_view<'a>(images: &'a [ImageRecord], controls: &ViewControls) -> Vec<&'a ImageRecord> {
    let mut visible: Vec<&ImageRecord> = images
        .iter()
        .filter(|image| is_visible(image, controls))
        .collect();
    visible.sort_by(|a, b| compare(controls.sort, a, b));
    visible
}
