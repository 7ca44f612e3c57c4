use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::image::{ImageColor, UnknownColor};

/// Sentinel tag option meaning "no tag filter"
pub const ALL_TAGS: &str = "All";

/// Sentinel colour option meaning "no colour filter"
pub const ALL_COLORS: &str = "all";

/// Tag clause of the view filter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TagFilter {
    #[default]
    All,
    Tag(String),
}

impl TagFilter {
    /// Parse a control value; the `"All"` sentinel means no filter
    pub fn from_option(option: &str) -> Self {
        if option == ALL_TAGS {
            TagFilter::All
        } else {
            TagFilter::Tag(option.to_string())
        }
    }

    /// The control value as shown in the tag bar
    pub fn as_option(&self) -> &str {
        match self {
            TagFilter::All => ALL_TAGS,
            TagFilter::Tag(tag) => tag,
        }
    }
}

/// Colour clause of the view filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorFilter {
    #[default]
    All,
    Only(ImageColor),
}

impl ColorFilter {
    /// Cycle order: all, then the palette, then back to all
    pub fn next(self) -> Self {
        match self {
            ColorFilter::All => ColorFilter::Only(ImageColor::ALL[0]),
            ColorFilter::Only(c) => {
                let idx = ImageColor::ALL.iter().position(|x| *x == c).unwrap_or(0);
                match ImageColor::ALL.get(idx + 1) {
                    Some(next) => ColorFilter::Only(*next),
                    None => ColorFilter::All,
                }
            }
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ColorFilter::All => ColorFilter::Only(ImageColor::ALL[ImageColor::ALL.len() - 1]),
            ColorFilter::Only(c) => {
                let idx = ImageColor::ALL.iter().position(|x| *x == c).unwrap_or(0);
                if idx == 0 {
                    ColorFilter::All
                } else {
                    ColorFilter::Only(ImageColor::ALL[idx - 1])
                }
            }
        }
    }
}

impl fmt::Display for ColorFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorFilter::All => f.write_str(ALL_COLORS),
            ColorFilter::Only(c) => write!(f, "{}", c),
        }
    }
}

impl FromStr for ColorFilter {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_COLORS {
            Ok(ColorFilter::All)
        } else {
            s.parse().map(ColorFilter::Only)
        }
    }
}

/// Ordering applied to the filtered records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Newest date first
    #[default]
    Newest,
    /// Favorites first, then newest
    Favorite,
    /// Collection order (no comparator defined)
    Updated,
}

impl SortBy {
    pub fn next(self) -> Self {
        match self {
            SortBy::Newest => SortBy::Favorite,
            SortBy::Favorite => SortBy::Updated,
            SortBy::Updated => SortBy::Newest,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortBy::Newest => "Newest",
            SortBy::Favorite => "Favorites",
            SortBy::Updated => "Updated",
        }
    }
}

/// The four independent controls the derived view is computed from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewControls {
    pub tag: TagFilter,
    pub query: String,
    pub color: ColorFilter,
    pub sort: SortBy,
}

/// How cards are arranged in the gallery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Each card goes into the currently shortest column
    #[default]
    Masonry,
    /// Row by row, uniform card heights
    Grid,
}

impl LayoutMode {
    pub fn toggle(self) -> Self {
        match self {
            LayoutMode::Masonry => LayoutMode::Grid,
            LayoutMode::Grid => LayoutMode::Masonry,
        }
    }
}

/// Card density
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ViewSize {
    pub fn columns(self) -> usize {
        match self {
            ViewSize::Small => 4,
            ViewSize::Medium => 3,
            ViewSize::Large => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewSize::Small => "S",
            ViewSize::Medium => "M",
            ViewSize::Large => "L",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_filter_sentinel() {
        assert_eq!(TagFilter::from_option("All"), TagFilter::All);
        // Case-sensitive: "all" is a real tag name here
        assert_eq!(TagFilter::from_option("all"), TagFilter::Tag("all".into()));
        assert_eq!(TagFilter::Tag("UI".into()).as_option(), "UI");
    }

    #[test]
    fn test_color_filter_parse() {
        assert_eq!("all".parse::<ColorFilter>(), Ok(ColorFilter::All));
        assert_eq!(
            "purple".parse::<ColorFilter>(),
            Ok(ColorFilter::Only(ImageColor::Purple))
        );
        assert!("All".parse::<ColorFilter>().is_err());
    }

    #[test]
    fn test_color_filter_cycle_visits_every_swatch() {
        let mut filter = ColorFilter::All;
        let mut seen = Vec::new();
        for _ in 0..7 {
            filter = filter.next();
            seen.push(filter);
        }
        assert_eq!(seen.last(), Some(&ColorFilter::All));
        assert_eq!(seen[0], ColorFilter::Only(ImageColor::Red));
        assert_eq!(seen[5], ColorFilter::Only(ImageColor::Black));

        assert_eq!(ColorFilter::All.prev(), ColorFilter::Only(ImageColor::Black));
        assert_eq!(ColorFilter::Only(ImageColor::Red).prev(), ColorFilter::All);
    }

    #[test]
    fn test_sort_cycle() {
        assert_eq!(SortBy::Newest.next(), SortBy::Favorite);
        assert_eq!(SortBy::Favorite.next(), SortBy::Updated);
        assert_eq!(SortBy::Updated.next(), SortBy::Newest);
    }

    #[test]
    fn test_view_size_columns() {
        assert_eq!(ViewSize::Small.columns(), 4);
        assert_eq!(ViewSize::Medium.columns(), 3);
        assert_eq!(ViewSize::Large.columns(), 2);
    }
}
