use chrono::NaiveDate;

use super::image::{ImageColor, ImageId, ImageRecord};

/// The gallery a fresh session starts with when no seed file is given
pub fn sample_images() -> Vec<ImageRecord> {
    vec![
        sample(
            "1",
            "https://images.unsplash.com/photo-1677214467820-ab069619bbb6?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxtb2Rlcm4lMjB3ZWIlMjBkZXNpZ258ZW58MXx8fHwxNzYyMzU3NjY5fDA&ixlib=rb-4.1.0&q=80&w=1080&utm_source=figma&utm_medium=referral",
            "Modern Web Design",
            &["Web", "UI"],
            (2024, 11, 1),
            "Clean and minimal homepage design",
            false,
            ImageColor::Blue,
            Some("LPデザイン集"),
        ),
        sample(
            "2",
            "https://images.unsplash.com/photo-1719996540227-76fee77f0460?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHx0eXBvZ3JhcGh5JTIwcG9zdGVyfGVufDF8fHx8MTc2MjMzNTEwOXww&ixlib=rb-4.1.0&q=80&w=1080&utm_source=figma&utm_medium=referral",
            "Typography Example",
            &["Typography"],
            (2024, 11, 2),
            "Beautiful font pairing",
            true,
            ImageColor::Yellow,
            None,
        ),
        sample(
            "3",
            "https://images.unsplash.com/photo-1756510473714-567691ff8a2a?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxtaW5pbWFsaXN0JTIwbG9nb3xlbnwxfHx8fDE3NjIzODU1Mjd8MA&ixlib=rb-4.1.0&q=80&w=1080&utm_source=figma&utm_medium=referral",
            "Logo Inspiration",
            &["Logo"],
            (2024, 11, 3),
            "Minimalist logo design",
            false,
            ImageColor::Black,
            Some("ロゴアイデア"),
        ),
        sample(
            "4",
            "https://images.unsplash.com/photo-1615387000571-bdcfe92eb67c?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHx1aSUyMGRlc2lnbiUyMGNvbXBvbmVudHN8ZW58MXx8fHwxNzYyNDQwMTk2fDA&ixlib=rb-4.1.0&q=80&w=1080&utm_source=figma&utm_medium=referral",
            "UI Components",
            &["UI"],
            (2024, 11, 4),
            "Card components collection",
            true,
            ImageColor::Purple,
            None,
        ),
        sample(
            "5",
            "https://images.unsplash.com/photo-1522542550221-31fd19575a2d?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHx3ZWJzaXRlJTIwbGF5b3V0fGVufDF8fHx8MTc2MjMzMDg2NHww&ixlib=rb-4.1.0&q=80&w=1080&utm_source=figma&utm_medium=referral",
            "Web Layout",
            &["Web", "UI"],
            (2024, 11, 5),
            "Grid-based layout system",
            false,
            ImageColor::Green,
            None,
        ),
        sample(
            "6",
            "https://images.unsplash.com/photo-1716471330463-f475b00f0506?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxicmFuZCUyMGRlc2lnbnxlbnwxfHx8fDE3NjI0MTI5Mjl8MA&ixlib=rb-4.1.0&q=80&w=1080&utm_source=figma&utm_medium=referral",
            "Brand Design",
            &["Logo", "Typography"],
            (2024, 11, 6),
            "Corporate branding elements",
            false,
            ImageColor::Red,
            None,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn sample(
    id: &str,
    url: &str,
    title: &str,
    tags: &[&str],
    (y, m, d): (i32, u32, u32),
    memo: &str,
    is_favorite: bool,
    color: ImageColor,
    collection: Option<&str>,
) -> ImageRecord {
    ImageRecord {
        id: ImageId::from(id),
        url: url.to_string(),
        title: title.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        memo: Some(memo.to_string()),
        source_url: None,
        is_favorite,
        color: Some(color),
        collection: collection.map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_keep_full_photo_urls() {
        let images = sample_images();
        assert_eq!(images.len(), 6);
        for image in &images {
            assert!(image.url.starts_with("https://images.unsplash.com/photo-"));
            assert!(image.url.contains("&w=1080&"), "{}", image.url);
            assert!(image.url.ends_with("utm_source=figma&utm_medium=referral"));
        }
    }
}
