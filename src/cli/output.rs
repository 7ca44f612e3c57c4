use serde::Serialize;

use crate::model::image::{ImageColor, ImageRecord};
use crate::ops::notice::Notice;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ColorJson {
    pub name: &'static str,
    pub label: &'static str,
    pub swatch: &'static str,
}

#[derive(Serialize)]
pub struct MutationJson<'a> {
    pub notice: &'static str,
    pub id: &'a str,
    pub images: &'a [ImageRecord],
}

pub fn color_to_json(color: ImageColor) -> ColorJson {
    ColorJson {
        name: color.as_str(),
        label: color.label(),
        swatch: color.swatch_hex(),
    }
}

pub fn mutation_to_json<'a>(notice: &'a Notice, images: &'a [ImageRecord]) -> MutationJson<'a> {
    MutationJson {
        notice: notice.message(),
        id: notice.image_id().as_str(),
        images,
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

fn tags_str(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!("#{}", t))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format one image as a one-line summary
pub fn format_image_line(image: &ImageRecord) -> String {
    let star = if image.is_favorite { "\u{2605}" } else { " " };
    let color = image
        .color
        .map(|c| format!(" ({})", c))
        .unwrap_or_default();
    let tags = if image.tags.is_empty() {
        String::new()
    } else {
        format!(" {}", tags_str(&image.tags))
    };
    format!(
        "{} {} {} {}{}{}",
        image.date, star, image.id, image.title, color, tags
    )
}

/// Format the full record
pub fn format_image_detail(image: &ImageRecord) -> Vec<String> {
    let mut lines = Vec::new();
    let star = if image.is_favorite { " \u{2605}" } else { "" };
    lines.push(format!("{} {}{}", image.id, image.title, star));
    lines.push(format!("url: {}", image.url));
    lines.push(format!("date: {}", image.date));
    if !image.tags.is_empty() {
        lines.push(format!("tags: {}", tags_str(&image.tags)));
    }
    if let Some(color) = image.color {
        lines.push(format!("color: {}", color));
    }
    if let Some(collection) = &image.collection {
        lines.push(format!("collection: {}", collection));
    }
    if let Some(source) = &image.source_url {
        lines.push(format!("source: {}", source));
    }
    if let Some(memo) = &image.memo {
        lines.push("memo:".to_string());
        for line in memo.lines() {
            lines.push(format!("  {}", line));
        }
    }
    lines
}

pub fn format_color_line(color: ImageColor) -> String {
    format!("{:<7} {:<7} {}", color.as_str(), color.label(), color.swatch_hex())
}
