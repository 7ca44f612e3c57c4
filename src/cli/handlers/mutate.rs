use crate::cli::commands::{AddArgs, EditArgs, FavoriteArgs, ImportArgs};
use crate::cli::output::{format_image_line, mutation_to_json};
use crate::model::image::{ImageDraft, ImageId};
use crate::ops::image_ops::today;

use super::CliGallery;

/// Print the last notice, then the resulting collection
fn report(gallery: &CliGallery, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let Some(notice) = gallery.notifier().last() else {
        return Ok(());
    };
    if json {
        let out = mutation_to_json(notice, gallery.images());
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}: {}", notice.message(), notice.image_id());
        for image in gallery.images() {
            println!("{}", format_image_line(image));
        }
    }
    Ok(())
}

pub(super) fn cmd_add(gallery: &mut CliGallery, args: AddArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut draft = ImageDraft::new(args.url, args.title, args.tags, today());
    draft.memo = args.memo;
    draft.source_url = args.source_url;
    draft.color = args.color;
    draft.collection = args.collection;
    gallery.add_image(draft)?;
    report(gallery, json)
}

pub(super) fn cmd_import(gallery: &mut CliGallery, args: ImportArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    gallery.import_from_url(&args.url)?;
    report(gallery, json)
}

pub(super) fn cmd_favorite(gallery: &mut CliGallery, args: FavoriteArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    gallery.toggle_favorite(&ImageId::new(args.id))?;
    report(gallery, json)
}

pub(super) fn cmd_edit(gallery: &mut CliGallery, args: EditArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let id = ImageId::new(args.id);
    let mut image = gallery
        .get(&id)
        .cloned()
        .ok_or_else(|| format!("image not found: {}", id))?;

    if let Some(title) = args.title {
        if title.trim().is_empty() {
            return Err("title cannot be empty".into());
        }
        image.title = title;
    }
    if let Some(memo) = args.memo {
        image.memo = non_empty(memo);
    }
    if let Some(source) = args.source_url {
        image.source_url = non_empty(source);
    }
    if args.clear_tags {
        image.tags.clear();
    } else if !args.tags.is_empty() {
        image.tags = args.tags;
    }
    if args.clear_color {
        image.color = None;
    } else if let Some(color) = args.color {
        image.color = Some(color);
    }
    if let Some(collection) = args.collection {
        image.collection = non_empty(collection);
    }

    gallery.update_image(image)?;
    report(gallery, json)
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() { None } else { Some(s) }
}
