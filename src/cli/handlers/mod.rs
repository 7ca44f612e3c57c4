mod mutate;

use std::path::Path;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::{config_io, seed_io};
use crate::model::controls::{TagFilter, ViewControls};
use crate::model::image::{ImageColor, ImageId, ImageRecord};
use crate::model::sample::sample_images;
use crate::ops::gallery::Gallery;
use crate::ops::notice::Notice;

/// A gallery whose notices are collected for printing
pub type CliGallery = Gallery<Vec<Notice>>;

/// The records a session starts with: the seed file if given, else the samples
pub fn initial_images(seed: Option<&Path>) -> Result<Vec<ImageRecord>, seed_io::SeedError> {
    match seed {
        Some(path) => seed_io::read_seed(path),
        None => Ok(sample_images()),
    }
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    // Commands print plain records, but a bad config is still an error
    let cwd = std::env::current_dir()?;
    let config = config_io::load_config(cli.config.as_deref(), &cwd)?;
    tracing::debug!(dark_mode = config.ui.dark_mode, "config loaded");
    let images = initial_images(cli.seed.as_deref())?;
    let mut gallery = CliGallery::new(images, Vec::new());

    match cli.command {
        None => Err("no command given (try `clips --help`)".into()),
        Some(cmd) => match cmd {
            // Read commands
            Commands::List(args) => cmd_list(&mut gallery, args, json),
            Commands::Tags => cmd_tags(&gallery, json),
            Commands::Show(args) => cmd_show(&gallery, args, json),
            Commands::Colors => cmd_colors(json),

            // Write commands
            Commands::Add(args) => mutate::cmd_add(&mut gallery, args, json),
            Commands::Import(args) => mutate::cmd_import(&mut gallery, args, json),
            Commands::Favorite(args) => mutate::cmd_favorite(&mut gallery, args, json),
            Commands::Edit(args) => mutate::cmd_edit(&mut gallery, args, json),
        },
    }
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(gallery: &mut CliGallery, args: ListArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    gallery.set_controls(ViewControls {
        tag: TagFilter::from_option(&args.tag),
        query: args.search,
        color: args.color,
        sort: args.sort,
    });
    let visible = gallery.visible();

    if json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
    } else if visible.is_empty() {
        println!("No matching images found");
    } else {
        for image in visible {
            println!("{}", format_image_line(image));
        }
    }
    Ok(())
}

fn cmd_tags(gallery: &CliGallery, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let options = gallery.tag_options();
    if json {
        println!("{}", serde_json::to_string_pretty(&options)?);
    } else {
        for option in options {
            println!("{}", option);
        }
    }
    Ok(())
}

fn cmd_show(gallery: &CliGallery, args: ShowArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let id = ImageId::new(args.id);
    let image = gallery
        .get(&id)
        .ok_or_else(|| format!("image not found: {}", id))?;
    if json {
        println!("{}", serde_json::to_string_pretty(image)?);
    } else {
        for line in format_image_detail(image) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_colors(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let colors: Vec<ColorJson> = ImageColor::ALL.into_iter().map(color_to_json).collect();
        println!("{}", serde_json::to_string_pretty(&colors)?);
    } else {
        for color in ImageColor::ALL {
            println!("{}", format_color_line(color));
        }
    }
    Ok(())
}
