use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::model::controls::{ColorFilter, SortBy};
use crate::model::image::ImageColor;

#[derive(Parser)]
#[command(name = "clips", about = concat!("clips v", env!("CARGO_PKG_VERSION"), " - a gallery for design inspiration"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Start from the records in this JSON file instead of the samples
    #[arg(long, global = true)]
    pub seed: Option<PathBuf>,

    /// Read configuration from this file instead of ./clips.toml
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the images visible under the given filters
    List(ListArgs),
    /// List the tag filter options
    Tags,
    /// Show one image
    Show(ShowArgs),
    /// List the colour palette
    Colors,
    /// Add an image
    Add(AddArgs),
    /// Import an image from a URL
    Import(ImportArgs),
    /// Toggle an image's favorite flag
    Favorite(FavoriteArgs),
    /// Edit an image's fields
    Edit(EditArgs),
}

// ---------------------------------------------------------------------------
// Read command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ListArgs {
    /// Only images carrying this tag ("All" for no filter)
    #[arg(long, default_value = "All")]
    pub tag: String,
    /// Case-insensitive search over title, memo and tags
    #[arg(long, default_value = "")]
    pub search: String,
    /// Only images of this colour ("all" for no filter)
    #[arg(long, default_value = "all")]
    pub color: ColorFilter,
    /// Sort order
    #[arg(long, value_enum, default_value_t = SortBy::Newest)]
    pub sort: SortBy,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Image ID
    pub id: String,
}

// ---------------------------------------------------------------------------
// Write command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct AddArgs {
    /// Image URL
    #[arg(long)]
    pub url: String,
    /// Title
    #[arg(long)]
    pub title: String,
    /// Tag (repeatable, at least one)
    #[arg(long = "tag")]
    pub tags: Vec<String>,
    /// Free-text memo
    #[arg(long)]
    pub memo: Option<String>,
    /// Page the image came from
    #[arg(long)]
    pub source_url: Option<String>,
    /// Dominant colour
    #[arg(long)]
    pub color: Option<ImageColor>,
    /// Folder label
    #[arg(long)]
    pub collection: Option<String>,
}

#[derive(Args)]
pub struct ImportArgs {
    /// Image URL
    pub url: String,
}

#[derive(Args)]
pub struct FavoriteArgs {
    /// Image ID
    pub id: String,
}

#[derive(Args)]
pub struct EditArgs {
    /// Image ID
    pub id: String,
    /// New title
    #[arg(long)]
    pub title: Option<String>,
    /// New memo (empty string clears it)
    #[arg(long)]
    pub memo: Option<String>,
    /// New source URL (empty string clears it)
    #[arg(long)]
    pub source_url: Option<String>,
    /// Replace the tags (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,
    /// Remove every tag
    #[arg(long, conflicts_with = "tags")]
    pub clear_tags: bool,
    /// New colour
    #[arg(long)]
    pub color: Option<ImageColor>,
    /// Remove the colour
    #[arg(long, conflicts_with = "color")]
    pub clear_color: bool,
    /// New folder label (empty string clears it)
    #[arg(long)]
    pub collection: Option<String>,
}
