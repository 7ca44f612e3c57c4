use std::fmt;

use crate::model::image::ImageId;

/// Acknowledgment emitted after a successful mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    ImageAdded(ImageId),
    ImageSaved(ImageId),
    FavoriteAdded(ImageId),
    FavoriteRemoved(ImageId),
    ImageImported(ImageId),
}

impl Notice {
    /// Text shown to the user
    pub fn message(&self) -> &'static str {
        match self {
            Notice::ImageAdded(_) => "Image uploaded",
            Notice::ImageSaved(_) => "Changes saved",
            Notice::FavoriteAdded(_) => "Added to favorites",
            Notice::FavoriteRemoved(_) => "Removed from favorites",
            Notice::ImageImported(_) => "Imported image from URL",
        }
    }

    /// The record the notice is about
    pub fn image_id(&self) -> &ImageId {
        match self {
            Notice::ImageAdded(id)
            | Notice::ImageSaved(id)
            | Notice::FavoriteAdded(id)
            | Notice::FavoriteRemoved(id)
            | Notice::ImageImported(id) => id,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Receiver of mutation notices. Fire-and-forget: nothing flows back.
pub trait Notifier {
    fn notify(&mut self, notice: &Notice);
}

/// Collects notices in order
impl Notifier for Vec<Notice> {
    fn notify(&mut self, notice: &Notice) {
        self.push(notice.clone());
    }
}

/// Writes notices to the tracing log only
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, notice: &Notice) {
        tracing::info!(id = %notice.image_id(), "{}", notice.message());
    }
}
