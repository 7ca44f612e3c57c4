use std::sync::Arc;

use crate::model::controls::ViewControls;
use crate::model::image::{ImageDraft, ImageId, ImageRecord};
use crate::model::sample::sample_images;
use crate::ops::image_ops::{self, GalleryError, IdGenerator};
use crate::ops::notice::{Notice, Notifier};
use crate::ops::{tags, view};

/// Owned gallery state: the canonical collection, the view controls and the
/// notification channel.
///
/// The collection is held as an immutable snapshot. Every mutation builds a
/// new vector and swaps the snapshot, so a reader holding an earlier
/// `snapshot()` keeps seeing exactly what it was handed.
pub struct Gallery<N: Notifier> {
    images: Arc<Vec<ImageRecord>>,
    controls: ViewControls,
    notifier: N,
    ids: IdGenerator,
}

impl<N: Notifier> Gallery<N> {
    pub fn new(images: Vec<ImageRecord>, notifier: N) -> Self {
        Gallery {
            images: Arc::new(images),
            controls: ViewControls::default(),
            notifier,
            ids: IdGenerator::new(),
        }
    }

    /// A gallery holding the built-in sample records
    pub fn with_sample_images(notifier: N) -> Self {
        Gallery::new(sample_images(), notifier)
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// The current collection, shared
    pub fn snapshot(&self) -> Arc<Vec<ImageRecord>> {
        Arc::clone(&self.images)
    }

    pub fn images(&self) -> &[ImageRecord] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn get(&self, id: &ImageId) -> Option<&ImageRecord> {
        self.images.iter().find(|r| &r.id == id)
    }

    pub fn controls(&self) -> &ViewControls {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut ViewControls {
        &mut self.controls
    }

    pub fn set_controls(&mut self, controls: ViewControls) {
        self.controls = controls;
    }

    /// Records to display under the current controls
    pub fn visible(&self) -> Vec<&ImageRecord> {
        view::derived_view(&self.images, &self.controls)
    }

    /// Tag filter options, `"All"` first
    pub fn tag_options(&self) -> Vec<String> {
        tags::tag_options(&self.images)
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Add a record built from `draft` to the front of the collection.
    /// Returns the id it was given.
    pub fn add_image(&mut self, draft: ImageDraft) -> Result<ImageId, GalleryError> {
        if let Err(e) = draft.validate() {
            tracing::warn!(error = %e, "add refused");
            return Err(e.into());
        }
        let id = self.ids.next_id(&self.images);
        let next = image_ops::add_image(&self.images, id.clone(), draft)?;
        self.commit(next);
        tracing::debug!(%id, "image added");
        self.emit(Notice::ImageAdded(id.clone()));
        Ok(id)
    }

    /// Replace the record with the same id, in place
    pub fn update_image(&mut self, updated: ImageRecord) -> Result<(), GalleryError> {
        let id = updated.id.clone();
        let next = image_ops::update_image(&self.images, updated).inspect_err(|e| {
            tracing::warn!(error = %e, "update refused");
        })?;
        self.commit(next);
        tracing::debug!(%id, "image updated");
        self.emit(Notice::ImageSaved(id));
        Ok(())
    }

    /// Flip the favorite flag. Returns the new flag.
    pub fn toggle_favorite(&mut self, id: &ImageId) -> Result<bool, GalleryError> {
        let (next, favorite) = image_ops::toggle_favorite(&self.images, id).inspect_err(|e| {
            tracing::warn!(error = %e, "favorite toggle refused");
        })?;
        self.commit(next);
        tracing::debug!(%id, favorite, "favorite toggled");
        self.emit(if favorite {
            Notice::FavoriteAdded(id.clone())
        } else {
            Notice::FavoriteRemoved(id.clone())
        });
        Ok(favorite)
    }

    /// Add an "Imported Image" record for `url`, dated today
    pub fn import_from_url(&mut self, url: &str) -> Result<ImageId, GalleryError> {
        let draft = image_ops::import_draft(url, image_ops::today()).inspect_err(|e| {
            tracing::warn!(error = %e, "import refused");
        })?;
        let id = self.ids.next_id(&self.images);
        let next = image_ops::add_image(&self.images, id.clone(), draft)?;
        self.commit(next);
        tracing::debug!(%id, url = url.trim(), "image imported");
        self.emit(Notice::ImageImported(id.clone()));
        Ok(id)
    }

    fn commit(&mut self, next: Vec<ImageRecord>) {
        self.images = Arc::new(next);
    }

    fn emit(&mut self, notice: Notice) {
        self.notifier.notify(&notice);
    }
}
