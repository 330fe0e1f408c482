//! Editable image list merging server references with newly attached files.
//!
//! DESIGN
//! ======
//! One ordered sequence of provenance-tagged slots. Server references are
//! loaded first and new files are only ever appended, so the sequence is
//! always "remote in server order, then local in attachment order" and a
//! display index is just a position. Removal therefore can't hit the wrong
//! source list.
//!
//! The set is generic over the local file handle. In the browser that is
//! [`crate::util::local_image::LocalImage`], whose drop releases its preview
//! URL, so removing a slot frees the preview immediately.

#[cfg(test)]
#[path = "image_set_test.rs"]
mod image_set_test;

/// Maximum detail images per item.
pub const MAX_DETAIL_IMAGES: usize = 5;

/// Where an image slot came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    /// Reference confirmed by the server at load time.
    Remote,
    /// File attached in this editing session.
    Local,
}

/// Content of one slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageSource<B> {
    /// Opaque server reference; never rewritten client-side.
    Remote(String),
    Local(B),
}

impl<B> ImageSource<B> {
    pub fn origin(&self) -> Origin {
        match self {
            Self::Remote(_) => Origin::Remote,
            Self::Local(_) => Origin::Local,
        }
    }
}

/// Read-only projection of a slot at its current display position.
#[derive(Debug)]
pub struct ImageSlot<'a, B> {
    pub origin: Origin,
    pub display_index: usize,
    pub content: &'a ImageSource<B>,
}

/// What an update request carries: kept server references plus new files.
///
/// Removed references are simply absent; the server treats omission as
/// deletion.
#[derive(Debug)]
pub struct SubmissionPayload<'a, B> {
    pub kept_remote_references: Vec<String>,
    pub new_local_files: Vec<&'a B>,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ImageSetError {
    #[error("at most {max} images are allowed ({requested} requested)")]
    CapacityExceeded { max: usize, requested: usize },
    #[error("no image at position {index} (have {len})")]
    OutOfBounds { index: usize, len: usize },
}

#[derive(Clone, Debug)]
pub struct ImageSet<B> {
    slots: Vec<ImageSource<B>>,
    max_slots: usize,
}

impl<B> Default for ImageSet<B> {
    fn default() -> Self {
        Self::new(MAX_DETAIL_IMAGES)
    }
}

impl<B> ImageSet<B> {
    pub fn new(max_slots: usize) -> Self {
        Self { slots: Vec::new(), max_slots }
    }

    /// Seed the set from a load response.
    ///
    /// References are kept even if there are more than `max_slots`; the set
    /// then just refuses further additions.
    pub fn from_remote<I>(references: I, max_slots: usize) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            slots: references.into_iter().map(ImageSource::Remote).collect(),
            max_slots,
        }
    }

    pub fn max_slots(&self) -> usize {
        self.max_slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn remote_count(&self) -> usize {
        self.slots.iter().filter(|s| s.origin() == Origin::Remote).count()
    }

    pub fn local_count(&self) -> usize {
        self.slots.len() - self.remote_count()
    }

    pub fn remaining_capacity(&self) -> usize {
        self.max_slots.saturating_sub(self.slots.len())
    }

    pub fn is_full(&self) -> bool {
        self.remaining_capacity() == 0
    }

    /// Append files after the existing local slots.
    ///
    /// # Errors
    ///
    /// Returns [`ImageSetError::CapacityExceeded`] if the whole batch does not
    /// fit. Nothing is applied in that case.
    pub fn add_local<I>(&mut self, files: I) -> Result<(), ImageSetError>
    where
        I: IntoIterator<Item = B>,
    {
        let batch: Vec<B> = files.into_iter().collect();
        let requested = self.slots.len() + batch.len();
        if requested > self.max_slots {
            return Err(ImageSetError::CapacityExceeded { max: self.max_slots, requested });
        }
        self.slots.extend(batch.into_iter().map(ImageSource::Local));
        Ok(())
    }

    /// Remove the slot at `display_index`, dropping its content right away.
    ///
    /// # Errors
    ///
    /// Returns [`ImageSetError::OutOfBounds`] and leaves the set untouched if
    /// the index is past the end.
    pub fn remove_at(&mut self, display_index: usize) -> Result<Origin, ImageSetError> {
        if display_index >= self.slots.len() {
            return Err(ImageSetError::OutOfBounds { index: display_index, len: self.slots.len() });
        }
        let removed = self.slots.remove(display_index);
        Ok(removed.origin())
    }

    /// Current display order. Recomputed on every call.
    pub fn display_sequence(&self) -> Vec<ImageSlot<'_, B>> {
        self.slots
            .iter()
            .enumerate()
            .map(|(display_index, content)| ImageSlot { origin: content.origin(), display_index, content })
            .collect()
    }

    pub fn kept_remote_references(&self) -> Vec<String> {
        self.slots
            .iter()
            .filter_map(|s| match s {
                ImageSource::Remote(reference) => Some(reference.clone()),
                ImageSource::Local(_) => None,
            })
            .collect()
    }

    pub fn local_files(&self) -> Vec<&B> {
        self.slots
            .iter()
            .filter_map(|s| match s {
                ImageSource::Local(file) => Some(file),
                ImageSource::Remote(_) => None,
            })
            .collect()
    }

    pub fn submission_payload(&self) -> SubmissionPayload<'_, B> {
        SubmissionPayload {
            kept_remote_references: self.kept_remote_references(),
            new_local_files: self.local_files(),
        }
    }

    /// Drop every local slot once the server has accepted them. Returns how
    /// many were released.
    pub fn discard_local(&mut self) -> usize {
        let before = self.slots.len();
        self.slots.retain(|s| matches!(s, ImageSource::Remote(_)));
        before - self.slots.len()
    }
}

/// Item thumbnail: the server's current image or a replacement picked locally.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ThumbnailSlot<B> {
    Empty,
    Remote(String),
    Local(B),
}

impl<B> Default for ThumbnailSlot<B> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<B> ThumbnailSlot<B> {
    pub fn from_remote(reference: Option<String>) -> Self {
        match reference {
            Some(r) if !r.is_empty() => Self::Remote(r),
            _ => Self::Empty,
        }
    }

    /// Swap in a new local file. The previous local file, if any, is dropped.
    pub fn replace(&mut self, file: B) {
        *self = Self::Local(file);
    }

    /// The file to upload, if the thumbnail was replaced this session.
    pub fn pending_upload(&self) -> Option<&B> {
        match self {
            Self::Local(file) => Some(file),
            Self::Empty | Self::Remote(_) => None,
        }
    }

    /// Forget an uploaded replacement. The server's new reference is unknown
    /// until the next load, so the slot goes back to empty.
    pub fn discard_local(&mut self) {
        if matches!(self, Self::Local(_)) {
            *self = Self::Empty;
        }
    }
}
