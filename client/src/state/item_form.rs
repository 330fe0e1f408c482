//! Item catalog form state for the create and edit pages.
//!
//! DESIGN
//! ======
//! [`ItemEdit`] bundles the scalar form with the detail-image set and the
//! thumbnail slot so one submission step can assemble the multipart body:
//! the JSON part carries the kept image references verbatim, the file parts
//! carry only what was attached this session.

#[cfg(test)]
#[path = "item_form_test.rs"]
mod item_form_test;

use serde::Serialize;

use crate::net::sync::MultipartFiles;
use crate::net::types::{ItemDetail, ItemStatus};
use crate::state::image_set::{ImageSet, MAX_DETAIL_IMAGES, ThumbnailSlot};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ItemFormError {
    #[error("Enter an item name.")]
    MissingName,
    #[error("Choose a category and sub-category.")]
    MissingCategory,
    #[error("{0} cannot be negative.")]
    Negative(&'static str),
}

/// JSON part of an item create/update request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemForm {
    pub name: String,
    pub category_id: Option<i64>,
    pub sub_category_id: Option<i64>,
    pub daily_price: i64,
    pub stock_quantity: i64,
    pub description: String,
    pub detail_description: String,
    pub status: ItemStatus,
    pub partner_id: Option<i64>,
    /// Kept server image references; only present on updates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail_images: Option<Vec<String>>,
}

impl ItemForm {
    pub fn from_detail(detail: &ItemDetail) -> Self {
        Self {
            name: detail.name.clone().unwrap_or_default(),
            category_id: detail.category_id,
            sub_category_id: detail.sub_category_id,
            daily_price: detail.daily_price,
            stock_quantity: detail.stock_quantity,
            description: detail.description.clone().unwrap_or_default(),
            detail_description: detail.detail_description.clone().unwrap_or_default(),
            status: detail.status,
            partner_id: detail.partner_id,
            detail_images: None,
        }
    }

    /// Changing the top-level category invalidates the sub-category.
    pub fn set_category(&mut self, category_id: Option<i64>) {
        if self.category_id != category_id {
            self.sub_category_id = None;
        }
        self.category_id = category_id;
    }

    /// Client-side checks run before anything is sent.
    ///
    /// # Errors
    ///
    /// Returns the first failing check.
    pub fn validate(&self) -> Result<(), ItemFormError> {
        if self.name.trim().is_empty() {
            return Err(ItemFormError::MissingName);
        }
        if self.category_id.is_none() || self.sub_category_id.is_none() {
            return Err(ItemFormError::MissingCategory);
        }
        if self.daily_price < 0 {
            return Err(ItemFormError::Negative("Daily price"));
        }
        if self.stock_quantity < 0 {
            return Err(ItemFormError::Negative("Stock quantity"));
        }
        Ok(())
    }
}

/// Parse a numeric `<input>`; blank means zero, garbage means "leave as is".
pub fn parse_number_input(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    trimmed.parse().ok()
}

/// Parse a `<select>` id value; the empty placeholder option means "none".
pub fn parse_id_input(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Everything the item editor page mutates.
#[derive(Debug)]
pub struct ItemEdit<B> {
    pub form: ItemForm,
    pub images: ImageSet<B>,
    pub thumbnail: ThumbnailSlot<B>,
    /// Route id the contents were loaded for. Saves and deletes go here and
    /// nowhere else.
    record_id: Option<String>,
}

impl<B> Default for ItemEdit<B> {
    fn default() -> Self {
        Self {
            form: ItemForm::default(),
            images: ImageSet::default(),
            thumbnail: ThumbnailSlot::default(),
            record_id: None,
        }
    }
}

impl<B> ItemEdit<B> {
    pub fn from_detail(detail: &ItemDetail) -> Self {
        Self {
            form: ItemForm::from_detail(detail),
            images: ImageSet::from_remote(detail.detail_images.iter().cloned(), MAX_DETAIL_IMAGES),
            thumbnail: ThumbnailSlot::from_remote(detail.thumbnail_url.clone()),
            record_id: None,
        }
    }

    /// Seed from a fetch of `record_id`.
    pub fn loaded(record_id: impl Into<String>, detail: &ItemDetail) -> Self {
        Self { record_id: Some(record_id.into()), ..Self::from_detail(detail) }
    }

    /// Record a save or delete should target, if a load has landed.
    pub fn record_id(&self) -> Option<&str> {
        self.record_id.as_deref()
    }

    /// Whether this edit holds `route_id`'s data.
    pub fn is_for(&self, route_id: &str) -> bool {
        self.record_id() == Some(route_id)
    }

    /// Build the update body. `to_file` turns a local handle into the value
    /// uploaded as a file part.
    ///
    /// # Errors
    ///
    /// Returns the form's validation error; nothing is built in that case.
    pub fn submission<F>(&self, to_file: impl Fn(&B) -> F) -> Result<(ItemForm, MultipartFiles<F>), ItemFormError> {
        self.form.validate()?;
        let payload = self.images.submission_payload();
        let form = ItemForm { detail_images: Some(payload.kept_remote_references), ..self.form.clone() };
        let files = MultipartFiles {
            thumbnail: self.thumbnail.pending_upload().map(&to_file),
            attachments: payload.new_local_files.into_iter().map(&to_file).collect(),
        };
        Ok((form, files))
    }

    /// Settle the edit after the server accepted a submission: attached files
    /// are gone from the set, so a second save can't upload them again.
    pub fn mark_submitted(&mut self) {
        self.images.discard_local();
        self.thumbnail.discard_local();
    }
}
