//! Remote sync contract consumed by editing pages.
//!
//! DESIGN
//! ======
//! Pages and state machines depend on these traits rather than on `gloo-net`
//! directly, so the edit flows can be driven against an in-memory adapter in
//! tests. The browser implementations live in [`super::api`].
//!
//! Futures are not `Send`: browser fetches run on the single WASM thread.

use crate::state::field_editor::FieldUpdate;

use super::error::SyncError;

/// Files attached to a multipart update.
///
/// Owned so the upload can outlive the reactive borrow it was built from;
/// browser file handles are cheap reference-counted JS values.
#[derive(Debug)]
pub struct MultipartFiles<F> {
    pub thumbnail: Option<F>,
    pub attachments: Vec<F>,
}

impl<F> Default for MultipartFiles<F> {
    fn default() -> Self {
        Self { thumbnail: None, attachments: Vec::new() }
    }
}

#[allow(async_fn_in_trait)]
pub trait RecordSource {
    type Record;

    async fn fetch_record(&self, id: &str) -> Result<Self::Record, SyncError>;
}

#[allow(async_fn_in_trait)]
pub trait FieldSync {
    /// Send `{field: value}` for one attribute of record `id`.
    async fn update_field(&self, id: &str, update: &FieldUpdate) -> Result<(), SyncError>;
}

#[allow(async_fn_in_trait)]
pub trait MultipartSync {
    /// JSON part of the upload.
    type Payload;
    type File;

    async fn update_record_multipart(
        &self,
        id: &str,
        payload: &Self::Payload,
        files: MultipartFiles<Self::File>,
    ) -> Result<(), SyncError>;
}

#[allow(async_fn_in_trait)]
pub trait RecordDelete {
    async fn delete_record(&self, id: &str) -> Result<(), SyncError>;
}
