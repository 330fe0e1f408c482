//! Browser file handle for an image attached in this session.
//!
//! A `LocalImage` owns the object URL created for its preview and revokes it
//! on drop, so removing the slot that holds it is all the cleanup needed.

#[cfg(test)]
#[path = "local_image_test.rs"]
mod local_image_test;

use uuid::Uuid;

#[derive(Debug)]
pub struct LocalImage {
    id: Uuid,
    name: String,
    preview_url: String,
    #[cfg(feature = "hydrate")]
    file: web_sys::File,
}

impl LocalImage {
    /// Wrap a picked file and create its preview URL.
    ///
    /// Returns `None` if the browser refuses to create an object URL.
    #[cfg(feature = "hydrate")]
    pub fn from_file(file: web_sys::File) -> Option<Self> {
        let preview_url = web_sys::Url::create_object_url_with_blob(&file).ok()?;
        Some(Self { id: Uuid::new_v4(), name: file.name(), preview_url, file })
    }

    /// Collect every file from an `<input type="file">` selection.
    #[cfg(feature = "hydrate")]
    pub fn from_file_list(list: &web_sys::FileList) -> Vec<Self> {
        (0..list.length()).filter_map(|i| list.get(i)).filter_map(Self::from_file).collect()
    }

    #[cfg(test)]
    fn detached(name: &str, preview_url: &str) -> Self {
        Self { id: Uuid::new_v4(), name: name.to_owned(), preview_url: preview_url.to_owned() }
    }

    /// Stable key for keyed list rendering.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn preview_url(&self) -> &str {
        &self.preview_url
    }

    /// Handle to upload. Cloning only bumps the JS reference.
    #[cfg(feature = "hydrate")]
    pub fn file(&self) -> web_sys::File {
        self.file.clone()
    }
}

impl Drop for LocalImage {
    fn drop(&mut self) {
        #[cfg(feature = "hydrate")]
        {
            let _ = web_sys::Url::revoke_object_url(&self.preview_url);
        }
    }
}
