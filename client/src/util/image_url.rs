//! Display URLs for stored image paths.
//!
//! Servers hand back upload paths like `/uploads/items/42.png`. Browsers need
//! them anchored to the server origin. This transform is for `src` attributes
//! only; references sent back in update payloads stay exactly as received.

#[cfg(test)]
#[path = "image_url_test.rs"]
mod image_url_test;

use crate::config::server_base_of;

/// Placeholder shown when an item has no image.
pub const PLACEHOLDER_IMAGE: &str = "/no-image.png";

/// Resolve a stored path to something an `<img>` can load.
pub fn display_url(stored: Option<&str>, api_base: &str) -> String {
    let Some(path) = stored.filter(|p| !p.is_empty()) else {
        return PLACEHOLDER_IMAGE.to_owned();
    };
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_owned();
    }
    format!("{}{path}", server_base_of(api_base))
}
