use super::*;

const BASE: &str = "http://localhost:8080/api";

#[test]
fn display_url_uses_placeholder_for_missing_or_empty() {
    assert_eq!(display_url(None, BASE), PLACEHOLDER_IMAGE);
    assert_eq!(display_url(Some(""), BASE), PLACEHOLDER_IMAGE);
}

#[test]
fn display_url_passes_absolute_urls_through() {
    assert_eq!(display_url(Some("https://cdn.example/a.png"), BASE), "https://cdn.example/a.png");
    assert_eq!(display_url(Some("http://cdn.example/b.png"), BASE), "http://cdn.example/b.png");
}

#[test]
fn display_url_anchors_relative_paths_at_server_root() {
    assert_eq!(
        display_url(Some("/uploads/items/1.png"), BASE),
        "http://localhost:8080/uploads/items/1.png"
    );
}

#[test]
fn display_url_keeps_base_without_api_suffix() {
    assert_eq!(
        display_url(Some("/uploads/x.png"), "https://rentex.example"),
        "https://rentex.example/uploads/x.png"
    );
}
