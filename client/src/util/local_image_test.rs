use super::*;

#[test]
fn detached_images_get_distinct_ids() {
    let a = LocalImage::detached("a.png", "blob:a");
    let b = LocalImage::detached("a.png", "blob:b");
    assert_ne!(a.id(), b.id());
    assert_eq!(a.name(), "a.png");
    assert_eq!(b.preview_url(), "blob:b");
}
