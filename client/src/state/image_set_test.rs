use std::cell::Cell;
use std::rc::Rc;

use super::*;

/// Local handle that counts how many times it has been released.
#[derive(Debug)]
struct Tracked {
    name: &'static str,
    released: Rc<Cell<usize>>,
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.released.set(self.released.get() + 1);
    }
}

fn tracked(name: &'static str, released: &Rc<Cell<usize>>) -> Tracked {
    Tracked { name, released: Rc::clone(released) }
}

fn remote(refs: &[&str]) -> ImageSet<&'static str> {
    ImageSet::from_remote(refs.iter().map(|r| (*r).to_owned()), MAX_DETAIL_IMAGES)
}

fn names(set: &ImageSet<&'static str>) -> Vec<String> {
    set.display_sequence()
        .iter()
        .map(|slot| match slot.content {
            ImageSource::Remote(r) => format!("remote:{r}"),
            ImageSource::Local(l) => format!("local:{l}"),
        })
        .collect()
}

// =============================================================
// Construction and projection
// =============================================================

#[test]
fn from_remote_preserves_server_order() {
    let set = remote(&["a", "b", "c"]);
    assert_eq!(set.remote_count(), 3);
    assert_eq!(set.local_count(), 0);
    assert_eq!(names(&set), vec!["remote:a", "remote:b", "remote:c"]);
}

#[test]
fn display_sequence_lists_remote_then_local_with_contiguous_indices() {
    let mut set = remote(&["a", "b"]);
    set.add_local(["x", "y"]).unwrap();

    let seq = set.display_sequence();
    let indices: Vec<usize> = seq.iter().map(|s| s.display_index).collect();
    let origins: Vec<Origin> = seq.iter().map(|s| s.origin).collect();
    assert_eq!(indices, vec![0, 1, 2, 3]);
    assert_eq!(origins, vec![Origin::Remote, Origin::Remote, Origin::Local, Origin::Local]);
}

#[test]
fn default_set_uses_detail_image_limit() {
    let set: ImageSet<()> = ImageSet::default();
    assert_eq!(set.max_slots(), MAX_DETAIL_IMAGES);
    assert!(set.is_empty());
    assert_eq!(set.remaining_capacity(), 5);
}

// =============================================================
// add_local
// =============================================================

#[test]
fn add_local_appends_after_existing_locals() {
    let mut set = remote(&["a"]);
    set.add_local(["x"]).unwrap();
    set.add_local(["y", "z"]).unwrap();
    assert_eq!(names(&set), vec!["remote:a", "local:x", "local:y", "local:z"]);
}

#[test]
fn add_local_rejects_whole_batch_over_capacity() {
    let mut set = remote(&["a", "b", "c"]);
    set.add_local(["x", "y"]).unwrap();

    let err = set.add_local(["p", "q"]).unwrap_err();
    assert_eq!(err, ImageSetError::CapacityExceeded { max: 5, requested: 7 });
    assert_eq!(set.remote_count(), 3);
    assert_eq!(set.local_count(), 2);
    assert_eq!(names(&set), vec!["remote:a", "remote:b", "remote:c", "local:x", "local:y"]);
}

#[test]
fn add_local_does_not_partially_fill_to_cap() {
    let mut set = remote(&["a", "b", "c"]);
    assert!(set.add_local(["x", "y", "z"]).is_err());
    assert_eq!(set.local_count(), 0);
    assert_eq!(set.remaining_capacity(), 2);
}

#[test]
fn add_local_accepts_exact_fill() {
    let mut set = remote(&["a", "b", "c"]);
    set.add_local(["x", "y"]).unwrap();
    assert!(set.is_full());
    assert_eq!(set.len(), 5);
}

#[test]
fn add_local_with_empty_batch_is_noop() {
    let mut set = remote(&["a"]);
    set.add_local(Vec::new()).unwrap();
    assert_eq!(set.len(), 1);
}

#[test]
fn oversized_server_list_is_kept_but_blocks_additions() {
    let mut set: ImageSet<&str> =
        ImageSet::from_remote(["1", "2", "3", "4", "5", "6"].map(str::to_owned), MAX_DETAIL_IMAGES);
    assert_eq!(set.len(), 6);
    assert_eq!(set.remaining_capacity(), 0);
    assert!(set.add_local(["x"]).is_err());
}

// =============================================================
// remove_at
// =============================================================

#[test]
fn remove_remote_index_leaves_locals_untouched() {
    let mut set = remote(&["a", "b", "c"]);
    set.add_local(["x"]).unwrap();

    assert_eq!(set.remove_at(1), Ok(Origin::Remote));
    assert_eq!(set.remote_count(), 2);
    assert_eq!(set.local_count(), 1);
    assert_eq!(names(&set), vec!["remote:a", "remote:c", "local:x"]);
}

#[test]
fn remove_local_index_leaves_remotes_untouched() {
    let mut set = remote(&["a", "b"]);
    set.add_local(["x", "y"]).unwrap();

    assert_eq!(set.remove_at(2), Ok(Origin::Local));
    assert_eq!(set.remote_count(), 2);
    assert_eq!(names(&set), vec!["remote:a", "remote:b", "local:y"]);
}

#[test]
fn remove_out_of_bounds_is_error_and_noop() {
    let mut set = remote(&["a"]);
    set.add_local(["x"]).unwrap();
    assert_eq!(set.remove_at(2), Err(ImageSetError::OutOfBounds { index: 2, len: 2 }));
    assert_eq!(set.len(), 2);
}

#[test]
fn indices_are_recomputed_after_removal() {
    let mut set = remote(&["a", "b"]);
    set.add_local(["x"]).unwrap();
    set.remove_at(0).unwrap();

    // Old index 2 ("x") now sits at 1; removing 1 must hit the local file.
    assert_eq!(set.remove_at(1), Ok(Origin::Local));
    assert_eq!(names(&set), vec!["remote:b"]);
}

#[test]
fn removing_local_slot_releases_handle_immediately() {
    let released = Rc::new(Cell::new(0));
    let mut set = ImageSet::from_remote(["a".to_owned()], MAX_DETAIL_IMAGES);
    set.add_local([tracked("x", &released), tracked("y", &released)]).unwrap();
    assert_eq!(released.get(), 0);

    set.remove_at(1).unwrap();
    assert_eq!(released.get(), 1);
    let remaining: Vec<&str> = set.local_files().iter().map(|t| t.name).collect();
    assert_eq!(remaining, vec!["y"]);
}

#[test]
fn rejected_batch_releases_its_own_handles_only() {
    let released = Rc::new(Cell::new(0));
    let mut set = ImageSet::new(1);
    set.add_local([tracked("keep", &released)]).unwrap();
    assert!(set.add_local([tracked("extra", &released)]).is_err());
    assert_eq!(released.get(), 1);
    assert_eq!(set.local_count(), 1);
}

// =============================================================
// Submission payload
// =============================================================

#[test]
fn payload_omits_removed_references() {
    let mut set = remote(&["a", "b", "c"]);
    set.remove_at(1).unwrap();
    let payload = set.submission_payload();
    assert_eq!(payload.kept_remote_references, vec!["a".to_owned(), "c".to_owned()]);
    assert!(payload.new_local_files.is_empty());
}

#[test]
fn payload_sends_references_verbatim_and_files_in_order() {
    let mut set = remote(&["/uploads/items/1.png", "https://cdn.example/2.png"]);
    set.add_local(["x", "y"]).unwrap();
    let payload = set.submission_payload();
    assert_eq!(
        payload.kept_remote_references,
        vec!["/uploads/items/1.png".to_owned(), "https://cdn.example/2.png".to_owned()]
    );
    assert_eq!(payload.new_local_files, vec![&"x", &"y"]);
}

#[test]
fn mixed_operations_never_exceed_capacity_or_rewrite_references() {
    let originals = ["r0", "r1", "r2"];
    let mut set = remote(&originals);
    let ops: [(bool, usize); 10] =
        [(true, 2), (false, 0), (true, 3), (true, 1), (false, 3), (true, 2), (false, 1), (false, 0), (true, 4), (false, 9)];
    for (add, n) in ops {
        if add {
            let _ = set.add_local(std::iter::repeat_n("l", n));
        } else {
            let _ = set.remove_at(n);
        }
        assert!(set.display_sequence().len() <= set.max_slots());
        for reference in set.kept_remote_references() {
            assert!(originals.contains(&reference.as_str()));
        }
    }
}

#[test]
fn discard_local_releases_files_and_keeps_remote_order() {
    let released = Rc::new(Cell::new(0));
    let mut set = ImageSet::from_remote(["r0".to_owned(), "r1".to_owned()], MAX_DETAIL_IMAGES);
    set.add_local([tracked("a", &released), tracked("b", &released)]).unwrap();

    assert_eq!(set.discard_local(), 2);
    assert_eq!(released.get(), 2);
    assert_eq!(set.kept_remote_references(), vec!["r0".to_owned(), "r1".to_owned()]);
    assert_eq!(set.local_count(), 0);
    assert_eq!(set.discard_local(), 0);
}

// =============================================================
// ThumbnailSlot
// =============================================================

#[test]
fn thumbnail_from_remote_treats_empty_as_missing() {
    assert_eq!(ThumbnailSlot::<()>::from_remote(None), ThumbnailSlot::Empty);
    assert_eq!(ThumbnailSlot::<()>::from_remote(Some(String::new())), ThumbnailSlot::Empty);
    assert_eq!(
        ThumbnailSlot::<()>::from_remote(Some("/t.png".to_owned())),
        ThumbnailSlot::Remote("/t.png".to_owned())
    );
}

#[test]
fn thumbnail_replace_releases_previous_local_file() {
    let released = Rc::new(Cell::new(0));
    let mut thumb = ThumbnailSlot::from_remote(Some("/t.png".to_owned()));
    assert!(thumb.pending_upload().is_none());

    thumb.replace(tracked("first", &released));
    thumb.replace(tracked("second", &released));
    assert_eq!(released.get(), 1);
    assert_eq!(thumb.pending_upload().map(|t| t.name), Some("second"));
}

#[test]
fn thumbnail_discard_local_only_clears_replacements() {
    let mut thumb = ThumbnailSlot::from_remote(Some("/t.png".to_owned()));
    thumb.discard_local();
    assert_eq!(thumb, ThumbnailSlot::Remote("/t.png".to_owned()));

    thumb.replace("new.png");
    thumb.discard_local();
    assert_eq!(thumb, ThumbnailSlot::Empty);
}
