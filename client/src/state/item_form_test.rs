use super::*;

// =============================================================================
// ItemForm
// =============================================================================

fn valid_form() -> ItemForm {
    ItemForm {
        name: "Camping chair".to_owned(),
        category_id: Some(1),
        sub_category_id: Some(11),
        daily_price: 5_000,
        stock_quantity: 3,
        ..ItemForm::default()
    }
}

#[test]
fn validate_accepts_complete_form() {
    assert_eq!(valid_form().validate(), Ok(()));
}

#[test]
fn validate_rejects_blank_name_and_missing_category() {
    let form = ItemForm { name: "  ".to_owned(), ..valid_form() };
    assert_eq!(form.validate(), Err(ItemFormError::MissingName));

    let form = ItemForm { sub_category_id: None, ..valid_form() };
    assert_eq!(form.validate(), Err(ItemFormError::MissingCategory));
}

#[test]
fn validate_rejects_negative_numbers() {
    let form = ItemForm { daily_price: -1, ..valid_form() };
    assert_eq!(form.validate(), Err(ItemFormError::Negative("Daily price")));
}

#[test]
fn set_category_clears_sub_category_only_on_change() {
    let mut form = valid_form();
    form.set_category(Some(1));
    assert_eq!(form.sub_category_id, Some(11));
    form.set_category(Some(2));
    assert_eq!(form.sub_category_id, None);
}

#[test]
fn serializes_camel_case_and_omits_absent_images() {
    let json = serde_json::to_value(valid_form()).unwrap();
    assert_eq!(json["dailyPrice"], 5_000);
    assert_eq!(json["subCategoryId"], 11);
    assert_eq!(json["status"], "AVAILABLE");
    assert!(json.get("detailImages").is_none());
}

#[test]
fn number_and_id_inputs_parse_leniently() {
    assert_eq!(parse_number_input(""), Some(0));
    assert_eq!(parse_number_input(" 42 "), Some(42));
    assert_eq!(parse_number_input("4x"), None);
    assert_eq!(parse_id_input(""), None);
    assert_eq!(parse_id_input("7"), Some(7));
}

// =============================================================================
// ItemEdit submission
// =============================================================================

fn detail() -> ItemDetail {
    ItemDetail {
        name: Some("Tent".to_owned()),
        category_id: Some(1),
        sub_category_id: Some(2),
        thumbnail_url: Some("/uploads/t.png".to_owned()),
        detail_images: vec!["/uploads/a.png".to_owned(), "/uploads/b.png".to_owned()],
        ..ItemDetail::default()
    }
}

#[test]
fn submission_carries_kept_references_and_new_files() {
    let mut edit: ItemEdit<&str> = ItemEdit::from_detail(&detail());
    edit.images.remove_at(0).unwrap();
    edit.images.add_local(["x.png"]).unwrap();

    let (form, files) = edit.submission(|f| f.to_uppercase()).unwrap();
    assert_eq!(form.detail_images, Some(vec!["/uploads/b.png".to_owned()]));
    assert_eq!(files.attachments, vec!["X.PNG".to_owned()]);
    assert_eq!(files.thumbnail, None);
}

#[test]
fn replaced_thumbnail_is_uploaded() {
    let mut edit: ItemEdit<&str> = ItemEdit::from_detail(&detail());
    edit.thumbnail.replace("thumb.png");
    let (_, files) = edit.submission(|f| (*f).to_owned()).unwrap();
    assert_eq!(files.thumbnail.as_deref(), Some("thumb.png"));
}

#[test]
fn submission_with_all_images_removed_sends_empty_list() {
    let mut edit: ItemEdit<&str> = ItemEdit::from_detail(&detail());
    edit.images.remove_at(1).unwrap();
    edit.images.remove_at(0).unwrap();
    let (form, files) = edit.submission(|f| (*f).to_owned()).unwrap();
    assert_eq!(form.detail_images, Some(Vec::new()));
    assert!(files.attachments.is_empty());
}

#[test]
fn invalid_form_blocks_submission() {
    let mut edit: ItemEdit<&str> = ItemEdit::from_detail(&detail());
    edit.form.name.clear();
    assert_eq!(edit.submission(|f| (*f).to_owned()).err(), Some(ItemFormError::MissingName));
}

#[test]
fn mark_submitted_drops_uploaded_files_and_keeps_references() {
    let mut edit: ItemEdit<&str> = ItemEdit::from_detail(&detail());
    edit.images.remove_at(0).unwrap();
    edit.images.add_local(["x.png", "y.png"]).unwrap();
    edit.thumbnail.replace("thumb.png");

    edit.mark_submitted();

    let (form, files) = edit.submission(|f| (*f).to_owned()).unwrap();
    assert_eq!(form.detail_images, Some(vec!["/uploads/b.png".to_owned()]));
    assert!(files.attachments.is_empty());
    assert_eq!(files.thumbnail, None);
    assert_eq!(edit.thumbnail, ThumbnailSlot::Empty);
    assert_eq!(edit.images.remaining_capacity(), MAX_DETAIL_IMAGES - 1);
}

#[test]
fn mark_submitted_keeps_untouched_remote_thumbnail() {
    let mut edit: ItemEdit<&str> = ItemEdit::from_detail(&detail());
    edit.mark_submitted();
    assert_eq!(edit.thumbnail, ThumbnailSlot::Remote("/uploads/t.png".to_owned()));
}

#[test]
fn fresh_edit_has_no_record_to_target() {
    let edit: ItemEdit<&str> = ItemEdit::default();
    assert_eq!(edit.record_id(), None);
    assert!(!edit.is_for("1"));
    assert_eq!(ItemEdit::<&str>::from_detail(&detail()).record_id(), None);
}

#[test]
fn loaded_edit_targets_only_its_own_record() {
    let mut edit: ItemEdit<&str> = ItemEdit::loaded("1", &detail());
    assert_eq!(edit.record_id(), Some("1"));
    assert!(edit.is_for("1"));
    assert!(!edit.is_for("2"));

    edit.images.add_local(["x.png"]).unwrap();
    edit.mark_submitted();
    assert_eq!(edit.record_id(), Some("1"));
}
