//! Field layout for the profile editor.
//!
//! Partners edit two extra business fields and see "Company name" where
//! regular users see "Name".

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::net::types::{Profile, Role};
use crate::state::field_editor::{EditableField, FieldEditor, FieldKind, FieldValue};

/// Record id used for the signed-in user's own profile.
pub const PROFILE_RECORD_ID: &str = "me";

pub const WITHDRAW_CONFIRM_PROMPT: &str =
    "Delete your account? This cannot be undone and the account cannot be recovered.";

pub fn profile_fields(profile: &Profile) -> Vec<EditableField> {
    let is_partner = profile.role == Role::Partner;
    let name_label = if is_partner { "Company name" } else { "Name" };

    let mut fields = vec![
        EditableField::new("name", name_label, FieldKind::Text, profile.name.clone().into()),
        EditableField::new("nickname", "Nickname", FieldKind::Text, profile.nickname.clone().into()),
        EditableField::new("contact_phone", "Phone", FieldKind::Phone, profile.phone_number().into()),
    ];
    if is_partner {
        fields.push(EditableField::new(
            "contact_email",
            "Business email",
            FieldKind::Text,
            profile.contact_email.clone().into(),
        ));
        fields.push(EditableField::new(
            "business_no",
            "Business number",
            FieldKind::Text,
            profile.business_no.clone().into(),
        ));
    }
    fields
}

pub fn profile_editor(profile: &Profile) -> FieldEditor {
    FieldEditor::new(profile_fields(profile))
}

/// Placeholder shown in view mode for a field with no value.
pub fn empty_hint(value: &FieldValue) -> Option<&'static str> {
    value.is_null().then_some("Not provided yet")
}
