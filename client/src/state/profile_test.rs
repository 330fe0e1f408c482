use super::*;

fn user_profile() -> Profile {
    Profile {
        name: Some("Kim".to_owned()),
        nickname: None,
        contact_phone: Some("01012345678".to_owned()),
        ..Profile::default()
    }
}

#[test]
fn user_profile_has_three_fields() {
    let keys: Vec<&str> = profile_fields(&user_profile()).iter().map(|f| f.key).collect();
    assert_eq!(keys, vec!["name", "nickname", "contact_phone"]);
}

#[test]
fn partner_profile_adds_business_fields_and_relabels_name() {
    let profile = Profile { role: Role::Partner, business_no: Some("123".to_owned()), ..user_profile() };
    let fields = profile_fields(&profile);
    let keys: Vec<&str> = fields.iter().map(|f| f.key).collect();
    assert_eq!(keys, vec!["name", "nickname", "contact_phone", "contact_email", "business_no"]);
    assert_eq!(fields[0].label, "Company name");
    assert_eq!(fields[4].committed, FieldValue::Text("123".to_owned()));
}

#[test]
fn phone_field_displays_formatted_number() {
    let editor = profile_editor(&user_profile());
    assert_eq!(editor.field("contact_phone").unwrap().display_value(), "010-1234-5678");
}

#[test]
fn missing_values_commit_as_null_with_hint() {
    let editor = profile_editor(&user_profile());
    let nickname = editor.committed("nickname").unwrap();
    assert!(nickname.is_null());
    assert_eq!(empty_hint(nickname), Some("Not provided yet"));
    assert_eq!(empty_hint(editor.committed("name").unwrap()), None);
}
