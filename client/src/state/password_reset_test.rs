use super::*;

fn filled() -> ResetForm {
    ResetForm {
        step: ResetStep::EnterCodeAndPassword,
        email: "a@b.c".to_owned(),
        code: "123456".to_owned(),
        new_password: "hunter2".to_owned(),
        confirm_password: "hunter2".to_owned(),
    }
}

#[test]
fn request_requires_email() {
    assert_eq!(ResetForm::default().validate_request(), Err(ResetError::MissingEmail));
    assert_eq!(filled().validate_request(), Ok(()));
}

#[test]
fn verify_rejects_mismatched_confirmation() {
    let form = ResetForm { confirm_password: "hunter3".to_owned(), ..filled() };
    assert_eq!(form.validate_verify(), Err(ResetError::PasswordMismatch));
}

#[test]
fn verify_requires_code_and_password() {
    let form = ResetForm { code: " ".to_owned(), ..filled() };
    assert_eq!(form.validate_verify(), Err(ResetError::MissingCode));
    let form = ResetForm { new_password: String::new(), confirm_password: String::new(), ..filled() };
    assert_eq!(form.validate_verify(), Err(ResetError::MissingPassword));
    assert_eq!(filled().validate_verify(), Ok(()));
}

#[test]
fn code_sent_keeps_email_only() {
    let mut form = ResetForm { step: ResetStep::EnterEmail, ..filled() };
    form.code_sent();
    assert_eq!(form.step, ResetStep::EnterCodeAndPassword);
    assert_eq!(form.email, "a@b.c");
    assert!(form.code.is_empty() && form.new_password.is_empty() && form.confirm_password.is_empty());
}

#[test]
fn completed_clears_everything() {
    let mut form = filled();
    form.completed();
    assert_eq!(form, ResetForm::default());
}
