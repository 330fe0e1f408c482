use super::*;

#[test]
fn tone_class_marks_each_tone() {
    assert_eq!(tone_class(Tone::Info), "snackbar snackbar--info");
    assert_eq!(tone_class(Tone::Success), "snackbar snackbar--success");
    assert_eq!(tone_class(Tone::Error), "snackbar snackbar--error");
}
