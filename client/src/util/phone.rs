//! Phone number formatting for profile contact fields.
//!
//! Numbers are stored and submitted as bare digits. The `NNN-NNNN-NNNN`
//! form only ever exists on screen.

#[cfg(test)]
#[path = "phone_test.rs"]
mod phone_test;

/// Longest digit run accepted while typing (`3 + 4 + 4`).
pub const MAX_PHONE_DIGITS: usize = 11;

fn digits_of(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Render a stored number with separators.
///
/// Ten- and eleven-digit numbers are grouped `3-3-4` / `3-4-4`. Anything
/// else is returned untouched so odd legacy values stay visible.
pub fn format_for_display(stored: &str) -> String {
    if stored.is_empty() {
        return String::new();
    }
    let digits = digits_of(stored);
    match digits.len() {
        10 => format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..]),
        11 => format!("{}-{}-{}", &digits[..3], &digits[3..7], &digits[7..]),
        _ => stored.to_owned(),
    }
}

/// Reformat partial input after each keystroke.
///
/// Best effort: groups whatever digits exist as `(0-3)(0-4)(0-4)`, drops
/// digits past [`MAX_PHONE_DIGITS`], and never leaves a trailing separator.
pub fn format_while_typing(raw: &str) -> String {
    let digits: String = digits_of(raw).chars().take(MAX_PHONE_DIGITS).collect();
    let head = &digits[..digits.len().min(3)];
    let middle = &digits[head.len()..digits.len().min(7)];
    let tail = &digits[head.len() + middle.len()..];

    let mut out = String::with_capacity(MAX_PHONE_DIGITS + 2);
    out.push_str(head);
    if !middle.is_empty() {
        out.push('-');
        out.push_str(middle);
    }
    if !tail.is_empty() {
        out.push('-');
        out.push_str(tail);
    }
    out
}

/// Strip separators for submission. An empty result means "no number".
pub fn normalize_for_submit(draft: &str) -> Option<String> {
    let stripped: String = draft.chars().filter(|c| *c != '-').collect();
    if stripped.is_empty() { None } else { Some(stripped) }
}
