//! Inline per-field editing for a single record.
//!
//! DESIGN
//! ======
//! The record has one optional "active edit" slot instead of a flag per
//! field, so only one field can ever be in edit mode. Starting an edit on
//! another field replaces the slot, which discards the old draft.
//!
//! Confirmed values only land in `committed` once the server accepts them.
//! A rejected update keeps the field in edit mode with its draft intact so
//! the user can fix it and retry.
//!
//! A field with an update in flight stays locked until that update is
//! answered, even after the user moves on to another field. At most one
//! update per field is ever outstanding, so responses can't be applied out
//! of order.

#[cfg(test)]
#[path = "field_editor_test.rs"]
mod field_editor_test;

use std::collections::HashMap;

use serde::Serialize;

use crate::net::error::SyncError;
use crate::state::notify::Notification;
use crate::util::phone;

pub const SAVE_OK_TITLE: &str = "Saved";
pub const SAVE_OK_MESSAGE: &str = "Your changes were saved.";
pub const SAVE_FAILED_TITLE: &str = "Update failed";
pub const SAVE_FAILED_MESSAGE: &str = "Could not save your changes.";

/// Formatting and parsing rules for a field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldKind {
    #[default]
    Text,
    /// Digits stored, `NNN-NNNN-NNNN` shown.
    Phone,
    /// Whole number; non-numeric input is refused before submission.
    Number,
}

/// A committed or submitted value. `Null` is the explicit "no value" marker.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    #[default]
    Null,
    Text(String),
    Number(i64),
}

impl FieldValue {
    fn raw(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Text(text) => text.clone(),
            Self::Number(n) => n.to_string(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<Option<String>> for FieldValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Null, Self::Text)
    }
}

impl FieldKind {
    /// Value shown in view mode and used to seed the draft.
    pub fn display(self, committed: &FieldValue) -> String {
        let raw = committed.raw();
        match self {
            Self::Phone => phone::format_for_display(&raw),
            Self::Text | Self::Number => raw,
        }
    }

    /// Transform applied to each keystroke before it is stored.
    pub fn on_input(self, raw: &str) -> String {
        match self {
            Self::Phone => phone::format_while_typing(raw),
            Self::Text | Self::Number => raw.to_owned(),
        }
    }

    /// Convert a draft into the value sent to the server.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::Invalid`] when a number field holds non-numeric text.
    pub fn normalize(self, draft: &str) -> Result<FieldValue, EditError> {
        match self {
            Self::Phone => Ok(phone::normalize_for_submit(draft).into()),
            Self::Text => {
                let trimmed = draft.trim();
                Ok(if trimmed.is_empty() { FieldValue::Null } else { FieldValue::Text(trimmed.to_owned()) })
            }
            Self::Number => {
                let trimmed = draft.trim();
                if trimmed.is_empty() {
                    return Ok(FieldValue::Null);
                }
                trimmed
                    .parse::<i64>()
                    .map(FieldValue::Number)
                    .map_err(|_| EditError::Invalid("Enter a whole number.".to_owned()))
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditableField {
    /// Wire key sent in the update payload (e.g. `contact_phone`).
    pub key: &'static str,
    pub label: String,
    pub kind: FieldKind,
    pub committed: FieldValue,
}

impl EditableField {
    pub fn new(key: &'static str, label: impl Into<String>, kind: FieldKind, committed: FieldValue) -> Self {
        Self { key, label: label.into(), kind, committed }
    }

    pub fn display_value(&self) -> String {
        self.kind.display(&self.committed)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("unknown field: {0}")]
    UnknownField(String),
    #[error("no field is being edited")]
    NotEditing,
    #[error("an update is already in flight")]
    Busy,
    #[error("{0}")]
    Invalid(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct ActiveEdit {
    key: &'static str,
    draft: String,
    generation: u64,
}

/// A confirmed edit on its way to the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldUpdate {
    pub key: &'static str,
    pub value: FieldValue,
    generation: u64,
}

impl FieldUpdate {
    /// JSON body: `{ "<key>": <value> }`.
    pub fn payload(&self) -> serde_json::Value {
        let mut body = serde_json::Map::new();
        body.insert(self.key.to_owned(), serde_json::to_value(&self.value).unwrap_or_default());
        serde_json::Value::Object(body)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldEditor {
    fields: Vec<EditableField>,
    active: Option<ActiveEdit>,
    /// Generation of the outstanding update, per field key.
    in_flight: HashMap<&'static str, u64>,
    next_generation: u64,
}

impl FieldEditor {
    pub fn new(fields: Vec<EditableField>) -> Self {
        Self { fields, active: None, in_flight: HashMap::new(), next_generation: 0 }
    }

    pub fn fields(&self) -> &[EditableField] {
        &self.fields
    }

    pub fn field(&self, key: &str) -> Option<&EditableField> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn committed(&self, key: &str) -> Option<&FieldValue> {
        self.field(key).map(|f| &f.committed)
    }

    pub fn editing_key(&self) -> Option<&'static str> {
        self.active.as_ref().map(|a| a.key)
    }

    pub fn is_editing(&self, key: &str) -> bool {
        self.editing_key() == Some(key)
    }

    /// Draft of the field in edit mode.
    pub fn draft(&self) -> Option<&str> {
        self.active.as_ref().map(|a| a.draft.as_str())
    }

    /// Whether the field in edit mode is waiting on the server.
    pub fn is_submitting(&self) -> bool {
        self.active.as_ref().is_some_and(|a| self.is_pending(a.key))
    }

    /// Whether `key` has an update the server hasn't answered yet.
    pub fn is_pending(&self, key: &str) -> bool {
        self.in_flight.contains_key(key)
    }

    /// Enter edit mode for `key`, abandoning any other field's draft.
    ///
    /// # Errors
    ///
    /// [`EditError::UnknownField`] for a key not on this record, or
    /// [`EditError::Busy`] if `key` still has an update in flight.
    pub fn begin_edit(&mut self, key: &str) -> Result<(), EditError> {
        let field = self.field(key).ok_or_else(|| EditError::UnknownField(key.to_owned()))?;
        if self.is_pending(key) {
            return Err(EditError::Busy);
        }
        let (key, draft) = (field.key, field.display_value());
        self.next_generation += 1;
        self.active = Some(ActiveEdit { key, draft, generation: self.next_generation });
        Ok(())
    }

    /// Store a keystroke, applying the field's input transform.
    ///
    /// # Errors
    ///
    /// [`EditError::NotEditing`] outside edit mode, [`EditError::Busy`] while
    /// the current draft is being submitted.
    pub fn set_draft(&mut self, raw: &str) -> Result<(), EditError> {
        let active = self.active.as_mut().ok_or(EditError::NotEditing)?;
        if self.in_flight.contains_key(active.key) {
            return Err(EditError::Busy);
        }
        let kind = self.fields.iter().find(|f| f.key == active.key).map(|f| f.kind).unwrap_or_default();
        active.draft = kind.on_input(raw);
        Ok(())
    }

    /// Leave edit mode without contacting the server. Returns whether a draft was dropped.
    pub fn cancel(&mut self) -> bool {
        self.active.take().is_some()
    }

    /// Normalize the draft and hand back the update to send.
    ///
    /// # Errors
    ///
    /// [`EditError::NotEditing`], [`EditError::Busy`] for a duplicate confirm,
    /// or [`EditError::Invalid`] when the draft fails client-side checks.
    pub fn confirm(&mut self) -> Result<FieldUpdate, EditError> {
        let active = self.active.as_ref().ok_or(EditError::NotEditing)?;
        if self.is_pending(active.key) {
            return Err(EditError::Busy);
        }
        let kind = self.field(active.key).map(|f| f.kind).unwrap_or_default();
        let value = kind.normalize(&active.draft)?;
        let update = FieldUpdate { key: active.key, value, generation: active.generation };
        self.in_flight.insert(update.key, update.generation);
        Ok(update)
    }

    /// Fold the server's answer back into the record.
    ///
    /// A success always commits the confirmed value. Edit mode is only left
    /// when the same edit is still open; a failure keeps the draft for retry.
    pub fn apply_outcome(&mut self, update: FieldUpdate, result: Result<(), SyncError>) -> Notification {
        let same_edit = self
            .active
            .as_ref()
            .is_some_and(|a| a.key == update.key && a.generation == update.generation);
        if self.in_flight.get(update.key) == Some(&update.generation) {
            self.in_flight.remove(update.key);
        }

        match result {
            Ok(()) => {
                if let Some(field) = self.fields.iter_mut().find(|f| f.key == update.key) {
                    field.committed = update.value;
                }
                if same_edit {
                    self.active = None;
                }
                Notification::success(SAVE_OK_TITLE, SAVE_OK_MESSAGE)
            }
            Err(err) => Notification::error(SAVE_FAILED_TITLE, err.user_message(SAVE_FAILED_MESSAGE)),
        }
    }
}
