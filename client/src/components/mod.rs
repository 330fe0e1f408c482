//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render form chrome and feedback surfaces while reading/writing
//! page-owned signals passed in as props or shared state from context.

pub mod editable_field_row;
pub mod image_slots;
pub mod item_form_fields;
pub mod snackbar;
