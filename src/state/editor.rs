//! Note-editor state machine for the update modal.
//!
//! DESIGN
//! ======
//! Two states: closed, and open with a target identifier plus a draft
//! holding only the editable note text. The draft is reseeded on every
//! open and validated on every submit attempt, so stale errors never
//! outlive the modal.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use crate::net::types::Sneaker;

/// Inline message shown when the note field is left empty.
pub const NOTE_REQUIRED_MESSAGE: &str = "Description is required";

/// Per-field validation errors, recomputed on each submit attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub description: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
    }
}

/// State of the note-editing modal.
#[derive(Clone, Debug, Default)]
pub struct EditorState {
    /// Identifier of the sneaker being edited; `None` means closed.
    pub target_id: Option<i64>,
    /// Editable note text, sent to the server exactly as typed.
    pub draft_note: String,
    pub errors: FormErrors,
    /// True while an update request is in flight.
    pub submit_pending: bool,
}

impl EditorState {
    pub fn is_open(&self) -> bool {
        self.target_id.is_some()
    }

    /// Open the modal for `sneaker`, seeding the draft from its current
    /// note, falling back to the catalog description for items that have
    /// never been annotated.
    pub fn open_for(&mut self, sneaker: &Sneaker) {
        self.target_id = Some(sneaker.id);
        self.draft_note = sneaker
            .note
            .clone()
            .or_else(|| sneaker.description.clone())
            .unwrap_or_default();
        self.errors = FormErrors::default();
        self.submit_pending = false;
    }

    pub fn close(&mut self) {
        self.target_id = None;
        self.draft_note.clear();
        self.errors = FormErrors::default();
        self.submit_pending = false;
    }

    /// Recompute validation errors. Returns true when the draft may be
    /// submitted. The check is on the raw text: whitespace counts as
    /// content, matching what the server receives.
    pub fn validate(&mut self) -> bool {
        self.errors.description = if self.draft_note.is_empty() {
            Some(NOTE_REQUIRED_MESSAGE.to_owned())
        } else {
            None
        };
        self.errors.is_empty()
    }
}
