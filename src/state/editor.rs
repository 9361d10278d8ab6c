//! Edit-session state machine for the content edit modal.
//!
//! DESIGN
//! ======
//! One enum drives the whole modal: which body to render (spinner,
//! form, inline error) and which transitions are legal. Transitions are
//! guarded so a stale fetch response cannot clobber a newer session,
//! and a rejected submit drops back to `Populated` with the form
//! retained for correction.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use crate::net::types::{Category, ContentRecord};

/// Editable fields of a content row, as loaded into the modal form.
///
/// The image file input is never pre-filled; `current_image` only backs
/// the preview of the already-uploaded image.
#[derive(Clone, Debug, PartialEq)]
pub struct EditForm {
    pub id: i64,
    pub category: Category,
    pub title: String,
    pub description: String,
    pub location: String,
    pub current_image: Option<String>,
}

impl EditForm {
    pub fn from_record(record: &ContentRecord) -> Self {
        Self {
            id: record.id,
            category: record.category,
            title: record.title.clone(),
            description: record.description.clone(),
            location: record.location.clone().unwrap_or_default(),
            current_image: record.image_path.clone(),
        }
    }
}

/// Lifecycle of one edit-modal session.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum EditSession {
    /// Modal closed; nothing in flight.
    #[default]
    Idle,
    /// Modal open, record fetch in flight.
    Loading { id: i64 },
    /// Form visible with the fetched values.
    Populated { form: EditForm },
    /// Update request in flight; submit control disabled.
    Submitting { form: EditForm },
    /// Record fetch failed; inline message shown in the modal body.
    Error { message: String },
}

impl EditSession {
    /// Open the modal and start loading `id`. Only legal from `Idle`;
    /// returns whether the transition applied.
    pub fn begin(&mut self, id: i64) -> bool {
        if matches!(self, EditSession::Idle) {
            *self = EditSession::Loading { id };
            true
        } else {
            false
        }
    }

    /// Fetched record arrived. Ignored unless this session is still
    /// loading that same id.
    pub fn populate(&mut self, record: &ContentRecord) -> bool {
        match self {
            EditSession::Loading { id } if *id == record.id => {
                *self = EditSession::Populated {
                    form: EditForm::from_record(record),
                };
                true
            }
            _ => false,
        }
    }

    /// Record fetch failed; show the message inline. No auto-retry.
    pub fn fail(&mut self, message: String) -> bool {
        if matches!(self, EditSession::Loading { .. }) {
            *self = EditSession::Error { message };
            true
        } else {
            false
        }
    }

    /// User submitted the form; disable the control for the flight.
    pub fn submit(&mut self) -> bool {
        if let EditSession::Populated { form } = self {
            *self = EditSession::Submitting { form: form.clone() };
            true
        } else {
            false
        }
    }

    /// Server accepted the update: session over, modal closes.
    pub fn submit_accepted(&mut self) -> bool {
        if matches!(self, EditSession::Submitting { .. }) {
            *self = EditSession::Idle;
            true
        } else {
            false
        }
    }

    /// Server rejected the update or transport failed: back to the
    /// form, values retained for correction.
    pub fn submit_rejected(&mut self) -> bool {
        if let EditSession::Submitting { form } = self {
            *self = EditSession::Populated { form: form.clone() };
            true
        } else {
            false
        }
    }

    /// Dismiss the modal from any state.
    pub fn close(&mut self) {
        *self = EditSession::Idle;
    }

    /// Whether the modal should be rendered at all.
    pub fn is_open(&self) -> bool {
        !matches!(self, EditSession::Idle)
    }

    /// Whether an update request is in flight.
    pub fn is_submitting(&self) -> bool {
        matches!(self, EditSession::Submitting { .. })
    }

    /// The form backing the modal body, when one is loaded.
    pub fn form(&self) -> Option<&EditForm> {
        match self {
            EditSession::Populated { form } | EditSession::Submitting { form } => Some(form),
            _ => None,
        }
    }
}
