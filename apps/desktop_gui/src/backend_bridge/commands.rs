//! Backend commands queued from UI to backend worker.

use shared::domain::{ContactDraft, ContactId};

pub enum BackendCommand {
    Initialize,
    Refresh,
    SubmitForm {
        editing: Option<ContactId>,
        draft: ContactDraft,
    },
    ConfirmDelete,
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Initialize => "initialize",
            Self::Refresh => "refresh",
            Self::SubmitForm { .. } => "submit_form",
            Self::ConfirmDelete => "confirm_delete",
        }
    }
}
