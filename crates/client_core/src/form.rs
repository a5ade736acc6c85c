//! Create/edit form: local draft handling and submission.

use shared::{
    domain::{ContactDraft, ContactId},
    error::ValidationError,
};

use crate::{
    api::ContactApi,
    store::{ContactStore, StoreState},
};

pub const EMPTY_NAME_ALERT: &str = "Please enter a name";
pub const SAVE_FAILED_ALERT: &str = "Error saving contact. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rejected(ValidationError),
    Saved,
    Failed,
}

impl SubmitOutcome {
    /// Text of the blocking alert this outcome raises, if any.
    pub fn alert_message(&self) -> Option<&'static str> {
        match self {
            Self::Rejected(ValidationError::EmptyName) => Some(EMPTY_NAME_ALERT),
            Self::Saved => None,
            Self::Failed => Some(SAVE_FAILED_ALERT),
        }
    }
}

/// Draft state for the form, tied to the contact being edited (if any).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    draft: ContactDraft,
    editing: Option<ContactId>,
}

impl ContactForm {
    pub fn from_state(state: &StoreState) -> Self {
        match &state.editing {
            Some(contact) => Self {
                draft: ContactDraft::from(contact),
                editing: Some(contact.id),
            },
            None => Self::default(),
        }
    }

    /// Re-seeds the draft when the store's edit target has changed since it was built.
    pub fn sync_with(&mut self, state: &StoreState) -> bool {
        let target = state.editing.as_ref().map(|contact| contact.id);
        if target == self.editing {
            return false;
        }
        *self = Self::from_state(state);
        true
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ContactDraft {
        &mut self.draft
    }

    pub fn editing_id(&self) -> Option<ContactId> {
        self.editing
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_editing() {
            "Edit Contact"
        } else {
            "Add Contact"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Update Contact"
        } else {
            "Save Contact"
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_draft(&self.draft)
    }
}

pub fn validate_draft(draft: &ContactDraft) -> Result<(), ValidationError> {
    if draft.has_name() {
        Ok(())
    } else {
        Err(ValidationError::EmptyName)
    }
}

/// Validates, then creates or updates. On success the store returns to the list.
pub async fn submit<A: ContactApi>(
    store: &ContactStore<A>,
    editing: Option<ContactId>,
    draft: &ContactDraft,
) -> SubmitOutcome {
    if let Err(err) = validate_draft(draft) {
        tracing::debug!(kind = ?err.kind(), "contact draft rejected: {err}");
        return SubmitOutcome::Rejected(err);
    }

    let saved = match editing {
        Some(contact_id) => store.update(contact_id, draft).await,
        None => store.create(draft).await,
    };

    if saved {
        store.finish_editing();
        SubmitOutcome::Saved
    } else {
        SubmitOutcome::Failed
    }
}

/// Discards the draft and returns to the list.
pub fn cancel<A: ContactApi>(store: &ContactStore<A>) {
    store.finish_editing();
}
