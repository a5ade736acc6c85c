//! Delete confirmation gate.

use crate::{api::ContactApi, store::ContactStore};

pub const DELETE_FAILED_ALERT: &str = "Error deleting contact. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Nothing was staged or the modal was already closed.
    NotPending,
    Deleted,
    Failed,
}

impl DeleteOutcome {
    pub fn alert_message(&self) -> Option<&'static str> {
        match self {
            Self::Failed => Some(DELETE_FAILED_ALERT),
            Self::NotPending | Self::Deleted => None,
        }
    }
}

pub fn prompt(contact_name: &str) -> String {
    format!("Are you sure you want to delete {contact_name}? This action cannot be undone.")
}

/// Deletes the staged contact. The modal stays open when the call fails.
pub async fn confirm<A: ContactApi>(store: &ContactStore<A>) -> DeleteOutcome {
    let Some(target) = store.snapshot().delete_target().cloned() else {
        return DeleteOutcome::NotPending;
    };

    if store.delete(target.id).await {
        store.clear_pending_delete();
        DeleteOutcome::Deleted
    } else {
        DeleteOutcome::Failed
    }
}

pub fn cancel<A: ContactApi>(store: &ContactStore<A>) {
    store.clear_pending_delete();
}
