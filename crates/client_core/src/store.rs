//! Process-wide contact state and the CRUD operations that refresh it.
//!
//! State lives in a `watch` channel: every mutation notifies subscribers, and
//! readers on any thread can borrow the latest value. Operations are not
//! serialized against each other, so overlapping fetches resolve as
//! last-response-wins on the contact list.

use std::sync::atomic::{AtomicBool, Ordering};

use shared::domain::{Contact, ContactDraft, ContactId};
use tokio::sync::watch;
use tracing::{error, info, warn};

use crate::api::{ContactApi, ContactListing};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    List,
    Form,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreState {
    pub contacts: Vec<Contact>,
    pub view: View,
    pub editing: Option<Contact>,
    pub pending_delete: Option<Contact>,
    pub delete_modal_open: bool,
}

impl StoreState {
    /// The contact the confirmation modal is asking about, if it should be shown.
    pub fn delete_target(&self) -> Option<&Contact> {
        if self.delete_modal_open {
            self.pending_delete.as_ref()
        } else {
            None
        }
    }
}

pub struct ContactStore<A: ContactApi> {
    api: A,
    state: watch::Sender<StoreState>,
    initialized: AtomicBool,
}

impl<A: ContactApi> ContactStore<A> {
    pub fn new(api: A) -> Self {
        let (state, _) = watch::channel(StoreState::default());
        Self {
            api,
            state,
            initialized: AtomicBool::new(false),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn subscribe(&self) -> watch::Receiver<StoreState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> StoreState {
        self.state.borrow().clone()
    }

    /// Startup hook: runs the first `fetch_all` exactly once per store.
    pub async fn initialize(&self) {
        if self.initialized.swap(true, Ordering::SeqCst) {
            return;
        }
        self.fetch_all().await;
    }

    /// Replaces the local list with the service's. Never fails; falls back to empty.
    pub async fn fetch_all(&self) {
        let contacts = match self.api.list_contacts().await {
            Ok(ContactListing::Found(contacts)) => contacts,
            Ok(ContactListing::AgendaMissing { status }) => {
                info!(status = %status, "agenda not found; creating it");
                if let Err(err) = self.api.create_agenda().await {
                    warn!(kind = ?err.kind(), status = ?err.status(), "failed to create agenda: {err}");
                }
                Vec::new()
            }
            Err(err) => {
                error!(kind = ?err.kind(), status = ?err.status(), "error fetching contacts: {err}");
                Vec::new()
            }
        };
        self.state.send_modify(|state| state.contacts = contacts);
    }

    pub async fn create(&self, draft: &ContactDraft) -> bool {
        match self.api.create_contact(draft).await {
            Ok(()) => {
                self.fetch_all().await;
                true
            }
            Err(err) => {
                error!(kind = ?err.kind(), status = ?err.status(), "error adding contact: {err}");
                false
            }
        }
    }

    pub async fn update(&self, contact_id: ContactId, draft: &ContactDraft) -> bool {
        match self.api.update_contact(contact_id, draft).await {
            Ok(()) => {
                self.fetch_all().await;
                true
            }
            Err(err) => {
                error!(
                    contact_id = contact_id.0,
                    kind = ?err.kind(),
                    status = ?err.status(),
                    "error updating contact: {err}"
                );
                false
            }
        }
    }

    pub async fn delete(&self, contact_id: ContactId) -> bool {
        match self.api.delete_contact(contact_id).await {
            Ok(()) => {
                self.fetch_all().await;
                true
            }
            Err(err) => {
                error!(
                    contact_id = contact_id.0,
                    kind = ?err.kind(),
                    status = ?err.status(),
                    "error deleting contact: {err}"
                );
                false
            }
        }
    }

    pub fn show_list(&self) {
        self.state.send_modify(|state| state.view = View::List);
    }

    pub fn open_create_form(&self) {
        self.state.send_modify(|state| state.view = View::Form);
    }

    pub fn open_edit_form(&self, contact: Contact) {
        self.state.send_modify(|state| {
            state.editing = Some(contact);
            state.view = View::Form;
        });
    }

    /// Leaves the form: back to the list with no edit target.
    pub fn finish_editing(&self) {
        self.state.send_modify(|state| {
            state.view = View::List;
            state.editing = None;
        });
    }

    pub fn stage_delete(&self, contact: Contact) {
        self.state.send_modify(|state| {
            state.pending_delete = Some(contact);
            state.delete_modal_open = true;
        });
    }

    pub fn clear_pending_delete(&self) {
        self.state.send_modify(|state| {
            state.pending_delete = None;
            state.delete_modal_open = false;
        });
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
