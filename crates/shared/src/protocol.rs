use serde::{Deserialize, Serialize};

use crate::domain::{Contact, ContactDraft, ContactId};

pub const DEFAULT_AGENDA: &str = "demo";

/// Body of `GET /agendas/{agenda}/contacts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactListResponse {
    #[serde(default)]
    pub contacts: Vec<Contact>,
}

/// Body sent on create and update. The service assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl From<&ContactDraft> for ContactRequest {
    fn from(draft: &ContactDraft) -> Self {
        Self {
            name: draft.name.clone(),
            phone: draft.phone.clone(),
            email: draft.email.clone(),
            address: draft.address.clone(),
        }
    }
}

/// Path segments under the service base url. Callers percent-encode each one
/// when joining, so an agenda name always stays a single segment.
pub fn agenda_segments(agenda: &str) -> Vec<String> {
    vec!["agendas".to_string(), agenda.to_string()]
}

pub fn contacts_segments(agenda: &str) -> Vec<String> {
    let mut segments = agenda_segments(agenda);
    segments.push("contacts".to_string());
    segments
}

pub fn contact_segments(agenda: &str, contact_id: ContactId) -> Vec<String> {
    let mut segments = contacts_segments(agenda);
    segments.push(contact_id.to_string());
    segments
}

/// Dot segments are resolved away by url normalization and cannot name an agenda.
pub fn is_dot_segment(segment: &str) -> bool {
    matches!(segment, "." | "..")
}

/// Agenda slugs accepted from configuration: ASCII letters, digits, `-`, `_` and `.`.
pub fn is_agenda_slug(agenda: &str) -> bool {
    !agenda.is_empty()
        && !is_dot_segment(agenda)
        && agenda
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}
