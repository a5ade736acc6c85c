//! HTTP access to the remote agenda service.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use shared::{
    domain::{Contact, ContactDraft, ContactId},
    protocol::{
        agenda_segments, contact_segments, contacts_segments, is_dot_segment, ContactListResponse,
        ContactRequest,
    },
};
use tracing::debug;
use url::Url;

use crate::{config::Settings, error::ContactServiceError};

/// Result of listing an agenda. A missing agenda is an expected first-run state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactListing {
    Found(Vec<Contact>),
    AgendaMissing { status: StatusCode },
}

#[async_trait]
pub trait ContactApi: Send + Sync {
    async fn list_contacts(&self) -> Result<ContactListing, ContactServiceError>;
    async fn create_agenda(&self) -> Result<(), ContactServiceError>;
    async fn create_contact(&self, draft: &ContactDraft) -> Result<(), ContactServiceError>;
    async fn update_contact(
        &self,
        contact_id: ContactId,
        draft: &ContactDraft,
    ) -> Result<(), ContactServiceError>;
    async fn delete_contact(&self, contact_id: ContactId) -> Result<(), ContactServiceError>;
}

pub struct HttpContactApi {
    http: Client,
    base_url: String,
    agenda: String,
}

impl HttpContactApi {
    pub fn new(base_url: impl Into<String>, agenda: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url, agenda)
    }

    pub fn with_client(http: Client, base_url: impl Into<String>, agenda: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            agenda: agenda.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.api_base_url.clone(), settings.agenda.clone())
    }

    pub fn agenda(&self) -> &str {
        &self.agenda
    }

    /// Joins percent-encoded segments onto the base url path.
    fn url(&self, operation: &'static str, segments: &[String]) -> Result<Url, ContactServiceError> {
        if self.agenda.is_empty() || is_dot_segment(&self.agenda) {
            return Err(ContactServiceError::invalid_url(
                operation,
                format!("agenda name '{}' is not a path segment", self.agenda),
            ));
        }
        let mut url = Url::parse(&self.base_url).map_err(|err| {
            ContactServiceError::invalid_url(operation, format!("'{}': {err}", self.base_url))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                ContactServiceError::invalid_url(
                    operation,
                    format!("'{}' cannot be a base url", self.base_url),
                )
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn expect_success(
        operation: &'static str,
        response: reqwest::Response,
    ) -> Result<(), ContactServiceError> {
        if response.status().is_success() {
            debug!(operation, status = %response.status(), "contact service call succeeded");
            return Ok(());
        }
        Err(ContactServiceError::from_response(operation, response).await)
    }
}

#[async_trait]
impl ContactApi for HttpContactApi {
    async fn list_contacts(&self) -> Result<ContactListing, ContactServiceError> {
        const OP: &str = "list contacts";
        let response = self
            .http
            .get(self.url(OP, &contacts_segments(&self.agenda))?)
            .send()
            .await
            .map_err(|err| ContactServiceError::transport(OP, err))?;

        let status = response.status();
        if !status.is_success() {
            return Ok(ContactListing::AgendaMissing { status });
        }

        let body: ContactListResponse = response
            .json()
            .await
            .map_err(|err| ContactServiceError::decode(OP, err))?;
        Ok(ContactListing::Found(body.contacts))
    }

    async fn create_agenda(&self) -> Result<(), ContactServiceError> {
        const OP: &str = "create agenda";
        let response = self
            .http
            .post(self.url(OP, &agenda_segments(&self.agenda))?)
            .send()
            .await
            .map_err(|err| ContactServiceError::transport(OP, err))?;
        Self::expect_success(OP, response).await
    }

    async fn create_contact(&self, draft: &ContactDraft) -> Result<(), ContactServiceError> {
        const OP: &str = "create contact";
        let response = self
            .http
            .post(self.url(OP, &contacts_segments(&self.agenda))?)
            .json(&ContactRequest::from(draft))
            .send()
            .await
            .map_err(|err| ContactServiceError::transport(OP, err))?;
        Self::expect_success(OP, response).await
    }

    async fn update_contact(
        &self,
        contact_id: ContactId,
        draft: &ContactDraft,
    ) -> Result<(), ContactServiceError> {
        const OP: &str = "update contact";
        let response = self
            .http
            .put(self.url(OP, &contact_segments(&self.agenda, contact_id))?)
            .json(&ContactRequest::from(draft))
            .send()
            .await
            .map_err(|err| ContactServiceError::transport(OP, err))?;
        Self::expect_success(OP, response).await
    }

    async fn delete_contact(&self, contact_id: ContactId) -> Result<(), ContactServiceError> {
        const OP: &str = "delete contact";
        let response = self
            .http
            .delete(self.url(OP, &contact_segments(&self.agenda, contact_id))?)
            .send()
            .await
            .map_err(|err| ContactServiceError::transport(OP, err))?;
        Self::expect_success(OP, response).await
    }
}

#[cfg(test)]
#[path = "tests/api_tests.rs"]
mod tests;
