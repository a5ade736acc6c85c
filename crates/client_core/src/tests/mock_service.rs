//! In-process stand-in for the remote agenda service.

use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde_json::{json, Value};
use shared::{
    domain::{Contact, ContactId},
    protocol::{ContactListResponse, ContactRequest},
};
use tokio::{net::TcpListener, sync::Mutex};

use crate::{api::HttpContactApi, store::ContactStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Default)]
struct Inner {
    agenda_exists: bool,
    contacts: Vec<Contact>,
    next_id: i64,
    list_status: Option<StatusCode>,
    mutation_status: Option<StatusCode>,
    requests: Vec<RecordedRequest>,
}

#[derive(Clone)]
pub(crate) struct MockService {
    pub base_url: String,
    inner: Arc<Mutex<Inner>>,
}

impl MockService {
    pub async fn spawn() -> Result<Self> {
        std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let inner = Arc::new(Mutex::new(Inner {
            agenda_exists: true,
            next_id: 1,
            ..Inner::default()
        }));
        let app = Router::new()
            .route("/agendas/:agenda", post(create_agenda))
            .route(
                "/agendas/:agenda/contacts",
                get(list_contacts).post(create_contact),
            )
            .route(
                "/agendas/:agenda/contacts/:id",
                put(update_contact).delete(delete_contact),
            )
            .with_state(inner.clone());
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        Ok(Self {
            base_url: format!("http://{addr}"),
            inner,
        })
    }

    pub fn api(&self) -> HttpContactApi {
        self.api_for("demo")
    }

    pub fn api_for(&self, agenda: &str) -> HttpContactApi {
        HttpContactApi::new(self.base_url.clone(), agenda)
    }

    pub fn store(&self) -> ContactStore<HttpContactApi> {
        ContactStore::new(self.api())
    }

    pub async fn without_agenda(self) -> Self {
        self.inner.lock().await.agenda_exists = false;
        self
    }

    pub async fn seed(&self, name: &str, phone: Option<&str>) -> Contact {
        let mut inner = self.inner.lock().await;
        let contact = Contact {
            id: ContactId(inner.next_id),
            name: name.to_string(),
            phone: phone.map(str::to_string),
            email: None,
            address: None,
        };
        inner.next_id += 1;
        inner.contacts.push(contact.clone());
        contact
    }

    pub async fn fail_list_with(&self, status: StatusCode) {
        self.inner.lock().await.list_status = Some(status);
    }

    pub async fn fail_mutations_with(&self, status: StatusCode) {
        self.inner.lock().await.mutation_status = Some(status);
    }

    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.inner.lock().await.requests.clone()
    }

    pub async fn contacts(&self) -> Vec<Contact> {
        self.inner.lock().await.contacts.clone()
    }

    pub async fn agenda_exists(&self) -> bool {
        self.inner.lock().await.agenda_exists
    }
}

fn record(inner: &mut Inner, method: Method, path: String, body: Option<Value>) {
    inner.requests.push(RecordedRequest { method, path, body });
}

fn error_response(status: StatusCode, detail: &str) -> Response {
    (status, Json(json!({ "detail": detail }))).into_response()
}

async fn create_agenda(
    State(inner): State<Arc<Mutex<Inner>>>,
    Path(agenda): Path<String>,
) -> Response {
    let mut inner = inner.lock().await;
    record(&mut inner, Method::POST, format!("/agendas/{agenda}"), None);
    inner.agenda_exists = true;
    (StatusCode::CREATED, Json(json!({ "slug": agenda, "id": 1 }))).into_response()
}

async fn list_contacts(
    State(inner): State<Arc<Mutex<Inner>>>,
    Path(agenda): Path<String>,
) -> Response {
    let mut inner = inner.lock().await;
    record(
        &mut inner,
        Method::GET,
        format!("/agendas/{agenda}/contacts"),
        None,
    );
    if let Some(status) = inner.list_status {
        return error_response(status, "list unavailable");
    }
    if !inner.agenda_exists {
        return error_response(StatusCode::NOT_FOUND, "Agenda doesn't exist.");
    }
    Json(ContactListResponse {
        contacts: inner.contacts.clone(),
    })
    .into_response()
}

async fn create_contact(
    State(inner): State<Arc<Mutex<Inner>>>,
    Path(agenda): Path<String>,
    Json(body): Json<ContactRequest>,
) -> Response {
    let mut inner = inner.lock().await;
    record(
        &mut inner,
        Method::POST,
        format!("/agendas/{agenda}/contacts"),
        serde_json::to_value(&body).ok(),
    );
    if let Some(status) = inner.mutation_status {
        return error_response(status, "create rejected");
    }
    let contact = Contact {
        id: ContactId(inner.next_id),
        name: body.name,
        phone: Some(body.phone),
        email: Some(body.email),
        address: Some(body.address),
    };
    inner.next_id += 1;
    inner.contacts.push(contact.clone());
    (StatusCode::CREATED, Json(contact)).into_response()
}

async fn update_contact(
    State(inner): State<Arc<Mutex<Inner>>>,
    Path((agenda, id)): Path<(String, i64)>,
    Json(body): Json<ContactRequest>,
) -> Response {
    let mut inner = inner.lock().await;
    record(
        &mut inner,
        Method::PUT,
        format!("/agendas/{agenda}/contacts/{id}"),
        serde_json::to_value(&body).ok(),
    );
    if let Some(status) = inner.mutation_status {
        return error_response(status, "update rejected");
    }
    let Some(contact) = inner.contacts.iter_mut().find(|c| c.id == ContactId(id)) else {
        return error_response(StatusCode::NOT_FOUND, "Contact doesn't exist.");
    };
    contact.name = body.name;
    contact.phone = Some(body.phone);
    contact.email = Some(body.email);
    contact.address = Some(body.address);
    Json(contact.clone()).into_response()
}

async fn delete_contact(
    State(inner): State<Arc<Mutex<Inner>>>,
    Path((agenda, id)): Path<(String, i64)>,
) -> Response {
    let mut inner = inner.lock().await;
    record(
        &mut inner,
        Method::DELETE,
        format!("/agendas/{agenda}/contacts/{id}"),
        None,
    );
    if let Some(status) = inner.mutation_status {
        return error_response(status, "delete rejected");
    }
    let before = inner.contacts.len();
    inner.contacts.retain(|c| c.id != ContactId(id));
    if inner.contacts.len() == before {
        return error_response(StatusCode::NOT_FOUND, "Contact doesn't exist.");
    }
    StatusCode::NO_CONTENT.into_response()
}

/// Base URL of a port nothing is listening on.
pub(crate) async fn unreachable_base_url() -> Result<String> {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{addr}"))
}
