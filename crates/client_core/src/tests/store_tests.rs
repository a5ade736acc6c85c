use super::*;
use crate::{
    api::HttpContactApi,
    mock_service::{unreachable_base_url, MockService},
};
use axum::http::{Method, StatusCode};

fn draft(name: &str) -> ContactDraft {
    ContactDraft {
        name: name.to_string(),
        phone: "555-0100".to_string(),
        email: format!("{}@example.com", name.to_ascii_lowercase()),
        address: "1 Main St".to_string(),
    }
}

#[tokio::test]
async fn fetch_all_replaces_local_list() {
    let service = MockService::spawn().await.expect("mock service");
    let ana = service.seed("Ana", Some("123")).await;
    let store = service.store();

    store.fetch_all().await;

    assert_eq!(store.snapshot().contacts, vec![ana]);
}

#[tokio::test]
async fn fetch_all_creates_missing_agenda_and_yields_empty_list() {
    let service = MockService::spawn()
        .await
        .expect("mock service")
        .without_agenda()
        .await;
    let store = service.store();

    store.fetch_all().await;

    assert!(store.snapshot().contacts.is_empty());
    assert!(service.agenda_exists().await);
    let requests = service.requests().await;
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method, Method::GET);
    assert_eq!(requests[0].path, "/agendas/demo/contacts");
    assert_eq!(requests[1].method, Method::POST);
    assert_eq!(requests[1].path, "/agendas/demo");
}

#[tokio::test]
async fn any_non_success_listing_is_treated_as_missing_agenda() {
    let service = MockService::spawn().await.expect("mock service");
    service.seed("Ana", None).await;
    service.fail_list_with(StatusCode::INTERNAL_SERVER_ERROR).await;
    let store = service.store();

    store.fetch_all().await;

    assert!(store.snapshot().contacts.is_empty());
    let requests = service.requests().await;
    assert_eq!(requests.last().map(|r| r.path.as_str()), Some("/agendas/demo"));
}

#[tokio::test]
async fn fetch_all_falls_back_to_empty_list_when_unreachable() {
    let base_url = unreachable_base_url().await.expect("free port");
    let store = ContactStore::new(HttpContactApi::new(base_url, "demo"));
    store.state.send_modify(|state| {
        state.contacts = vec![Contact {
            id: ContactId(9),
            name: "Stale".to_string(),
            phone: None,
            email: None,
            address: None,
        }]
    });

    store.fetch_all().await;

    assert!(store.snapshot().contacts.is_empty());
}

#[tokio::test]
async fn initialize_fetches_only_once() {
    let service = MockService::spawn().await.expect("mock service");
    let store = service.store();

    store.initialize().await;
    store.initialize().await;

    assert_eq!(service.requests().await.len(), 1);
}

#[tokio::test]
async fn create_posts_draft_and_refetches() {
    let service = MockService::spawn().await.expect("mock service");
    let store = service.store();

    assert!(store.create(&draft("Ana")).await);

    let requests = service.requests().await;
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method, Method::POST);
    assert_eq!(requests[0].path, "/agendas/demo/contacts");
    assert_eq!(
        requests[0].body,
        Some(serde_json::json!({
            "name": "Ana",
            "phone": "555-0100",
            "email": "ana@example.com",
            "address": "1 Main St",
        }))
    );
    assert_eq!(requests[1].method, Method::GET);

    let contacts = store.snapshot().contacts;
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].name, "Ana");
}

#[tokio::test]
async fn update_puts_by_id_and_refetches() {
    let service = MockService::spawn().await.expect("mock service");
    let ana = service.seed("Ana", Some("123")).await;
    let store = service.store();

    assert!(store.update(ana.id, &draft("Ana Maria")).await);

    let requests = service.requests().await;
    assert_eq!(requests[0].method, Method::PUT);
    assert_eq!(requests[0].path, format!("/agendas/demo/contacts/{}", ana.id));
    assert_eq!(store.snapshot().contacts[0].name, "Ana Maria");
}

#[tokio::test]
async fn delete_removes_by_id_and_refetches() {
    let service = MockService::spawn().await.expect("mock service");
    let ana = service.seed("Ana", None).await;
    let bo = service.seed("Bo", None).await;
    let store = service.store();
    store.fetch_all().await;

    assert!(store.delete(ana.id).await);

    assert_eq!(store.snapshot().contacts, vec![bo]);
    assert!(service
        .requests()
        .await
        .iter()
        .any(|r| r.method == Method::DELETE && r.path == "/agendas/demo/contacts/1"));
}

#[tokio::test]
async fn failed_mutations_report_false_without_refetching() {
    let service = MockService::spawn().await.expect("mock service");
    let ana = service.seed("Ana", None).await;
    service.fail_mutations_with(StatusCode::BAD_REQUEST).await;
    let store = service.store();

    assert!(!store.create(&draft("Bo")).await);
    assert!(!store.update(ana.id, &draft("Bo")).await);
    assert!(!store.delete(ana.id).await);

    let requests = service.requests().await;
    assert_eq!(requests.len(), 3);
    assert!(requests.iter().all(|r| r.method != Method::GET));
    assert_eq!(service.contacts().await, vec![ana]);
}

#[tokio::test]
async fn unreachable_service_mutations_report_false() {
    let base_url = unreachable_base_url().await.expect("free port");
    let store = ContactStore::new(HttpContactApi::new(base_url, "demo"));

    assert!(!store.create(&draft("Ana")).await);
    assert!(!store.delete(ContactId(1)).await);
}

#[test]
fn view_transitions_track_edit_and_delete_selection() {
    let store = ContactStore::new(HttpContactApi::new("http://127.0.0.1:1", "demo"));
    let ana = Contact {
        id: ContactId(1),
        name: "Ana".to_string(),
        phone: None,
        email: None,
        address: None,
    };
    let mut rx = store.subscribe();

    store.open_edit_form(ana.clone());
    assert!(rx.has_changed().expect("sender alive"));
    let state = rx.borrow_and_update().clone();
    assert_eq!(state.view, View::Form);
    assert_eq!(state.editing.as_ref(), Some(&ana));

    store.finish_editing();
    let state = store.snapshot();
    assert_eq!(state.view, View::List);
    assert_eq!(state.editing, None);

    store.open_create_form();
    assert_eq!(store.snapshot().view, View::Form);
    assert_eq!(store.snapshot().editing, None);
    store.show_list();
    assert_eq!(store.snapshot().view, View::List);

    store.stage_delete(ana.clone());
    assert_eq!(store.snapshot().delete_target(), Some(&ana));

    store.clear_pending_delete();
    let state = store.snapshot();
    assert_eq!(state.pending_delete, None);
    assert!(!state.delete_modal_open);
    assert_eq!(state.delete_target(), None);
}

#[test]
fn delete_target_requires_both_flag_and_contact() {
    let mut state = StoreState {
        pending_delete: Some(Contact {
            id: ContactId(1),
            name: "Ana".to_string(),
            phone: None,
            email: None,
            address: None,
        }),
        ..StoreState::default()
    };
    assert_eq!(state.delete_target(), None);

    state.delete_modal_open = true;
    assert!(state.delete_target().is_some());

    state.pending_delete = None;
    assert_eq!(state.delete_target(), None);
}
