//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::{confirm, form, ContactApi, ContactStore};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

/// Runs backend commands on a dedicated tokio runtime thread.
///
/// Every command becomes its own task, so a slow call never holds up the next
/// one and overlapping mutations race on the store.
pub fn launch<A>(
    store: Arc<ContactStore<A>>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) where
    A: ContactApi + 'static,
{
    thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker starting...".to_string()));
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));

        while let Ok(cmd) = cmd_rx.recv() {
            let store = store.clone();
            let ui_tx = ui_tx.clone();
            runtime.spawn(async move {
                handle_command(&store, cmd, &ui_tx).await;
            });
        }
        tracing::debug!("ui command queue closed; stopping backend worker");
    });
}

pub(crate) async fn handle_command<A: ContactApi>(
    store: &ContactStore<A>,
    cmd: BackendCommand,
    ui_tx: &Sender<UiEvent>,
) {
    let cmd_name = cmd.name();
    tracing::debug!(command = cmd_name, "running backend command");
    let event = match cmd {
        BackendCommand::Initialize => {
            store.initialize().await;
            UiEvent::Info(loaded_status(store))
        }
        BackendCommand::Refresh => {
            store.fetch_all().await;
            UiEvent::Info(loaded_status(store))
        }
        BackendCommand::SubmitForm { editing, draft } => {
            UiEvent::FormSubmitted(form::submit(store, editing, &draft).await)
        }
        BackendCommand::ConfirmDelete => UiEvent::DeleteFinished(confirm::confirm(store).await),
    };
    if ui_tx.try_send(event).is_err() {
        tracing::warn!(command = cmd_name, "dropped backend result; ui event queue unavailable");
    }
}

fn loaded_status<A: ContactApi>(store: &ContactStore<A>) -> String {
    match store.snapshot().contacts.len() {
        1 => "Loaded 1 contact".to_string(),
        count => format!("Loaded {count} contacts"),
    }
}
