//! Command orchestration helpers from UI actions to backend command queue.

use client_core::{ContactForm, SubmitOutcome};
use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::reducer::ShellState;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->backend command"),
        Err(TrySendError::Full(_)) => {
            *status = "UI command queue is full; please retry".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            *status =
                "Backend command processor disconnected (possible startup/runtime failure); restart the app"
                    .to_string();
        }
    }
}

/// Blank names are rejected here with an alert; nothing is queued for them.
pub fn submit_form(cmd_tx: &Sender<BackendCommand>, form: &ContactForm, shell: &mut ShellState) {
    if let Err(err) = form.validate() {
        if let Some(alert) = SubmitOutcome::Rejected(err).alert_message() {
            shell.raise_alert(alert);
        }
        return;
    }

    dispatch_backend_command(
        cmd_tx,
        BackendCommand::SubmitForm {
            editing: form.editing_id(),
            draft: form.draft().clone(),
        },
        &mut shell.status,
    );
}
