//! Shell-level state driven by backend events: status line, banner, and alerts.

use std::collections::VecDeque;

use crate::controller::events::{err_label, UiError, UiEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBannerSeverity {
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBanner {
    pub severity: StatusBannerSeverity,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct ShellState {
    pub status: String,
    pub status_banner: Option<StatusBanner>,
    alerts: VecDeque<String>,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            status: "Starting".to_string(),
            status_banner: None,
            alerts: VecDeque::new(),
        }
    }
}

impl ShellState {
    pub fn apply(&mut self, event: UiEvent) {
        match event {
            UiEvent::Info(message) => {
                self.status = message;
            }
            UiEvent::Error(err) => self.show_error(&err),
            UiEvent::FormSubmitted(outcome) => match outcome.alert_message() {
                Some(alert) => self.raise_alert(alert),
                None => self.status = "Contact saved".to_string(),
            },
            UiEvent::DeleteFinished(outcome) => match outcome.alert_message() {
                Some(alert) => self.raise_alert(alert),
                None => {
                    if outcome == client_core::DeleteOutcome::Deleted {
                        self.status = "Contact deleted".to_string();
                    }
                }
            },
        }
    }

    pub fn show_error(&mut self, err: &UiError) {
        tracing::warn!(context = ?err.context(), "{}", err.message());
        self.status = format!("{} error: {}", err_label(err.category()), err.message());
        self.status_banner = Some(StatusBanner {
            severity: StatusBannerSeverity::Error,
            message: err.message().to_string(),
        });
    }

    pub fn dismiss_banner(&mut self) {
        self.status_banner = None;
    }

    pub fn raise_alert(&mut self, message: impl Into<String>) {
        self.alerts.push_back(message.into());
    }

    /// The alert currently blocking the window.
    pub fn current_alert(&self) -> Option<&str> {
        self.alerts.front().map(String::as_str)
    }

    pub fn acknowledge_alert(&mut self) {
        self.alerts.pop_front();
    }

    pub fn pending_alerts(&self) -> usize {
        self.alerts.len()
    }
}
