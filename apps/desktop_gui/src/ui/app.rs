use std::sync::Arc;

use client_core::{confirm, ContactApi, ContactForm, ContactStore, StoreState, View};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use tokio::sync::watch;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::{dispatch_backend_command, submit_form};
use crate::controller::reducer::ShellState;
use crate::ui::{
    contact_form::{self, FormAction},
    contact_list::{self, ListAction},
    delete_modal::{self, DeleteAction},
    widgets,
};

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub api_base_url: String,
    pub agenda: String,
}

pub struct DesktopGuiApp<A: ContactApi> {
    store: Arc<ContactStore<A>>,
    state_rx: watch::Receiver<StoreState>,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    startup: StartupConfig,

    shell: ShellState,
    // Exists only while the form view is showing; dropped on return to the list.
    form: Option<ContactForm>,
}

impl<A: ContactApi> DesktopGuiApp<A> {
    pub fn bootstrap(
        store: Arc<ContactStore<A>>,
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        startup: StartupConfig,
        shell: ShellState,
    ) -> Self {
        let mut app = Self {
            state_rx: store.subscribe(),
            store,
            cmd_tx,
            ui_rx,
            startup,
            shell,
            form: None,
        };
        app.dispatch(BackendCommand::Initialize);
        app
    }

    fn dispatch(&mut self, cmd: BackendCommand) {
        dispatch_backend_command(&self.cmd_tx, cmd, &mut self.shell.status);
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.shell.apply(event);
        }
    }

    fn sync_form(&mut self, state: &StoreState) {
        if state.view == View::List {
            self.form = None;
        } else if let Some(form) = self.form.as_mut() {
            form.sync_with(state);
        } else {
            self.form = Some(ContactForm::from_state(state));
        }
    }

    fn handle_list_action(&mut self, action: ListAction) {
        match action {
            ListAction::AddNew => self.store.open_create_form(),
            ListAction::Refresh => self.dispatch(BackendCommand::Refresh),
            ListAction::Edit(contact) => self.store.open_edit_form(contact),
            ListAction::Delete(contact) => self.store.stage_delete(contact),
        }
    }

    fn handle_form_action(&mut self, action: FormAction) {
        match action {
            FormAction::Submit => {
                if let Some(form) = &self.form {
                    submit_form(&self.cmd_tx, form, &mut self.shell);
                }
            }
            FormAction::Cancel => {
                self.form = None;
                client_core::form::cancel(&self.store);
            }
        }
    }

    fn handle_delete_action(&mut self, action: DeleteAction) {
        match action {
            DeleteAction::Confirm => self.dispatch(BackendCommand::ConfirmDelete),
            DeleteAction::Cancel => confirm::cancel(&self.store),
        }
    }

    fn show_footer(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("contacts_status_bar").show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.small("Status:");
                ui.small(egui::RichText::new(&self.shell.status).weak());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.small(
                        egui::RichText::new(format!(
                            "agenda '{}' @ {}",
                            self.startup.agenda, self.startup.api_base_url
                        ))
                        .weak(),
                    );
                });
            });
        });
    }
}

impl<A: ContactApi + 'static> eframe::App for DesktopGuiApp<A> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        let state = self.state_rx.borrow_and_update().clone();
        self.sync_form(&state);

        self.show_footer(ctx);

        let mut list_action = None;
        let mut form_action = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            widgets::show_status_banner(ui, &mut self.shell);
            ui.vertical_centered(|ui| {
                ui.set_max_width(720.0);
                ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                    match (state.view, self.form.as_mut()) {
                        (View::Form, Some(form)) => {
                            form_action = contact_form::show(ui, form);
                        }
                        _ => {
                            list_action = contact_list::show(ui, &state.contacts);
                        }
                    }
                });
            });
        });

        if let Some(action) = delete_modal::show(ctx, &state) {
            self.handle_delete_action(action);
        }
        widgets::show_alert(ctx, &mut self.shell);

        if let Some(action) = list_action {
            self.handle_list_action(action);
        }
        if let Some(action) = form_action {
            self.handle_form_action(action);
        }

        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
