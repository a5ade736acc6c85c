use std::sync::Arc;

mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use client_core::{load_settings, ContactStore, HttpContactApi, Settings};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};
use crate::controller::reducer::ShellState;
use crate::ui::{DesktopGuiApp, StartupConfig};

#[derive(Parser, Debug)]
#[command(about = "Desktop address book for a remote contact agenda")]
struct Args {
    /// Base URL of the contact service.
    #[arg(long)]
    api_url: Option<String>,
    /// Agenda to read and write.
    #[arg(long)]
    agenda: Option<String>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();

    let mut shell = ShellState::default();
    let settings = match load_settings()
        .with_overrides(args.api_url, args.agenda)
        .validate()
    {
        Ok(settings) => settings,
        Err(err) => {
            tracing::error!("invalid settings, falling back to defaults: {err:#}");
            shell.show_error(&UiError::from_message(
                UiErrorContext::Configuration,
                format!("{err:#}; using the default contact service"),
            ));
            Settings::default()
        }
    };
    tracing::info!(
        api_base_url = %settings.api_base_url,
        agenda = %settings.agenda,
        "starting contacts desktop app"
    );

    let store = Arc::new(ContactStore::new(HttpContactApi::from_settings(&settings)));
    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(1024);
    backend_bridge::runtime::launch(store.clone(), cmd_rx, ui_tx);

    let startup = StartupConfig {
        api_base_url: settings.api_base_url,
        agenda: settings.agenda,
    };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Contacts")
            .with_inner_size([760.0, 720.0])
            .with_min_inner_size([480.0, 420.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Contacts",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(DesktopGuiApp::bootstrap(
                store, cmd_tx, ui_rx, startup, shell,
            )))
        }),
    )
}
