//! UI layer for desktop GUI: app shell, views, and shared widgets.

pub mod app;
pub mod contact_form;
pub mod contact_list;
pub mod delete_modal;
pub mod widgets;

pub use app::{DesktopGuiApp, StartupConfig};
