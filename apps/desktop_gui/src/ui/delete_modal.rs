use client_core::{confirm, StoreState};
use eframe::egui;

use crate::ui::widgets;

pub enum DeleteAction {
    Confirm,
    Cancel,
}

/// Draws nothing unless a contact is staged and the modal flag is set.
pub fn show(ctx: &egui::Context, state: &StoreState) -> Option<DeleteAction> {
    let target = state.delete_target()?;

    let mut action = None;
    let response = egui::Modal::new(egui::Id::new("contacts_delete_confirmation")).show(ctx, |ui| {
        ui.set_max_width(360.0);
        ui.label(egui::RichText::new("Delete Contact").strong().size(18.0));
        ui.add_space(8.0);
        ui.label(confirm::prompt(&target.name));
        ui.add_space(16.0);
        ui.columns(2, |columns| {
            let delete = widgets::filled_btn("Delete", widgets::DANGER_RED)
                .min_size(egui::vec2(columns[0].available_width(), 34.0));
            if columns[0].add(delete).clicked() {
                action = Some(DeleteAction::Confirm);
            }
            let cancel = egui::Button::new("Cancel")
                .min_size(egui::vec2(columns[1].available_width(), 34.0));
            if columns[1].add(cancel).clicked() {
                action = Some(DeleteAction::Cancel);
            }
        });
    });

    if action.is_none() && response.should_close() {
        action = Some(DeleteAction::Cancel);
    }
    action
}
