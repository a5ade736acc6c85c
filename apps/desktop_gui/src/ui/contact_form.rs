use client_core::ContactForm;
use eframe::egui;

use crate::ui::widgets;

pub enum FormAction {
    Submit,
    Cancel,
}

pub fn show(ui: &mut egui::Ui, form: &mut ContactForm) -> Option<FormAction> {
    let mut action = None;

    ui.vertical_centered(|ui| {
        ui.set_max_width(420.0);

        ui.horizontal(|ui| {
            if ui
                .add(widgets::icon_btn("⬅", ui.visuals().text_color()))
                .on_hover_text("Back to contacts")
                .clicked()
            {
                action = Some(FormAction::Cancel);
            }
            ui.heading(egui::RichText::new(form.title()).strong().size(24.0));
        });
        ui.add_space(12.0);

        ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
            ui.style_mut().spacing.item_spacing = egui::vec2(8.0, 6.0);
            let draft = form.draft_mut();
            let name = widgets::labeled_text_field(
                ui,
                "contact_form_name",
                "Full Name",
                "Enter full name",
                &mut draft.name,
            );
            widgets::labeled_text_field(
                ui,
                "contact_form_email",
                "Email",
                "Enter email",
                &mut draft.email,
            );
            widgets::labeled_text_field(
                ui,
                "contact_form_phone",
                "Phone",
                "Enter phone number",
                &mut draft.phone,
            );
            let address = widgets::labeled_text_field(
                ui,
                "contact_form_address",
                "Address",
                "Enter address",
                &mut draft.address,
            );

            let enter_pressed = ui.input(|i| i.key_pressed(egui::Key::Enter));
            if enter_pressed && (name.lost_focus() || address.lost_focus()) {
                action = Some(FormAction::Submit);
            }
        });

        ui.add_space(16.0);
        ui.columns(2, |columns| {
            let submit = widgets::filled_btn(form.submit_label(), widgets::ACCENT_BLUE)
                .min_size(egui::vec2(columns[0].available_width(), 36.0));
            if columns[0].add(submit).clicked() {
                action = Some(FormAction::Submit);
            }
            let cancel = egui::Button::new("Cancel")
                .min_size(egui::vec2(columns[1].available_width(), 36.0));
            if columns[1].add(cancel).clicked() {
                action = Some(FormAction::Cancel);
            }
        });
    });

    action
}
