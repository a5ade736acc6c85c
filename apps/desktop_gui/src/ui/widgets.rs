//! Small shared widgets: buttons, avatar, banner, and the blocking alert.

use eframe::egui;

use crate::controller::reducer::{ShellState, StatusBannerSeverity};

pub const ACCENT_GREEN: egui::Color32 = egui::Color32::from_rgb(22, 163, 74);
pub const ACCENT_BLUE: egui::Color32 = egui::Color32::from_rgb(37, 99, 235);
pub const DANGER_RED: egui::Color32 = egui::Color32::from_rgb(220, 38, 38);

pub fn icon_btn(icon: &str, color: egui::Color32) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(icon).color(color).size(16.0))
        .min_size(egui::vec2(28.0, 28.0))
        .stroke(egui::Stroke::NONE)
        .fill(egui::Color32::TRANSPARENT)
}

pub fn filled_btn(label: &str, fill: egui::Color32) -> egui::Button<'static> {
    egui::Button::new(
        egui::RichText::new(label)
            .strong()
            .color(egui::Color32::WHITE),
    )
    .fill(fill)
    .min_size(egui::vec2(0.0, 34.0))
}

pub fn avatar(ui: &mut egui::Ui, radius: f32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(radius * 2.0, radius * 2.0), egui::Sense::hover());
    let painter = ui.painter();
    painter.circle_filled(rect.center(), radius, egui::Color32::from_gray(200));
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "👤",
        egui::FontId::proportional(radius),
        egui::Color32::from_gray(90),
    );
}

/// Labeled single-line input with a stable id so focus survives re-layout.
pub fn labeled_text_field(
    ui: &mut egui::Ui,
    id: &'static str,
    label: &str,
    hint: &str,
    value: &mut String,
) -> egui::Response {
    ui.label(egui::RichText::new(label).strong());
    let edit = egui::TextEdit::singleline(value)
        .id_salt(id)
        .hint_text(
            egui::RichText::new(hint).color(ui.visuals().weak_text_color().gamma_multiply(0.85)),
        )
        .desired_width(f32::INFINITY);
    ui.add_sized([ui.available_width(), 32.0], edit)
}

pub fn show_status_banner(ui: &mut egui::Ui, shell: &mut ShellState) {
    let Some(banner) = shell.status_banner.clone() else {
        return;
    };
    let (fill, stroke) = match banner.severity {
        StatusBannerSeverity::Error => (
            egui::Color32::from_rgb(111, 53, 53),
            egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)),
        ),
    };

    egui::Frame::NONE
        .fill(fill)
        .stroke(stroke)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(10, 8))
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(egui::RichText::new(&banner.message).color(egui::Color32::WHITE));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Dismiss").clicked() {
                        shell.dismiss_banner();
                    }
                });
            });
        });
    ui.add_space(8.0);
}

/// Shows the oldest pending alert as a modal; the rest of the window is blocked until OK.
pub fn show_alert(ctx: &egui::Context, shell: &mut ShellState) {
    let Some(message) = shell.current_alert().map(str::to_string) else {
        return;
    };

    let mut acknowledged = false;
    let response = egui::Modal::new(egui::Id::new("contacts_alert")).show(ctx, |ui| {
        ui.set_max_width(320.0);
        ui.label(egui::RichText::new(&message).size(15.0));
        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            if ui.add(filled_btn("OK", ACCENT_BLUE)).clicked() {
                acknowledged = true;
            }
        });
    });
    if acknowledged || response.should_close() {
        shell.acknowledge_alert();
    }
}
