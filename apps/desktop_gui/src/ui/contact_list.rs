//! Contact list: header, empty state, and one card per contact.

use eframe::egui;
use shared::domain::Contact;

use crate::ui::widgets;

pub const EMPTY_STATE_MESSAGE: &str = "No contacts yet. Add your first contact!";

pub enum ListAction {
    AddNew,
    Refresh,
    Edit(Contact),
    Delete(Contact),
}

#[derive(Debug, PartialEq, Eq)]
pub struct ContactCard<'a> {
    pub contact: &'a Contact,
    pub details: [(&'static str, &'a str); 3],
}

impl<'a> ContactCard<'a> {
    fn new(contact: &'a Contact) -> Self {
        Self {
            contact,
            details: [
                ("📍", contact.address_text()),
                ("📞", contact.phone_text()),
                ("✉", contact.email_text()),
            ],
        }
    }

    pub fn name(&self) -> &'a str {
        &self.contact.name
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ListBody<'a> {
    Empty(&'static str),
    Cards(Vec<ContactCard<'a>>),
}

pub fn list_body(contacts: &[Contact]) -> ListBody<'_> {
    if contacts.is_empty() {
        ListBody::Empty(EMPTY_STATE_MESSAGE)
    } else {
        ListBody::Cards(contacts.iter().map(ContactCard::new).collect())
    }
}

pub fn show(ui: &mut egui::Ui, contacts: &[Contact]) -> Option<ListAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        ui.heading(egui::RichText::new("Contacts").strong().size(26.0));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let add = egui::Button::new(
                egui::RichText::new("➕ Add new contact").color(egui::Color32::WHITE),
            )
            .fill(widgets::ACCENT_GREEN)
            .min_size(egui::vec2(0.0, 32.0));
            if ui.add(add).clicked() {
                action = Some(ListAction::AddNew);
            }
            if ui.button("⟳ Refresh").clicked() {
                action = Some(ListAction::Refresh);
            }
        });
    });
    ui.add_space(12.0);

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| match list_body(contacts) {
            ListBody::Empty(message) => {
                ui.add_space(32.0);
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(message).weak());
                });
            }
            ListBody::Cards(cards) => {
                for card in cards {
                    if let Some(card_action) = show_card(ui, &card) {
                        action = Some(card_action);
                    }
                    ui.add_space(10.0);
                }
            }
        });

    action
}

fn show_card(ui: &mut egui::Ui, card: &ContactCard<'_>) -> Option<ListAction> {
    let mut action = None;
    egui::Frame::NONE
        .fill(ui.visuals().extreme_bg_color)
        .stroke(egui::Stroke::new(
            1.0,
            ui.visuals().widgets.noninteractive.bg_stroke.color,
        ))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(14, 12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                widgets::avatar(ui, 32.0);
                ui.add_space(8.0);
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(card.name()).strong().size(18.0));
                    for (icon, text) in card.details {
                        ui.horizontal(|ui| {
                            ui.label(egui::RichText::new(icon).weak());
                            ui.label(egui::RichText::new(text).weak());
                        });
                    }
                });
                let text_color = ui.visuals().text_color();
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .add(widgets::icon_btn("🗑", widgets::DANGER_RED))
                        .on_hover_text("Delete contact")
                        .clicked()
                    {
                        action = Some(ListAction::Delete(card.contact.clone()));
                    }
                    if ui
                        .add(widgets::icon_btn("✏", text_color))
                        .on_hover_text("Edit contact")
                        .clicked()
                    {
                        action = Some(ListAction::Edit(card.contact.clone()));
                    }
                });
            });
        });
    action
}
