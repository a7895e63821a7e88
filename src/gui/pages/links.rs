// src/gui/pages/links.rs
use eframe::egui;

use crate::config::{
    consts::{CONDITIONS, DM_LINKS, SPELLS_FILTER},
    options::PageKind,
};
use crate::gui::{app::App, components::{notice, output}};

pub struct LinksPage;
pub static PAGE: LinksPage = LinksPage;

impl super::Page for LinksPage {
    fn title(&self) -> &'static str { "Links" }
    fn kind(&self) -> PageKind { PageKind::Links }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.heading("Conditions");

        let mut search = false;
        ui.horizontal(|ui| {
            let idx = &mut app.state.gui.condition_index;
            let current = CONDITIONS.get(*idx).copied().unwrap_or(CONDITIONS[0]);
            egui::ComboBox::from_id_salt("condition_select")
                .selected_text(current)
                .width(180.0)
                .show_ui(ui, |ui| {
                    for (i, name) in CONDITIONS.iter().enumerate() {
                        ui.selectable_value(idx, i, *name);
                    }
                });
            search = ui.button("Search Condition").clicked();
        });
        if search {
            app.search_condition();
        }

        notice::draw_all(ui, app.conditions.notices());
        if let Some(name) = app.condition_heading {
            ui.label(egui::RichText::new(format!("Condition: {name}")).strong());
            output::draw(ui, "condition_output", app.conditions.output());
        }

        ui.separator();
        ui.heading("Useful Links for DMs");
        for (label, url) in DM_LINKS {
            ui.hyperlink_to(label, url);
        }

        ui.add_space(8.0);
        ui.label(egui::RichText::new("Resources").strong());
        let (label, url) = SPELLS_FILTER;
        ui.hyperlink_to(label, url);
    }
}
