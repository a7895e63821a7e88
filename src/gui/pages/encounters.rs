// src/gui/pages/encounters.rs
use eframe::egui;

use crate::config::options::{EncounterSource, PageKind};
use crate::gui::{app::App, components::{notice, output}};

pub struct EncountersPage;
pub static PAGE: EncountersPage = EncountersPage;

impl super::Page for EncountersPage {
    fn title(&self) -> &'static str { "Encounters" }
    fn kind(&self) -> PageKind { PageKind::Encounters }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.heading("Generated Environment Encounters");

        let mut clicked = None;
        ui.horizontal_wrapped(|ui| {
            for src in EncounterSource::ALL {
                if src == EncounterSource::Backstory {
                    ui.separator();
                }
                if ui.button(src.label()).clicked() {
                    clicked = Some(src);
                }
            }
        });
        if let Some(src) = clicked {
            app.fetch_encounter(src);
        }

        ui.separator();
        notice::draw_all(ui, app.encounters.notices());

        if let Some(src) = app.encounter_heading {
            ui.label(egui::RichText::new(src.label()).strong());
            output::draw(ui, "encounter_output", app.encounters.output());
        }
    }
}
