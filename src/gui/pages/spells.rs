// src/gui/pages/spells.rs
use eframe::egui;

use crate::config::options::PageKind;
use crate::gui::{app::App, components::{notice, output}};

pub struct SpellsPage;
pub static PAGE: SpellsPage = SpellsPage;

impl super::Page for SpellsPage {
    fn title(&self) -> &'static str { "Spell Search" }
    fn kind(&self) -> PageKind { PageKind::Spells }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.heading("Spell Search");
        notice::draw_all(ui, app.spells.notices());

        match &app.spell_heading {
            Some(name) => {
                ui.label(egui::RichText::new(format!("Spell Details: {name}")).strong());
                output::draw(ui, "spell_output", app.spells.output());
            }
            None => {
                ui.label("Type a spell name in the side panel and press Search Spell.");
            }
        }
    }
}
