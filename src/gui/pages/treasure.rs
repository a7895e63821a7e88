// src/gui/pages/treasure.rs
use eframe::egui;

use crate::config::{consts::TREASURE_ROWS, options::PageKind};
use crate::controller::Notice;
use crate::gui::{app::App, components::notice};

pub struct TreasurePage;
pub static PAGE: TreasurePage = TreasurePage;

impl super::Page for TreasurePage {
    fn title(&self) -> &'static str { "Treasure Hoard" }
    fn kind(&self) -> PageKind { PageKind::Treasure }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.heading("Treasure Hoard");

        if let Some(e) = &app.load_error {
            notice::draw(ui, &Notice::Warning(e.clone()));
        }

        let mut submit = false;
        ui.horizontal(|ui| {
            ui.label(format!("Enter a number between 1 and {TREASURE_ROWS}:"));
            ui.add(egui::DragValue::new(&mut app.state.gui.treasure_row).range(1..=TREASURE_ROWS));
            submit = ui.button("Submit").clicked();
        });
        if submit {
            app.roll_treasure();
        }

        if let Some(n) = &app.treasure_notice {
            notice::draw(ui, n);
        }

        let Some(row) = app.treasure_row.and_then(|i| app.table.get(i).ok()) else {
            return;
        };

        ui.separator();
        ui.label(egui::RichText::new(format!("Selected Row Number: {}", row.index)).strong());
        egui::Grid::new("treasure_row").num_columns(2).striped(true).show(ui, |ui| {
            for (col, val) in row.iter() {
                ui.label(egui::RichText::new(format!("{col}:")).strong());
                ui.label(val);
                ui.end_row();
            }
        });
    }
}
