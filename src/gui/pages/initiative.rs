// src/gui/pages/initiative.rs
use eframe::egui;

use crate::config::options::PageKind;
use crate::gui::{app::App, components::{data_table, notice}};

pub struct InitiativePage;
pub static PAGE: InitiativePage = InitiativePage;

const HEADERS: [&str; 3] = ["Name", "Initiative", "AC"];

impl super::Page for InitiativePage {
    fn title(&self) -> &'static str { "Initiative Tracker" }
    fn kind(&self) -> PageKind { PageKind::Initiative }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.heading("Initiative Tracker");

        let mut submit = false;
        ui.horizontal(|ui| {
            let gui = &mut app.state.gui;
            ui.label("Name");
            let resp = ui.add(egui::TextEdit::singleline(&mut gui.turn_name).desired_width(160.0));
            submit |= resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            ui.label("Initiative");
            ui.add(egui::DragValue::new(&mut gui.turn_initiative));
            ui.label("AC");
            ui.add(egui::DragValue::new(&mut gui.turn_ac));
            submit |= ui.button("Submit").clicked();
        });
        if submit {
            app.submit_turn();
        }

        if let Some(n) = &app.turn_notice {
            notice::draw(ui, n);
        }

        ui.separator();

        if app.turns.is_empty() {
            ui.label("No combatants yet.");
        } else {
            let rows: Vec<Vec<String>> = app
                .turns
                .all()
                .iter()
                .map(|e| vec![e.name.clone(), e.initiative.to_string(), e.armor_class.to_string()])
                .collect();
            data_table::draw(ui, "turn_order", &HEADERS, &rows);
        }

        ui.add_space(6.0);
        if ui.button("Reorder in Descending Order").clicked() {
            app.reorder_turns();
        }
    }
}
