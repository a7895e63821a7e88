// src/gui/components/side_panel.rs
use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Spell Search");
    ui.add_space(4.0);

    let resp = ui.add(
        egui::TextEdit::singleline(&mut app.state.gui.spell_input)
            .hint_text("Spell name")
            .desired_width(f32::INFINITY),
    );
    let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

    if ui.button("Search Spell").clicked() || enter {
        app.search_spell();
    }
}
