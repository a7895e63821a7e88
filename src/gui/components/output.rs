// src/gui/components/output.rs
//
// Read-only, selectable text block for extracted lines.

use eframe::egui;

pub fn draw(ui: &mut egui::Ui, id: &str, lines: &[String]) {
    let joined = lines.join("\n");
    let mut text: &str = &joined;
    let avail_h = ui.available_height();
    egui::ScrollArea::vertical()
        .id_salt(id)
        .max_height(avail_h)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::multiline(&mut text)
                    .desired_width(f32::INFINITY)
                    .desired_rows(12),
            );
        });
}
