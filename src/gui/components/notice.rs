// src/gui/components/notice.rs
use eframe::egui;
use crate::controller::Notice;

pub fn draw(ui: &mut egui::Ui, notice: &Notice) {
    let visuals = ui.visuals();
    let color = match notice {
        Notice::Info(_) => visuals.text_color(),
        Notice::Warning(_) => visuals.warn_fg_color,
        Notice::Error(_) => visuals.error_fg_color,
    };
    ui.colored_label(color, notice.text());
}

pub fn draw_all(ui: &mut egui::Ui, notices: &[Notice]) {
    for n in notices {
        draw(ui, n);
    }
}
