// src/gui/components/data_table.rs
//
// Plain striped table: fixed headers, string cells, no sorting or drag.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

pub fn draw(ui: &mut egui::Ui, id: &str, headers: &[&str], rows: &[Vec<String>]) {
    let mut table = TableBuilder::new(ui)
        .id_salt(id)
        .striped(true)
        .min_scrolled_height(0.0);
    for (ci, _) in headers.iter().enumerate() {
        let col = if ci == 0 {
            Column::initial(200.0).resizable(true).clip(true).at_least(60.0)
        } else {
            Column::initial(80.0).resizable(true).at_least(30.0)
        };
        table = table.column(col);
    }

    table
        .header(22.0, |mut header| {
            for h in headers {
                header.col(|ui| {
                    ui.label(RichText::new(*h).strong());
                });
            }
        })
        .body(|mut body| {
            for r in rows {
                body.row(20.0, |mut row| {
                    for cell in r {
                        row.col(|ui| {
                            ui.label(cell);
                        });
                    }
                });
            }
        });
}
