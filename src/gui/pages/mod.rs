// src/gui/pages/mod.rs
use eframe::egui;

use crate::config::options::PageKind;
use super::app::App;

pub mod encounters;
pub mod initiative;
pub mod links;
pub mod spells;
pub mod treasure;

/// One tab. Pages hold no state of their own; everything lives on `App`.
pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;
    fn kind(&self) -> PageKind;

    /// Draw the tab body. Button handlers call straight into `App` actions.
    fn draw(&self, ui: &mut egui::Ui, app: &mut App);
}
