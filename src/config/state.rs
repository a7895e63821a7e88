// src/config/state.rs
use super::options::AppOptions;

/// Raw widget values. Nothing here outlives the process.
#[derive(Clone, Debug)]
pub struct GuiState {
    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    /// Side panel spell search box
    pub spell_input: String,

    /// Initiative tracker inputs
    pub turn_name: String,
    pub turn_initiative: i32,
    pub turn_ac: i32,

    /// Treasure hoard row (1-based)
    pub treasure_row: usize,

    /// Index into consts::CONDITIONS
    pub condition_index: usize,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            current_page_index: 0,
            spell_input: s!(),
            turn_name: s!(),
            turn_initiative: 0,
            turn_ac: 0,
            treasure_row: 1,
            condition_index: 0,
            window_w: 1100,
            window_h: 700,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
