// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    config::{
        consts::APP_TITLE,
        options::{EncounterSource, PageKind},
        state::AppState,
    },
    controller::{Notice, ViewController},
    core::{Fetcher, HttpFetcher},
    error::InputError,
    initiative::{TurnEntry, TurnOrder},
    reference::{self, ReferenceTable},
    specs::{conditions, encounters, spells},
};

use super::{
    components,
    pages::Page,
    router,
};

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth for widget values (UI thread only)
    pub state: AppState,

    pub fetcher: Box<dyn Fetcher>,

    // one controller per fetching tab
    pub spells: ViewController,
    pub encounters: ViewController,
    pub conditions: ViewController,

    // headings for what is currently shown
    pub spell_heading: Option<String>,
    pub encounter_heading: Option<EncounterSource>,
    pub condition_heading: Option<&'static str>,

    pub turns: TurnOrder,
    pub turn_notice: Option<Notice>,

    // loaded once at startup, never reloaded
    pub table: ReferenceTable,
    pub load_error: Option<String>,
    pub treasure_row: Option<usize>,
    pub treasure_notice: Option<Notice>,

    pub status: String,
}

impl App {
    pub fn new(state: AppState) -> Self {
        Self::with_fetcher(state, Box::new(HttpFetcher::new()))
    }

    pub fn with_fetcher(state: AppState, fetcher: Box<dyn Fetcher>) -> Self {
        let (table, err) = reference::load_or_empty(&state.options.dataset_path);
        let load_error = err.map(|e| e.to_string());

        let status = match &load_error {
            Some(e) => format!("Warning: {e}"),
            None => s!("Ready"),
        };

        logf!("Init: reference rows={}, default page={:?}", table.len(), router::PAGES[0].kind());

        Self {
            state,
            fetcher,
            spells: ViewController::new(),
            encounters: ViewController::new(),
            conditions: ViewController::new(),
            spell_heading: None,
            encounter_heading: None,
            condition_heading: None,
            turns: TurnOrder::new(),
            turn_notice: None,
            table,
            load_error,
            treasure_row: None,
            treasure_notice: None,
            status,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page {
        let pages = router::all_pages();
        pages.get(self.current_index()).copied().unwrap_or(pages[0])
    }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { self.current_page().kind() }

    pub fn show_page(&mut self, kind: PageKind) {
        if self.current_page_kind() != kind {
            logd!("UI: Tab switch {:?} → {:?}", self.current_page_kind(), kind);
            self.set_current_index(router::index_of(kind));
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /* ---------- actions ---------- */

    /// Side panel "Search Spell". Always lands on the Spell tab.
    pub fn search_spell(&mut self) {
        self.show_page(PageKind::Spells);
        let name = s!(self.state.gui.spell_input.trim());
        match spells::request(&name) {
            Ok(req) => {
                self.spells.submit(self.fetcher.as_ref(), req);
                if !has_error(&self.spells) {
                    self.spell_heading = Some(name.clone());
                }
                let msg = summary(&self.spells, format!("Spell: {name}"));
                self.status(msg);
            }
            Err(e) => {
                self.spells.reject(e.to_string());
                self.status(e.to_string());
            }
        }
    }

    pub fn fetch_encounter(&mut self, source: EncounterSource) {
        self.encounters.submit(self.fetcher.as_ref(), encounters::request(source));
        if !has_error(&self.encounters) {
            self.encounter_heading = Some(source);
        }
        let msg = summary(&self.encounters, s!(source.label()));
        self.status(msg);
    }

    pub fn search_condition(&mut self) {
        let Some(&name) = crate::config::consts::CONDITIONS.get(self.state.gui.condition_index) else {
            return;
        };
        match conditions::request(name) {
            Ok(req) => {
                self.conditions.submit(self.fetcher.as_ref(), req);
                if !has_error(&self.conditions) {
                    self.condition_heading = Some(name);
                }
                let msg = summary(&self.conditions, format!("Condition: {name}"));
                self.status(msg);
            }
            Err(e) => {
                self.conditions.reject(e.to_string());
                self.status(e.to_string());
            }
        }
    }

    /// Add from the input row, then re-sort.
    pub fn submit_turn(&mut self) {
        let name = self.state.gui.turn_name.trim();
        if name.is_empty() {
            self.turn_notice = Some(Notice::Warning(InputError::EmptyName.to_string()));
            return;
        }
        let entry = TurnEntry::new(name, self.state.gui.turn_initiative, self.state.gui.turn_ac);
        let msg = format!("Added {} (initiative {})", entry.name, entry.initiative);
        self.turns.add(entry);
        self.turns.sort_descending_by_initiative();
        self.state.gui.turn_name.clear();
        self.turn_notice = None;
        self.status(msg);
    }

    pub fn reorder_turns(&mut self) {
        self.turns.sort_descending_by_initiative();
        self.turn_notice = Some(Notice::Info(s!("Reordered by initiative.")));
    }

    /// Out-of-range rows keep whatever was selected before.
    pub fn roll_treasure(&mut self) {
        let row = self.state.gui.treasure_row;
        match self.table.get(row) {
            Ok(_) => {
                self.treasure_row = Some(row);
                self.treasure_notice = None;
                self.status(format!("Treasure row {row}"));
            }
            Err(e) => {
                logw!("Treasure: {e}");
                let msg = match &self.load_error {
                    Some(load) if self.table.is_empty() => format!("{e} ({load})"),
                    _ => e.to_string(),
                };
                self.treasure_notice = Some(Notice::Error(msg.clone()));
                self.status(msg);
            }
        }
    }
}

fn has_error(vc: &ViewController) -> bool {
    vc.notices().iter().any(Notice::is_error)
}

// First error wins; otherwise the caller's summary.
fn summary(vc: &ViewController, done: String) -> String {
    vc.notices()
        .iter()
        .find(|n| n.is_error())
        .map(|n| s!(n.text()))
        .unwrap_or(done)
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(&self.status);
        });

        egui::SidePanel::left("spell_search")
            .resizable(false)
            .default_width(220.0)
            .show(ctx, |ui| {
                components::side_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::tabs::draw(ui, self);

            ui.separator();

            let page = self.current_page();
            page.draw(ui, self);
        });
    }
}
