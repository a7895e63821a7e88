// src/config/options.rs
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub dataset_path: PathBuf,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self { dataset_path: PathBuf::from(DEFAULT_DATASET) }
    }
}

impl AppOptions {
    /// Defaults, with the dataset path taken from `DM_SCREEN_DATA` when set.
    pub fn from_env() -> Self {
        match std::env::var_os(DATA_ENV) {
            Some(p) if !p.is_empty() => Self { dataset_path: PathBuf::from(p) },
            _ => Self::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Spells,
    Initiative,
    Encounters,
    Treasure,
    Links,
}

/// One button on the Encounters tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EncounterSource {
    Dungeon,
    City,
    Grassland,
    Forest,
    Backstory,
}

impl EncounterSource {
    pub const ALL: [EncounterSource; 5] = [
        EncounterSource::Dungeon,
        EncounterSource::City,
        EncounterSource::Grassland,
        EncounterSource::Forest,
        EncounterSource::Backstory,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EncounterSource::Dungeon => "Dungeon Encounters",
            EncounterSource::City => "City Encounters",
            EncounterSource::Grassland => "Grassland Encounters",
            EncounterSource::Forest => "Forest Encounters",
            EncounterSource::Backstory => "Townsfolk Backstories",
        }
    }

    /// Path segment on the encounter site; `None` for the backstory generator.
    pub fn slug(self) -> Option<&'static str> {
        match self {
            EncounterSource::Dungeon => Some("dungeon"),
            EncounterSource::City => Some("city"),
            EncounterSource::Grassland => Some("grassland"),
            EncounterSource::Forest => Some("forest"),
            EncounterSource::Backstory => None,
        }
    }
}

impl fmt::Display for EncounterSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug().unwrap_or("backstory"))
    }
}

impl FromStr for EncounterSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let want = s.trim().to_ascii_lowercase();
        EncounterSource::ALL
            .into_iter()
            .find(|src| src.to_string() == want)
            .ok_or_else(|| format!("unknown encounter source: {s} (dungeon|city|grassland|forest|backstory)"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encounter_source_parses_case_insensitively() {
        assert_eq!("Forest".parse::<EncounterSource>(), Ok(EncounterSource::Forest));
        assert_eq!(" backstory ".parse::<EncounterSource>(), Ok(EncounterSource::Backstory));
        assert!("swamp".parse::<EncounterSource>().is_err());
    }

    #[test]
    fn default_dataset_path() {
        assert_eq!(AppOptions::default().dataset_path, PathBuf::from("data/d100s.csv"));
    }
}
