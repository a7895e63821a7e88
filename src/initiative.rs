// src/initiative.rs
//
// Turn order for the current session. Append, re-sort, read. No removal.

use std::fmt;
use std::str::FromStr;

use crate::error::InputError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnEntry {
    pub name: String,
    pub initiative: i32,
    pub armor_class: i32,
}

impl TurnEntry {
    pub fn new(name: impl Into<String>, initiative: i32, armor_class: i32) -> Self {
        Self { name: name.into(), initiative, armor_class }
    }
}

impl fmt::Display for TurnEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.name, self.initiative, self.armor_class)
    }
}

/// `NAME:INITIATIVE:AC`. The last two fields are split off from the right,
/// so a name may itself contain `:`.
impl FromStr for TurnEntry {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || InputError::BadTurnEntry(s!(s));
        let mut parts = s.rsplitn(3, ':');
        let ac = parts.next().ok_or_else(bad)?.trim().parse::<i32>().map_err(|_| bad())?;
        let init = parts.next().ok_or_else(bad)?.trim().parse::<i32>().map_err(|_| bad())?;
        let name = parts.next().ok_or_else(bad)?.trim();
        if name.is_empty() {
            return Err(InputError::EmptyName);
        }
        Ok(TurnEntry::new(name, init, ac))
    }
}

#[derive(Clone, Debug, Default)]
pub struct TurnOrder {
    entries: Vec<TurnEntry>,
}

impl TurnOrder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entry: TurnEntry) {
        logd!("Initiative: add {entry}");
        self.entries.push(entry);
    }

    /// Highest initiative first. Stable, so ties keep their current order.
    pub fn sort_descending_by_initiative(&mut self) {
        self.entries.sort_by(|a, b| b.initiative.cmp(&a.initiative));
    }

    pub fn all(&self) -> &[TurnEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_entry_text() {
        assert_eq!("Goblin:12:15".parse::<TurnEntry>(), Ok(TurnEntry::new("Goblin", 12, 15)));
        assert_eq!(" Sir: Ector : -1 : 18".parse::<TurnEntry>(), Ok(TurnEntry::new("Sir: Ector", -1, 18)));
    }

    #[test]
    fn rejects_bad_entry_text() {
        assert!(matches!("Goblin:12".parse::<TurnEntry>(), Err(InputError::BadTurnEntry(_))));
        assert!(matches!("Goblin:x:15".parse::<TurnEntry>(), Err(InputError::BadTurnEntry(_))));
        assert_eq!(" :12:15".parse::<TurnEntry>(), Err(InputError::EmptyName));
    }
}
