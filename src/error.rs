// src/error.rs
use std::error::Error as StdError;
use std::path::PathBuf;

use thiserror::Error;

/// Failure half of a page fetch. Success is the raw body.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {status} from {url}")]
    Http { url: String, status: u16 },

    #[error("network error for {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reference table not found: {}", path.display())]
    Missing { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("row {index} is out of bounds (1..={count})")]
pub struct RangeError {
    pub index: usize,
    pub count: usize,
}

/// Rejected user input; nothing was fetched or changed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter a spell name.")]
    EmptySpell,

    #[error("Please enter a name.")]
    EmptyName,

    #[error("unknown condition: {0}")]
    UnknownCondition(String),

    #[error("expected NAME:INITIATIVE:AC, got {0:?}")]
    BadTurnEntry(String),

    #[error("could not build a URL for {0:?}")]
    Url(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,

    #[error("unexpected {found:?} at offset {pos}")]
    Unexpected { found: char, pos: usize },

    #[error("selector ends with a combinator")]
    DanglingCombinator,
}
