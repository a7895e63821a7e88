// src/specs/mod.rs
//! # Source specs
//!
//! One module per upstream site. Each knows two things about its page:
//! - how to build the URL from user input
//! - where the readable text lives (anchors or a selector)
//!
//! Nothing here touches the network; `controller::ViewController` runs the
//! request and `extract` reads the body.
//!
//! ## Current specs
//! - `spells` – aidedd.org spell page, sliced from the spell name down.
//! - `encounters` – randomencountersai.com tables and the backstory generator,
//!   each cut between two hard-coded phrases. If upstream rewords them, the
//!   whole page comes back with a warning.
//! - `conditions` – fandom SRD wiki, paragraphs under `.mw-parser-output`.
use crate::extract::ExtractionSpec;

pub mod conditions;
pub mod encounters;
pub mod spells;

/// A ready-to-run lookup: where to GET and how to read the answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    pub url: String,
    pub spec: ExtractionSpec,
}
