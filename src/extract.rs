// src/extract.rs
//
// Markup in, readable lines out. Two strategies:
// - anchor slice for prose pages (regex cleanup, then cut between anchors)
// - structural selector for pages with consistent markup
//
// Both are pure. Empty or broken markup gives empty output, never a panic.

use std::fmt;

use crate::core::dom::{Document, Selector};
use crate::core::html::{clean_text, find_ci};
use crate::core::sanitize::split_sentences;

/// How to read one page. Exactly one strategy per call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExtractionSpec {
    /// Keep the text from the first `start` (inclusive) up to the first
    /// `end` after it (exclusive). Either side may be absent.
    Anchors { start: Option<String>, end: Option<String> },
    /// CSS-like query; matched elements' text joined with single spaces.
    Selector(String),
}

impl ExtractionSpec {
    pub fn anchors(start: impl Into<String>, end: Option<&str>) -> Self {
        ExtractionSpec::Anchors {
            start: Some(start.into()),
            end: end.map(|e| s!(e)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExtractWarning {
    StartAnchorNotFound(String),
    InvalidSelector { selector: String, reason: String },
    NoMatches(String),
}

impl fmt::Display for ExtractWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractWarning::StartAnchorNotFound(a) => {
                write!(f, "Could not find \"{a}\" on the page; showing the whole page.")
            }
            ExtractWarning::InvalidSelector { selector, reason } => {
                write!(f, "Invalid selector {selector:?}: {reason}")
            }
            ExtractWarning::NoMatches(sel) => write!(f, "Nothing on the page matched {sel:?}."),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Extraction {
    pub lines: Vec<String>,
    pub warnings: Vec<ExtractWarning>,
}

impl Extraction {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

pub fn extract(markup: &str, spec: &ExtractionSpec) -> Extraction {
    match spec {
        ExtractionSpec::Anchors { start, end } => slice_between(markup, start.as_deref(), end.as_deref()),
        ExtractionSpec::Selector(sel) => select_block(markup, sel),
    }
}

fn slice_between(markup: &str, start: Option<&str>, end: Option<&str>) -> Extraction {
    let text = clean_text(markup);
    let mut out = Extraction::default();
    if text.trim().is_empty() {
        return out;
    }

    let mut from = 0usize;
    if let Some(anchor) = start.filter(|a| !a.trim().is_empty()) {
        match find_ci(&text, anchor, 0) {
            Some((s, _)) => from = s,
            None => {
                logw!("Extract: start anchor {anchor:?} not found");
                out.warnings.push(ExtractWarning::StartAnchorNotFound(s!(anchor)));
            }
        }
    }

    let mut to = text.len();
    if let Some(anchor) = end.filter(|a| !a.trim().is_empty()) {
        // the end is looked for past the start match, not inside it
        let search_from = start
            .and_then(|a| find_ci(&text, a, from))
            .map_or(from, |(_, e)| e);
        match find_ci(&text, anchor, search_from) {
            Some((s, _)) => to = s,
            None => logd!("Extract: end anchor {anchor:?} not found; keeping the rest"),
        }
    }

    out.lines = split_sentences(&text[from..to]);
    out
}

fn select_block(markup: &str, sel: &str) -> Extraction {
    let mut out = Extraction::default();
    let selector: Selector = match sel.parse() {
        Ok(s) => s,
        Err(e) => {
            loge!("Extract: bad selector {sel:?}: {e}");
            out.warnings.push(ExtractWarning::InvalidSelector {
                selector: s!(sel),
                reason: e.to_string(),
            });
            return out;
        }
    };

    if markup.trim().is_empty() {
        return out;
    }

    let texts = Document::parse(markup).select_text(&selector);
    if texts.is_empty() {
        logw!("Extract: selector {sel:?} matched nothing");
        out.warnings.push(ExtractWarning::NoMatches(s!(sel)));
        return out;
    }
    out.lines.push(texts.join(" "));
    out
}
