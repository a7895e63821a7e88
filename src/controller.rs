// src/controller.rs
//
// One per feature tab. Holds what is on screen and what went wrong last.

use crate::core::Fetcher;
use crate::error::FetchError;
use crate::extract::extract;
use crate::specs::Request;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Warning(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Info(t) | Notice::Warning(t) | Notice::Error(t) => t,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }
}

/// User-facing wording for a failed fetch.
pub fn fetch_message(err: &FetchError) -> String {
    match err {
        FetchError::Http { status, .. } => format!("Failed to fetch the webpage (HTTP {status})."),
        FetchError::Network { source, .. } => format!("An error occurred: {source}"),
    }
}

#[derive(Debug, Default)]
pub struct ViewController {
    output: Vec<String>,
    notices: Vec<Notice>,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch, then extract. A failed fetch leaves the current output alone
    /// and never reaches the extractor.
    pub fn submit(&mut self, fetcher: &dyn Fetcher, req: Request) {
        self.notices.clear();
        logf!("View: fetching {}", req.url);

        let body = match fetcher.fetch(&req.url) {
            Ok(b) => b,
            Err(e) => {
                loge!("View: {e}");
                self.notices.push(Notice::Error(fetch_message(&e)));
                return;
            }
        };

        let result = extract(&body, &req.spec);
        logd!("View: {} line(s), {} warning(s)", result.lines.len(), result.warnings.len());
        self.notices
            .extend(result.warnings.iter().map(|w| Notice::Warning(w.to_string())));
        self.output = result.lines;
    }

    /// Input was refused before any fetch; output stays.
    pub fn reject(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        logw!("View: rejected input: {msg}");
        self.notices.clear();
        self.notices.push(Notice::Warning(msg));
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn text(&self) -> String {
        self.output.join("\n")
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }
}
