// tests/common/mod.rs
//
// Scripted fetcher: canned responses per URL, and a log of every URL asked.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;

use dm_screen::core::Fetcher;
use dm_screen::error::FetchError;

pub enum Reply {
    Body(String),
    Status(u16),
    Refused,
}

#[derive(Default)]
pub struct FakeFetcher {
    replies: HashMap<String, Reply>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn body(mut self, url: &str, body: &str) -> Self {
        self.replies.insert(url.into(), Reply::Body(body.into()));
        self
    }

    pub fn status(mut self, url: &str, code: u16) -> Self {
        self.replies.insert(url.into(), Reply::Status(code));
        self
    }

    pub fn refused(mut self, url: &str) -> Self {
        self.replies.insert(url.into(), Reply::Refused);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl Fetcher for FakeFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.calls.borrow_mut().push(url.into());
        match self.replies.get(url) {
            Some(Reply::Body(b)) => Ok(b.clone()),
            Some(Reply::Status(code)) => Err(FetchError::Http { url: url.into(), status: *code }),
            Some(Reply::Refused) | None => Err(FetchError::Network {
                url: url.into(),
                source: Box::new(io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused")),
            }),
        }
    }
}
