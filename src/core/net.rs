// src/core/net.rs
//
// One blocking GET per call. No retry, no custom headers, transport-default
// timeout and redirect policy.

use reqwest::blocking::Client;

use crate::error::FetchError;

/// Anything that can turn a URL into a page body.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self { client: Client::new() }
    }

    /// Use a preconfigured client (proxy, timeouts).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        logd!("Net: GET {url}");

        let network = |e: reqwest::Error| FetchError::Network {
            url: s!(url),
            source: Box::new(e),
        };

        let resp = self.client.get(url).send().map_err(network)?;
        let status = resp.status();
        if !status.is_success() {
            loge!("Net: HTTP {} for {url}", status.as_u16());
            return Err(FetchError::Http { url: s!(url), status: status.as_u16() });
        }

        let body = resp.text().map_err(network)?;
        logd!("Net: {} bytes from {url}", body.len());
        Ok(body)
    }
}
