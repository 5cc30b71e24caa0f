// src/core/net.rs

// Blocking HTTP GET of one directory entry

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;

use crate::config::consts::USER_AGENT;
use crate::error::FetchError;

/// The directory returns 200 with this text for IDs that have no entry.
pub const NOT_AUTHORIZED_MARKER: &str = "Not Authorized";

/// Source of raw page text by identifier.
pub trait Fetch: Sync {
    fn fetch(&self, id: u32) -> Result<String, FetchError>;
}

pub struct HttpFetcher {
    client: Client,
    base_url: String,
}

impl HttpFetcher {
    pub fn new(base_url: &str, timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            base_url: s!(base_url.trim_end_matches('/')),
        })
    }

    pub fn url_for(&self, id: u32) -> String {
        format!("{}/id/{}", self.base_url, id)
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, id: u32) -> Result<String, FetchError> {
        let url = self.url_for(id);
        logd!("GET {url}");

        let resp = self.client.get(&url).send().map_err(classify)?;
        let status = resp.status();
        settle(status, resp.text().map_err(classify))
    }
}

/// Decide the fetch result once status and body are known.
///
/// The marker is checked before the status since it is the only reliable
/// "no entry" signal. A body that fails to arrive on a non-OK response is
/// still a bad status, not a skip.
fn settle(status: StatusCode, body: Result<String, FetchError>) -> Result<String, FetchError> {
    let body = match body {
        Ok(body) => body,
        Err(_) if status != StatusCode::OK => return Err(FetchError::Status(status.as_u16())),
        Err(e) => return Err(e),
    };
    if body.contains(NOT_AUTHORIZED_MARKER) {
        return Err(FetchError::NotAuthorized);
    }
    if status != StatusCode::OK {
        return Err(FetchError::Status(status.as_u16()));
    }
    Ok(body)
}

fn classify(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Transport(e.to_string())
    }
}
