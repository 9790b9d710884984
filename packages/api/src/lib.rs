//! # API crate — HTTP client for the Footprint user directory
//!
//! [`HttpDirectory`] implements [`directory::UserDirectory`] against the hosted
//! directory:
//!
//! | Request | HTTP |
//! |---------|------|
//! | [`FetchRequest::All`] | `GET {base_url}/users` |
//! | [`FetchRequest::Search`] | `GET {base_url}/users?search=<term>` |
//!
//! Responses are JSON arrays of [`UserRecord`]. Transport failures, non-2xx
//! statuses and undecodable bodies map onto the three [`DirectoryError`] variants.
//! The same code runs natively and in the browser (reqwest uses `fetch` on wasm).

use directory::config::DirectoryConfig;
use directory::{DirectoryError, FetchRequest, UserDirectory, UserRecord};
use reqwest::{Client, RequestBuilder};

/// Remote user directory reached over HTTP.
#[derive(Clone, Debug)]
pub struct HttpDirectory {
    client: Client,
    base_url: String,
}

impl HttpDirectory {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn from_config(config: &DirectoryConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    fn request(&self, request: &FetchRequest) -> RequestBuilder {
        let builder = self.client.get(format!("{}/users", self.base_url));
        match request.search_term() {
            Some(term) => builder.query(&[("search", term)]),
            None => builder,
        }
    }
}

impl UserDirectory for HttpDirectory {
    async fn fetch(&self, request: &FetchRequest) -> Result<Vec<UserRecord>, DirectoryError> {
        tracing::debug!(?request, base_url = %self.base_url, "fetching users");

        let response = self
            .request(request)
            .send()
            .await
            .map_err(|e| DirectoryError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::Status(status.as_u16()));
        }

        response
            .json::<Vec<UserRecord>>()
            .await
            .map_err(|e| DirectoryError::Decode(e.to_string()))
    }
}
