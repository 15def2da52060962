//! Remote file-store client for the weather logger's uploads.
//!
//! The device uploads one CSV file per flush to a small HTTP file store:
//!
//! - `GET {base}/logs` returns a JSON array of file names
//! - `GET {base}/logs/{name}` returns that file's raw text
//!
//! Contract with the core: fetching returns **zero or more blobs**. Any
//! network, auth, or decode failure degrades to fewer (or zero) blobs rather
//! than an error, so the pipeline never observes upstream failure state.
//! Only missing configuration is a hard error.

use reqwest::blocking::Client;
use serde::Deserialize;

use crate::error::AppError;

const ENV_URL: &str = "WX_STORE_URL";
const ENV_TOKEN: &str = "WX_STORE_TOKEN";

/// Listing response shape. The store returns either a bare JSON array of
/// names or an object with a `files` field, depending on version.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Listing {
    Names(Vec<String>),
    Object { files: Vec<String> },
}

impl Listing {
    fn into_names(self) -> Vec<String> {
        match self {
            Listing::Names(names) => names,
            Listing::Object { files } => files,
        }
    }
}

pub struct StoreClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl StoreClient {
    /// Build a client from `WX_STORE_URL` / `WX_STORE_TOKEN` (reads `.env`).
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        let base_url = std::env::var(ENV_URL)
            .map_err(|_| AppError::new(2, format!("Missing {ENV_URL} in environment (.env).")))?;
        let token = std::env::var(ENV_TOKEN).ok();
        Ok(Self::new(base_url, token))
    }

    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        }
    }

    /// List and download every available log file.
    ///
    /// Degrades on failure: an unreachable store yields an empty vec, and a
    /// single failed download drops just that blob.
    pub fn fetch_blobs(&self) -> Vec<String> {
        let names = match self.list_names() {
            Some(names) => names,
            None => return Vec::new(),
        };

        names
            .iter()
            .filter_map(|name| self.download(name))
            .collect()
    }

    fn list_names(&self) -> Option<Vec<String>> {
        let resp = self
            .request(&self.list_url())
            .send()
            .ok()?
            .error_for_status()
            .ok()?;
        let listing: Listing = resp.json().ok()?;
        Some(listing.into_names())
    }

    fn download(&self, name: &str) -> Option<String> {
        self.request(&self.blob_url(name))
            .send()
            .ok()?
            .error_for_status()
            .ok()?
            .text()
            .ok()
    }

    fn request(&self, url: &str) -> reqwest::blocking::RequestBuilder {
        let mut req = self.client.get(url);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        req
    }

    fn list_url(&self) -> String {
        format!("{}/logs", self.base_url)
    }

    fn blob_url(&self, name: &str) -> String {
        format!("{}/logs/{}", self.base_url, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_built_from_trimmed_base() {
        let client = StoreClient::new("https://store.example/api/", None);
        assert_eq!(client.list_url(), "https://store.example/api/logs");
        assert_eq!(
            client.blob_url("2026-02-08.csv"),
            "https://store.example/api/logs/2026-02-08.csv"
        );
    }

    #[test]
    fn listing_accepts_both_response_shapes() {
        let bare: Listing = serde_json::from_str(r#"["a.csv","b.csv"]"#).unwrap();
        assert_eq!(bare.into_names(), vec!["a.csv", "b.csv"]);

        let object: Listing = serde_json::from_str(r#"{"files":["c.csv"]}"#).unwrap();
        assert_eq!(object.into_names(), vec!["c.csv"]);
    }
}
