//! Authenticated client for the source list service.
//!
//! Wraps a `reqwest::Client` carrying the fixed identity header set the
//! source expects, and reloads the cookie jar fresh for every request so
//! out-of-band credential refreshes are picked up between cycles.

use std::path::PathBuf;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, COOKIE, USER_AGENT};
use serde_json::Value;

use crate::cookies::{cookie_header, load_cookies};
use crate::error::{SyncError, SyncResult};

/// Mobile-browser user agent the source session was established with.
const MOBILE_USER_AGENT: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 13_5_1 like Mac OS X) \
     AppleWebKit/605.1.15 (KHTML, like Gecko) Mobile/15E148 \
     PitanguiBridge/2.2.345247.0-[HARDWARE=iPhone10_4][SOFTWARE=13.5.1]";

const LIST_ITEMS_PATH: &str = "/alexashoppinglists/api/getlistitems";
const UPDATE_ITEM_PATH: &str = "/alexashoppinglists/api/updatelistitem";

/// Flag key flipped on the completion PUT.
pub const COMPLETED_KEY: &str = "completed";

fn identity_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(MOBILE_USER_AGENT));
    headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("*"));
    headers.insert("DNT", HeaderValue::from_static("1"));
    headers.insert("Upgrade-Insecure-Requests", HeaderValue::from_static("1"));
    headers
}

/// Cookie-authenticated client for the source list API.
pub struct SourceClient {
    base_url: String,
    cookie_path: PathBuf,
    client: reqwest::Client,
}

impl SourceClient {
    /// Create a client for the given API base URL and cookie jar path.
    pub fn new(base_url: impl Into<String>, cookie_path: impl Into<PathBuf>) -> Self {
        Self {
            base_url: base_url.into(),
            cookie_path: cookie_path.into(),
            client: reqwest::Client::builder()
                .default_headers(identity_headers())
                .timeout(Duration::from_secs(30))
                .connect_timeout(Duration::from_secs(10))
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Load the jar and render the `Cookie` header for one request.
    ///
    /// An empty jar is a hard precondition failure: no network call is made.
    fn session_cookies(&self) -> SyncResult<String> {
        let cookies = load_cookies(&self.cookie_path)?;
        if cookies.is_empty() {
            return Err(SyncError::NoCredentials);
        }
        Ok(cookie_header(&cookies))
    }

    async fn check_status(resp: reqwest::Response) -> SyncResult<reqwest::Response> {
        if resp.status().is_success() {
            return Ok(resp);
        }
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        Err(SyncError::HttpStatus { status, body })
    }

    /// GET the raw list-items payload.
    pub async fn get_list_items(&self) -> SyncResult<Value> {
        let cookies = self.session_cookies()?;
        let resp = self
            .client
            .get(self.api_url(LIST_ITEMS_PATH))
            .header(COOKIE, cookies)
            .send()
            .await?;
        let resp = Self::check_status(resp).await?;
        tracing::debug!("retrieved list items payload");
        Ok(resp.json().await?)
    }

    /// PUT the item back with its `completed` flag forced to `true`.
    pub async fn mark_completed(&self, item: &Value) -> SyncResult<()> {
        let mut payload = item.clone();
        if let Some(obj) = payload.as_object_mut() {
            obj.insert(COMPLETED_KEY.to_string(), Value::Bool(true));
        }

        let cookies = self.session_cookies()?;
        let resp = self
            .client
            .put(self.api_url(UPDATE_ITEM_PATH))
            .header(COOKIE, cookies)
            .json(&payload)
            .send()
            .await?;
        Self::check_status(resp).await?;
        Ok(())
    }
}
