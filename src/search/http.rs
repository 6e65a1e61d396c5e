//! Live search adapter over the HTTP API
//!
//! Posts one multipart search request per attempt and turns the answer into
//! a [`SearchResponse`] or a [`SearchFailure`].

use reqwest::blocking::{Client, multipart::Form};
use serde_json::Value;
use tracing::{debug, warn};

use super::client::SearchClient;
use super::error::SearchFailure;
use super::params::QueryParams;
use super::response::SearchResponse;
use crate::config::ApiSettings;
use crate::error::{Result, ValidatorError};

pub struct HttpSearchClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl HttpSearchClient {
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let api_key = settings.require_api_key()?.to_string();

        let http = Client::builder()
            .timeout(settings.timeout)
            .user_agent(concat!("search-validator/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ValidatorError::HttpClient(e.to_string()))?;

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    pub fn search_url(&self) -> String {
        format!("{}/search", self.base_url)
    }
}

impl SearchClient for HttpSearchClient {
    fn search(&self, index_id: &str, params: &QueryParams) -> std::result::Result<SearchResponse, SearchFailure> {
        let mut form = Form::new().text("index_id", index_id.to_string());
        for (name, value) in params.form_fields() {
            form = form.text(name, value);
        }

        let response = self
            .http
            .post(self.search_url())
            .header("x-api-key", &self.api_key)
            .multipart(form)
            .send()
            .map_err(transport_failure)?;

        let status = response.status();
        let body = response.text().map_err(transport_failure)?;
        debug!("🌐 search answered {} ({} bytes)", status, body.len());

        if !status.is_success() {
            return Err(SearchFailure::api(status.as_u16(), parse_error_body(&body)));
        }
        decode_success_body(&body)
    }
}

fn transport_failure(err: reqwest::Error) -> SearchFailure {
    let kind = if err.is_timeout() {
        "TimeoutError"
    } else if err.is_connect() {
        "ConnectError"
    } else {
        "RequestError"
    };
    warn!("⚠️ search transport failure: {}", err);
    SearchFailure {
        status: err.status().map(|s| s.as_u16()),
        ..SearchFailure::new(kind)
    }
}

pub(crate) fn parse_error_body(body: &str) -> Option<Value> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(serde_json::from_str(trimmed).unwrap_or_else(|_| Value::String(trimmed.to_string())))
}

pub(crate) fn decode_success_body(body: &str) -> std::result::Result<SearchResponse, SearchFailure> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Ok(SearchResponse::Empty);
    }
    serde_json::from_str::<Value>(trimmed)
        .map(SearchResponse::from_json)
        .map_err(|e| {
            warn!("⚠️ undecodable search body: {}", e);
            SearchFailure::new("DecodeError")
        })
}
