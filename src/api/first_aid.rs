//! First-Aid Search
//!
//! `GET /api/first-aid?q=...` returning matching topics with their steps.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use web_sys::Request;

use super::{endpoint, fetch_json, js_error, CONNECTIVITY_MESSAGE};
use crate::config::AppConfig;
use crate::debounce::LatestQuery;
use crate::error::AppResult;

pub const FIRST_AID_PATH: &str = "/api/first-aid";
pub const NO_FIRST_AID_MESSAGE: &str =
    "No first aid instructions found. Try searching for: Burn, Choking, Cut, Faint, Nosebleed, Sprain, etc.";

/// Characters left unescaped by `encodeURIComponent`
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FirstAidResult {
    pub topic: String,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub warning: Option<String>,
}

impl FirstAidResult {
    /// Warning text if there is any; the server sends `""` for none
    pub fn warning_text(&self) -> Option<&str> {
        self.warning.as_deref().map(str::trim).filter(|w| !w.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FirstAidResponse {
    pub success: bool,
    #[serde(default)]
    pub results: Vec<FirstAidResult>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Trimmed query, or `None` when there is nothing to search for
pub fn normalize_query(raw: &str) -> Option<String> {
    let query = raw.trim();
    (!query.is_empty()).then(|| query.to_string())
}

pub fn first_aid_url(api_base: &str, query: &str) -> String {
    format!(
        "{}?q={}",
        endpoint(api_base, FIRST_AID_PATH),
        utf8_percent_encode(query, QUERY_COMPONENT)
    )
}

pub async fn search_first_aid(config: &AppConfig, query: &str) -> AppResult<FirstAidResponse> {
    let request = Request::new_with_str(&first_aid_url(&config.api_base, query)).map_err(js_error)?;
    fetch_json(&request).await
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FirstAidView {
    #[default]
    Empty,
    Results(Vec<FirstAidResult>),
    NoResults,
    Failed,
}

impl FirstAidView {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            FirstAidView::Empty | FirstAidView::Results(_) => None,
            FirstAidView::NoResults => Some(NO_FIRST_AID_MESSAGE),
            FirstAidView::Failed => Some(CONNECTIVITY_MESSAGE),
        }
    }
}

pub fn first_aid_outcome(result: AppResult<FirstAidResponse>) -> FirstAidView {
    match result {
        Ok(response) if response.success && !response.results.is_empty() => {
            FirstAidView::Results(response.results)
        }
        Ok(response) => {
            if let Some(error) = response.error {
                log::warn!("[FIRST-AID] Server reported: {}", error);
            }
            FirstAidView::NoResults
        }
        Err(e) => {
            log::error!("[FIRST-AID] Search failed: {}", e);
            FirstAidView::Failed
        }
    }
}

/// What a settled search input asks the panel to do
#[derive(Debug, Clone, PartialEq)]
pub enum SearchStart {
    /// Blank input: show the empty state without a request
    Clear,
    Fetch { ticket: u64, query: String },
}

/// Start a search for `raw`. Every call, blank or not, invalidates responses
/// still in flight.
pub fn begin_first_aid_search(latest: &mut LatestQuery, raw: &str) -> SearchStart {
    let ticket = latest.begin();
    match normalize_query(raw) {
        Some(query) => SearchStart::Fetch { ticket, query },
        None => SearchStart::Clear,
    }
}

/// View for the response to `ticket`, or `None` once a newer search has started
pub fn settle_first_aid_search(
    latest: &LatestQuery,
    ticket: u64,
    result: AppResult<FirstAidResponse>,
) -> Option<FirstAidView> {
    latest.settle(ticket, result).map(first_aid_outcome)
}
