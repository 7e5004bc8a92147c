//! Symptom Lookup
//!
//! `POST /api/symptom-check` with a list of symptoms; the server answers with
//! one specialist recommendation per symptom.

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;
use web_sys::{Request, RequestInit};

use super::{endpoint, fetch_json, js_error, CONNECTIVITY_MESSAGE};
use crate::config::AppConfig;
use crate::debounce::LatestQuery;
use crate::error::{AppError, AppResult};

pub const SYMPTOM_CHECK_PATH: &str = "/api/symptom-check";
pub const EMPTY_SYMPTOMS_MESSAGE: &str = "Please enter at least one symptom.";
pub const SEARCHING_MESSAGE: &str = "Searching for specialists...";
pub const NO_RECOMMENDATIONS_MESSAGE: &str =
    "No recommendations found. Please try different symptoms or consult a general practitioner.";
pub const URGENT_NOTICE: &str = "⚠️ This may require urgent attention.";

// ========================
// Wire Types
// ========================

#[derive(Debug, Serialize)]
pub struct SymptomCheckRequest<'a> {
    pub symptoms: &'a [String],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub symptom: String,
    pub specialist: String,
    pub description: String,
    #[serde(default)]
    pub urgency: String,
}

impl Recommendation {
    pub fn is_urgent(&self) -> bool {
        self.urgency == "high"
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SymptomCheckResponse {
    pub success: bool,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    #[serde(default)]
    pub error: Option<String>,
}

// ========================
// Commands
// ========================

/// Split comma-separated input into trimmed, non-empty symptoms
pub fn parse_symptoms(input: &str) -> AppResult<Vec<String>> {
    let symptoms: Vec<String> = input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();
    if symptoms.is_empty() {
        return Err(AppError::Validation(EMPTY_SYMPTOMS_MESSAGE.to_string()));
    }
    Ok(symptoms)
}

pub async fn check_symptoms(config: &AppConfig, symptoms: &[String]) -> AppResult<SymptomCheckResponse> {
    let body = serde_json::to_string(&SymptomCheckRequest { symptoms })
        .map_err(|e| AppError::Decode(e.to_string()))?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(&body));
    let request = Request::new_with_str_and_init(&endpoint(&config.api_base, SYMPTOM_CHECK_PATH), &init)
        .map_err(js_error)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_error)?;

    fetch_json(&request).await
}

// ========================
// Panel State
// ========================

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SymptomView {
    #[default]
    Idle,
    Invalid(String),
    Searching,
    Results(Vec<Recommendation>),
    NoResults,
    Failed,
}

impl SymptomView {
    /// Status line for states without result cards
    pub fn message(&self) -> Option<&str> {
        match self {
            SymptomView::Idle | SymptomView::Results(_) => None,
            SymptomView::Invalid(message) => Some(message.as_str()),
            SymptomView::Searching => Some(SEARCHING_MESSAGE),
            SymptomView::NoResults => Some(NO_RECOMMENDATIONS_MESSAGE),
            SymptomView::Failed => Some(CONNECTIVITY_MESSAGE),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, SymptomView::Invalid(_) | SymptomView::Failed)
    }
}

pub fn symptom_outcome(result: AppResult<SymptomCheckResponse>) -> SymptomView {
    match result {
        Ok(response) if response.success && !response.recommendations.is_empty() => {
            SymptomView::Results(response.recommendations)
        }
        Ok(response) => {
            if let Some(error) = response.error {
                log::warn!("[SYMPTOM] Server reported: {}", error);
            }
            SymptomView::NoResults
        }
        Err(e) => {
            log::error!("[SYMPTOM] Lookup failed: {}", e);
            SymptomView::Failed
        }
    }
}

/// View for the response to `ticket`, or `None` once a newer check was submitted
pub fn settle_symptom_check(
    latest: &LatestQuery,
    ticket: u64,
    result: AppResult<SymptomCheckResponse>,
) -> Option<SymptomView> {
    latest.settle(ticket, result).map(symptom_outcome)
}
