//! Lookup API Clients
//!
//! Frontend bindings to the symptom and first-aid endpoints, organized by
//! endpoint. Each module also maps responses to the state its panel renders.

mod symptom;
mod first_aid;

use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, Response};

use crate::error::{AppError, AppResult};

// Re-export all public items
pub use symptom::*;
pub use first_aid::*;

pub const CONNECTIVITY_MESSAGE: &str = "Error: Could not connect to server. Please try again later.";

/// Join the configured base with an API path
pub fn endpoint(api_base: &str, path: &str) -> String {
    format!("{}{}", api_base.trim_end_matches('/'), path)
}

fn js_error(value: JsValue) -> AppError {
    AppError::Network(format!("{:?}", value))
}

/// Send `request` and decode the JSON body. Error statuses still carry a
/// JSON body with `success: false`, so the status only matters when the
/// body does not parse.
async fn fetch_json<T: DeserializeOwned>(request: &Request) -> AppResult<T> {
    let window = web_sys::window().ok_or_else(|| AppError::Network("no window".to_string()))?;
    let value = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(js_error)?;
    let response: Response = value
        .dyn_into()
        .map_err(|_| AppError::Decode("fetch did not return a Response".to_string()))?;

    let body = match response.json() {
        Ok(promise) => JsFuture::from(promise).await,
        Err(e) => Err(e),
    };
    match body {
        Ok(json) => serde_wasm_bindgen::from_value(json).map_err(|e| AppError::Decode(e.to_string())),
        Err(_) if !response.ok() => Err(AppError::Http { status: response.status() }),
        Err(e) => Err(AppError::Decode(format!("{:?}", e))),
    }
}
