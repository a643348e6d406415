//! Same-origin HTTP helpers.
//!
//! Every request goes to the origin that served the page. State-changing
//! requests echo the `csrftoken` cookie in the `X-CSRFToken` header.

use contracts::shared::api_error::ApiError;
use contracts::shared::csrf::{cookie_value, CSRF_COOKIE_NAME, CSRF_HEADER_NAME};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsCast;

pub const SEARCH_PRODUCTS_PATH: &str = "/billing/search-products/";
pub const CREATE_BILL_PATH: &str = "/billing/create-bill/";
pub const PROFIT_ANALYSIS_PATH: &str = "/reports/profit-analysis/";

/// Marks a request as XHR so the report view answers with JSON instead of HTML
pub const AJAX_HEADER: (&str, &str) = ("X-Requested-With", "XMLHttpRequest");

/// Origin of the current page, e.g. "https://shop.example.com"
///
/// Empty string if window is not available, which leaves paths relative.
pub fn api_base() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Build a full URL from a path
///
/// # Example
/// ```rust,no_run
/// # use frontend::shared::api_utils::api_url;
/// let url = api_url("/billing/add-to-cart/");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Current value of the `csrftoken` cookie, URL-decoded
pub fn csrf_token() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let html_document = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
    let cookies = html_document.cookie().ok()?;
    cookie_value(&cookies, CSRF_COOKIE_NAME)
}

fn with_csrf(builder: RequestBuilder) -> RequestBuilder {
    match csrf_token() {
        Some(token) => builder.header(CSRF_HEADER_NAME, &token),
        None => {
            log::warn!("{} cookie not found, sending request without CSRF token", CSRF_COOKIE_NAME);
            builder
        }
    }
}

/// GET returning JSON. Any non-2xx status is a transport failure.
pub async fn get_json<T: DeserializeOwned>(
    path: &str,
    headers: &[(&str, &str)],
) -> Result<T, ApiError> {
    let mut builder = Request::get(&api_url(path));
    for (name, value) in headers {
        builder = builder.header(name, value);
    }

    let response = builder.send().await.map_err(ApiError::transport)?;
    if !response.ok() {
        return Err(ApiError::Transport(format!("HTTP error: {}", response.status())));
    }
    decode_body(response).await
}

/// POST a JSON body and decode a JSON reply.
///
/// Business failures come back as `{success: false, error}` with a 4xx
/// status, so the body is decoded whatever the status.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let request = with_csrf(Request::post(&api_url(path)))
        .json(body)
        .map_err(|e| ApiError::Transport(format!("Failed to serialize request: {}", e)))?;
    let response = request.send().await.map_err(ApiError::transport)?;
    decode_body(response).await
}

/// POST without a body (clear-cart)
pub async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = with_csrf(Request::post(&api_url(path)))
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(ApiError::transport)?;
    decode_body(response).await
}

/// POST a JSON body and return the raw reply bytes (server-rendered files)
pub async fn post_for_bytes<B: Serialize>(path: &str, body: &B) -> Result<Vec<u8>, ApiError> {
    let request = with_csrf(Request::post(&api_url(path)))
        .json(body)
        .map_err(|e| ApiError::Transport(format!("Failed to serialize request: {}", e)))?;
    let response = request.send().await.map_err(ApiError::transport)?;
    if !response.ok() {
        return Err(ApiError::Transport(format!("HTTP error: {}", response.status())));
    }
    response.binary().await.map_err(ApiError::transport)
}

// Decoded from text rather than `Response::json` so object key order
// reaches the deserializer untouched.
async fn decode_body<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let ok = response.ok();
    let text = response.text().await.map_err(ApiError::transport)?;
    match serde_json::from_str::<T>(&text) {
        Ok(value) => Ok(value),
        Err(e) if ok => Err(ApiError::Transport(format!("Failed to parse response: {}", e))),
        Err(_) => Err(ApiError::Transport(format!("HTTP error: {}", status))),
    }
}
