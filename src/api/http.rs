//! Fetch Transport
//!
//! Thin wrapper over the browser `fetch` API.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::error::ApiError;

/// Issue one request and return the response body as text.
///
/// Non-2xx answers map to `ApiError::Status`; rejected fetches to
/// `ApiError::Transport`.
pub(super) async fn fetch_text(
    method: &str,
    url: &str,
    body: Option<String>,
    token: Option<&str>,
) -> Result<String, ApiError> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = &body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &opts)?;
    let headers = request.headers();
    headers.set("Accept", "application/json")?;
    if body.is_some() {
        headers.set("Content-Type", "application/json")?;
    }
    if let Some(token) = token {
        headers.set("Authorization", &format!("Bearer {}", token))?;
    }

    let window = web_sys::window().ok_or(ApiError::NoWindow)?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;

    if !response.ok() {
        log::warn!("[HTTP] {} {} -> {}", method, url, response.status());
        return Err(ApiError::Status(response.status()));
    }

    let text = JsFuture::from(response.text()?).await?;
    Ok(text.as_string().unwrap_or_default())
}
