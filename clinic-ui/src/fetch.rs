//! Browser `fetch` for the `/ajax/load-*` endpoints.

use clinic_core::error::FormError;
use clinic_core::records::Choice;
use clinic_forms::chain::FetchRequest;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

fn js_error(context: &str, value: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{}: {:?}", context, value)
}

/// GET `url` and return the body. Non-2xx statuses are errors.
pub async fn get_text(url: &str) -> anyhow::Result<String> {
    let window = web_sys::window().ok_or_else(|| anyhow::anyhow!("no window available"))?;

    let init = RequestInit::new();
    init.set_method("GET");
    let request = Request::new_with_str_and_init(url, &init)
        .map_err(|e| js_error("building request", e))?;
    let headers = request.headers();
    headers
        .set("Accept", "application/json")
        .map_err(|e| js_error("setting headers", e))?;
    headers
        .set("X-Requested-With", "XMLHttpRequest")
        .map_err(|e| js_error("setting headers", e))?;

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| js_error("network error", e))?
        .dyn_into()
        .map_err(|e| js_error("unexpected fetch result", e))?;
    if !response.ok() {
        return Err(FormError::HttpStatus {
            url: url.to_string(),
            status: response.status(),
        }
        .into());
    }

    let body = JsFuture::from(response.text().map_err(|e| js_error("reading body", e))?)
        .await
        .map_err(|e| js_error("reading body", e))?;
    body.as_string()
        .ok_or_else(|| anyhow::anyhow!("response body from {} was not text", url))
}

/// Perform a chain load and decode the records it answers with.
pub async fn fetch_choices(request: &FetchRequest) -> anyhow::Result<Vec<Choice>> {
    let body = get_text(&request.url).await?;
    request.kind().decode(&body)
}
