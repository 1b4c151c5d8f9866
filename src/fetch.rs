//! Async JSON loading over the browser fetch API. One fetch per view, no
//! retry, no timeout.

use serde::de::DeserializeOwned;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Why a data file failed to load.
#[derive(Debug, Error)]
pub enum FetchError {
	#[error("request failed: {0}")]
	Request(String),
	#[error("HTTP status {0}")]
	Status(u16),
	#[error("invalid response body: {0}")]
	Body(String),
	#[error("malformed JSON: {0}")]
	Parse(#[from] serde_json::Error),
}

/// Lifecycle of a view's single data fetch.
#[derive(Clone, Debug)]
pub enum FetchState<T> {
	Loading,
	Ready(T),
	Failed(String),
}

fn js_detail(value: JsValue) -> String {
	value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Fetch `url` and deserialize its JSON body.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
	let window = web_sys::window().ok_or_else(|| FetchError::Request("no window".into()))?;

	let response = JsFuture::from(window.fetch_with_str(url))
		.await
		.map_err(|err| FetchError::Request(js_detail(err)))?;
	let response: Response = response
		.dyn_into()
		.map_err(|err| FetchError::Request(js_detail(err)))?;

	if !response.ok() {
		return Err(FetchError::Status(response.status()));
	}

	let body = response.text().map_err(|err| FetchError::Body(js_detail(err)))?;
	let body = JsFuture::from(body)
		.await
		.map_err(|err| FetchError::Body(js_detail(err)))?;
	let body = body
		.as_string()
		.ok_or_else(|| FetchError::Body("response body is not text".into()))?;

	Ok(serde_json::from_str(&body)?)
}
