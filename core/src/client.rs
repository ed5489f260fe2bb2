//! Request construction and dispatch.
//!
//! # Design
//! `AjaxClient` resolves three configuration layers per call — the method
//! implied by the entry point, the client-wide `common_options`, and the
//! per-call options — then routes the call's data to the query string (GET)
//! or a JSON body (everything else). Construction is split from dispatch:
//! `build_request` produces a plain [`HttpRequest`], dispatch hands it to
//! the injected [`Transport`] and normalizes the response with
//! [`check_status`]. Hosts that do their own I/O can use the two halves
//! directly.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::error::RequestError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::options::{merge_objects, overlay_headers, Method, RequestOptions};
use crate::query;

/// HTTP request helper over an injected transport.
///
/// `api_path` is prefixed onto every request path and `common_options` is
/// merged under every call's options. Both fields are plain public state:
/// each call reads their current values, so they may be adjusted between
/// calls.
#[derive(Debug, Clone)]
pub struct AjaxClient<T> {
    pub api_path: String,
    pub common_options: RequestOptions,
    transport: T,
}

impl<T: Transport> AjaxClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            api_path: String::new(),
            common_options: RequestOptions::default(),
            transport,
        }
    }

    /// Issue a GET request; `data` is encoded into the URL query string.
    pub fn get(
        &self,
        path: &str,
        data: Option<Map<String, Value>>,
        options: &RequestOptions,
    ) -> Result<Value, RequestError> {
        self.request(Method::Get, path, data, options)
    }

    /// Issue a POST request; `data` is serialized as the JSON body.
    pub fn post(
        &self,
        path: &str,
        data: Option<Map<String, Value>>,
        options: &RequestOptions,
    ) -> Result<Value, RequestError> {
        self.request(Method::Post, path, data, options)
    }

    /// Issue a PUT request; `data` is serialized as the JSON body.
    pub fn put(
        &self,
        path: &str,
        data: Option<Map<String, Value>>,
        options: &RequestOptions,
    ) -> Result<Value, RequestError> {
        self.request(Method::Put, path, data, options)
    }

    /// Issue a DELETE request.
    ///
    /// Takes no data parameter; a payload supplied through `options.data`
    /// (or `common_options.data`) still becomes the JSON body.
    pub fn del(&self, path: &str, options: &RequestOptions) -> Result<Value, RequestError> {
        let effective = self.common_options.merged_with(options);
        self.dispatch(Method::Delete, path, effective)
    }

    /// Issue a request with an explicit method (covers PATCH, which has no
    /// dedicated helper).
    ///
    /// The call's `data` is the last merge layer: a `Some` merges key-wise
    /// over any `data` from the option layers, a `None` clears it.
    pub fn request(
        &self,
        method: Method,
        path: &str,
        data: Option<Map<String, Value>>,
        options: &RequestOptions,
    ) -> Result<Value, RequestError> {
        let effective = self.effective_options(data, options);
        self.dispatch(method, path, effective)
    }

    /// Resolve the configuration layers into a plain [`HttpRequest`] without
    /// dispatching it.
    ///
    /// For hosts that execute the I/O themselves; feed the resulting
    /// response back through [`check_status`].
    pub fn build_request(
        &self,
        method: Method,
        path: &str,
        data: Option<Map<String, Value>>,
        options: &RequestOptions,
    ) -> Result<HttpRequest, RequestError> {
        let effective = self.effective_options(data, options);
        self.assemble(method, path, effective)
    }

    /// Resolve the option layers plus the call's `data` argument.
    fn effective_options(
        &self,
        data: Option<Map<String, Value>>,
        options: &RequestOptions,
    ) -> RequestOptions {
        let mut effective = self.common_options.merged_with(options);
        effective.data = match (effective.data.take(), data) {
            (Some(base), Some(over)) => Some(merge_objects(&base, &over)),
            (_, over) => over,
        };
        effective
    }

    fn dispatch(
        &self,
        method: Method,
        path: &str,
        effective: RequestOptions,
    ) -> Result<Value, RequestError> {
        let request = self.assemble(method, path, effective)?;
        let response = self
            .transport
            .fetch(request)
            .map_err(|e| RequestError::TransportError(e.0))?;
        check_status(&response)
    }

    /// Turn resolved options into a request: URL, headers, and body.
    ///
    /// Invariant: `data` lands in exactly one place — the query string for
    /// GET, the body for everything else.
    fn assemble(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> Result<HttpRequest, RequestError> {
        let mut url = format!("{}{}", self.api_path, path);
        let mut data = options.data;

        if method == Method::Get {
            if let Some(map) = data.take() {
                if !map.is_empty() {
                    url = format!("{url}?{}", query::encode(&map));
                }
            }
        }

        let mut headers = BTreeMap::from([(
            "Content-Type".to_string(),
            "application/json".to_string(),
        )]);
        overlay_headers(&mut headers, &options.headers);

        let body = match data {
            Some(map) => Some(
                serde_json::to_string(&map)
                    .map_err(|e| RequestError::SerializationError(e.to_string()))?,
            ),
            None => None,
        };

        Ok(HttpRequest {
            method,
            url,
            headers: headers.into_iter().collect(),
            body,
        })
    }
}

/// Normalize a transport response into success or failure.
///
/// Parses the body as JSON unconditionally. A success status (2xx) resolves
/// to the parsed value; a failure status surfaces the body's `errors` field,
/// or an empty object when the field is absent or null. A body that is not
/// valid JSON is a deserialization error regardless of status.
pub fn check_status(response: &HttpResponse) -> Result<Value, RequestError> {
    let json: Value = serde_json::from_str(&response.body)
        .map_err(|e| RequestError::DeserializationError(e.to_string()))?;

    if (200..300).contains(&response.status) {
        return Ok(json);
    }

    let errors = match json.get("errors") {
        Some(value) if !value.is_null() => value.clone(),
        _ => Value::Object(Map::new()),
    };
    Err(RequestError::ApplicationError(errors))
}
