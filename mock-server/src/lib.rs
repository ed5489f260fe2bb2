use std::collections::BTreeMap;

use axum::{
    extract::RawQuery,
    http::{HeaderMap, Method, StatusCode},
    routing::any,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// What `/echo` reports about the request it received.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Echo {
    pub method: String,
    /// Raw query string, or null when the URL carried none.
    pub query: Option<String>,
    /// Header names are lowercased by the HTTP layer.
    pub headers: BTreeMap<String, String>,
    /// Request body parsed as JSON, or null when absent or unparsable.
    pub body: Value,
}

pub fn app() -> Router {
    Router::new()
        .route("/echo", any(echo))
        .route("/errors/validation", any(validation_error))
        .route("/errors/empty", any(empty_error))
        .route("/errors/bare", any(bare_error))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Reflect the request back as JSON so clients can assert exactly what they
/// dispatched.
async fn echo(
    method: Method,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: String,
) -> Json<Echo> {
    let headers = headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                value.to_str().unwrap_or_default().to_string(),
            )
        })
        .collect();

    Json(Echo {
        method: method.as_str().to_string(),
        query,
        headers,
        body: serde_json::from_str(&body).unwrap_or(Value::Null),
    })
}

async fn validation_error() -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({"errors": {"name": "required"}})),
    )
}

async fn empty_error() -> (StatusCode, Json<Value>) {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({})))
}

async fn bare_error() -> (StatusCode, Json<Value>) {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"errors": null})))
}
