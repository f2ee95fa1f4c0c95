//! In-process stand-in for the NCAT conversion service.
//!
//! Serves `GET /{mode}` for the five conversion modes with the example
//! payloads published in the service documentation. Behaves like the live
//! service where the client's contract depends on it:
//! - required fields are the service's own, so UTM does not need `spcZone`;
//! - `srcDatum`/`destDatum` echo the requested datums, upper-cased;
//! - `simulate=timeout` answers 408 and `simulate=error` answers 500;
//! - `simulate=slow` holds the reply for `SLOW_REPLY` before answering.

use std::collections::HashMap;
use std::time::Duration;

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::{Map, Value};
use tokio::net::TcpListener;

/// Error body returned with 4xx/5xx statuses.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceError {
    pub message: String,
}

type Reply = Result<Json<Map<String, Value>>, (StatusCode, Json<ServiceError>)>;

/// How long `simulate=slow` waits before replying.
pub const SLOW_REPLY: Duration = Duration::from_secs(3);

pub const MODES: [&str; 5] = ["llh", "spc", "utm", "xyz", "usng"];

/// Raw documented example response for `mode`.
pub fn fixture(mode: &str) -> Option<&'static str> {
    match mode {
        "llh" => Some(include_str!("../fixtures/llh.json")),
        "spc" => Some(include_str!("../fixtures/spc.json")),
        "utm" => Some(include_str!("../fixtures/utm.json")),
        "xyz" => Some(include_str!("../fixtures/xyz.json")),
        "usng" => Some(include_str!("../fixtures/usng.json")),
        _ => None,
    }
}

/// Fields the live service rejects a request without.
pub fn service_required(mode: &str) -> &'static [&'static str] {
    match mode {
        "llh" => &["lat", "lon", "inDatum", "outDatum"],
        "spc" => &["northing", "easting", "spcZone", "inDatum", "outDatum"],
        "utm" => &["northing", "easting", "utmZone", "inDatum", "outDatum"],
        "xyz" => &["x", "y", "z", "inDatum", "outDatum"],
        "usng" => &["usng", "inDatum", "outDatum"],
        _ => &[],
    }
}

pub fn app() -> Router {
    Router::new().route("/{mode}", get(convert))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn fail(status: StatusCode, message: impl Into<String>) -> (StatusCode, Json<ServiceError>) {
    (
        status,
        Json(ServiceError {
            message: message.into(),
        }),
    )
}

async fn convert(Path(mode): Path<String>, Query(params): Query<HashMap<String, String>>) -> Reply {
    let raw = fixture(&mode).ok_or_else(|| fail(StatusCode::NOT_FOUND, format!("unknown service: {mode}")))?;
    tracing::info!(%mode, fields = params.len(), "conversion request");

    match params.get("simulate").map(String::as_str) {
        Some("timeout") => return Err(fail(StatusCode::REQUEST_TIMEOUT, "request timed out")),
        Some("error") => return Err(fail(StatusCode::INTERNAL_SERVER_ERROR, "conversion failed")),
        Some("slow") => tokio::time::sleep(SLOW_REPLY).await,
        _ => {}
    }

    if let Some(missing) = service_required(&mode).iter().find(|f| !params.contains_key(**f)) {
        return Err(fail(StatusCode::BAD_REQUEST, format!("{missing} is required")));
    }

    let mut body: Map<String, Value> = serde_json::from_str(raw)
        .map_err(|e| fail(StatusCode::INTERNAL_SERVER_ERROR, format!("bad fixture: {e}")))?;
    for (param, field) in [("inDatum", "srcDatum"), ("outDatum", "destDatum")] {
        if let Some(datum) = params.get(param) {
            body.insert(field.to_string(), Value::String(datum.to_uppercase()));
        }
    }
    Ok(Json(body))
}
