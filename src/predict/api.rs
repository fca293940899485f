//! HTTP client for the backend's predict and health endpoints.

use serde::{Deserialize, Serialize};

use crate::http_client;

const MAX_PREDICT_RESPONSE_BYTES: usize = 256 * 1024;
const MAX_HEALTH_RESPONSE_BYTES: usize = 64 * 1024;

/// Payload for `POST /predict`. Field order follows the backend contract.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PredictRequest {
    pub age: f64,
    pub monthly_income: f64,
    pub vehicle_price: f64,
    pub down_payment: f64,
    pub employment_years: f64,
}

/// Risk verdict returned by `POST /predict`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PredictResponse {
    pub risk_score: f64,
    pub risk_level: String,
    pub decision: String,
    pub explanation: String,
}

#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    /// The backend answered with a non-success status code.
    #[error("HTTP {code}: {body}")]
    Status { code: u16, body: String },
    /// The request never produced an HTTP response.
    #[error("{0}")]
    Transport(String),
    /// The response body was not the expected JSON shape.
    #[error("Invalid response: {0}")]
    Json(String),
}

#[derive(Debug, thiserror::Error)]
pub enum HealthError {
    #[error("Invalid health response: {0}")]
    InvalidResponse(String),
    #[error("HTTP {code}: {body}")]
    Status { code: u16, body: String },
    #[error("{0}")]
    Transport(String),
}

/// Submit an evaluation request and parse the verdict.
pub fn submit(api_url: &str, request: &PredictRequest) -> Result<PredictResponse, PredictError> {
    let url = format!("{api_url}/predict");
    let req = http_client::agent()
        .post(&url)
        .set("Accept", "application/json")
        .set("Content-Type", "application/json");

    let response = match req.send_json(request) {
        Ok(response) => response,
        Err(ureq::Error::Status(code, response)) => {
            let body =
                read_body_limited(response, MAX_PREDICT_RESPONSE_BYTES).unwrap_or_else(|err| err);
            return Err(PredictError::Status { code, body });
        }
        Err(ureq::Error::Transport(err)) => {
            return Err(PredictError::Transport(normalize_transport_message(
                err.to_string(),
            )));
        }
    };

    let body =
        read_body_limited(response, MAX_PREDICT_RESPONSE_BYTES).map_err(PredictError::Json)?;
    parse_predict_response(&body)
}

/// Probe `GET /health` and confirm the backend reports itself healthy.
pub fn check_health(api_url: &str) -> Result<(), HealthError> {
    let url = format!("{api_url}/health");
    let response = match http_client::agent().get(&url).call() {
        Ok(response) => response,
        Err(ureq::Error::Status(code, response)) => {
            let body =
                read_body_limited(response, MAX_HEALTH_RESPONSE_BYTES).unwrap_or_else(|err| err);
            return Err(HealthError::Status { code, body });
        }
        Err(ureq::Error::Transport(err)) => {
            return Err(HealthError::Transport(normalize_transport_message(
                err.to_string(),
            )));
        }
    };

    let body =
        read_body_limited(response, MAX_HEALTH_RESPONSE_BYTES).map_err(HealthError::InvalidResponse)?;
    parse_health_response(&body)
}

fn parse_predict_response(body: &str) -> Result<PredictResponse, PredictError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(PredictError::Json("Empty response body".to_string()));
    }
    serde_json::from_str(trimmed).map_err(|err| PredictError::Json(format!("{err}: {trimmed}")))
}

#[derive(Clone, Debug, Deserialize)]
struct HealthWire {
    status: Option<String>,
}

fn parse_health_response(body: &str) -> Result<(), HealthError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(HealthError::InvalidResponse(
            "Empty response body".to_string(),
        ));
    }
    let parsed: HealthWire = serde_json::from_str(trimmed)
        .map_err(|err| HealthError::InvalidResponse(format!("{err}: {trimmed}")))?;
    match parsed.status.as_deref() {
        Some("ok") => Ok(()),
        Some(other) => Err(HealthError::InvalidResponse(format!(
            "Unexpected status {other:?}"
        ))),
        None => Err(HealthError::InvalidResponse(
            "Missing status field".to_string(),
        )),
    }
}

// The UI prints transport failures as-is; some come through with no text.
fn normalize_transport_message(message: String) -> String {
    if message.trim().is_empty() {
        "Unknown error".to_string()
    } else {
        message
    }
}

fn read_body_limited(response: ureq::Response, max_bytes: usize) -> Result<String, String> {
    let bytes = http_client::read_response_bytes(response, max_bytes)
        .map_err(|err| err.to_string())?;
    String::from_utf8(bytes).map_err(|err| err.to_string())
}
