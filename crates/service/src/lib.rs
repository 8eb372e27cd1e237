use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{error, info};

use claimwise_llm::CompletionClient;

pub const DOC_ASSIST_MODEL_VERSION: &str = "doc-sum-v1.0";
pub const UNDERWRITING_MODEL_VERSION: &str = "uw-signals-v1.0";

const SUMMARIZE_PROMPT: &str = "Summarize the policy change document.";

#[derive(Clone)]
pub struct AppState {
    client: CompletionClient,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            client: CompletionClient::new("gpt-4o"),
        }
    }

    pub fn client(&self) -> &CompletionClient {
        &self.client
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn doc_assist_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/docs/summarize", post(summarize))
        .with_state(state)
}

pub fn underwriting_router() -> Router {
    Router::new().route("/underwriting/signals", post(signals))
}

/// `BIND_ADDR` overrides the service's default bind address.
pub fn bind_addr(default_port: u16) -> Result<SocketAddr, anyhow::Error> {
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| format!("0.0.0.0:{default_port}"));
    Ok(addr.parse()?)
}

#[derive(Debug, Default, Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    pub summary: Vec<String>,
    pub citations: Vec<String>,
    pub model_version: String,
}

#[derive(Debug, Serialize)]
pub struct SignalsResponse {
    pub decision: String,
    pub reasons: Vec<String>,
    pub data_refs: Vec<String>,
    pub model_version: String,
}

/// Canned summarization stub. The posted document text is untrusted, so it
/// goes through the redacting completion client before anything observes it;
/// the response body itself stays fixed.
pub async fn summarize(
    State(state): State<Arc<AppState>>,
    body: Option<Json<SummarizeRequest>>,
) -> Result<Json<SummarizeResponse>, AppError> {
    let request = body.map(|Json(request)| request).unwrap_or_default();
    let context = if request.text.is_empty() {
        None
    } else {
        Some(request.text.as_str())
    };
    let envelope = state
        .client
        .complete(SUMMARIZE_PROMPT, context)
        .map_err(AppError::internal)?;
    info!(
        tokens = envelope.tokens,
        latency_ms = envelope.latency_ms,
        "summarize stub completion"
    );
    Ok(Json(SummarizeResponse {
        summary: vec![
            "Increased liability limit to 1M".to_string(),
            "Added cyber endorsement CYB-001".to_string(),
        ],
        citations: vec!["Sec 2.1".to_string(), "End CYB-001".to_string()],
        model_version: DOC_ASSIST_MODEL_VERSION.to_string(),
    }))
}

/// Canned underwriting signals stub.
// TODO: enrichment + model call
pub async fn signals(body: Option<Json<Value>>) -> Json<SignalsResponse> {
    let _submission = body.map(|Json(value)| value).unwrap_or(Value::Null);
    Json(SignalsResponse {
        decision: "refer".to_string(),
        reasons: vec!["New venture".to_string(), "Prior loss in 12m".to_string()],
        data_refs: vec![
            "years_in_business".to_string(),
            "loss_count_12m".to_string(),
        ],
        model_version: UNDERWRITING_MODEL_VERSION.to_string(),
    })
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn bad_request<E: ToString>(msg: E) -> Self {
        Self::BadRequest(msg.to_string())
    }

    pub fn internal<E: Into<anyhow::Error>>(err: E) -> Self {
        Self::Internal(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            AppError::Internal(err) => {
                error!("internal_error" = %err);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
            }
        }
    }
}
