use crate::inference::{RawRequest, TrainingReport};
use crate::server::AppState;
use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::sync::Arc;
use tracing::{debug, warn};

/// Body of every prediction response, success or failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn error(err: impl Display) -> Self {
        Self::new(format!("Error: {err}"))
    }

    pub fn is_error(&self) -> bool {
        self.message.starts_with("Error: ")
    }
}

/// `GET /predict-purchase-intent` and `GET /PurchaseIntent`.
///
/// Always answers 200; failures are reported in the message.
pub async fn predict_handler(
    State(state): State<Arc<AppState>>,
    query: Result<Query<RawRequest>, QueryRejection>,
) -> Json<MessageResponse> {
    let request = match query {
        Ok(Query(request)) => request,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "malformed query string");
            return Json(MessageResponse::error(rejection.body_text()));
        }
    };

    match state.service.predict(&request) {
        Ok(result) => {
            debug!(
                intent = %result.intent,
                purchase_probability = result.purchase_probability,
                "prediction served"
            );
            Json(MessageResponse::new(result.intent.label()))
        }
        Err(err) => {
            warn!(error = %err, "prediction rejected");
            Json(MessageResponse::error(err))
        }
    }
}

/// `GET /health`
pub async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ready" }))
}

/// `GET /model`
pub async fn model_handler(State(state): State<Arc<AppState>>) -> Json<TrainingReport> {
    Json(state.service.bundle().report.clone())
}
