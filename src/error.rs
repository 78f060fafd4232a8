use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslateError {
    /// Any failure from language handling or the provider call
    #[error("Translation failed: {0}")]
    Failed(String),

    /// Body rejected before reaching the handler
    #[error("{0}")]
    InvalidRequest(String),
}

impl From<anyhow::Error> for TranslateError {
    fn from(err: anyhow::Error) -> Self {
        TranslateError::Failed(err.to_string())
    }
}

impl From<JsonRejection> for TranslateError {
    fn from(rejection: JsonRejection) -> Self {
        TranslateError::InvalidRequest(rejection.body_text())
    }
}

impl TranslateError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            TranslateError::Failed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            TranslateError::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for TranslateError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
