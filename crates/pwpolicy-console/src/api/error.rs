use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use pwpolicy_core::error::{ClientCode, PolicyError};

/// `PolicyError` as an HTTP response: `{"code": ..., "message": ...}`.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub PolicyError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.client_code() {
            ClientCode::BadRequest | ClientCode::UnsupportedVersion => StatusCode::BAD_REQUEST,
            ClientCode::NotFound => StatusCode::NOT_FOUND,
            ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "code": self.0.client_code().as_str(),
            "message": self.0.to_string(),
        });
        (self.status(), Json(body)).into_response()
    }
}
