/**
 * Error Conversion
 *
 * `IntoResponse` for `BackendError`, so handlers can return it directly.
 *
 * # Response Format
 *
 * Most errors are returned as JSON:
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 400
 * }
 * ```
 *
 * A rejected login returns the echoed username instead:
 * ```json
 * { "username": "reader" }
 * ```
 *
 * Internal faults log their detailed message at error level and send the
 * generic administrator message.
 */

use axum::extract::rejection::PathRejection;
use axum::response::{IntoResponse, Json, Response};

use crate::backend::error::types::BackendError;

/// Unparseable path parameters answer with the regular error envelope
impl From<PathRejection> for BackendError {
    fn from(rejection: PathRejection) -> Self {
        BackendError::bad_request(rejection.body_text())
    }
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            BackendError::Internal { message } => {
                tracing::error!("{}", message);
            }
            BackendError::LoginRejected(rejected) => {
                return (status, Json(rejected.clone())).into_response();
            }
            _ => {}
        }

        let body = serde_json::json!({
            "error": self.message(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}
