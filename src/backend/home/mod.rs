//! Home Controller
//!
//! Demo endpoints under `/api/home`. Each one logs at a different level so
//! the log configuration can be checked against a running server.

use axum::{
    extract::{rejection::PathRejection, Path},
    http::StatusCode,
    response::Json,
};

use crate::backend::error::BackendError;

type IdPath = Result<Path<i32>, PathRejection>;

/// `GET /api/home`
pub async fn get_values() -> Json<Vec<&'static str>> {
    tracing::info!("Home - GetValues: Accessed Home Controller");
    Json(vec!["value1", "value2"])
}

/// `GET /api/home/{id}`
pub async fn get_value(path: IdPath) -> Result<Json<&'static str>, BackendError> {
    let Path(id) = path?;
    tracing::debug!("Home - GetValue: Requested value {}", id);
    Ok(Json("value"))
}

/// `POST /api/home`
pub async fn post_value(body: String) -> StatusCode {
    tracing::error!("Home - PostValue: Received {} bytes", body.len());
    StatusCode::OK
}

/// `PUT /api/home/{id}`
pub async fn put_value(path: IdPath, body: String) -> Result<StatusCode, BackendError> {
    let Path(id) = path?;
    tracing::trace!("Home - PutValue: id {} received {} bytes", id, body.len());
    Ok(StatusCode::OK)
}

/// `DELETE /api/home/{id}`
pub async fn delete_value(path: IdPath) -> Result<StatusCode, BackendError> {
    let Path(id) = path?;
    tracing::warn!("Home - DeleteValue: Delete requested for {}", id);
    Ok(StatusCode::OK)
}
