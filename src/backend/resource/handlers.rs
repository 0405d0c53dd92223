/**
 * Generic CRUD Handlers
 *
 * Handlers shared by every [`Resource`]. Each one logs the attempt, checks
 * its preconditions in a fixed order and only then touches the store:
 *
 * 0. path id must be an `i32` (get, update, delete)
 * 1. path id must be at least 1 (update, delete)
 * 2. body must be present and parse (create, update)
 * 3. body id must equal the path id (update)
 * 4. record must exist (get, update, delete)
 * 5. body must pass field validation (create, update)
 *
 * Steps 0-3 never reach the store. Store failures become
 * `BackendError::Internal`, which logs the detailed message and answers
 * with a generic 500.
 */

use std::fmt::Display;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header::LOCATION, HeaderName, StatusCode},
    response::Json,
};
use validator::Validate;

use crate::backend::error::BackendError;
use crate::backend::resource::Resource;
use crate::backend::server::state::AppState;
use crate::backend::store::Entity;
use crate::shared::SharedError;

/// Response of a successful create: `201`, `Location` header and the wrapped record
pub type CreatedResponse = (StatusCode, [(HeaderName, String); 1], Json<serde_json::Value>);

fn location<R: Resource>(action: &str) -> String {
    format!("{} - {}", R::NAME, action)
}

fn internal(location: &str, err: impl Display) -> BackendError {
    BackendError::internal(format!("{}: {}", location, err))
}

fn parse_body<T>(location: &str, body: Result<Json<T>, JsonRejection>) -> Result<T, BackendError> {
    match body {
        Ok(Json(dto)) => Ok(dto),
        Err(rejection) => {
            tracing::warn!("{}: Empty or malformed request was submitted", location);
            Err(SharedError::serialization(rejection.body_text()).into())
        }
    }
}

fn parse_id(location: &str, path: Result<Path<i32>, PathRejection>) -> Result<i32, BackendError> {
    let Path(id) = path.map_err(|rejection| {
        tracing::warn!("{}: Invalid id in path", location);
        BackendError::from(rejection)
    })?;
    Ok(id)
}

fn validate<T: Validate>(location: &str, dto: &T) -> Result<(), BackendError> {
    dto.validate().map_err(|errors| {
        tracing::warn!("{}: Data was incomplete", location);
        BackendError::from(SharedError::from(errors))
    })
}

/// `GET {PATH}` - all records
pub async fn list<R: Resource>(
    State(state): State<AppState>,
) -> Result<Json<Vec<R::ReadDto>>, BackendError> {
    let location = location::<R>("List");
    tracing::info!("{}: Attempted call", location);

    let records = R::repository(&state)
        .find_all()
        .await
        .map_err(|e| internal(&location, e))?;
    let response = records
        .into_iter()
        .map(<R::ReadDto as From<R::Entity>>::from)
        .collect::<Vec<_>>();

    tracing::info!("{}: Successful, {} records", location, response.len());
    Ok(Json(response))
}

/// `GET {PATH}/{id}` - one record or 404
pub async fn get_by_id<R: Resource>(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<R::ReadDto>, BackendError> {
    let location = location::<R>("GetById");
    let id = parse_id(&location, path)?;
    tracing::info!("{}: Attempted call for id: {}", location, id);

    let record = R::repository(&state)
        .find_by_id(id)
        .await
        .map_err(|e| internal(&location, e))?
        .ok_or_else(|| {
            tracing::warn!("{}: Failed to retrieve record with id: {}", location, id);
            BackendError::not_found(format!("Record with id {} was not found", id))
        })?;

    tracing::info!("{}: Successfully got record with id: {}", location, id);
    Ok(Json(<R::ReadDto as From<R::Entity>>::from(record)))
}

/// `POST {PATH}` - create a record
///
/// Responds with `201 Created`, a `Location` header pointing at the new
/// record and a body of the form `{ "<singular>": <read dto> }`.
pub async fn create<R: Resource>(
    State(state): State<AppState>,
    body: Result<Json<R::CreateDto>, JsonRejection>,
) -> Result<CreatedResponse, BackendError> {
    let location = location::<R>("Create");
    tracing::info!("{}: Create attempted", location);

    let dto = parse_body(&location, body)?;
    validate(&location, &dto)?;

    let created = R::repository(&state)
        .create(<R::Entity as From<R::CreateDto>>::from(dto))
        .await
        .map_err(|e| internal(&location, format!("Creation failed: {}", e)))?;
    let id = created.id();

    let read = serde_json::to_value(<R::ReadDto as From<R::Entity>>::from(created))
        .map_err(|e| internal(&location, e))?;
    let mut body = serde_json::Map::new();
    body.insert(R::SINGULAR.to_string(), read);

    tracing::info!("{}: Creation was successful, id: {}", location, id);
    Ok((
        StatusCode::CREATED,
        [(LOCATION, format!("{}/{}", R::PATH, id))],
        Json(serde_json::Value::Object(body)),
    ))
}

/// `PUT {PATH}/{id}` - replace a record
pub async fn update<R: Resource>(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    body: Result<Json<R::UpdateDto>, JsonRejection>,
) -> Result<StatusCode, BackendError> {
    let location = location::<R>("Update");
    let id = parse_id(&location, path)?;
    tracing::info!("{}: Update attempted on record with id: {}", location, id);

    if id < 1 {
        tracing::warn!("{}: Update failed with bad id: {}", location, id);
        return Err(BackendError::bad_request(format!("Invalid id: {}", id)));
    }
    let dto = parse_body(&location, body)?;
    if R::update_id(&dto) != id {
        tracing::warn!(
            "{}: Update failed, path id {} does not match body id {}",
            location,
            id,
            R::update_id(&dto)
        );
        return Err(BackendError::bad_request("Path id does not match body id"));
    }

    let repository = R::repository(&state);
    let exists = repository
        .exists(id)
        .await
        .map_err(|e| internal(&location, e))?;
    if !exists {
        tracing::warn!("{}: Failed to retrieve record with id: {}", location, id);
        return Err(BackendError::not_found(format!("Record with id {} was not found", id)));
    }

    validate(&location, &dto)?;

    let updated = repository
        .update(<R::Entity as From<R::UpdateDto>>::from(dto))
        .await
        .map_err(|e| internal(&location, e))?;
    if !updated {
        return Err(internal(&location, format!("Update operation failed for id {}", id)));
    }

    tracing::info!("{}: Record with id {} successfully updated", location, id);
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE {PATH}/{id}` - remove a record
pub async fn delete<R: Resource>(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, BackendError> {
    let location = location::<R>("Delete");
    let id = parse_id(&location, path)?;
    tracing::info!("{}: Delete attempted on record with id: {}", location, id);

    if id < 1 {
        tracing::warn!("{}: Delete failed with bad id: {}", location, id);
        return Err(BackendError::bad_request(format!("Invalid id: {}", id)));
    }

    let repository = R::repository(&state);
    let exists = repository
        .exists(id)
        .await
        .map_err(|e| internal(&location, e))?;
    if !exists {
        tracing::warn!("{}: Failed to retrieve record with id: {}", location, id);
        return Err(BackendError::not_found(format!("Record with id {} was not found", id)));
    }

    let deleted = repository
        .delete(id)
        .await
        .map_err(|e| internal(&location, e))?;
    if !deleted {
        return Err(internal(&location, format!("Delete operation failed for id {}", id)));
    }

    tracing::info!("{}: Record with id {} successfully deleted", location, id);
    Ok(StatusCode::NO_CONTENT)
}
