//! Resource Controller
//!
//! Authors and books share one controller implementation. A [`Resource`]
//! names the entity, its three DTO shapes and where its repository lives in
//! [`AppState`]; the handlers in [`handlers`] are generic over it.
//!
//! # Operations
//!
//! | Handler | Route | Success | Client errors |
//! |---|---|---|---|
//! | `list` | `GET {PATH}` | 200 | |
//! | `get_by_id` | `GET {PATH}/{id}` | 200 | 404 |
//! | `create` | `POST {PATH}` | 201 | 400 |
//! | `update` | `PUT {PATH}/{id}` | 204 | 400, 404 |
//! | `delete` | `DELETE {PATH}/{id}` | 204 | 400, 404 |
//!
//! Every handler answers store failures with a 500.

/// Generic CRUD handlers
pub mod handlers;

use serde::de::DeserializeOwned;
use serde::Serialize;
use validator::Validate;

use crate::backend::server::state::AppState;
use crate::backend::store::{Entity, RepositoryArc};

pub use handlers::{create, delete, get_by_id, list, update};

/// A CRUD resource served by the generic handlers
pub trait Resource: Send + Sync + 'static {
    /// Controller name used as the log location prefix, e.g. `"Authors"`
    const NAME: &'static str;

    /// Key wrapping the record in a `201 Created` body, e.g. `"author"`
    const SINGULAR: &'static str;

    /// Collection path, e.g. `"/api/authors"`
    const PATH: &'static str;

    type Entity: Entity + From<Self::CreateDto> + From<Self::UpdateDto>;
    type ReadDto: Serialize + From<Self::Entity> + Send + 'static;
    type CreateDto: DeserializeOwned + Validate + Send + 'static;
    type UpdateDto: DeserializeOwned + Validate + Send + 'static;

    /// The id embedded in an update body
    fn update_id(dto: &Self::UpdateDto) -> i32;

    /// The repository holding this resource's records
    fn repository(state: &AppState) -> RepositoryArc<Self::Entity>;
}
