/**
 * API Routes
 *
 * ## Authors (public)
 * - `GET /api/authors`, `POST /api/authors`
 * - `GET /api/authors/{id}`, `PUT /api/authors/{id}`, `DELETE /api/authors/{id}`
 *
 * ## Books (bearer token required)
 * - same shape as authors
 * - `POST`, `PUT` and `DELETE` additionally require the `Administrator` role
 *
 * ## Users
 * - `POST /api/users` - login
 *
 * ## Home
 * - `GET /api/home`, `POST /api/home`
 * - `GET /api/home/{id}`, `PUT /api/home/{id}`, `DELETE /api/home/{id}`
 */

use axum::{
    handler::Handler,
    middleware,
    routing::{get, post},
    Router,
};

use crate::backend::auth::login;
use crate::backend::authors::AuthorsResource;
use crate::backend::books::BooksResource;
use crate::backend::home;
use crate::backend::middleware::{auth_middleware, require_administrator};
use crate::backend::resource::{create, delete, get_by_id, list, update};
use crate::backend::server::state::AppState;

/// Author routes
pub fn author_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/authors",
            get(list::<AuthorsResource>).post(create::<AuthorsResource>),
        )
        .route(
            "/api/authors/{id}",
            get(get_by_id::<AuthorsResource>)
                .put(update::<AuthorsResource>)
                .delete(delete::<AuthorsResource>),
        )
}

/// Book routes
///
/// Every route passes through `auth_middleware`; the mutating ones also
/// pass through `require_administrator`, which runs after it.
pub fn book_routes(app_state: AppState) -> Router<AppState> {
    let admin = || middleware::from_fn(require_administrator);

    Router::new()
        .route(
            "/api/books",
            get(list::<BooksResource>).post(create::<BooksResource>.layer(admin())),
        )
        .route(
            "/api/books/{id}",
            get(get_by_id::<BooksResource>)
                .put(update::<BooksResource>.layer(admin()))
                .delete(delete::<BooksResource>.layer(admin())),
        )
        .route_layer(middleware::from_fn_with_state(app_state, auth_middleware))
}

/// Login route
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/api/users", post(login))
}

/// Home demo routes
pub fn home_routes() -> Router<AppState> {
    Router::new()
        .route("/api/home", get(home::get_values).post(home::post_value))
        .route(
            "/api/home/{id}",
            get(home::get_value)
                .put(home::put_value)
                .delete(home::delete_value),
        )
}

/// Configure API routes
pub fn configure_api_routes(router: Router<AppState>, app_state: AppState) -> Router<AppState> {
    router
        .merge(author_routes())
        .merge(book_routes(app_state))
        .merge(user_routes())
        .merge(home_routes())
}
