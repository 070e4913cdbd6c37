pub mod health;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /movies                   list, create
/// /movies/{id}              get (by id or slug), update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(movies::router())
}
