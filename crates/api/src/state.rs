use crate::services::MovieService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference-counted internally.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: movies_db::DbPool,
    /// Movie operations, backed by the same pool.
    pub movies: MovieService,
}

impl AppState {
    pub fn new(pool: movies_db::DbPool) -> Self {
        Self {
            movies: MovieService::new(pool.clone()),
            pool,
        }
    }
}
