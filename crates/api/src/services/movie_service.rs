//! Movie service.
//!
//! A thin layer over [`MovieRepo`]. The only behavioural difference from
//! calling the repository directly is `update`, which checks existence
//! first and reports a missing movie as `None`.

use movies_core::types::DbId;
use movies_db::models::movie::Movie;
use movies_db::repositories::MovieRepo;
use movies_db::DbPool;
use tracing::instrument;

#[derive(Clone)]
pub struct MovieService {
    pool: DbPool,
}

impl MovieService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    #[instrument(skip(self, movie), fields(movie_id = %movie.id))]
    pub async fn create(&self, movie: &Movie) -> Result<bool, sqlx::Error> {
        let created = MovieRepo::create(&self.pool, movie).await?;
        if created {
            tracing::info!(slug = %movie.slug(), genres = movie.genres.len(), "Movie created");
        }
        Ok(created)
    }

    pub async fn get_by_id(&self, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        MovieRepo::find_by_id(&self.pool, id).await
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<Movie>, sqlx::Error> {
        MovieRepo::find_by_slug(&self.pool, slug).await
    }

    pub async fn get_all(&self) -> Result<Vec<Movie>, sqlx::Error> {
        MovieRepo::list(&self.pool).await
    }

    /// Replace a movie's fields and genres.
    ///
    /// Returns `None` if no movie with that id exists.
    #[instrument(skip(self, movie), fields(movie_id = %movie.id))]
    pub async fn update(&self, movie: Movie) -> Result<Option<Movie>, sqlx::Error> {
        if !MovieRepo::exists_by_id(&self.pool, movie.id).await? {
            return Ok(None);
        }

        // The row can still vanish between the check and the write.
        if !MovieRepo::update(&self.pool, &movie).await? {
            tracing::debug!("Movie deleted concurrently with update");
            return Ok(None);
        }

        tracing::info!(slug = %movie.slug(), "Movie updated");
        Ok(Some(movie))
    }

    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let deleted = MovieRepo::delete_by_id(&self.pool, id).await?;
        if deleted {
            tracing::info!("Movie deleted");
        }
        Ok(deleted)
    }
}
