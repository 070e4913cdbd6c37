//! Repository for the `movies` and `genres` tables.
//!
//! Genres are stored one row per name keyed by `movieid`. Every write that
//! touches both tables runs in a single transaction and only commits once
//! the movie row itself was written; otherwise the transaction is rolled
//! back and nothing is persisted.

use movies_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::movie::{Movie, MovieRow, MovieWithGenresRow};

/// Column list for single-row lookups. `slug` is derived, so it is not read back.
const COLUMNS: &str = "id, title, yearofrelease";

/// Provides CRUD operations for movies and their genres.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a movie and its genres.
    ///
    /// Returns `false` (and writes nothing) if the movie row was not inserted.
    pub async fn create(pool: &PgPool, movie: &Movie) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let result = sqlx::query(
            "INSERT INTO movies (id, slug, title, yearofrelease)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(movie.id)
        .bind(movie.slug())
        .bind(&movie.title)
        .bind(movie.year_of_release)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        Self::insert_genres(&mut tx, movie.id, &movie.genres).await?;

        tx.commit().await?;
        Ok(true)
    }

    /// Find a movie by its id, with genres attached.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let mut conn = pool.acquire().await?;

        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        let row = sqlx::query_as::<_, MovieRow>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };
        let genres = Self::genres_for(&mut conn, row.id).await?;
        Ok(Some(row.with_genres(genres)))
    }

    /// Find a movie by its slug, with genres attached.
    ///
    /// Slugs are not unique; if several movies share one, an arbitrary match
    /// is returned.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Movie>, sqlx::Error> {
        let mut conn = pool.acquire().await?;

        let query = format!("SELECT {COLUMNS} FROM movies WHERE slug = $1 LIMIT 1");
        let row = sqlx::query_as::<_, MovieRow>(&query)
            .bind(slug)
            .fetch_optional(&mut *conn)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };
        let genres = Self::genres_for(&mut conn, row.id).await?;
        Ok(Some(row.with_genres(genres)))
    }

    /// List every movie with its genres. Order is unspecified.
    ///
    /// Movies without genres come back with an empty list.
    pub async fn list(pool: &PgPool) -> Result<Vec<Movie>, sqlx::Error> {
        let rows = sqlx::query_as::<_, MovieWithGenresRow>(
            "SELECT m.id, m.title, m.yearofrelease,
                    COALESCE(array_agg(g.name) FILTER (WHERE g.name IS NOT NULL), '{}') AS genres
             FROM movies m
             LEFT JOIN genres g ON g.movieid = m.id
             GROUP BY m.id",
        )
        .fetch_all(pool)
        .await?;

        Ok(rows.into_iter().map(Movie::from).collect())
    }

    /// Replace a movie's title, year, slug, and full genre list.
    ///
    /// Returns `false` (and writes nothing) if no movie with that id exists.
    pub async fn update(pool: &PgPool, movie: &Movie) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let result = sqlx::query(
            "UPDATE movies SET slug = $2, title = $3, yearofrelease = $4
             WHERE id = $1",
        )
        .bind(movie.id)
        .bind(movie.slug())
        .bind(&movie.title)
        .bind(movie.year_of_release)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        sqlx::query("DELETE FROM genres WHERE movieid = $1")
            .bind(movie.id)
            .execute(&mut *tx)
            .await?;
        Self::insert_genres(&mut tx, movie.id, &movie.genres).await?;

        tx.commit().await?;
        Ok(true)
    }

    /// Delete a movie and its genre rows. Returns `true` if the movie existed.
    pub async fn delete_by_id(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM genres WHERE movieid = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        tx.commit().await?;
        Ok(true)
    }

    /// Check whether a movie with the given id exists.
    pub async fn exists_by_id(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM movies WHERE id = $1")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(count > 0)
    }

    // -----------------------------------------------------------------------
    // Genre helpers
    // -----------------------------------------------------------------------

    async fn genres_for(conn: &mut PgConnection, movie_id: DbId) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT name FROM genres WHERE movieid = $1")
            .bind(movie_id)
            .fetch_all(&mut *conn)
            .await
    }

    /// Insert one genre row per name in a single statement.
    async fn insert_genres(
        conn: &mut PgConnection,
        movie_id: DbId,
        genres: &[String],
    ) -> Result<(), sqlx::Error> {
        if genres.is_empty() {
            return Ok(());
        }
        sqlx::query("INSERT INTO genres (movieid, name) SELECT $1, UNNEST($2::text[])")
            .bind(movie_id)
            .bind(genres)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }
}
