//! Request and response bodies for the `/movies` resource, plus the mapping
//! between them and the [`Movie`] entity.
//!
//! Field names are camelCase on the wire (`yearOfRelease`).

use movies_core::types::DbId;
use movies_db::models::movie::Movie;
use serde::{Deserialize, Serialize};
use validator::Validate;

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Body of `POST /movies`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovieRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub year_of_release: i32,
    #[serde(default)]
    pub genres: Vec<String>,
}

impl CreateMovieRequest {
    /// Map to a new movie with a server-generated id.
    pub fn into_movie(self) -> Movie {
        Movie::new(self.title, self.year_of_release, self.genres)
    }
}

/// Body of `PUT /movies/{id}`. The id comes from the route.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMovieRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub year_of_release: i32,
    #[serde(default)]
    pub genres: Vec<String>,
}

impl UpdateMovieRequest {
    pub fn into_movie(self, id: DbId) -> Movie {
        Movie {
            id,
            title: self.title,
            year_of_release: self.year_of_release,
            genres: self.genres,
        }
    }
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieResponse {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub year_of_release: i32,
    pub genres: Vec<String>,
}

impl From<Movie> for MovieResponse {
    fn from(movie: Movie) -> Self {
        Self {
            slug: movie.slug(),
            id: movie.id,
            title: movie.title,
            year_of_release: movie.year_of_release,
            genres: movie.genres,
        }
    }
}

/// Body of `GET /movies`.
#[derive(Debug, Clone, Serialize)]
pub struct MoviesResponse {
    pub items: Vec<MovieResponse>,
}

impl From<Vec<Movie>> for MoviesResponse {
    fn from(movies: Vec<Movie>) -> Self {
        Self {
            items: movies.into_iter().map(MovieResponse::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn create_request_reads_camel_case() {
        let request: CreateMovieRequest = serde_json::from_value(json!({
            "title": "The Matrix",
            "yearOfRelease": 1999,
            "genres": ["Action", "Sci-Fi"],
        }))
        .unwrap();

        let movie = request.into_movie();
        assert_eq!(movie.title, "The Matrix");
        assert_eq!(movie.year_of_release, 1999);
        assert_eq!(movie.genres, vec!["Action".to_string(), "Sci-Fi".to_string()]);
    }

    #[test]
    fn missing_genres_default_to_empty() {
        let request: CreateMovieRequest =
            serde_json::from_value(json!({ "title": "Heat", "yearOfRelease": 1995 })).unwrap();
        assert!(request.genres.is_empty());
    }

    #[test]
    fn empty_title_fails_validation() {
        let request = UpdateMovieRequest {
            title: String::new(),
            year_of_release: 2000,
            genres: vec![],
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn update_request_uses_route_id() {
        let id = uuid::Uuid::new_v4();
        let request = UpdateMovieRequest {
            title: "Alien".into(),
            year_of_release: 1979,
            genres: vec!["Horror".into()],
        };
        assert_eq!(request.into_movie(id).id, id);
    }

    #[test]
    fn response_exposes_slug_and_camel_case_fields() {
        let movie = Movie::new("The Matrix".into(), 1999, vec!["Action".into()]);
        let id = movie.id;

        let value = serde_json::to_value(MovieResponse::from(movie)).unwrap();
        assert_eq!(value["id"], id.to_string());
        assert_eq!(value["title"], "The Matrix");
        assert_eq!(value["slug"], "the-matrix-1999");
        assert_eq!(value["yearOfRelease"], 1999);
        assert_eq!(value["genres"], json!(["Action"]));
    }

    #[test]
    fn movies_response_wraps_items() {
        let value = serde_json::to_value(MoviesResponse::from(Vec::new())).unwrap();
        assert_eq!(value, json!({ "items": [] }));
    }
}
