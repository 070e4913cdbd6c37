//! Movie entity and its database rows.

use movies_core::slug::generate_slug;
use movies_core::types::DbId;
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A movie with its genres attached.
///
/// The slug is never stored on the struct; it is recomputed from the title
/// and release year every time it is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub year_of_release: i32,
    pub genres: Vec<String>,
}

impl Movie {
    /// Build a new movie with a freshly generated id.
    pub fn new(title: String, year_of_release: i32, genres: Vec<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            title,
            year_of_release,
            genres,
        }
    }

    pub fn slug(&self) -> String {
        generate_slug(&self.title, self.year_of_release)
    }
}

// ---------------------------------------------------------------------------
// Rows
// ---------------------------------------------------------------------------

/// A row from the `movies` table. Genres live in their own table.
#[derive(Debug, Clone, FromRow)]
pub struct MovieRow {
    pub id: DbId,
    pub title: String,
    #[sqlx(rename = "yearofrelease")]
    pub year_of_release: i32,
}

impl MovieRow {
    pub fn with_genres(self, genres: Vec<String>) -> Movie {
        Movie {
            id: self.id,
            title: self.title,
            year_of_release: self.year_of_release,
            genres,
        }
    }
}

/// A `movies` row joined with its genre names aggregated into an array.
#[derive(Debug, Clone, FromRow)]
pub struct MovieWithGenresRow {
    pub id: DbId,
    pub title: String,
    #[sqlx(rename = "yearofrelease")]
    pub year_of_release: i32,
    pub genres: Vec<String>,
}

impl From<MovieWithGenresRow> for Movie {
    fn from(row: MovieWithGenresRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            year_of_release: row.year_of_release,
            genres: row.genres,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_follows_title_and_year() {
        let mut movie = Movie::new("The Matrix".into(), 1999, vec![]);
        assert_eq!(movie.slug(), "the-matrix-1999");

        movie.title = "The Matrix Reloaded".into();
        movie.year_of_release = 2003;
        assert_eq!(movie.slug(), "the-matrix-reloaded-2003");
    }

    #[test]
    fn new_generates_distinct_ids() {
        let a = Movie::new("A".into(), 2000, vec![]);
        let b = Movie::new("A".into(), 2000, vec![]);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn row_with_genres_keeps_fields() {
        let id = uuid::Uuid::new_v4();
        let row = MovieRow {
            id,
            title: "Heat".into(),
            year_of_release: 1995,
        };
        let movie = row.with_genres(vec!["Crime".into()]);
        assert_eq!(movie.id, id);
        assert_eq!(movie.title, "Heat");
        assert_eq!(movie.year_of_release, 1995);
        assert_eq!(movie.genres, vec!["Crime".to_string()]);
    }
}
