//! Slug generation for movies.
//!
//! A slug is a URL-safe identifier derived from a title and release year.
//! It is recomputed from those two fields whenever it is needed and is never
//! an independent source of truth.

use std::sync::LazyLock;

use regex::Regex;

/// Matches every character outside the slug alphabet.
///
/// The `regex` engine runs in linear time, so adversarial titles cannot
/// trigger catastrophic backtracking.
static NON_SLUG_CHAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9_-]").expect("valid regex"));

/// Generate the slug for a movie.
///
/// Convention: `{title with [^A-Za-z0-9_-] replaced by '-', lowercased}-{year}`
///
/// Each replaced character yields exactly one dash; runs are not collapsed.
///
/// # Examples
///
/// ```
/// use movies_core::slug::generate_slug;
///
/// assert_eq!(generate_slug("The Matrix", 1999), "the-matrix-1999");
/// assert_eq!(generate_slug("Amélie!!", 2001), "am-lie---2001");
/// ```
pub fn generate_slug(title: &str, year_of_release: i32) -> String {
    let slugged_title = NON_SLUG_CHAR_RE.replace_all(title, "-").to_lowercase();
    format!("{slugged_title}-{year_of_release}")
}
