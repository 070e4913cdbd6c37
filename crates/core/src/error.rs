#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// `key` is whatever the caller looked the entity up by (id or slug).
    #[error("Entity not found: {entity} {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Validation failed: {0}")]
    Validation(String),
}
