//! Domain entities and the row structs they are loaded from.

pub mod movie;
