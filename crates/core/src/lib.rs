//! Domain primitives shared by the database and HTTP crates.

pub mod error;
pub mod slug;
pub mod types;
