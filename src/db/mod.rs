//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows, plus their editable drafts
//! - `records.rs`: column bindings per table
//! - `schema.rs`: versioned SQL DDL (SQLite-first)
//! - `sqlite.rs`: the generic content store

pub mod models;
mod records;
pub mod schema;
pub mod sqlite;

pub use models::EntityKind;
pub use sqlite::{ContentStore, Record, SqlitePool, connect};
