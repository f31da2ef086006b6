//! Durable `KeyValueStore` implementations.

#[cfg(feature = "json-store")]
mod json_file_store;

#[cfg(feature = "json-store")]
pub use json_file_store::JsonFileStore;

#[cfg(feature = "sqlite-store")]
mod sqlite;

#[cfg(feature = "sqlite-store")]
pub use sqlite::SqliteStore;
