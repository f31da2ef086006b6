//! `SeaORM` entities for `SqliteStore`.

pub mod kv_entry;
