//! Brand Hub Core Library
//!
//! Provides the core business logic of the brand management console:
//! - Brand store and resource management (Brand Service)
//! - Operator profile (Profile Service)
//! - Theme preference (Preference Service)
//!
//! Storage is abstracted behind [`KeyValueStore`]; every mutation is written through
//! to the store as a full JSON snapshot and announced on the [`NotificationChannel`].

pub mod error;
pub mod notification;
pub mod persistence;
pub mod seed;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use notification::{Notification, NotificationChannel, NotificationLevel};
pub use services::ServiceContext;
pub use traits::{InMemoryKeyValueStore, KeyValueStore};
