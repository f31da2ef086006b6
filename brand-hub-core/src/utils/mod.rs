//! Small pure helpers shared by the type and service layers.

pub mod date;
pub mod identity;

pub use date::parse_expiry;
pub use identity::brand_id;
