pub mod auth;
pub mod extract;

pub use auth::RequireAdminKey;
pub use extract::{ApiJson, ApiPath};
