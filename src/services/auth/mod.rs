pub mod api_key;
pub mod factory;

pub use api_key::{ApiKeyGuard, AuthError, AuthorizedToken};
pub use factory::build_api_key_guard;
