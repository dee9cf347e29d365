/// Factory: build `ApiKeyGuard` from application `Config`.
use std::sync::Arc;

use crate::config::Config;
use crate::services::auth::ApiKeyGuard;

pub fn build_api_key_guard(config: &Config) -> Arc<ApiKeyGuard> {
    let guard = ApiKeyGuard::new(config.enable_api_key_auth, config.api_key.clone());

    if config.enable_api_key_auth && !guard.is_enforcing() {
        tracing::warn!(
            "API key auth is enabled but API_KEY is not set; every request is let through"
        );
    }

    Arc::new(guard)
}
