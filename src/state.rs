/*
 * Responsibility
 * - Shared context bound to the Router (AppState)
 *   - items registry, API key guard, generated API docs, service name
 * - Meant to be cloned per request (everything inside is Arc / cheap to clone)
 */
use std::sync::Arc;

use crate::api::docs::ApiDocs;
use crate::config::Config;
use crate::repos::ItemRepo;
use crate::services::auth::{ApiKeyGuard, build_api_key_guard};

#[derive(Clone, Debug)]
pub struct AppState {
    pub items: ItemRepo,
    pub auth: Arc<ApiKeyGuard>,
    pub docs: Arc<ApiDocs>,
    pub service_name: Arc<str>,
}

impl AppState {
    pub fn new(
        items: ItemRepo,
        auth: Arc<ApiKeyGuard>,
        docs: Arc<ApiDocs>,
        service_name: &str,
    ) -> Self {
        Self {
            items,
            auth,
            docs,
            service_name: Arc::from(service_name),
        }
    }

    /// Fresh, empty registry wired from config.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            ItemRepo::new(),
            build_api_key_guard(config),
            Arc::new(ApiDocs::build(config)),
            &config.app_name,
        )
    }
}
