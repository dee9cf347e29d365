//! Interactive API documentation.
//!
//! - `{prefix}/openapi.json` is generated by utoipa from the handler annotations.
//! - `/docs` (Swagger UI) and `/redoc` are HTML shells that load their bundles from a CDN.
//!
//! Whether these routes exist, and whether they sit behind the API key, is decided
//! once at startup (`DocsAccess::resolve`).

use axum::{Json, Router, extract::State, response::Html, routing::get};
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::v1::dto::{
    items::{ItemRequest, ItemResponse},
    messages::{HealthResponse, MessageResponse},
};
use crate::api::v1::handlers::{health, items, root};
use crate::config::Config;
use crate::error::{ErrorBody, ErrorResponse};
use crate::middleware;
use crate::state::AppState;

const DESCRIPTION: &str = "AWS ECS API Template";

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        root::root,
        items::list_items,
        items::get_item,
        items::create_item,
        items::update_item,
        items::delete_item,
    ),
    components(schemas(
        ItemRequest,
        ItemResponse,
        MessageResponse,
        HealthResponse,
        ErrorResponse,
        ErrorBody,
    )),
    modifiers(&BearerSecurity),
    tags(
        (name = "items", description = "In-memory items resource"),
        (name = "root", description = "Welcome message"),
        (name = "health", description = "Liveness probe"),
    )
)]
struct ApiSpec;

struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

/// How the docs endpoints are exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocsAccess {
    /// Registered behind the API key middleware.
    Guarded,
    /// Registered without auth.
    Open,
    /// Not registered at all.
    Disabled,
}

impl DocsAccess {
    pub fn resolve(config: &Config) -> Self {
        match (config.enable_docs, config.enable_api_key_docs) {
            (false, _) => Self::Disabled,
            (true, true) => Self::Guarded,
            (true, false) => Self::Open,
        }
    }
}

#[derive(Debug)]
pub struct ApiDocs {
    pub openapi: utoipa::openapi::OpenApi,
    pub openapi_url: String,
    pub title: String,
}

impl ApiDocs {
    pub fn build(config: &Config) -> Self {
        let mut openapi = ApiSpec::openapi();
        openapi.info.title = config.app_name.clone();
        openapi.info.version = config.app_version.clone();
        openapi.info.description = Some(DESCRIPTION.to_string());

        // Handler annotations use paths relative to the version prefix.
        let paths = std::mem::take(&mut openapi.paths.paths);
        openapi.paths.paths = paths
            .into_iter()
            .map(|(path, item)| (mount_path(&config.api_prefix, &path), item))
            .collect();

        Self {
            openapi,
            openapi_url: format!("{}/openapi.json", config.api_prefix),
            title: config.app_name.clone(),
        }
    }
}

// "/health" lives outside the prefix; "/" is the prefix itself.
fn mount_path(prefix: &str, path: &str) -> String {
    match path {
        "/health" => path.to_string(),
        "/" => prefix.to_string(),
        _ => format!("{prefix}{path}"),
    }
}

pub fn routes(access: DocsAccess, state: AppState) -> Option<Router<AppState>> {
    if access == DocsAccess::Disabled {
        return None;
    }

    let openapi_url = state.docs.openapi_url.clone();
    let router = Router::new()
        .route("/docs", get(swagger_ui))
        .route("/redoc", get(redoc))
        .route(&openapi_url, get(openapi_json));

    match access {
        DocsAccess::Guarded => Some(middleware::auth::api_key::apply(router, state)),
        _ => Some(router),
    }
}

async fn openapi_json(State(state): State<AppState>) -> Json<utoipa::openapi::OpenApi> {
    Json(state.docs.openapi.clone())
}

async fn swagger_ui(State(state): State<AppState>) -> Html<String> {
    Html(render(SWAGGER_UI_HTML, &state.docs, "Swagger UI"))
}

async fn redoc(State(state): State<AppState>) -> Html<String> {
    Html(render(REDOC_HTML, &state.docs, "ReDoc"))
}

fn render(template: &str, docs: &ApiDocs, page: &str) -> String {
    template
        .replace("{title}", &format!("{} - {}", docs.title, page))
        .replace("{openapi_url}", &docs.openapi_url)
}

const SWAGGER_UI_HTML: &str = r##"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
<div id="swagger-ui"></div>
<script src="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
<script>
window.ui = SwaggerUIBundle({
    url: "{openapi_url}",
    dom_id: "#swagger-ui",
    deepLinking: true,
    presets: [SwaggerUIBundle.presets.apis, SwaggerUIBundle.SwaggerUIStandalonePreset],
    layout: "BaseLayout",
});
</script>
</body>
</html>
"##;

const REDOC_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<meta name="viewport" content="width=device-width, initial-scale=1">
</head>
<body>
<redoc spec-url="{openapi_url}"></redoc>
<script src="https://cdn.jsdelivr.net/npm/redoc@2/bundles/redoc.standalone.js"></script>
</body>
</html>
"#;
