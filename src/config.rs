/*
 * Responsibility
 * - Read settings from the environment (.env is loaded first)
 * - Validate values once at startup (invalid values abort the boot)
 * - Everything here is immutable after Config::from_env() returns
 */
use std::net::SocketAddr;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

/// Where the service is deployed. Only logged at startup.
#[derive(Debug, Clone, Default)]
pub struct DeploymentTarget {
    pub aws_region: String,
    pub aws_account_id: Option<String>,
    pub ecr_repository_uri: Option<String>,
    pub ecs_cluster_name: Option<String>,
    pub ecs_service_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub environment: String,
    pub debug: bool,

    pub app_name: String,
    pub app_version: String,
    pub api_prefix: String,

    // API key guard
    pub api_key: Option<String>,
    pub enable_api_key_auth: bool,

    // Documentation endpoints
    pub enable_docs: bool,
    pub enable_api_key_docs: bool,

    pub cors_allowed_origins: Vec<String>,

    pub deployment: DeploymentTarget,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            app_env: AppEnv::Development,
            environment: "dev".to_string(),
            debug: false,
            app_name: "AWS ECS API Template".to_string(),
            app_version: "1.0.0".to_string(),
            api_prefix: "/api/v1".to_string(),
            api_key: None,
            enable_api_key_auth: true,
            enable_docs: true,
            enable_api_key_docs: false,
            cors_allowed_origins: Vec::new(),
            deployment: DeploymentTarget {
                aws_region: "us-east-1".to_string(),
                ..DeploymentTarget::default()
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port: u16 = match lookup("PORT") {
            Some(s) => s.trim().parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            None => defaults.addr.port(),
        };

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let environment = lookup("ENVIRONMENT").unwrap_or(defaults.environment);
        let app_env = AppEnv::parse(&environment);

        let api_prefix = match lookup("API_V1_STR") {
            Some(raw) => normalize_prefix(&raw).ok_or(ConfigError::Invalid("API_V1_STR"))?,
            None => defaults.api_prefix,
        };

        // An empty API_KEY is the same as no key at all.
        let api_key = lookup("API_KEY").filter(|k| !k.is_empty());

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        let deployment = DeploymentTarget {
            aws_region: lookup("AWS_REGION").unwrap_or(defaults.deployment.aws_region),
            aws_account_id: lookup("AWS_ACCOUNT_ID"),
            ecr_repository_uri: lookup("ECR_REPOSITORY_URI"),
            ecs_cluster_name: lookup("ECS_CLUSTER_NAME"),
            ecs_service_name: lookup("ECS_SERVICE_NAME"),
        };

        Ok(Self {
            addr,
            app_env,
            environment,
            debug: bool_var(&lookup, "DEBUG", defaults.debug)?,
            app_name: lookup("APP_NAME").unwrap_or(defaults.app_name),
            app_version: lookup("APP_VERSION").unwrap_or(defaults.app_version),
            api_prefix,
            api_key,
            enable_api_key_auth: bool_var(
                &lookup,
                "ENABLE_API_KEY_AUTH",
                defaults.enable_api_key_auth,
            )?,
            enable_docs: bool_var(&lookup, "ENABLE_DOCS", defaults.enable_docs)?,
            enable_api_key_docs: bool_var(
                &lookup,
                "ENABLE_API_KEY_DOCS",
                defaults.enable_api_key_docs,
            )?,
            cors_allowed_origins,
            deployment,
        })
    }
}

fn bool_var<F>(lookup: &F, key: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid(key)),
    }
}

// "/api/v1/" -> "/api/v1". Nesting at "/" is not allowed by axum, so it is rejected here.
fn normalize_prefix(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !trimmed.starts_with('/') || trimmed.contains(char::is_whitespace) {
        return None;
    }
    Some(trimmed.to_string())
}
