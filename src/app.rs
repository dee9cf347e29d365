/*
 * Responsibility
 * - Load Config -> build dependencies -> assemble the Router
 * - Apply middleware (API key / security headers / CORS / HTTP layers)
 * - Start with axum::serve() and stop on Ctrl-C / SIGTERM
 */
use std::{panic, process};

use anyhow::Result;
use axum::{Router, routing::get};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api::{
    self,
    docs::DocsAccess,
    v1::handlers::{health::health, root::root},
};
use crate::{config::Config, middleware, state::AppState};

fn init_tracing(debug: bool) {
    // RUST_LOG wins when set, e.g. RUST_LOG=info,items_api=debug,tower_http=debug
    let default_filter = if debug {
        "debug,tower_http=debug"
    } else {
        "info,tower_http=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        tracing::error!(?info, "panic");

        // Development: crash the whole process so it gets noticed.
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    let config = Config::from_env()?;
    init_tracing(config.debug);
    init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        app = %config.app_name,
        version = %config.app_version,
        environment = %config.environment,
        addr = %config.addr,
        "starting API in {:?} mode",
        config.app_env
    );
    tracing::info!(
        aws_region = %config.deployment.aws_region,
        aws_account_id = ?config.deployment.aws_account_id,
        ecr_repository_uri = ?config.deployment.ecr_repository_uri,
        ecs_cluster_name = ?config.deployment.ecs_cluster_name,
        ecs_service_name = ?config.deployment.ecs_service_name,
        "deployment target"
    );

    let state = AppState::from_config(&config);
    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

pub fn build_router(state: AppState, config: &Config) -> Router {
    let docs_access = DocsAccess::resolve(config);
    tracing::debug!(?docs_access, "docs endpoints");

    let mut router = Router::new()
        .route("/health", get(health))
        // The nested "/" only matches the bare prefix; this serves "{prefix}/" too.
        .route(&format!("{}/", config.api_prefix), get(root))
        .nest(&config.api_prefix, api::v1::routes(state.clone()));

    if let Some(docs) = api::docs::routes(docs_access, state.clone()) {
        router = router.merge(docs);
    }

    let router = router.with_state(state);
    let router = middleware::security_headers::apply(router);
    let router = middleware::cors::apply(router, config);
    middleware::http::apply(router)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    tracing::info!("shutdown signal received, draining connections");
}
