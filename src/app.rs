/*
 * Responsibility
 * - Config読み込み → tracing / panic hook 初期化 → Router 組み立て
 * - Middleware の適用 (request-id / trace / body limit)
 * - axum::serve() で起動、SIGINT / SIGTERM で graceful shutdown
 */
use std::{panic, process};

use axum::Router;
use tokio::signal;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    api,
    config::{AppEnv, Config},
    error::AppError,
    middleware,
};

fn init_tracing(app_env: AppEnv) {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=info,echo_service=debug,tower_http=debug cargo run
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info"));

    // JSON lines in production, human-readable otherwise.
    let json = app_env.is_production();

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(|| tracing_subscriber::fmt::layer()))
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    // Keep the default hook as a fallback (prints to stderr with location/payload).
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        // Always surface panics via tracing; stderr may be hidden depending on the launcher.
        tracing::error!(?info, "panic");

        // Development: fail fast. Production: default behavior, server keeps running.
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install SIGINT handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received SIGINT, starting graceful shutdown"),
        () = terminate => tracing::info!("received SIGTERM, starting graceful shutdown"),
    }
}

pub async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;
    init_tracing(config.app_env);
    init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        "starting echo service in {:?} mode on {}:{}",
        config.app_env,
        config.host,
        config.port
    );

    let app = build_router(&config);
    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, host = %config.host, port = config.port, "failed to bind");
            AppError::Internal
        })?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "server error");
            AppError::Internal
        })?;

    tracing::info!("server shut down gracefully");
    Ok(())
}

pub fn build_router(config: &Config) -> Router {
    middleware::http::apply(api::routes(), config.body_limit_bytes)
}
