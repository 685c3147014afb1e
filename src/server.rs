//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations, mailer selection, limiter
//! housekeeping and the Axum server lifecycle.

use crate::config::Config;
use crate::infrastructure::mail::{Mailer, NullMailer, SmtpMailer};
use crate::routes::app_router;
use crate::state::{AppState, Repositories, StateOptions};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use axum::http::{HeaderValue, Method, header};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tokio_retry::Retry;
use tokio_retry::strategy::FixedInterval;
use tower::Layer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::normalize_path::NormalizePathLayer;

/// Pause between database connection attempts at startup.
const CONNECT_RETRY_INTERVAL: Duration = Duration::from_secs(5);

/// How often rate-limiter keys with a refilled budget are dropped.
const LIMITER_PRUNE_INTERVAL: Duration = Duration::from_secs(60);

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool (with retry)
/// - Migrations
/// - SMTP mailer, or the logging-only mailer when SMTP is not configured
/// - Rate limiter pruning task
/// - Axum HTTP server with graceful shutdown
///
/// The pool is closed after the server stops accepting requests.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails after all retries
/// - Migrations fail
/// - The SMTP configuration is invalid
/// - Server bind fails
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_with_retry(&config).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Migrations applied");

    let mailer = build_mailer(&config)?;
    tracing::info!(mailer = mailer.name(), "Mailer ready");

    let repositories = Repositories::postgres(Arc::new(pool.clone()));
    let state = AppState::new(repositories, mailer, StateOptions::from_config(&config));

    let limits = state.rate_limits.clone();
    let pruner = tokio::spawn(async move {
        let mut interval = tokio::time::interval(LIMITER_PRUNE_INTERVAL);
        loop {
            interval.tick().await;
            limits.retain_recent();
        }
    });

    let router = app_router(state).layer(cors_layer(config.cors_origin.as_deref())?);
    let app = NormalizePathLayer::trim_trailing_slash().layer(router);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    pruner.abort();
    pool.close().await;
    tracing::info!("Database pool closed, shutdown complete");

    Ok(())
}

/// Connects to PostgreSQL, retrying `DB_CONNECT_RETRIES` times.
async fn connect_with_retry(config: &Config) -> Result<PgPool> {
    let options = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime));

    let strategy = FixedInterval::new(CONNECT_RETRY_INTERVAL).take(config.db_connect_retries);

    Retry::spawn(strategy, || {
        let options = options.clone();
        async move {
            options
                .connect(&config.database_url)
                .await
                .inspect_err(|e| tracing::warn!(error = %e, "Database connection attempt failed"))
        }
    })
    .await
    .context("Failed to connect to database")
}

fn build_mailer(config: &Config) -> Result<Arc<dyn Mailer>> {
    match &config.smtp {
        Some(smtp) => {
            let mailer = SmtpMailer::new(
                smtp,
                &config.email_from,
                Duration::from_secs(config.smtp_timeout_secs),
            )
            .context("Invalid SMTP configuration")?;
            Ok(Arc::new(mailer))
        }
        None => {
            tracing::warn!("SMTP_HOST not set, contact notifications will only be logged");
            Ok(Arc::new(NullMailer))
        }
    }
}

/// Restricts browser access to `CORS_ORIGIN` when set; any origin otherwise.
fn cors_layer(origin: Option<&str>) -> Result<CorsLayer> {
    let allow_origin = match origin {
        Some(origin) => AllowOrigin::exact(
            HeaderValue::from_str(origin).context("CORS_ORIGIN is not a valid header value")?,
        ),
        None => AllowOrigin::any(),
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]))
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down gracefully"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down gracefully"),
    }
}
