use std::{env, net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    error_handling::HandleErrorLayer,
    extract::DefaultBodyLimit,
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    BoxError, Router,
};
use sqlx::SqlitePool;
use tokio::sync::Mutex;
use tower::{buffer::BufferLayer, limit::RateLimitLayer, ServiceBuilder};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

use crate::app::{envy::Envy, errors::DefaultApiError};

mod app;
mod wallet;

pub struct AppState {
    pub pool: SqlitePool,
    pub envy: Arc<Envy>,
    /// Held by writers across the overdraft check and the insert.
    pub ledger_lock: Mutex<()>,
}

impl AppState {
    pub fn new(pool: SqlitePool, envy: Envy) -> Self {
        Self {
            pool,
            envy: Arc::new(envy),
            ledger_lock: Mutex::new(()),
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST]);

    let body_limit = state.envy.body_limit_bytes.unwrap_or(64 * 1024);
    let rate_limit = state.envy.rate_limit_per_second;

    let mut router = Router::new()
        .route("/", get(app::controller::get_root))
        .route("/health", get(app::controller::get_health))
        // wallet
        .route("/wallet/balance", get(wallet::controller::get_balance))
        .route(
            "/wallet/transactions",
            get(wallet::controller::get_transactions).post(wallet::controller::create_transaction),
        )
        .route(
            "/wallet/transactions/:id",
            get(wallet::controller::get_transaction_by_id),
        )
        .with_state(state);

    // layers
    if let Some(per_second) = rate_limit {
        router = router.layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(|err: BoxError| async move {
                    tracing::error!(%err);
                    DefaultApiError::InternalServerError.value()
                }))
                .layer(BufferLayer::new(1024))
                .layer(RateLimitLayer::new(per_second, Duration::from_secs(1))),
        );
    }

    router.layer(DefaultBodyLimit::max(body_limit)).layer(cors)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(%e);
    }

    tracing::info!("shutting down");
}

#[tokio::main]
async fn main() {
    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let _ = dotenvy::dotenv();
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    // tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match envy.debug {
        true => EnvFilter::new("debug"),
        false => EnvFilter::new("info"),
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("starting {} ({})", envy.app_name, envy.app_env);

    // properties
    let port = envy.port.unwrap_or(8000);

    let pool = app::util::sqlx::connect(&envy)
        .await
        .expect("failed to connect to database");

    tracing::info!("connected to db");

    app::util::sqlx::migrate(&pool)
        .await
        .expect("failed to run database migrations");

    tracing::info!("database initialized");

    let state = Arc::new(AppState::new(pool, envy));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(router(state).into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");
}
