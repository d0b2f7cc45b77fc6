//! CyberSource hosted order page service.
//!
//! Loads configuration, wires the store adapters and serves the payment
//! plugin routes.

use std::error::Error;
use std::sync::Arc;

use tokio::signal;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cybersource_hop::adapters::http::payment::{payment_router, PaymentAppState};
use cybersource_hop::adapters::{
    InMemoryDirectory, InMemoryOrderStore, PostgresAddressReader, PostgresDirectoryReader,
    PostgresOrderRepository,
};
use cybersource_hop::application::PaymentSettings;
use cybersource_hop::config::{AppConfig, DatabaseConfig, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let settings = Arc::new(PaymentSettings::new(
        config.gateway.to_credentials(),
        config.gateway.additional_fee.clone(),
        &config.store.host,
        config.store.ssl_enabled,
        config.store.primary_currency_id()?,
    ));

    let state = match &config.database {
        Some(database) => postgres_state(database, settings).await?,
        None => {
            tracing::warn!("no database configured, using empty in-memory store");
            memory_state(settings)
        }
    };

    let app = payment_router()
        .with_state(state)
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        merchant_id = %config.gateway.merchant_id,
        gateway_url = %config.gateway.gateway_url,
        "hosted order page service listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// JSON lines in production, human-readable otherwise. `RUST_LOG` wins over
/// the configured filter.
fn init_tracing(server: &ServerConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    if server.is_production() {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_target(true))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(true))
            .init();
    }
}

async fn postgres_state(
    database: &DatabaseConfig,
    settings: Arc<PaymentSettings>,
) -> Result<PaymentAppState, Box<dyn Error + Send + Sync>> {
    let pool = database.pool_options().connect(&database.url).await?;
    tracing::info!(max_connections = database.max_connections, "connected to PostgreSQL");

    if database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("migrations applied");
    }

    Ok(PaymentAppState {
        settings,
        orders: Arc::new(PostgresOrderRepository::new(pool.clone())),
        addresses: Arc::new(PostgresAddressReader::new(pool.clone())),
        directory: Arc::new(PostgresDirectoryReader::new(pool)),
    })
}

fn memory_state(settings: Arc<PaymentSettings>) -> PaymentAppState {
    let store = Arc::new(InMemoryOrderStore::new());
    PaymentAppState {
        settings,
        orders: store.clone(),
        addresses: store,
        directory: Arc::new(InMemoryDirectory::new()),
    }
}

/// Waits for SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl+C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
