//! Exhibit Estimator server binary.

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use exhibit_estimator::adapters::document::MarkdownQuoteRenderer;
use exhibit_estimator::adapters::http::{build_router, AppState};
use exhibit_estimator::adapters::memory::{InMemoryQuoteRepository, InMemoryVendorRepository};
use exhibit_estimator::adapters::postgres::PostgresVendorRepository;
use exhibit_estimator::adapters::travel::StaticTravelCatalog;
use exhibit_estimator::config::AppConfig;
use exhibit_estimator::domain::estimate::Estimator;
use exhibit_estimator::ports::VendorRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let rates = config.pricing.load_rate_table()?;
    let estimator = Arc::new(Estimator::new(
        Arc::new(rates),
        config.pricing.cost_constants(),
    ));

    let vendors: Arc<dyn VendorRepository> = match &config.database {
        Some(database) => {
            let pool = database.connect().await?;
            if database.run_migrations {
                sqlx::migrate!("./migrations").run(&pool).await?;
                info!("Database migrations applied");
            }
            info!("Using PostgreSQL vendor repository");
            Arc::new(PostgresVendorRepository::new(pool))
        }
        None => {
            info!("No database configured, using in-memory vendor repository");
            Arc::new(InMemoryVendorRepository::new())
        }
    };

    let state = AppState::new(
        estimator,
        vendors,
        Arc::new(InMemoryQuoteRepository::new()),
        Arc::new(StaticTravelCatalog::new()),
        Arc::new(MarkdownQuoteRenderer::new(config.pricing.currency)),
    );
    let app = build_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.is_production() {
        builder.json().init();
    } else {
        builder.compact().init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
