mod middleware;
mod routes;

use apexmoto_saleor::{CatalogSettings, SaleorClient};
use apexmoto_storefront::Storefront;
use tracing_subscriber::EnvFilter;

use crate::routes::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = apexmoto_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let client = SaleorClient::from_app_config(&config)?;
    if !client.has_app_token() {
        tracing::info!("SALEOR_APP_TOKEN not set; footer channel selector disabled");
    }
    let storefront = Storefront::new(client, CatalogSettings::from_app_config(&config))?;
    let state = AppState::new(
        storefront,
        config.default_channel.clone(),
        config.product_cache_secs,
    );
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        env = %config.env,
        bind_addr = %config.bind_addr,
        default_channel = %config.default_channel,
        "storefront listening"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
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
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
