use std::net::SocketAddr;

use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use job_depot::{app, config::settings::AppConfig, infrastructure::tls, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    info!("Starting server...");

    let config = AppConfig::new().context("invalid configuration")?;
    info!(
        "Records: {} in {} (inject id: {})",
        config.format,
        config.jobs_root.display(),
        config.inject_id
    );

    let addr: SocketAddr = config
        .bind_addr()
        .parse()
        .with_context(|| format!("invalid bind address {}", config.bind_addr()))?;
    let use_tls = config.tls;

    let app = app::create_app(AppState::new(config));

    if use_tls {
        let tls_config = tls::ad_hoc_config()
            .await
            .context("failed to set up ad-hoc TLS")?;

        info!("Server running on https://{}", addr);
        axum_server::bind_rustls(addr, tls_config)
            .serve(app.into_make_service())
            .await
            .context("server error")?;
    } else {
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind {}", addr))?;

        info!("Server running on http://{}", addr);
        axum::serve(listener, app).await.context("server error")?;
    }

    Ok(())
}
