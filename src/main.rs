use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tracing::{info, warn};

use activities_client::config::ClientConfig;
use activities_client::services::HttpActivitiesApi;
use activities_client::ui::ActivitiesClient;
use activities_client::web;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = ClientConfig::from_env();
    info!(api = %config.api_base_url, "using activities API");

    let api = HttpActivitiesApi::new(config.api_base_url.clone(), config.api_timeout)?
        .with_host_header(config.api_host_header.clone());
    let client = Arc::new(ActivitiesClient::new(
        Arc::new(api),
        config.message_hide_after,
    ));

    let app = web::app(client.clone(), &config.static_dir);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("invalid HOST/PORT {}:{}", config.host, config.port))?;

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = SocketAddr::new(addr.ip(), addr.port().saturating_add(1));
            warn!("Could not bind {}: {}. Trying fallback {}", addr, e, fallback);
            tokio::net::TcpListener::bind(fallback)
                .await
                .with_context(|| format!("could not bind fallback port {}", fallback))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("Sign-up page running on http://{}", bound_addr);

    // Serve right away; a page view before this finishes runs its own bounded fetch.
    tokio::spawn(async move { client.load().await });

    axum::serve(listener, app).await?;
    Ok(())
}
