//! Portico - A lightweight REST gateway for headless CMS articles

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use portico::{
    api::{self, AppState},
    cms::CmsClient,
    config::Config,
    services::{ArticleService, AuthService},
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portico=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Portico gateway...");

    // Load configuration (file first, environment overrides on top)
    let config = Config::load_with_env(Path::new("config.yml"))?;
    tracing::info!("Configuration loaded, CMS at {}", config.cms.url);

    if config.cms.api_token.is_none() {
        tracing::warn!("CMS_API_TOKEN is not set; authenticated CMS calls will be anonymous");
    }

    // Create the CMS client and services
    let cms = Arc::new(CmsClient::new(&config.cms)?);
    let article_service = Arc::new(ArticleService::new(cms.clone()));
    let auth_service = Arc::new(AuthService::new(cms));

    // Build application state
    let state = AppState {
        article_service,
        auth_service,
    };

    // Build router
    let app = api::build_router(state, &config.server.cors_origin);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
