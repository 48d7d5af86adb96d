use std::env;
use std::sync::Arc;

mod app;
mod config;
mod error;
mod extract;
mod handlers;
mod registration;

use app::build_router;
use config::Config;
use registration::client::UpstreamRegistrar;
use registration::services::RegistrationService;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub fn setup_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // Defaults when RUST_LOG is not set
        tracing_subscriber::EnvFilter::new(
            "info,auth_gateway=debug,hyper_util=warn,tower_http=info",
        )
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

// ----------------- Main -----------------

#[tokio::main]
async fn main() -> Result<(), lambda_http::Error> {
    setup_logging();
    tracing::info!("Starting auth-gateway...");

    let config = Config::from_env()?;
    tracing::info!(
        environment = config.environment.as_str(),
        "Forwarding registrations"
    );

    let registrar = UpstreamRegistrar::new(&config.auth_service_url, config.upstream_timeout)?;
    let service = Arc::new(RegistrationService::new(Arc::new(registrar)));
    let app = build_router(service);

    if env::var("AWS_LAMBDA_FUNCTION_NAME").is_ok() {
        tracing::info!("Running in Lambda mode");
        lambda_http::run(app).await
    } else {
        tracing::info!("Running in local HTTP server mode");
        let addr = config.server_addr();
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        tracing::info!("🚀 Server running at http://{}", addr);
        axum::serve(listener, app).await?;

        Ok(())
    }
}
