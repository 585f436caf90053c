use std::io::Write;
use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use dotenv::dotenv;
use log::info;

use gig_api::app::{create_app, AppState};
use gig_api::config;
use gig_core::{AuthContext, KeyValueSessionStore, SessionKeys};
use gig_infra::{FileStorage, HttpAuthGateway};
use gig_shared::config::{LogFormat, LoggingConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let config = config::load().context("failed to load configuration")?;

    // Initialize logger
    init_logging(&config.logging);

    info!("Starting Gig navigation shell ({})", config.environment);

    // Rehydrate the session persisted for the configured origin
    let storage = FileStorage::new(&config.storage);
    info!("Session storage: {}", storage.path().display());
    let store = KeyValueSessionStore::with_keys(storage, SessionKeys::from(&config.storage));
    let context = Arc::new(AuthContext::rehydrate(Arc::new(store)));

    let gateway = Arc::new(
        HttpAuthGateway::new(config.api.clone()).context("failed to build marketplace client")?,
    );
    info!("Marketplace API: {}", config.api.base_url);

    let state = web::Data::new(AppState::new(gateway, context, &config.routes));

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(state.clone()));
    if let Some(workers) = config.server.workers {
        server = server.workers(workers);
    }

    server.bind(&bind_address)?.run().await?;
    Ok(())
}

fn init_logging(logging: &LoggingConfig) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::new().default_filter_or(logging.level.as_str()));

    match logging.format {
        LogFormat::Pretty => {}
        LogFormat::Compact => {
            builder.format_target(false).format_timestamp_secs();
        }
        LogFormat::Json => {
            builder.format(|buf, record| {
                let line = serde_json::json!({
                    "timestamp": buf.timestamp().to_string(),
                    "level": record.level().as_str(),
                    "target": record.target(),
                    "message": record.args().to_string(),
                });
                writeln!(buf, "{}", line)
            });
        }
    }

    builder.init();
}
