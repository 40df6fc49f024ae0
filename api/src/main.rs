use std::io;
use std::sync::Arc;
use std::time::Duration;

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenvy::dotenv;
use log::{info, warn};

use ev_api::app;
use ev_api::middleware::create_cors;
use ev_api::routes::AppState;
use ev_core::services::verification::{
    EmailNotifier, VerificationService, VerificationServiceConfig,
};
use ev_infra::email::{create_notifier, EmailConfig};
use ev_shared::config::{Environment, ServerConfig};

const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 300;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Email Verify API server");

    let server_config =
        ServerConfig::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let environment = Environment::from_env();
    info!("Environment: {}", environment.as_str());

    let email_config = EmailConfig::from_env()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
    let notifier = Arc::new(create_notifier(&email_config));

    let verification = Arc::new(VerificationService::new(
        notifier,
        VerificationServiceConfig::default(),
    ));

    spawn_sweeper(verification.clone());

    let bind_address = server_config.bind_address();
    info!("Server will bind to: {}", bind_address);

    let state = web::Data::new(AppState {
        verification,
        environment,
    });

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors())
            .app_data(state.clone())
            .configure(app::configure::<Box<dyn EmailNotifier>>)
            .default_service(web::route().to(app::not_found))
    })
    .bind(&bind_address)?
    .run()
    .await
}

/// Periodically evict expired records so the registry cannot grow
/// without bound under issue-and-abandon traffic.
fn spawn_sweeper(verification: Arc<VerificationService<Box<dyn EmailNotifier>>>) {
    let interval_secs = std::env::var("SWEEP_INTERVAL_SECS")
        .ok()
        .and_then(|raw| raw.parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_SWEEP_INTERVAL_SECS);

    if interval_secs != DEFAULT_SWEEP_INTERVAL_SECS {
        warn!("Sweep interval overridden to {}s", interval_secs);
    }

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs));
        // The first tick fires immediately; skip it so startup stays quiet.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let removed = verification.sweep();
            if removed > 0 {
                info!("Sweeper removed {} expired verification codes", removed);
            }
        }
    });
}
