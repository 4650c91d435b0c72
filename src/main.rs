use std::sync::Arc;

use club_persistence_mariadb::{
    QueryHelper, admins::PlaintextAdminVerifier, contacts::MariaDbContactRepository,
    create_db_pool, players::MariaDbPlayerRepository,
    registrations::MariaDbRegistrationRepository,
};
use club_server_domain::app::Services;
use club_server_http::AppState;
use log::{info, warn};

mod config;
mod logs;

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to install Ctrl+C handler: {}", e);
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
                log::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received. Preparing graceful exit...");
}

fn build_services(helper: QueryHelper) -> Services {
    Services::new(
        Arc::new(Box::new(MariaDbRegistrationRepository::new(helper.clone()))),
        Arc::new(Box::new(MariaDbPlayerRepository::new(helper.clone()))),
        Arc::new(Box::new(MariaDbContactRepository::new(helper.clone()))),
        Arc::new(Box::new(PlaintextAdminVerifier::new(helper))),
    )
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = logs::init_logger(&config.log) {
        eprintln!("Failed to initialize logger: {}", e);
        std::process::exit(1);
    }

    if config.uses_default_secret() {
        warn!("FLASK_SECRET_KEY is not set; sessions are signed with the default key");
    }

    info!(
        "Using database [{}] on {}:{}",
        config.database.database, config.database.host, config.database.port
    );
    let helper = QueryHelper::new(create_db_pool(&config.database));
    let state = AppState::new(build_services(helper), &config.secret_key);

    info!("Starting application");

    if let Err(e) = club_server_http::serve(
        state,
        &config.bind_addr,
        &config.static_dir,
        shutdown_signal(),
    )
    .await
    {
        log::error!("HTTP server failed: {}", e);
        std::process::exit(1);
    }
}
