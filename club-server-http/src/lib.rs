use std::path::Path;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use club_server_domain::app::Services;
use log::info;

mod error;
mod forms;
mod routes;
pub mod session;
mod views;

#[cfg(test)]
mod testing;

pub use error::AppError;
pub use routes::router;

#[derive(Clone)]
pub struct AppState {
    pub services: Services,
    cookie_key: Key,
}

impl AppState {
    pub fn new(services: Services, secret_key: &str) -> Self {
        Self {
            services,
            cookie_key: session::cookie_key(secret_key),
        }
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Key {
        state.cookie_key.clone()
    }
}

pub async fn serve(
    state: AppState,
    bind_addr: &str,
    static_dir: &Path,
    shutdown_signal: impl std::future::Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;

    info!("Club site listening on {}", bind_addr);
    axum::serve(listener, router(state, static_dir))
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("HTTP server shut down gracefully");
    Ok(())
}
