use crate::config::Config;
use crate::routes;
use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

/// Application state shared across handlers
pub struct AppState {
    /// Process start, used for the `/health` uptime field
    pub started_at: Instant,
    /// Environment label reported by `/health`
    pub environment: String,
}

impl AppState {
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            started_at: Instant::now(),
            environment: environment.into(),
        }
    }
}

/// Handle to control the running server
pub struct ServerHandle {
    shutdown_tx: oneshot::Sender<()>,
    port: u16,
}

impl ServerHandle {
    /// Get the port the server is running on
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Shutdown the server gracefully
    pub fn shutdown(self) {
        let _ = self.shutdown_tx.send(());
    }
}

/// Run the HTTP server on the configured port, serving the static site
/// from `config.public_dir`.
pub async fn run_server(config: &Config) -> Result<ServerHandle> {
    let state = Arc::new(AppState::new(config.environment.clone()));
    let public_dir = PathBuf::from(&config.public_dir);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app: Router = routes::create_routes(&public_dir)
        .layer(cors)
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    let actual_port = listener.local_addr()?.port();

    info!("Server is running on port {}", actual_port);
    info!("Open your browser and navigate to http://localhost:{}", actual_port);
    info!("Health check available at http://localhost:{}/health", actual_port);
    info!("Project info API at http://localhost:{}/api/project-info", actual_port);

    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
                info!("Shutting down server...");
            })
            .await
            .ok();
    });

    Ok(ServerHandle {
        shutdown_tx,
        port: actual_port,
    })
}
