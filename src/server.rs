//! Reusable server runtime.
//!
//! Provides [`ServerHandle`] encapsulating the full lifecycle: store
//! construction, reference-data seeding, REST API and graceful shutdown.
//! Both the default binary and the CLI use this to start/stop the service
//! without duplicating bootstrap code.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::sync::oneshot;
use tracing::info;

use crate::application::CatalogService;
use crate::config::AppConfig;
use crate::infrastructure::storage::{CatalogRepository, InMemoryCatalogRepository};
use crate::interfaces::http::create_api_router;

/// Install the tracing subscriber per the logging config.
///
/// `RUST_LOG` wins over the configured level when set.
pub fn init_tracing(config: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    if config.logging.json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Options for starting the catalog service.
pub struct ServerOptions {
    /// Application configuration.
    pub config: AppConfig,
    /// Load the reference dataset on startup (combined with the
    /// `catalog.seed_on_startup` config flag).
    pub seed: bool,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            seed: true,
        }
    }
}

/// Handle to a running catalog service.
pub struct ServerHandle {
    /// Address the server is listening on.
    pub addr: SocketAddr,
    /// The catalog service backing the API, for in-process access.
    pub service: Arc<CatalogService>,

    shutdown_tx: oneshot::Sender<()>,
    task: tokio::task::JoinHandle<()>,
}

impl ServerHandle {
    /// Build the store, seed it, bind the listener and serve the API on
    /// a background task.
    pub async fn start(options: ServerOptions) -> Result<Self, Box<dyn std::error::Error>> {
        let config = options.config;

        let repo = InMemoryCatalogRepository::new(config.catalog.lock_settings());
        if options.seed && config.catalog.seed_on_startup {
            repo.seed_reference_data()?;
            info!("reference catalog seeded");
        }
        let repo: Arc<dyn CatalogRepository> = Arc::new(repo);
        let service = Arc::new(CatalogService::new(repo));

        let router = create_api_router(Arc::clone(&service));

        let listener = tokio::net::TcpListener::bind(config.server.address()).await?;
        let addr = listener.local_addr()?;
        info!("catalog service listening on {}", addr);
        info!("Swagger UI available at http://{}/swagger-ui", addr);

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let task = tokio::spawn(async move {
            let serve = axum::serve(listener, router).with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            });
            if let Err(e) = serve.await {
                tracing::error!("server error: {}", e);
            }
        });

        Ok(Self {
            addr,
            service,
            shutdown_tx,
            task,
        })
    }

    /// Signal shutdown and wait for the server task to finish.
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(());
        let _ = self.task.await;
        info!("catalog service stopped");
    }
}
