//! Application bootstrap implementation.
//!
//! This module contains `SensorGridApp` which builds the registry, binds the
//! listener and runs the HTTP server until told to stop.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::config::AppConfig;
use super::error::AppError;
use crate::api;
use crate::registry::SensorRegistry;

/// A bound, ready-to-serve sensor registry service.
///
/// Binding and serving are separate steps so callers can learn the actual
/// listen address (useful with port 0) before requests start flowing.
pub struct SensorGridApp {
    /// The registry every request operates on.
    registry: Arc<SensorRegistry>,

    /// Bound listener, consumed by `serve()`.
    listener: TcpListener,

    /// Resolved listen address.
    local_addr: SocketAddr,
}

impl SensorGridApp {
    /// Create the registry described by `config` and bind its listen address.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Bind` if the address cannot be resolved or bound.
    pub async fn bind(config: AppConfig) -> Result<Self, AppError> {
        let registry = if config.seed {
            SensorRegistry::seeded()
        } else {
            SensorRegistry::new()
        };
        Self::bind_with_registry(&config, Arc::new(registry)).await
    }

    /// Bind `config.bind` and serve an existing registry.
    pub async fn bind_with_registry(
        config: &AppConfig,
        registry: Arc<SensorRegistry>,
    ) -> Result<Self, AppError> {
        let bind_err = |source| AppError::Bind {
            addr: config.bind.clone(),
            source,
        };

        let listener = TcpListener::bind(config.bind.as_str()).await.map_err(bind_err)?;
        let local_addr = listener.local_addr().map_err(bind_err)?;

        info!(
            addr = %local_addr,
            sensors = registry.len(),
            seeded = config.seed,
            "Sensor registry bound"
        );

        Ok(Self {
            registry,
            listener,
            local_addr,
        })
    }

    /// The address the listener is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Shared handle to the registry.
    pub fn registry(&self) -> Arc<SensorRegistry> {
        Arc::clone(&self.registry)
    }

    /// Serve HTTP requests until `shutdown` is cancelled.
    ///
    /// In-flight requests are allowed to finish before this returns.
    pub async fn serve(self, shutdown: CancellationToken) -> Result<(), AppError> {
        let router = api::router(Arc::clone(&self.registry));
        info!(addr = %self.local_addr, "Serving sensor API");

        axum::serve(self.listener, router)
            .with_graceful_shutdown(async move { shutdown.cancelled().await })
            .await
            .map_err(AppError::Serve)?;

        info!(sensors = self.registry.len(), "Sensor API stopped");
        Ok(())
    }

    /// Bind and serve on a dedicated Tokio runtime, blocking the caller.
    ///
    /// For synchronous contexts such as CLI commands.
    pub fn run_blocking(config: AppConfig, shutdown: CancellationToken) -> Result<(), AppError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .thread_name("sensorgrid-http")
            .build()
            .map_err(|e| AppError::RuntimeCreation(e.to_string()))?;

        runtime.block_on(async move {
            let app = Self::bind(config).await?;
            app.serve(shutdown).await
        })
    }
}
