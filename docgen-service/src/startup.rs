use crate::config::{DocgenConfig, ProviderBackend};
use crate::error::AppError;
use crate::handlers;
use crate::services::providers::mock::MockTextProvider;
use crate::services::providers::openai::{OpenAiConfig, OpenAiTextProvider};
use crate::services::providers::TextProvider;
use crate::services::DocumentSpool;
use axum::{routing::get, Router};
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: DocgenConfig,
    pub text_provider: Arc<dyn TextProvider>,
    pub spool: DocumentSpool,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    pub async fn build(config: DocgenConfig) -> Result<Self, AppError> {
        let spool = DocumentSpool::new(&config.spool.path).await.map_err(|e| {
            tracing::error!(
                "Failed to initialize spool directory at {}: {}",
                config.spool.path,
                e
            );
            e
        })?;

        let text_provider: Arc<dyn TextProvider> = match config.provider.backend {
            ProviderBackend::OpenAi => Arc::new(OpenAiTextProvider::new(OpenAiConfig {
                api_key: config.completion.api_key.clone(),
                api_base: config.completion.api_base.clone(),
                model: config.completion.model.clone(),
            })),
            ProviderBackend::Mock => Arc::new(MockTextProvider::new(config.provider.mock_enabled)),
        };

        tracing::info!(
            model = %config.completion.model,
            "Initialized text provider"
        );

        let state = AppState {
            config: config.clone(),
            text_provider,
            spool,
        };

        let app = Router::new()
            .route("/", get(handlers::liveness))
            .route("/generate", get(handlers::generate_document))
            .route("/health", get(handlers::health_check))
            .route("/ready", get(handlers::readiness_check))
            .route("/metrics", get(handlers::metrics_endpoint))
            .layer(TraceLayer::new_for_http())
            .with_state(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
