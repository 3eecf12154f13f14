//! Application startup and lifecycle management.

use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::IndicationsConfig;
use crate::handlers;
use crate::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use crate::services::providers::TextProvider;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: IndicationsConfig,
    pub text_provider: Arc<dyn TextProvider>,
}

/// Non-POST methods on the drafting route are rejected before any
/// processing, with a plain-text body.
async fn method_not_allowed() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        .route(
            "/indications",
            post(handlers::indications::generate_indications).fallback(method_not_allowed),
        )
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: IndicationsConfig) -> Result<Self, AppError> {
        let gemini_config = GeminiConfig {
            api_key: config.google.api_key.clone(),
            model: config.models.text_model.clone(),
            api_base_url: config.google.api_base_url.clone(),
        };
        let provider = GeminiTextProvider::new(gemini_config);

        if provider.is_configured() {
            tracing::info!(
                model = %config.models.text_model,
                "Initialized Gemini text provider"
            );
        } else {
            tracing::warn!(
                "GOOGLE_API_KEY not set - drafting requests will fail with a configuration error"
            );
        }

        let state = AppState {
            config,
            text_provider: Arc::new(provider),
        };

        Self::with_state(state).await
    }

    /// Build around an externally supplied state. Tests use this to inject
    /// a mock provider.
    pub async fn with_state(state: AppState) -> Result<Self, AppError> {
        // Port 0 = random port for testing.
        let address = format!("{}:{}", state.config.common.host, state.config.common.port);
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        let router = build_router(state);

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        tracing::info!("Listening on port {}", self.port);
        axum::serve(self.listener, self.router).await
    }
}
