//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with every route handler
//! - Wire up middleware (CORS, request ID, tracing, metrics)
//! - Serve on a listener until the shutdown signal fires

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::GatewayConfig;
use crate::data::{load_mock_listings, VenueListing};
use crate::http::middleware::track_metrics;
use crate::http::request::{make_request_span, UuidRequestId};
use crate::http::{cities, cors, email, health, venues};
use crate::upstream::Upstreams;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GatewayConfig>,
    pub upstreams: Upstreams,
    pub listings: Arc<Vec<VenueListing>>,
}

/// Errors building the application state.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to build upstream HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("embedded listings are invalid: {0}")]
    Listings(#[from] serde_json::Error),
}

impl AppState {
    pub fn new(config: GatewayConfig) -> Result<Self, ServerError> {
        let upstreams = Upstreams::new(&config)?;
        let listings = load_mock_listings()?;

        Ok(Self {
            config: Arc::new(config),
            upstreams,
            listings: Arc::new(listings),
        })
    }
}

/// HTTP server for the gateway.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: GatewayConfig) -> Result<Self, ServerError> {
        Ok(Self::with_state(AppState::new(config)?))
    }

    pub fn with_state(state: AppState) -> Self {
        Self {
            router: Self::build_router(state),
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/", get(health::liveness))
            .route("/api/cities", get(cities::search_cities))
            .route("/api/venues", get(venues::list_venues))
            .route(
                "/api/venues/{city}/{active_key}",
                get(venues::venue_detail).layer(cors::route_cors_headers()),
            )
            .route("/api/send-email", post(email::send_email))
            .route("/api/listings", get(health::mock_listings))
            .route_layer(middleware::from_fn(track_metrics))
            .with_state(state)
            .layer(cors::cors_layer())
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
            .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
