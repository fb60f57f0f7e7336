//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all handlers
//! - Wire up the interceptor chain (panic recovery, tracing, request ID,
//!   CORS, metrics, body limit, timeout)
//! - Serve on a listener until the shutdown channel fires

use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware,
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::Span;

use crate::api::api_router;
use crate::config::GatewayConfig;
use crate::health::AiServiceProbe;
use crate::http::client::{build_client, HttpClient};
use crate::http::landing::LandingPage;
use crate::http::middleware::cors;
use crate::http::response::not_found;
use crate::observability::metrics;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GatewayConfig>,
    pub client: HttpClient,
    pub probe: AiServiceProbe,
}

impl AppState {
    pub fn new(config: GatewayConfig) -> Self {
        let client = build_client();
        let probe = AiServiceProbe::new(client.clone(), &config.ai_service);

        Self {
            config: Arc::new(config),
            client,
            probe,
        }
    }
}

/// HTTP server for the gateway.
pub struct GatewayServer {
    router: Router,
    config: Arc<GatewayConfig>,
}

impl GatewayServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// The landing page mode is fixed here.
    pub fn new(config: GatewayConfig) -> Self {
        let state = AppState::new(config);
        let landing = LandingPage::detect(&state.config.template_dir);
        let config = state.config.clone();
        let router = build_router(state, landing);

        Self { router, config }
    }

    /// A clone of the fully layered router.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("HTTP server no longer accepting connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Build the Axum router with all middleware layers.
pub fn build_router(state: AppState, landing: LandingPage) -> Router {
    let request_timeout = state.config.server.request_timeout();
    let max_body_bytes = state.config.server.max_body_bytes;
    let static_dir = state.config.static_dir.clone();

    // Outermost first.
    let interceptors = ServiceBuilder::new()
        .layer(CatchPanicLayer::new())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(middleware::from_fn(cors))
        .layer(middleware::from_fn(metrics::track_requests))
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, request_timeout));

    Router::new()
        .route("/", get(move || async move { landing }))
        .nest("/api", api_router(state))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found)
        .layer(interceptors)
}

fn request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
    )
}
