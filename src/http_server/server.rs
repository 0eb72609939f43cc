//! # HTTP Server
//!
//! Combines the food and observability routers, applies CORS and request
//! logging, and serves until Ctrl-C.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Request, State},
    http::HeaderValue,
    middleware::{self, Next},
    response::Response,
    Router,
};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use uuid::Uuid;

use crate::observability::{log_event, log_event_with_fields, Event};
use crate::store::FoodRepository;

use super::config::HttpServerConfig;
use super::food_routes::{food_routes, FoodsState};
use super::observability_routes::observability_routes;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// HTTP server over a single food store
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over `store`
    pub fn new(config: HttpServerConfig, store: Arc<dyn FoodRepository>) -> Self {
        let state = Arc::new(FoodsState::new(store));
        let router = Self::build_router(&config, state);
        Self { config, router }
    }

    fn build_router(config: &HttpServerConfig, state: Arc<FoodsState>) -> Router {
        Router::new()
            .merge(food_routes(state.clone()))
            .merge(observability_routes(state.clone()))
            .layer(middleware::from_fn_with_state(state, log_requests))
            .layer(Self::cors_layer(config))
    }

    /// Empty origin list allows any origin
    fn cors_layer(config: &HttpServerConfig) -> CorsLayer {
        if config.cors_origins.is_empty() {
            return CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
        }

        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;
        let addr = listener.local_addr()?.to_string();
        log_event_with_fields(Event::Serving, &[("addr", addr.as_str())]);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        log_event(Event::ShutdownComplete);
        Ok(())
    }
}

async fn shutdown_signal() {
    // If the handler cannot be installed, serve until the process is killed
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
    log_event(Event::ShutdownStart);
}

/// Tag each request with an id and log its outcome
async fn log_requests(
    State(state): State<Arc<FoodsState>>,
    request: Request,
    next: Next,
) -> Response {
    let started = Instant::now();
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    state.metrics.increment_requests();
    let mut response = next.run(request).await;

    let status = response.status().as_u16().to_string();
    let duration_ms = started.elapsed().as_millis().to_string();
    log_event_with_fields(
        Event::RequestComplete,
        &[
            ("duration_ms", duration_ms.as_str()),
            ("method", method.as_str()),
            ("path", path.as_str()),
            ("request_id", request_id.as_str()),
            ("status", status.as_str()),
        ],
    );

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
