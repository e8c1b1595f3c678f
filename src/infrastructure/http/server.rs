//! HTTP API Server
//!
//! Serves the catalog and registry over a JSON request/response API.
//!
//! ## Endpoints
//! - `GET /` - service banner
//! - `POST /products` - add a product to the catalog
//! - `GET /products/:id` - look up a product
//! - `POST /orders` - create an order
//! - `GET /orders` - list all orders
//! - `GET /orders/:id` - look up an order
//! - `PUT /orders/:id` - replace an order's customer name and lines
//! - `DELETE /orders/:id` - remove an order
//! - `GET /health` - health check

use super::handlers;
use crate::application::services::StoreService;
use crate::domain::catalog::ProductCatalog;
use crate::domain::registry::OrderRegistry;
use crate::infrastructure::observability::HealthChecker;
use axum::routing::{get, post};
use axum::Router;
use parking_lot::RwLock;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tracing::info;

/// Shared state handed to every handler.
///
/// The service is plain single-threaded state, so the handlers funnel all
/// access through one coarse lock: reads take the read lock, mutations the
/// write lock. Every operation is a short in-memory pass and no lock is
/// ever held across an await point.
pub struct AppState {
    pub service: RwLock<StoreService<ProductCatalog, OrderRegistry>>,
    pub health: HealthChecker,
}

impl AppState {
    /// Creates fresh, empty state.
    pub fn new() -> SharedState {
        Arc::new(AppState {
            service: RwLock::new(StoreService::new(
                ProductCatalog::new(),
                OrderRegistry::new(),
            )),
            health: HealthChecker::default(),
        })
    }
}

pub type SharedState = Arc<AppState>;

/// Builds the API router over the given state.
pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/products", post(handlers::create_product))
        .route("/products/:id", get(handlers::get_product))
        .route(
            "/orders",
            post(handlers::create_order).get(handlers::list_orders),
        )
        .route(
            "/orders/:id",
            get(handlers::get_order)
                .put(handlers::update_order)
                .delete(handlers::delete_order),
        )
        .route("/health", get(handlers::health))
        .with_state(state)
}

/// HTTP API server
pub struct ApiServer {
    addr: SocketAddr,
    state: SharedState,
}

impl ApiServer {
    /// Creates a new server with fresh state.
    pub fn new(host: IpAddr, port: u16) -> Self {
        Self {
            addr: SocketAddr::new(host, port),
            state: AppState::new(),
        }
    }

    /// The state served by this server.
    pub fn state(&self) -> SharedState {
        self.state.clone()
    }

    /// Binds and serves until the process is stopped.
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let app = router(self.state.clone());

        info!("API server listening on {}", self.addr);
        info!("health endpoint: http://{}/health", self.addr);

        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
