//! HTTP handlers.
//!
//! Handlers translate between the wire types and the application service:
//! extract the payload, take the state lock for the duration of the call,
//! and map the outcome to a status code. Absence maps to 404, validation
//! failure to 400, creation to 201; unresolved product references map to
//! 404 on both creation and update.

use super::server::SharedState;
use crate::application::services::StoreError;
use crate::infrastructure::observability::{HealthDetails, HealthStatus};
use crate::shared::protocol::{
    MessageResponse, NewOrderRequest, NewProductRequest, OrderListResponse, OrderResponse,
    ProductResponse,
};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{debug, info, warn};

/// `GET /` - service banner
pub async fn root() -> &'static str {
    concat!("commerce-engine v", env!("CARGO_PKG_VERSION"))
}

/// `POST /products`
pub async fn create_product(
    State(state): State<SharedState>,
    Json(request): Json<NewProductRequest>,
) -> Response {
    let result = state.service.write().create_product(request);
    match result {
        Ok(product) => {
            info!(product_id = product.id, "product created");
            let body = ProductResponse {
                message: format!("product '{}' created", product.id),
                product,
            };
            (StatusCode::CREATED, Json(body)).into_response()
        }
        Err(err) => error_response(err),
    }
}

/// `GET /products/:id`
pub async fn get_product(State(state): State<SharedState>, Path(id): Path<u64>) -> Response {
    let found = state.service.read().product(id);
    match found {
        Some(product) => {
            debug!(product_id = id, "product found");
            let body = ProductResponse {
                message: format!("product '{id}' found"),
                product,
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        None => not_found(format!("product '{id}' not found")),
    }
}

/// `POST /orders`
pub async fn create_order(
    State(state): State<SharedState>,
    Json(request): Json<NewOrderRequest>,
) -> Response {
    let result = state.service.write().create_order(request);
    match result {
        Ok(order) => {
            info!(order_id = order.id, lines = order.lines.len(), "order created");
            let body = OrderResponse {
                message: format!("order '{}' created", order.id),
                order,
            };
            (StatusCode::CREATED, Json(body)).into_response()
        }
        Err(err) => error_response(err),
    }
}

/// `GET /orders`
pub async fn list_orders(State(state): State<SharedState>) -> Response {
    let orders = state.service.read().orders();
    let message = if orders.is_empty() {
        "no orders exist".to_string()
    } else {
        format!("{} orders found", orders.len())
    };
    (StatusCode::OK, Json(OrderListResponse { message, orders })).into_response()
}

/// `GET /orders/:id`
pub async fn get_order(State(state): State<SharedState>, Path(id): Path<u64>) -> Response {
    let found = state.service.read().order(id);
    match found {
        Some(order) => {
            debug!(order_id = id, "order found");
            let body = OrderResponse {
                message: format!("order '{id}' found"),
                order,
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        None => not_found(format!("order '{id}' not found")),
    }
}

/// `PUT /orders/:id`
pub async fn update_order(
    State(state): State<SharedState>,
    Path(id): Path<u64>,
    Json(request): Json<NewOrderRequest>,
) -> Response {
    let result = state.service.write().update_order(id, request);
    match result {
        Ok(order) => {
            info!(order_id = id, "order updated");
            let body = OrderResponse {
                message: format!("order '{id}' updated"),
                order,
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => error_response(err),
    }
}

/// `DELETE /orders/:id`
pub async fn delete_order(State(state): State<SharedState>, Path(id): Path<u64>) -> Response {
    let deleted = state.service.write().delete_order(id);
    if deleted {
        info!(order_id = id, "order deleted");
        let body = MessageResponse {
            message: format!("order '{id}' deleted"),
        };
        (StatusCode::OK, Json(body)).into_response()
    } else {
        not_found(format!("order '{id}' not found"))
    }
}

/// `GET /health`
pub async fn health(State(state): State<SharedState>) -> Response {
    let details = {
        let service = state.service.read();
        HealthDetails {
            total_products: service.product_count(),
            total_orders: service.order_count(),
        }
    };

    let response = state.health.check_health(details);
    let status_code = match response.status {
        HealthStatus::Healthy | HealthStatus::Degraded => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(response)).into_response()
}

fn error_response(err: StoreError) -> Response {
    let status = match err {
        StoreError::Validation(_) => StatusCode::BAD_REQUEST,
        StoreError::UnknownProduct(_) | StoreError::UnknownOrder(_) => StatusCode::NOT_FOUND,
    };
    warn!(%err, "request rejected");
    let body = MessageResponse {
        message: err.to_string(),
    };
    (status, Json(body)).into_response()
}

fn not_found(message: String) -> Response {
    debug!(%message);
    (StatusCode::NOT_FOUND, Json(MessageResponse { message })).into_response()
}
