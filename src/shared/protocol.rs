//! Wire types for the HTTP boundary.
//!
//! Requests carry only the caller-supplied fields; ids are always assigned
//! by the application layer and never accepted from the outside. Responses
//! pair the affected entity with a human-readable message.

use crate::domain::entities::{Order, OrderLine, Product};
use serde::{Deserialize, Serialize};

/// Request to add a product to the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProductRequest {
    pub name: String,
    // Minor currency units, matching `Product::price`.
    pub price: u64,
}

/// Request to create an order. The same payload is used as the replacement
/// document for `PUT /orders/:id`; the path id wins, the body never carries
/// one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrderRequest {
    pub customer_name: String,
    pub lines: Vec<OrderLine>,
}

/// Plain message envelope, used for errors and deletions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Response envelope carrying a single product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductResponse {
    pub message: String,
    pub product: Product,
}

/// Response envelope carrying a single order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderResponse {
    pub message: String,
    pub order: Order,
}

/// Response envelope carrying the full order listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderListResponse {
    pub message: String,
    pub orders: Vec<Order>,
}
