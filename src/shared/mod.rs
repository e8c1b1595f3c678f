/// Shared types used across all layers
///
/// This module contains:
/// - Protocol definitions (request payloads, response envelopes)

pub mod protocol;

// Re-export commonly used types
pub use protocol::{
    MessageResponse, NewOrderRequest, NewProductRequest, OrderListResponse, OrderResponse,
    ProductResponse,
};
