//! Domain entities shared by the catalog and the registry.

use serde::{Deserialize, Serialize};

/// A catalog entry. Immutable once created: products are never updated or
/// removed, and their ids are never reused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    // Minor currency units to avoid floating point precision issues,
    // e.g. a price of 123.45 is stored as 12345.
    pub price: u64,
}

impl Product {
    pub fn new(id: u64, name: impl Into<String>, price: u64) -> Self {
        Product {
            id,
            name: name.into(),
            price,
        }
    }
}

/// One line of an order: a catalog reference plus a quantity.
///
/// The product reference is resolved against the catalog by the application
/// layer at order creation/update time; the registry stores lines as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: u64,
    pub quantity: u64,
}

/// A customer order. `lines` preserves insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    pub customer_name: String,
    pub lines: Vec<OrderLine>,
}

impl Order {
    pub fn new(id: u64, customer_name: impl Into<String>, lines: Vec<OrderLine>) -> Self {
        Order {
            id,
            customer_name: customer_name.into(),
            lines,
        }
    }
}
