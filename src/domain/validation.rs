/// Request Validator - Business Rule Validation
///
/// Validates incoming request payloads before they reach the catalog or the
/// registry. The core structures themselves never validate: a product
/// insert or an order append is total, so every field rule lives here at
/// the boundary.
///
/// ## Validation Rules
/// - Product name must not be empty (or exceed the configured maximum)
/// - Customer name must not be empty (or exceed the configured maximum)
/// - An order must carry at least one line
/// - Every line quantity must be positive and within the configured maximum

use crate::shared::protocol::{NewOrderRequest, NewProductRequest};
use thiserror::Error;

/// Validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Product name is empty or too long
    #[error("invalid product name: {0}")]
    InvalidProductName(String),

    /// Customer name is empty or too long
    #[error("invalid customer name: {0}")]
    InvalidCustomerName(String),

    /// Order has no lines or too many
    #[error("invalid order lines: {0}")]
    InvalidLines(String),

    /// Line quantity is zero or exceeds the maximum
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),
}

/// Request validation configuration
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Maximum length for product and customer names (inclusive)
    pub max_name_length: usize,

    /// Maximum number of lines per order (inclusive)
    pub max_lines_per_order: usize,

    /// Maximum quantity per line (inclusive)
    pub max_quantity: u64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_name_length: 256,
            max_lines_per_order: 100,
            max_quantity: 1_000_000,
        }
    }
}

/// Request validator
///
/// Validates request payloads according to the configured limits.
#[derive(Debug, Clone, Default)]
pub struct RequestValidator {
    config: ValidationConfig,
}

impl RequestValidator {
    /// Creates a new validator with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new validator with custom configuration
    pub fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Validates a product creation request
    pub fn validate_product(&self, request: &NewProductRequest) -> Result<(), ValidationError> {
        self.validate_name(&request.name).map_err(ValidationError::InvalidProductName)
    }

    /// Validates an order creation or replacement request
    pub fn validate_order(&self, request: &NewOrderRequest) -> Result<(), ValidationError> {
        self.validate_name(&request.customer_name)
            .map_err(ValidationError::InvalidCustomerName)?;

        if request.lines.is_empty() {
            return Err(ValidationError::InvalidLines(
                "an order requires at least one line".to_string(),
            ));
        }

        if request.lines.len() > self.config.max_lines_per_order {
            return Err(ValidationError::InvalidLines(format!(
                "{} lines exceed the maximum of {}",
                request.lines.len(),
                self.config.max_lines_per_order
            )));
        }

        for line in &request.lines {
            if line.quantity == 0 {
                return Err(ValidationError::InvalidQuantity(format!(
                    "quantity for product {} must be greater than zero",
                    line.product_id
                )));
            }
            if line.quantity > self.config.max_quantity {
                return Err(ValidationError::InvalidQuantity(format!(
                    "quantity {} for product {} exceeds the maximum of {}",
                    line.quantity, line.product_id, self.config.max_quantity
                )));
            }
        }

        Ok(())
    }

    fn validate_name(&self, name: &str) -> Result<(), String> {
        if name.trim().is_empty() {
            return Err("name must not be empty".to_string());
        }

        if name.len() > self.config.max_name_length {
            return Err(format!(
                "name length {} exceeds the maximum of {}",
                name.len(),
                self.config.max_name_length
            ));
        }

        Ok(())
    }
}
