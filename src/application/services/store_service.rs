/// Store Service - Catalog and Registry Orchestration
///
/// This service owns the two domain structures and everything the core
/// deliberately leaves to the boundary: request validation, id allocation,
/// and resolution of order lines against the catalog. It is plain
/// synchronous state with no interior locking; the HTTP layer decides how
/// to share it.
///
/// ## Dependency Injection
/// The service is generic over any `ProductIndex` and `OrderStore`
/// implementation, enabling:
/// - Easy testing with mock implementations
/// - Swappable structure implementations
/// - Zero-cost abstraction (monomorphized at compile time)
///
/// ## Id Allocation
/// One counter per entity type, starting at 1, incremented only after a
/// request passes validation and reference resolution. Ids are never reset
/// and never reused, even after an order is deleted.

use crate::domain::catalog::ProductIndex;
use crate::domain::entities::{Order, OrderLine, Product};
use crate::domain::registry::OrderStore;
use crate::domain::validation::{RequestValidator, ValidationError};
use crate::shared::protocol::{NewOrderRequest, NewProductRequest};
use thiserror::Error;

/// Failures the boundary layer maps to transport responses.
///
/// Lookup absence is not represented here: query-style operations return
/// `Option` / `bool` directly, because absence is a routine outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An order line referenced a product id the catalog cannot resolve.
    #[error("product '{0}' does not exist")]
    UnknownProduct(u64),

    /// An update addressed an order id the registry cannot resolve.
    #[error("order '{0}' does not exist")]
    UnknownOrder(u64),
}

/// Application service coordinating the product catalog and the order
/// registry.
///
/// # Type Parameters
/// * `C` - ProductIndex implementation
/// * `R` - OrderStore implementation
pub struct StoreService<C: ProductIndex, R: OrderStore> {
    catalog: C,
    registry: R,
    validator: RequestValidator,
    next_product_id: u64,
    next_order_id: u64,
}

impl<C: ProductIndex, R: OrderStore> StoreService<C, R> {
    /// Creates a service around the provided structures.
    pub fn new(catalog: C, registry: R) -> Self {
        StoreService {
            catalog,
            registry,
            validator: RequestValidator::new(),
            next_product_id: 1,
            next_order_id: 1,
        }
    }

    /// Validates the request, allocates the next product id, and inserts
    /// the product into the catalog.
    pub fn create_product(&mut self, request: NewProductRequest) -> Result<Product, StoreError> {
        self.validator.validate_product(&request)?;

        let product = Product::new(self.next_product_id, request.name, request.price);
        self.next_product_id += 1;

        self.catalog.insert(product.clone());
        Ok(product)
    }

    /// Looks up a product by id. Returns a cloned snapshot.
    pub fn product(&self, id: u64) -> Option<Product> {
        self.catalog.search(id).cloned()
    }

    /// Validates the request, resolves every line against the catalog,
    /// allocates the next order id, and appends the order.
    ///
    /// The first unresolvable product reference aborts the whole request;
    /// nothing is appended and no id is consumed.
    pub fn create_order(&mut self, request: NewOrderRequest) -> Result<Order, StoreError> {
        self.validator.validate_order(&request)?;
        let lines = self.resolve_lines(&request.lines)?;

        let order = Order::new(self.next_order_id, request.customer_name, lines);
        self.next_order_id += 1;

        self.registry.append(order.clone());
        Ok(order)
    }

    /// Looks up an order by id. Returns a cloned snapshot.
    pub fn order(&self, id: u64) -> Option<Order> {
        self.registry.find_by_id(id).cloned()
    }

    /// Replaces the customer name and lines of an existing order. The
    /// replacement goes through the same validation and line resolution as
    /// creation; the order keeps its id and its position in the listing.
    pub fn update_order(&mut self, id: u64, request: NewOrderRequest) -> Result<Order, StoreError> {
        self.validator.validate_order(&request)?;
        let lines = self.resolve_lines(&request.lines)?;

        let replacement = Order::new(id, request.customer_name, lines);
        if self.registry.update(id, replacement.clone()) {
            Ok(replacement)
        } else {
            Err(StoreError::UnknownOrder(id))
        }
    }

    /// Unlinks an order. Returns whether a matching order was removed.
    pub fn delete_order(&mut self, id: u64) -> bool {
        self.registry.delete(id)
    }

    /// Snapshot of all orders in insertion order (minus deletions).
    pub fn orders(&self) -> Vec<Order> {
        self.registry.list_all()
    }

    /// Number of catalog nodes.
    pub fn product_count(&self) -> usize {
        self.catalog.len()
    }

    /// Number of registered orders.
    pub fn order_count(&self) -> usize {
        self.registry.len()
    }

    fn resolve_lines(&self, lines: &[OrderLine]) -> Result<Vec<OrderLine>, StoreError> {
        let mut resolved = Vec::with_capacity(lines.len());
        for line in lines {
            if self.catalog.search(line.product_id).is_none() {
                return Err(StoreError::UnknownProduct(line.product_id));
            }
            resolved.push(*line);
        }
        Ok(resolved)
    }
}
