/// ProductIndex Trait - Domain Layer Abstraction
///
/// This trait defines the interface an ordered product index must satisfy.
/// It enables dependency injection and allows different index
/// implementations to be used interchangeably.
///
/// ## Design Principles
/// - **Domain-Driven**: Interface defined by the operations the service
///   needs, not by the tree shape behind them
/// - **Zero-Cost Abstraction**: The application service is generic over the
///   index, so calls are monomorphized at compile time
/// - **Testability**: Easy to mock for unit testing

use crate::domain::entities::Product;

/// Ordered index from product id to product.
///
/// Absence is a routine outcome: `search` returns `None` for an unknown id,
/// it never signals an error.
pub trait ProductIndex {
    /// Inserts a product into the index.
    ///
    /// Insertion is total: it always succeeds and returns nothing. The
    /// caller is responsible for id uniqueness; see `ProductCatalog` for
    /// the duplicate-id behavior of the tree implementation.
    fn insert(&mut self, product: Product);

    /// Point lookup by product id.
    fn search(&self, id: u64) -> Option<&Product>;

    /// All products in ascending-id order.
    ///
    /// Each call performs a fresh traversal; nothing is consumed.
    fn in_order(&self) -> Vec<&Product>;

    /// Number of stored nodes.
    fn len(&self) -> usize;

    /// True when the index holds no products.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
