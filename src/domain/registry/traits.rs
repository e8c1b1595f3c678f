/// OrderStore Trait - Domain Layer Abstraction
///
/// This trait defines the interface a mutable, insertion-ordered order
/// collection must satisfy. The application service is generic over it, so
/// alternative representations (an arena with an id map, a Vec, a mock) can
/// be swapped in without touching the boundary layer, as long as the
/// observable contract holds: append order is listing order, lookups report
/// absence as `None`, and `update`/`delete` report absence as `false`.

use crate::domain::entities::Order;

/// Mutable ordered collection of orders keyed by id.
pub trait OrderStore {
    /// Appends an order after every previously appended order.
    ///
    /// Append is total: it always succeeds. Id uniqueness is the caller's
    /// responsibility.
    fn append(&mut self, order: Order);

    /// Returns the first order with the given id, if any.
    fn find_by_id(&self, id: u64) -> Option<&Order>;

    /// Overwrites the customer name and lines of the order with the given
    /// id. The stored order keeps its id and its position, regardless of
    /// the id carried by `replacement`. Returns `false` (and changes
    /// nothing) when the id is absent.
    fn update(&mut self, id: u64, replacement: Order) -> bool;

    /// Unlinks the order with the given id. Returns `false` (and changes
    /// nothing) when the id is absent.
    fn delete(&mut self, id: u64) -> bool;

    /// Snapshot of all orders in current chain order. Not a live view.
    fn list_all(&self) -> Vec<Order>;

    /// Number of stored orders.
    fn len(&self) -> usize;

    /// True when the store holds no orders.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
