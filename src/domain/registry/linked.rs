//! Singly linked order chain.
//!
//! Orders live in a chain of boxed nodes in append order. There is no tail
//! pointer: append walks the chain, which keeps the node shape to exactly
//! one forward link and keeps every operation a single linear pass. All
//! operations are O(n) over the current chain length.

use super::traits::OrderStore;
use crate::domain::entities::Order;

/// A node owns one order and the rest of the chain behind it.
#[derive(Debug)]
struct RegistryNode {
    order: Order,
    next: Option<Box<RegistryNode>>,
}

impl RegistryNode {
    fn new(order: Order) -> Self {
        RegistryNode { order, next: None }
    }
}

/// Mutable ordered collection of orders, implemented as a singly linked
/// chain. The registry owns the head node and, transitively through the
/// forward links, every node after it.
#[derive(Debug, Default)]
pub struct OrderRegistry {
    head: Option<Box<RegistryNode>>,
}

impl OrderRegistry {
    pub fn new() -> Self {
        OrderRegistry { head: None }
    }
}

impl OrderStore for OrderRegistry {
    fn append(&mut self, order: Order) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(RegistryNode::new(order)));
    }

    fn find_by_id(&self, id: u64) -> Option<&Order> {
        let mut cursor = self.head.as_deref();
        while let Some(node) = cursor {
            if node.order.id == id {
                return Some(&node.order);
            }
            cursor = node.next.as_deref();
        }
        None
    }

    fn update(&mut self, id: u64, replacement: Order) -> bool {
        let mut cursor = self.head.as_deref_mut();
        while let Some(node) = cursor {
            if node.order.id == id {
                // The stored id is retained even if the replacement
                // carries a different one.
                node.order.customer_name = replacement.customer_name;
                node.order.lines = replacement.lines;
                return true;
            }
            cursor = node.next.as_deref_mut();
        }
        false
    }

    fn delete(&mut self, id: u64) -> bool {
        let mut cursor = &mut self.head;
        loop {
            match cursor {
                None => return false,
                Some(node) if node.order.id == id => {
                    *cursor = node.next.take();
                    return true;
                }
                Some(node) => cursor = &mut node.next,
            }
        }
    }

    fn list_all(&self) -> Vec<Order> {
        let mut orders = Vec::new();
        let mut cursor = self.head.as_deref();
        while let Some(node) = cursor {
            orders.push(node.order.clone());
            cursor = node.next.as_deref();
        }
        orders
    }

    fn len(&self) -> usize {
        let mut count = 0;
        let mut cursor = self.head.as_deref();
        while let Some(node) = cursor {
            count += 1;
            cursor = node.next.as_deref();
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::OrderLine;

    fn line(product_id: u64, quantity: u64) -> OrderLine {
        OrderLine {
            product_id,
            quantity,
        }
    }

    fn listed_ids(registry: &OrderRegistry) -> Vec<u64> {
        registry.list_all().iter().map(|o| o.id).collect()
    }

    #[test]
    fn test_empty_registry() {
        let registry = OrderRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert_eq!(registry.find_by_id(1), None);
        assert!(registry.list_all().is_empty());
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let mut registry = OrderRegistry::new();
        for id in [3, 1, 7, 2] {
            registry.append(Order::new(id, format!("customer-{id}"), Vec::new()));
        }

        // Listing follows append order, not id order.
        assert_eq!(listed_ids(&registry), vec![3, 1, 7, 2]);
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn test_find_by_id() {
        let mut registry = OrderRegistry::new();
        let ana = Order::new(1, "Ana", vec![line(1, 3)]);
        registry.append(ana.clone());

        assert_eq!(registry.find_by_id(1), Some(&ana));

        // Still found after unrelated appends.
        registry.append(Order::new(2, "Bob", Vec::new()));
        registry.append(Order::new(3, "Cleo", Vec::new()));
        assert_eq!(registry.find_by_id(1), Some(&ana));
        assert_eq!(registry.find_by_id(9), None);
    }

    #[test]
    fn test_update_overwrites_in_place() {
        let mut registry = OrderRegistry::new();
        registry.append(Order::new(1, "Ana", vec![line(1, 3)]));
        registry.append(Order::new(2, "Bob", vec![line(2, 1)]));

        // The replacement deliberately carries a different id; the stored
        // order must keep id 2 anyway.
        let replacement = Order::new(99, "Robert", vec![line(5, 4), line(1, 1)]);
        assert!(registry.update(2, replacement));

        let updated = registry.find_by_id(2).expect("order 2 must remain");
        assert_eq!(updated.id, 2);
        assert_eq!(updated.customer_name, "Robert");
        assert_eq!(updated.lines, vec![line(5, 4), line(1, 1)]);

        // Position in the listing is unchanged.
        assert_eq!(listed_ids(&registry), vec![1, 2]);
        assert_eq!(registry.find_by_id(99), None);
    }

    #[test]
    fn test_update_absent_changes_nothing() {
        let mut registry = OrderRegistry::new();
        registry.append(Order::new(1, "Ana", Vec::new()));

        assert!(!registry.update(5, Order::new(5, "Eve", Vec::new())));
        assert_eq!(listed_ids(&registry), vec![1]);
        assert_eq!(
            registry.find_by_id(1).map(|o| o.customer_name.as_str()),
            Some("Ana")
        );
    }

    #[test]
    fn test_delete_head_middle_and_tail() {
        let mut registry = OrderRegistry::new();
        for id in 1..=4 {
            registry.append(Order::new(id, "x", Vec::new()));
        }

        assert!(registry.delete(1)); // head
        assert_eq!(listed_ids(&registry), vec![2, 3, 4]);

        assert!(registry.delete(3)); // middle
        assert_eq!(listed_ids(&registry), vec![2, 4]);

        assert!(registry.delete(4)); // tail
        assert_eq!(listed_ids(&registry), vec![2]);

        assert!(registry.delete(2));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_delete_absent_changes_nothing() {
        let mut registry = OrderRegistry::new();
        registry.append(Order::new(1, "Ana", Vec::new()));
        registry.append(Order::new(2, "Bob", Vec::new()));

        assert!(!registry.delete(9));
        assert_eq!(listed_ids(&registry), vec![1, 2]);
    }

    #[test]
    fn test_list_all_is_a_snapshot() {
        let mut registry = OrderRegistry::new();
        registry.append(Order::new(1, "Ana", Vec::new()));

        let snapshot = registry.list_all();
        registry.delete(1);

        // The earlier snapshot is unaffected by later mutation.
        assert_eq!(snapshot.len(), 1);
        assert!(registry.list_all().is_empty());
    }

    #[test]
    fn test_concrete_scenario() {
        let mut registry = OrderRegistry::new();
        registry.append(Order::new(1, "Ana", vec![line(1, 3)]));
        registry.append(Order::new(2, "Bob", vec![line(2, 1), line(5, 2)]));

        assert_eq!(listed_ids(&registry), vec![1, 2]);

        assert!(registry.delete(1));
        assert_eq!(listed_ids(&registry), vec![2]);
        assert_eq!(registry.find_by_id(1), None);
    }
}
