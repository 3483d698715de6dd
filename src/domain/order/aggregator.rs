use std::collections::HashMap;

use crate::domain::catalog::{Catalog, Product, ProductId};
use super::value_objects::Order;

// ============================================================================
// Order Aggregator - cart entries to one order per product
// ============================================================================
//
// Unknown identifiers are dropped, never reported as errors. Orders come out
// in the order each product first appears in the cart.
//
// ============================================================================

pub fn group_by_cart<S: AsRef<str>>(catalog: &Catalog, cart: &[S]) -> Vec<Order> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, &Product, u32)> = Vec::new();

    for entry in cart {
        let id = entry.as_ref();
        let Some(product) = catalog.lookup(id) else {
            tracing::warn!(product_id = id, "Dropping unknown cart entry");
            continue;
        };

        match slots.get(id) {
            Some(&slot) => groups[slot].2 += 1,
            None => {
                slots.insert(id, groups.len());
                groups.push((id, product, 1));
            }
        }
    }

    groups
        .into_iter()
        .map(|(id, product, quantity)| Order::new(ProductId::new(id), product, quantity))
        .collect()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn find<'a>(orders: &'a [Order], id: &str) -> &'a Order {
        orders.iter().find(|o| o.id.as_str() == id).unwrap()
    }

    #[test]
    fn test_groups_duplicates_regardless_of_position() {
        let orders = group_by_cart(&Catalog::sample(), &["003", "002", "003", "003", "004"]);

        assert_eq!(orders.len(), 3);
        assert_eq!(find(&orders, "003").quantity, 3);
        assert_eq!(find(&orders, "002").quantity, 1);
        assert_eq!(find(&orders, "004").quantity, 1);
    }

    #[test]
    fn test_new_orders_are_untouched_at_catalog_price() {
        let orders = group_by_cart(&Catalog::sample(), &["004", "004"]);
        let fanta = find(&orders, "004");

        assert_eq!(fanta.name, "Fanta");
        assert_eq!(fanta.original_price, 60.0);
        assert_eq!(fanta.discounted_price, 60.0);
        assert!(fanta.is_untouched());
    }

    #[test]
    fn test_unknown_ids_are_dropped() {
        let orders = group_by_cart(&Catalog::sample(), &["006", "001", "xyz"]);
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].id.as_str(), "001");
    }

    #[test]
    fn test_only_unknown_ids_yield_no_orders() {
        let orders = group_by_cart(&Catalog::sample(), &["006", "007"]);
        assert!(orders.is_empty());
    }

    #[test]
    fn test_empty_cart() {
        let cart: Vec<String> = Vec::new();
        assert!(group_by_cart(&Catalog::sample(), &cart).is_empty());
    }

    #[test]
    fn test_output_follows_first_appearance() {
        let orders = group_by_cart(&Catalog::sample(), &["005", "001", "005", "003"]);
        let ids: Vec<&str> = orders.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["005", "001", "003"]);
    }

    #[test]
    fn test_unit_count_is_preserved() {
        let cart = ["001", "002", "001", "006", "002", "002"];
        let orders = group_by_cart(&Catalog::sample(), &cart);
        let units: u32 = orders.iter().map(|o| o.quantity).sum();
        assert_eq!(units, 5);
    }
}
