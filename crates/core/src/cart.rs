//! The shopping cart.
//!
//! A cart is an ordered list of product ids. Adding is the only mutation:
//! there is no quantity merging and no removal, so the same product may
//! appear several times and the cart length always equals the number of adds.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Product};
use crate::types::ProductId;

/// An append-only, insertion-ordered cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<ProductId>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append a product to the end of the cart.
    pub fn add(&mut self, product: &Product) {
        self.items.push(product.id.clone());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Product ids in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = &ProductId> {
        self.items.iter()
    }

    /// Resolve cart entries back to catalog products, in cart order.
    ///
    /// Ids the catalog no longer knows are skipped.
    #[must_use]
    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        self.items
            .iter()
            .filter_map(|id| catalog.find_product(id))
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::seed;

    fn product(catalog: &Catalog, id: &str) -> Product {
        catalog.find_product(&ProductId::new(id)).unwrap().clone()
    }

    #[test]
    fn test_new_cart_is_empty() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
    }

    #[test]
    fn test_add_preserves_call_order() {
        let catalog = seed::catalog().unwrap();
        let mut cart = Cart::new();
        cart.add(&product(&catalog, "1"));
        cart.add(&product(&catalog, "4"));

        let names: Vec<_> = cart
            .resolve(&catalog)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, ["Car", "Smartphone"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let catalog = seed::catalog().unwrap();
        let hoodie = product(&catalog, "8");
        let mut cart = Cart::new();
        for _ in 0..5 {
            cart.add(&hoodie);
        }

        assert_eq!(cart.len(), 5);
        assert!(cart.iter().all(|id| id.as_str() == "8"));
    }

    #[test]
    fn test_resolve_skips_unknown_ids() {
        let catalog = seed::catalog().unwrap();
        let mut cart = Cart::new();
        cart.add(&Product::new("99", "Ghost", "vehicles", ""));
        cart.add(&product(&catalog, "2"));

        assert_eq!(cart.len(), 2);
        let resolved = cart.resolve(&catalog);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].name, "Mountain Bike");
    }

    #[test]
    fn test_serializes_as_id_list() {
        let catalog = seed::catalog().unwrap();
        let mut cart = Cart::new();
        cart.add(&product(&catalog, "3"));
        cart.add(&product(&catalog, "3"));

        let json = serde_json::to_string(&cart).unwrap();
        assert_eq!(json, r#"["3","3"]"#);
        let back: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cart);
    }
}
