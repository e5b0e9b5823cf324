//! The built-in catalog the storefront ships with.

use crate::catalog::{Catalog, CatalogError, Category, Product};

const CATEGORIES: &[(&str, &str, &str)] = &[
    (
        "vehicles",
        "Vehicles",
        "Find a variety of products related to vehicles, from cars to bicycles.",
    ),
    (
        "electronics",
        "Electronics",
        "Explore a selection of cutting-edge electronic products.",
    ),
    (
        "clothing",
        "Clothing",
        "Discover the latest fashion trends with our clothing collection.",
    ),
];

const PRODUCTS: &[(&str, &str, &str, &str)] = &[
    ("1", "Car", "vehicles", "A stylish car designed for comfort and style."),
    ("2", "Mountain Bike", "vehicles", "A rugged mountain bike for outdoor adventures."),
    ("3", "Electric Scooter", "vehicles", "Compact and efficient electric scooter for urban mobility."),
    ("4", "Smartphone", "electronics", "State-of-the-art smartphone with advanced features."),
    ("5", "Wireless Headphones", "electronics", "Wireless headphones with noise cancellation for an immersive sound experience."),
    ("6", "Smartwatch", "electronics", "Smartwatch with activity tracking and health monitoring."),
    ("7", "Cotton T-shirt", "clothing", "Soft cotton T-shirt with a modern design."),
    ("8", "Stylish Hoodie", "clothing", "Comfortable and stylish hoodie."),
    ("9", "High-Quality Jeans", "clothing", "High-quality jeans for a casual style."),
];

/// Build the built-in catalog.
///
/// # Errors
///
/// Returns a [`CatalogError`] if the built-in records are inconsistent.
pub fn catalog() -> Result<Catalog, CatalogError> {
    let categories = CATEGORIES
        .iter()
        .map(|&(id, name, description)| Category::new(id, name, description))
        .collect();
    let products = PRODUCTS
        .iter()
        .map(|&(id, name, category, description)| Product::new(id, name, category, description))
        .collect();

    Catalog::new(categories, products)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{CategoryId, ProductId};

    #[test]
    fn test_seed_catalog_is_valid() {
        let catalog = catalog().unwrap();
        assert_eq!(catalog.categories().len(), 3);
        assert_eq!(catalog.products().len(), 9);
    }

    #[test]
    fn test_every_category_filter_matches_static_count() {
        let catalog = catalog().unwrap();
        for category in catalog.categories() {
            let filtered = catalog.products_by_category(&category.id);
            let expected = PRODUCTS
                .iter()
                .filter(|(_, _, cat, _)| *cat == category.id.as_str())
                .count();

            assert_eq!(filtered.len(), expected);
            assert!(filtered.iter().all(|p| p.category == category.id));
        }
    }

    #[test]
    fn test_electronics_are_four_five_six() {
        let catalog = catalog().unwrap();
        let ids: Vec<_> = catalog
            .products_by_category(&CategoryId::new("electronics"))
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, ["4", "5", "6"]);
    }

    #[test]
    fn test_find_known_and_unknown_product() {
        let catalog = catalog().unwrap();
        let jeans = catalog.find_product(&ProductId::new("9")).unwrap();
        assert_eq!(jeans.name, "High-Quality Jeans");
        assert_eq!(jeans.category.as_str(), "clothing");

        assert!(catalog.find_product(&ProductId::new("99")).is_none());
    }
}
