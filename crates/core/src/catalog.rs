//! Read-only product catalog.
//!
//! A [`Catalog`] is built once at startup from category and product records
//! and never changes afterwards. Construction validates that ids are unique
//! and that every product points at a known category, so a bad dataset fails
//! fast instead of rendering empty listings.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{CategoryId, ProductId};

/// A grouping label for products, shown as a navigational filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
}

impl Category {
    #[must_use]
    pub fn new(
        id: impl Into<CategoryId>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A sellable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// The owning category. Always a valid key once inside a [`Catalog`].
    pub category: CategoryId,
    pub description: String,
}

impl Product {
    #[must_use]
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: impl Into<CategoryId>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            description: description.into(),
        }
    }
}

/// Errors raised while assembling a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Duplicate category id: {0}")]
    DuplicateCategory(CategoryId),
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(ProductId),
    #[error("Product {product} references unknown category {category}")]
    UnknownCategory {
        product: ProductId,
        category: CategoryId,
    },
}

/// Validated, immutable catalog data.
///
/// Source order of both categories and products is preserved by every
/// accessor.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
    products: Vec<Product>,
    category_index: HashMap<CategoryId, usize>,
    product_index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog, checking id uniqueness and category references.
    ///
    /// # Errors
    ///
    /// Returns the first [`CatalogError`] found, scanning categories before
    /// products.
    pub fn new(categories: Vec<Category>, products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut category_index = HashMap::with_capacity(categories.len());
        for (position, category) in categories.iter().enumerate() {
            if category_index
                .insert(category.id.clone(), position)
                .is_some()
            {
                return Err(CatalogError::DuplicateCategory(category.id.clone()));
            }
        }

        let mut product_index = HashMap::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            if !category_index.contains_key(&product.category) {
                return Err(CatalogError::UnknownCategory {
                    product: product.id.clone(),
                    category: product.category.clone(),
                });
            }
            if product_index.insert(product.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateProduct(product.id.clone()));
            }
        }

        Ok(Self {
            categories,
            products,
            category_index,
            product_index,
        })
    }

    /// All categories, in source order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All products, in source order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products belonging to `category`, in source order.
    ///
    /// An unknown category yields an empty list rather than an error.
    #[must_use]
    pub fn products_by_category(&self, category: &CategoryId) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| &product.category == category)
            .collect()
    }

    /// Look up a product by id.
    #[must_use]
    pub fn find_product(&self, id: &ProductId) -> Option<&Product> {
        self.product_index
            .get(id)
            .and_then(|&position| self.products.get(position))
    }

    /// Look up a category by id.
    #[must_use]
    pub fn find_category(&self, id: &CategoryId) -> Option<&Category> {
        self.category_index
            .get(id)
            .and_then(|&position| self.categories.get(position))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn small_catalog() -> Catalog {
        Catalog::new(
            vec![
                Category::new("tools", "Tools", "Hand tools"),
                Category::new("toys", "Toys", "Things to play with"),
            ],
            vec![
                Product::new("a", "Hammer", "tools", "Hits nails"),
                Product::new("b", "Kite", "toys", "Flies"),
                Product::new("c", "Saw", "tools", "Cuts wood"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_products_by_category_preserves_order() {
        let catalog = small_catalog();
        let names: Vec<_> = catalog
            .products_by_category(&CategoryId::new("tools"))
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, ["Hammer", "Saw"]);
    }

    #[test]
    fn test_products_by_unknown_category_is_empty() {
        let catalog = small_catalog();
        assert!(
            catalog
                .products_by_category(&CategoryId::new("garden"))
                .is_empty()
        );
    }

    #[test]
    fn test_find_product() {
        let catalog = small_catalog();
        let kite = catalog.find_product(&ProductId::new("b")).unwrap();
        assert_eq!(kite.name, "Kite");
        assert!(catalog.find_product(&ProductId::new("z")).is_none());
    }

    #[test]
    fn test_find_category() {
        let catalog = small_catalog();
        assert_eq!(
            catalog.find_category(&CategoryId::new("toys")).unwrap().name,
            "Toys"
        );
        assert!(catalog.find_category(&CategoryId::new("food")).is_none());
    }

    #[test]
    fn test_rejects_dangling_category_reference() {
        let err = Catalog::new(
            vec![Category::new("tools", "Tools", "")],
            vec![Product::new("a", "Kite", "toys", "")],
        )
        .unwrap_err();

        assert_eq!(
            err,
            CatalogError::UnknownCategory {
                product: ProductId::new("a"),
                category: CategoryId::new("toys"),
            }
        );
        assert_eq!(err.to_string(), "Product a references unknown category toys");
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = Catalog::new(
            vec![
                Category::new("tools", "Tools", ""),
                Category::new("tools", "More Tools", ""),
            ],
            Vec::new(),
        )
        .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateCategory(CategoryId::new("tools")));

        let err = Catalog::new(
            vec![Category::new("tools", "Tools", "")],
            vec![
                Product::new("a", "Hammer", "tools", ""),
                Product::new("a", "Saw", "tools", ""),
            ],
        )
        .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateProduct(ProductId::new("a")));
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = Catalog::new(Vec::new(), Vec::new()).unwrap();
        assert!(catalog.categories().is_empty());
        assert!(catalog.products().is_empty());
    }
}
