//! Navigable storefront views and their URL paths.
//!
//! ```text
//! /                      Home
//! /catalog               Catalog { category: None }
//! /catalog/{categoryId}  Catalog { category: Some(..) }
//! /product/{productId}   ProductDetail
//! /cart                  Cart
//! ```
//!
//! Every state is reachable from every other by following a link; there are
//! no guards and no terminal state. [`Route::parse`] and [`Route::path`] are
//! inverses of each other.

use std::fmt;

use crate::types::{CategoryId, ProductId};

/// A storefront view, addressed by URL path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Route {
    #[default]
    Home,
    Catalog {
        category: Option<CategoryId>,
    },
    ProductDetail {
        id: ProductId,
    },
    Cart,
}

impl Route {
    /// Catalog view without a category filter.
    #[must_use]
    pub const fn catalog() -> Self {
        Self::Catalog { category: None }
    }

    /// Catalog view filtered to `category`.
    #[must_use]
    pub fn category(category: impl Into<CategoryId>) -> Self {
        Self::Catalog {
            category: Some(category.into()),
        }
    }

    /// Detail view for `id`.
    #[must_use]
    pub fn product(id: impl Into<ProductId>) -> Self {
        Self::ProductDetail { id: id.into() }
    }

    /// Parse a URL path (without query string) into a route.
    ///
    /// A single trailing slash is accepted. Anything that is not a storefront
    /// view returns `None`.
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let rest = path.strip_prefix('/')?;
        let rest = rest.strip_suffix('/').unwrap_or(rest);
        if rest.is_empty() {
            return Some(Self::Home);
        }

        let mut segments = rest.split('/');
        let route = match (segments.next(), segments.next()) {
            (Some("catalog"), None) => Self::catalog(),
            (Some("catalog"), Some(category)) if is_key(category) => Self::category(category),
            (Some("product"), Some(id)) if is_key(id) => Self::product(id),
            (Some("cart"), None) => Self::Cart,
            _ => return None,
        };

        if segments.next().is_some() {
            return None;
        }
        Some(route)
    }

    /// The canonical URL path for this route.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Catalog { category: None } => "/catalog".to_string(),
            Self::Catalog {
                category: Some(category),
            } => format!("/catalog/{category}"),
            Self::ProductDetail { id } => format!("/product/{id}"),
            Self::Cart => "/cart".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Path parameters are restricted to characters ids are made of.
fn is_key(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_views() {
        assert_eq!(Route::parse("/"), Some(Route::Home));
        assert_eq!(Route::parse("/catalog"), Some(Route::catalog()));
        assert_eq!(
            Route::parse("/catalog/electronics"),
            Some(Route::category("electronics"))
        );
        assert_eq!(Route::parse("/product/4"), Some(Route::product("4")));
        assert_eq!(Route::parse("/cart"), Some(Route::Cart));
    }

    #[test]
    fn test_parse_tolerates_trailing_slash() {
        assert_eq!(Route::parse("/cart/"), Some(Route::Cart));
        assert_eq!(Route::parse("/product/7/"), Some(Route::product("7")));
    }

    #[test]
    fn test_parse_rejects_foreign_paths() {
        assert_eq!(Route::parse(""), None);
        assert_eq!(Route::parse("cart"), None);
        assert_eq!(Route::parse("//evil.example.com"), None);
        assert_eq!(Route::parse("/product"), None);
        assert_eq!(Route::parse("/product/4/reviews"), None);
        assert_eq!(Route::parse("/catalog/a b"), None);
        assert_eq!(Route::parse("/cart/add"), None);
        assert_eq!(Route::parse("/admin"), None);
    }

    #[test]
    fn test_path_round_trips() {
        let routes = [
            Route::Home,
            Route::catalog(),
            Route::category("clothing"),
            Route::product("9"),
            Route::Cart,
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), Some(route.clone()));
            assert_eq!(route.to_string(), route.path());
        }
    }

    #[test]
    fn test_initial_route_is_home() {
        assert_eq!(Route::default(), Route::Home);
    }
}
