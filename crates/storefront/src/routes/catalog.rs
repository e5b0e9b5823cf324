//! Catalog route handlers.
//!
//! The catalog lists category filters and the products of the selected
//! category. With no category, or an unknown one, the product list is empty.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use loperez_core::{Catalog, Category, CategoryId, Route};
use tracing::instrument;

use super::NavView;
use super::products::ProductView;
use crate::filters;
use crate::middleware::SessionCart;
use crate::state::AppState;

/// Category display data for templates.
#[derive(Clone)]
pub struct CategoryView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub url: String,
    pub selected: bool,
}

impl CategoryView {
    fn new(category: &Category, selected: Option<&CategoryId>) -> Self {
        Self {
            id: category.id.to_string(),
            name: category.name.clone(),
            description: category.description.clone(),
            url: Route::category(category.id.clone()).path(),
            selected: selected == Some(&category.id),
        }
    }
}

/// Catalog page template.
#[derive(Template, WebTemplate)]
#[template(path = "catalog.html")]
pub struct CatalogTemplate {
    pub nav: NavView,
    pub categories: Vec<CategoryView>,
    pub selected: Option<CategoryView>,
    pub products: Vec<ProductView>,
    pub return_to: String,
}

impl CatalogTemplate {
    fn build(state: &AppState, cart: &SessionCart, category: Option<CategoryId>) -> Self {
        let catalog: &Catalog = state.catalog();
        let return_to = Route::Catalog {
            category: category.clone(),
        }
        .path();
        let selected = category.as_ref();

        let categories = catalog
            .categories()
            .iter()
            .map(|c| CategoryView::new(c, selected))
            .collect();

        let products = selected.map_or_else(Vec::new, |id| {
            ProductView::list(catalog.products_by_category(id), state.config())
        });

        Self {
            nav: NavView::from(cart),
            categories,
            selected: selected
                .and_then(|id| catalog.find_category(id))
                .map(|c| CategoryView::new(c, selected)),
            products,
            return_to,
        }
    }
}

/// Display the catalog without a category filter.
#[instrument(skip(state, cart))]
pub async fn index(State(state): State<AppState>, cart: SessionCart) -> impl IntoResponse {
    CatalogTemplate::build(&state, &cart, None)
}

/// Display the catalog filtered to one category.
#[instrument(skip(state, cart))]
pub async fn show(
    State(state): State<AppState>,
    cart: SessionCart,
    Path(category): Path<CategoryId>,
) -> impl IntoResponse {
    if state.catalog().find_category(&category).is_none() {
        tracing::debug!(category_id = %category, "Unknown category, rendering empty list");
    }
    CatalogTemplate::build(&state, &cart, Some(category))
}
