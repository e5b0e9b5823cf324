//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use loperez_core::{Product, ProductId, Route};
use tracing::instrument;

use super::NavView;
use crate::config::StorefrontConfig;
use crate::filters;
use crate::middleware::SessionCart;
use crate::state::AppState;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub image_url: String,
    pub detail_url: String,
}

impl ProductView {
    /// Build the view for `product`, resolving its image under the asset root.
    #[must_use]
    pub fn new(product: &Product, config: &StorefrontConfig) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            description: product.description.clone(),
            category: product.category.to_string(),
            image_url: config.product_image_url(product.id.as_str()),
            detail_url: Route::product(product.id.clone()).path(),
        }
    }

    /// Build views for a list of products, keeping their order.
    #[must_use]
    pub fn list<'a>(
        products: impl IntoIterator<Item = &'a Product>,
        config: &StorefrontConfig,
    ) -> Vec<Self> {
        products
            .into_iter()
            .map(|product| Self::new(product, config))
            .collect()
    }
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub nav: NavView,
    pub product: Option<ProductView>,
    pub return_to: String,
}

/// Display product detail page.
///
/// An unknown id renders the "Product not found" message with a 404 status.
#[instrument(skip(state, cart))]
pub async fn show(
    State(state): State<AppState>,
    cart: SessionCart,
    Path(id): Path<ProductId>,
) -> Response {
    let product = state
        .catalog()
        .find_product(&id)
        .map(|product| ProductView::new(product, state.config()));
    let status = if product.is_some() {
        StatusCode::OK
    } else {
        tracing::debug!(product_id = %id, "Product not found");
        StatusCode::NOT_FOUND
    };

    let template = ProductShowTemplate {
        nav: NavView::from(&cart),
        product,
        return_to: Route::product(id).path(),
    };

    (status, template).into_response()
}
