//! Cart route handlers.
//!
//! Each visitor session owns one cart. Adding is a plain form POST that
//! redirects back to the page the visitor came from.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    response::{IntoResponse, Redirect},
};
use loperez_core::{ProductId, Route};
use serde::Deserialize;
use tracing::instrument;

use super::NavView;
use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::middleware::SessionCart;
use crate::state::AppState;

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub name: String,
    pub detail_url: String,
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: ProductId,
    /// Page to go back to. Only storefront routes are honoured.
    pub return_to: Option<String>,
}

impl AddToCartForm {
    /// Where to send the visitor after adding.
    fn redirect_target(&self) -> Route {
        self.return_to
            .as_deref()
            .and_then(Route::parse)
            .unwrap_or_default()
    }
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub nav: NavView,
    pub items: Vec<CartItemView>,
}

/// Display cart page.
#[instrument(skip(state, cart))]
pub async fn show(State(state): State<AppState>, cart: SessionCart) -> impl IntoResponse {
    let items = cart
        .cart()
        .resolve(state.catalog())
        .into_iter()
        .map(|product| CartItemView {
            name: product.name.clone(),
            detail_url: Route::product(product.id.clone()).path(),
        })
        .collect();

    CartShowTemplate {
        nav: NavView::from(&cart),
        items,
    }
}

/// Add a product to the cart, then redirect back.
///
/// # Errors
///
/// Returns `BadRequest` for a malformed form, `NotFound` for an unknown
/// product id and `Session` if the visitor's session cannot be started.
#[instrument(skip(state, cart, form))]
pub async fn add(
    State(state): State<AppState>,
    mut cart: SessionCart,
    form: std::result::Result<Form<AddToCartForm>, FormRejection>,
) -> Result<Redirect> {
    let Form(form) = form.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let product = state
        .catalog()
        .find_product(&form.product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {}", form.product_id)))?;

    cart.add(product).await?;

    tracing::info!(
        product_id = %product.id,
        product_name = %product.name,
        cart_size = cart.count(),
        "Added to cart"
    );
    add_breadcrumb(
        "cart",
        "Added to cart",
        Some(&[("product_id", product.id.as_str())]),
    );

    Ok(Redirect::to(&form.redirect_target().path()))
}
