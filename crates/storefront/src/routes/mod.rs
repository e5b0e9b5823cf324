//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (all products)
//! GET  /health                 - Health check
//!
//! # Catalog
//! GET  /catalog                - Category filters, no products
//! GET  /catalog/{category_id}  - Products of one category
//! GET  /product/{product_id}   - Product detail
//!
//! # Cart
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add to cart (redirects to `return_to`)
//! ```

pub mod cart;
pub mod catalog;
pub mod home;
pub mod products;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use crate::filters;
use crate::middleware::SessionCart;
use crate::state::AppState;

/// Data every page needs for the navigation bar.
#[derive(Clone, Copy, Debug, Default)]
pub struct NavView {
    pub cart_count: usize,
}

impl From<&SessionCart> for NavView {
    fn from(cart: &SessionCart) -> Self {
        Self {
            cart_count: cart.count(),
        }
    }
}

/// Page shown for paths outside the route table.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub nav: NavView,
}

/// Create the catalog routes router.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::index))
        .route("/{category_id}", get(catalog::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .nest("/catalog", catalog_routes())
        .route("/product/{product_id}", get(products::show))
        .nest("/cart", cart_routes())
        .fallback(not_found)
}

/// Fallback for unknown paths.
async fn not_found(cart: SessionCart) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            nav: NavView::from(&cart),
        },
    )
}
