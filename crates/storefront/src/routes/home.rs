//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use loperez_core::Route;
use tracing::instrument;

use super::NavView;
use super::products::ProductView;
use crate::filters;
use crate::middleware::SessionCart;
use crate::state::AppState;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub nav: NavView,
    pub products: Vec<ProductView>,
    pub return_to: String,
}

/// Display the home page with every product.
#[instrument(skip(state, cart))]
pub async fn home(State(state): State<AppState>, cart: SessionCart) -> impl IntoResponse {
    HomeTemplate {
        nav: NavView::from(&cart),
        products: ProductView::list(state.catalog().products(), state.config()),
        return_to: Route::Home.path(),
    }
}
