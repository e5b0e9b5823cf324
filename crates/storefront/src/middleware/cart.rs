//! Session-scoped cart extractor.
//!
//! The session only identifies the visitor; carts themselves live in the
//! [`CartStore`] keyed by session id. A visitor gets a session the first time
//! they add something.

use axum::{extract::FromRequestParts, http::request::Parts};
use loperez_core::{Cart, Product};
use tower_sessions::Session;

use crate::carts::CartStore;
use crate::error::AppError;
use crate::state::AppState;

/// Session key marking a visitor that owns a cart.
pub const VISITOR_KEY: &str = "visitor";

/// Extractor that loads the visitor's cart.
///
/// A visitor without a session gets an empty cart; nothing is stored until
/// the first [`SessionCart::add`].
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(cart: SessionCart) -> impl IntoResponse {
///     format!("{} item(s)", cart.count())
/// }
/// ```
pub struct SessionCart {
    session: Session,
    carts: CartStore,
    cart: Cart,
}

impl SessionCart {
    /// The cart as seen by this request.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Number of items, shown in the navbar.
    #[must_use]
    pub fn count(&self) -> usize {
        self.cart.len()
    }

    /// Append a product to the visitor's cart.
    ///
    /// Starts a session first if the visitor has none. The append itself is
    /// atomic per session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be created.
    pub async fn add(&mut self, product: &Product) -> Result<(), AppError> {
        if self.session.id().is_none() {
            self.session.insert(VISITOR_KEY, true).await?;
            // Assigns the session id now rather than after the response
            self.session.save().await?;
        }

        let id = self
            .session
            .id()
            .ok_or_else(|| AppError::Internal("session has no id after save".to_string()))?;

        self.cart = self.carts.add(id, product).await;
        Ok(())
    }
}

impl FromRequestParts<AppState> for SessionCart {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Set by SessionManagerLayer
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or_else(|| AppError::Internal("session layer is not installed".to_string()))?;

        // Loading drops the id of a session the store no longer knows
        let known = session.get::<bool>(VISITOR_KEY).await?.unwrap_or(false);
        let carts = state.carts().clone();
        let cart = match session.id() {
            Some(id) if known => carts.snapshot(id).await,
            _ => Cart::new(),
        };

        Ok(Self {
            session,
            carts,
            cart,
        })
    }
}
