//! Per-session cart storage.
//!
//! Carts are keyed by session id and each one sits behind its own async
//! mutex, so concurrent adds from the same visitor (double clicks, several
//! tabs) are applied one after another and none is lost. The cache is
//! bounded and drops carts that have been idle as long as their session.

use std::sync::Arc;
use std::time::Duration;

use loperez_core::{Cart, Product};
use moka::future::Cache;
use tokio::sync::Mutex;
use tower_sessions::session::Id;

/// Shared, bounded map from session id to that session's cart.
#[derive(Clone)]
pub struct CartStore {
    carts: Cache<Id, Arc<Mutex<Cart>>>,
}

impl CartStore {
    /// Create a store holding at most `max_capacity` carts, each dropped after
    /// `idle` without access.
    #[must_use]
    pub fn new(max_capacity: u64, idle: Duration) -> Self {
        let carts = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_idle(idle)
            .build();

        Self { carts }
    }

    /// A copy of the cart for `id`, empty if the session has none.
    pub async fn snapshot(&self, id: Id) -> Cart {
        match self.carts.get(&id).await {
            Some(cart) => cart.lock().await.clone(),
            None => Cart::new(),
        }
    }

    /// Append `product` to the cart for `id` and return the new cart.
    ///
    /// The append and the returned copy happen under the cart's lock.
    pub async fn add(&self, id: Id, product: &Product) -> Cart {
        let cart = self
            .carts
            .get_with(id, async { Arc::new(Mutex::new(Cart::new())) })
            .await;

        let mut cart = cart.lock().await;
        cart.add(product);
        cart.clone()
    }
}
