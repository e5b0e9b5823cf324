//! Integration tests for the LOPEREZ storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p loperez-integration-tests
//! ```
//!
//! Each test spawns its own storefront on an ephemeral port and talks to it
//! over real HTTP with a cookie-keeping client, so every test gets a fresh
//! session and therefore a fresh cart.

use std::net::SocketAddr;

use loperez_storefront::config::StorefrontConfig;
use loperez_storefront::state::AppState;
use reqwest::{Client, StatusCode};

/// A running storefront plus a client bound to one visitor session.
///
/// Clones share the client's cookie jar, so they act as the same visitor.
#[derive(Clone)]
pub struct TestContext {
    pub client: Client,
    pub base_url: String,
}

/// A fetched page.
pub struct Page {
    pub status: StatusCode,
    pub body: String,
}

impl Page {
    /// Number of product cards rendered on the page.
    #[must_use]
    pub fn product_card_count(&self) -> usize {
        self.body.matches("class=\"product-item\"").count()
    }

    /// Whether the page links to the detail view of `product_id`.
    #[must_use]
    pub fn links_to_product(&self, product_id: &str) -> bool {
        self.body.contains(&format!("href=\"/product/{product_id}\""))
    }

    /// Number of rows in the cart list.
    #[must_use]
    pub fn cart_item_count(&self) -> usize {
        self.body.matches("class=\"cart-item\"").count()
    }
}

impl TestContext {
    /// Start a storefront with the built-in catalog.
    ///
    /// # Panics
    ///
    /// Panics if the server cannot be started; tests cannot proceed without it.
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr: SocketAddr = listener.local_addr().expect("local addr");

        let config = StorefrontConfig {
            host: addr.ip(),
            port: addr.port(),
            base_url: format!("http://{addr}"),
            ..StorefrontConfig::default()
        };
        let state = AppState::with_seed_catalog(config).expect("seed catalog");
        let app = loperez_storefront::app(state);

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("server error");
        });

        let client = Client::builder()
            .cookie_store(true)
            .build()
            .expect("build client");

        Self {
            client,
            base_url: format!("http://{addr}"),
        }
    }

    /// GET a storefront path.
    ///
    /// # Panics
    ///
    /// Panics on transport errors.
    pub async fn get(&self, path: &str) -> Page {
        let response = self
            .client
            .get(format!("{}{path}", self.base_url))
            .send()
            .await
            .expect("GET request");
        Self::page(response).await
    }

    /// Submit the add-to-cart form, following the redirect.
    ///
    /// # Panics
    ///
    /// Panics on transport errors.
    pub async fn add_to_cart(&self, product_id: &str, return_to: &str) -> Page {
        self.post_form(
            "/cart/add",
            &[("product_id", product_id), ("return_to", return_to)],
        )
        .await
    }

    /// POST url-encoded fields to a storefront path, following redirects.
    ///
    /// # Panics
    ///
    /// Panics on transport errors.
    pub async fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> Page {
        let response = self
            .client
            .post(format!("{}{path}", self.base_url))
            .form(fields)
            .send()
            .await
            .expect("POST request");
        Self::page(response).await
    }

    async fn page(response: reqwest::Response) -> Page {
        let status = response.status();
        let body = response.text().await.expect("response body");
        Page { status, body }
    }
}
