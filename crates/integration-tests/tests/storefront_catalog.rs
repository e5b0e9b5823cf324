//! Integration tests for browsing: home, catalog filters and product details.

use loperez_core::{CategoryId, seed};
use loperez_integration_tests::TestContext;
use reqwest::StatusCode;

#[tokio::test]
async fn test_home_renders_all_products() {
    let ctx = TestContext::spawn().await;
    let page = ctx.get("/").await;

    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("Welcome to our E-commerce Store!"));
    assert!(page.body.contains("Explore our wide range of products."));
    assert_eq!(page.product_card_count(), 9);
}

#[tokio::test]
async fn test_catalog_electronics_renders_exactly_four_five_six() {
    let ctx = TestContext::spawn().await;
    let page = ctx.get("/catalog/electronics").await;

    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(page.product_card_count(), 3);
    for id in ["4", "5", "6"] {
        assert!(page.links_to_product(id), "missing product {id}");
    }
    for id in ["1", "2", "3", "7", "8", "9"] {
        assert!(!page.links_to_product(id), "unexpected product {id}");
    }
    assert!(
        page.body
            .contains("Explore a selection of cutting-edge electronic products.")
    );
}

#[tokio::test]
async fn test_every_category_page_matches_catalog_filter() {
    let ctx = TestContext::spawn().await;
    let catalog = seed::catalog().expect("seed catalog");

    for category in catalog.categories() {
        let page = ctx.get(&format!("/catalog/{}", category.id)).await;
        let expected = catalog.products_by_category(&category.id);

        assert_eq!(page.product_card_count(), expected.len());
        for product in catalog.products() {
            assert_eq!(
                page.links_to_product(product.id.as_str()),
                product.category == category.id,
                "product {} on /catalog/{}",
                product.id,
                category.id
            );
        }
    }
}

#[tokio::test]
async fn test_catalog_without_filter_lists_categories_only() {
    let ctx = TestContext::spawn().await;
    let page = ctx.get("/catalog").await;

    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(page.product_card_count(), 0);
    for name in ["Vehicles", "Electronics", "Clothing"] {
        assert!(page.body.contains(name));
    }
}

#[tokio::test]
async fn test_unknown_category_renders_empty_list() {
    let ctx = TestContext::spawn().await;
    let catalog = seed::catalog().expect("seed catalog");
    assert!(
        catalog
            .products_by_category(&CategoryId::new("furniture"))
            .is_empty()
    );

    let page = ctx.get("/catalog/furniture").await;
    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(page.product_card_count(), 0);
}

#[tokio::test]
async fn test_product_detail_shows_fields() {
    let ctx = TestContext::spawn().await;
    let page = ctx.get("/product/7").await;

    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("<h2>Cotton T-shirt</h2>"));
    assert!(page.body.contains("Soft cotton T-shirt with a modern design."));
    assert!(page.body.contains("Category: clothing"));
    assert!(page.body.contains("ID: 7"));
    assert!(page.body.contains("src=\"/static/images/7.jpg\""));
    assert!(page.body.contains("alt=\"Product: Cotton T-shirt\""));
}

#[tokio::test]
async fn test_unknown_product_renders_not_found_message() {
    let ctx = TestContext::spawn().await;
    let page = ctx.get("/product/99").await;

    assert_eq!(page.status, StatusCode::NOT_FOUND);
    assert!(page.body.contains("Product not found"));
    assert!(page.body.contains("Cart (0)"));
}

#[tokio::test]
async fn test_health() {
    let ctx = TestContext::spawn().await;
    let page = ctx.get("/health").await;

    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(page.body, "ok");
}
