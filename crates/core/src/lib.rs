//! LOPEREZ Core - Catalog, cart and navigation types.
//!
//! This crate provides the domain model shared by the storefront binary and
//! its tests:
//! - [`catalog`] - Validated, read-only category and product data
//! - [`cart`] - The ordered, append-only shopping cart
//! - [`route`] - Typed navigation states and their URL paths
//! - [`seed`] - The built-in catalog the storefront ships with
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP,
//! no sessions. This keeps it lightweight and trivially testable.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod route;
pub mod seed;
pub mod types;

pub use cart::Cart;
pub use catalog::{Catalog, CatalogError, Category, Product};
pub use route::Route;
pub use types::*;
