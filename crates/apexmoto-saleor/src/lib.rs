//! Typed client for the Saleor storefront GraphQL API.

pub mod cache;
pub mod catalog;
pub mod client;
pub mod error;
pub mod queries;
pub mod types;

pub use catalog::{featured_products, CatalogSettings};
pub use client::SaleorClient;
pub use error::SaleorError;
pub use types::{CategoryListing, CmsPage, CollectionListing, ProductDetail};
