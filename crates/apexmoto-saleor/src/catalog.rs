//! Product grid data with the curated-collection fallback.

use apexmoto_core::{AppConfig, ProductSummary};

use crate::client::SaleorClient;
use crate::error::SaleorError;

/// Which collection feeds the home grid and how many generic products to
/// show when it is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSettings {
    pub featured_collection: String,
    pub fallback_limit: u32,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            featured_collection: "featured-products".to_owned(),
            fallback_limit: 12,
        }
    }
}

impl CatalogSettings {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            featured_collection: config.featured_collection.clone(),
            fallback_limit: config.fallback_product_limit,
        }
    }
}

/// Products for the featured grid.
///
/// Requests the curated collection first; a missing or empty collection
/// triggers exactly one bounded generic-list request in the same channel.
/// An empty result from both is a valid, empty grid.
///
/// # Errors
///
/// Propagates the first [`SaleorError`]; there is no retry and no partial
/// fallback on error.
pub async fn featured_products(
    client: &SaleorClient,
    channel: &str,
    settings: &CatalogSettings,
) -> Result<Vec<ProductSummary>, SaleorError> {
    let curated = client
        .collection(&settings.featured_collection, channel)
        .await?
        .map(|collection| collection.products)
        .unwrap_or_default();

    if !curated.is_empty() {
        return Ok(curated);
    }

    tracing::debug!(
        channel,
        collection = %settings.featured_collection,
        limit = settings.fallback_limit,
        "featured collection empty; falling back to product list"
    );
    client.product_list(settings.fallback_limit, channel).await
}
