//! HTTP client for the Saleor GraphQL endpoint.
//!
//! Every call is a POST of `{query, variables, operationName}`. A non-empty
//! `errors` array fails the call; there is no partial-data handling and no
//! retry. Catalog and menu reads go through a fixed-TTL [`ResponseCache`].

use std::time::Duration;

use apexmoto_core::{AppConfig, Channel, MenuEntry, MenuSection, ProductSummary};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::cache::ResponseCache;
use crate::error::SaleorError;
use crate::queries::{self, Operation};
use crate::types::{
    CategoryData, CategoryListing, ChannelsData, CmsPage, CollectionData, CollectionListing,
    GraphQlResponse, MenuData, PageData, ProductData, ProductDetail, ProductListData,
};

const DEFAULT_PRODUCT_CACHE: Duration = Duration::from_secs(60);
const DEFAULT_MENU_CACHE: Duration = Duration::from_secs(60 * 60 * 24);

/// Which cache a call is read through.
#[derive(Debug, Clone, Copy)]
enum CacheClass {
    Products,
    Menus,
}

/// Credentials attached to a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Auth {
    Anonymous,
    /// Bearer app token instead of any customer session.
    AppToken,
}

/// Client for the Saleor storefront API.
///
/// Use [`SaleorClient::from_app_config`] in the binaries, or
/// [`SaleorClient::new`] with a mock server URL in tests.
#[derive(Clone)]
pub struct SaleorClient {
    client: Client,
    endpoint: Url,
    app_token: Option<String>,
    product_cache: ResponseCache,
    menu_cache: ResponseCache,
}

impl std::fmt::Debug for SaleorClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SaleorClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("app_token", &self.app_token.as_ref().map(|_| "[redacted]"))
            .field("product_cache_ttl", &self.product_cache.ttl())
            .field("menu_cache_ttl", &self.menu_cache.ttl())
            .finish_non_exhaustive()
    }
}

impl SaleorClient {
    /// Creates a client for `endpoint` with default cache intervals
    /// (60 s for products, 24 h for menus) and no app token.
    ///
    /// # Errors
    ///
    /// Returns [`SaleorError::InvalidEndpoint`] if `endpoint` is not an
    /// absolute URL, or [`SaleorError::Http`] if the `reqwest::Client`
    /// cannot be constructed.
    pub fn new(endpoint: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, SaleorError> {
        let parsed = Url::parse(endpoint).map_err(|e| SaleorError::InvalidEndpoint {
            endpoint: endpoint.to_owned(),
            reason: e.to_string(),
        })?;
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            endpoint: parsed,
            app_token: None,
            product_cache: ResponseCache::new(DEFAULT_PRODUCT_CACHE),
            menu_cache: ResponseCache::new(DEFAULT_MENU_CACHE),
        })
    }

    /// Builds a client from the loaded application config.
    ///
    /// # Errors
    ///
    /// Same as [`SaleorClient::new`].
    pub fn from_app_config(config: &AppConfig) -> Result<Self, SaleorError> {
        Ok(Self::new(
            &config.saleor_api_url,
            config.request_timeout_secs,
            &config.user_agent,
        )?
        .with_app_token(config.saleor_app_token.clone())
        .with_cache_ttls(
            Duration::from_secs(config.product_cache_secs),
            Duration::from_secs(config.menu_cache_secs),
        ))
    }

    #[must_use]
    pub fn with_app_token(mut self, token: Option<String>) -> Self {
        self.app_token = token;
        self
    }

    /// Replaces both caches. A zero duration disables that cache.
    #[must_use]
    pub fn with_cache_ttls(mut self, products: Duration, menus: Duration) -> Self {
        self.product_cache = ResponseCache::new(products);
        self.menu_cache = ResponseCache::new(menus);
        self
    }

    #[must_use]
    pub fn has_app_token(&self) -> bool {
        self.app_token.is_some()
    }

    /// Fetches a curated collection with its products for a channel.
    /// Returns `None` when the collection does not exist in that channel.
    ///
    /// # Errors
    ///
    /// Any [`SaleorError`] from the underlying call.
    pub async fn collection(
        &self,
        slug: &str,
        channel: &str,
    ) -> Result<Option<CollectionListing>, SaleorError> {
        let data: CollectionData = self
            .execute(
                queries::PRODUCT_LIST_BY_COLLECTION,
                json!({ "slug": slug, "channel": channel }),
                Auth::Anonymous,
                CacheClass::Products,
            )
            .await?;
        Ok(data.collection.map(Into::into))
    }

    /// Fetches the first `first` products of a channel.
    ///
    /// # Errors
    ///
    /// Any [`SaleorError`] from the underlying call.
    pub async fn product_list(
        &self,
        first: u32,
        channel: &str,
    ) -> Result<Vec<ProductSummary>, SaleorError> {
        let data: ProductListData = self
            .execute(
                queries::PRODUCT_LIST,
                json!({ "first": first, "channel": channel }),
                Auth::Anonymous,
                CacheClass::Products,
            )
            .await?;
        Ok(data
            .products
            .map(|c| c.into_nodes().map(Into::into).collect())
            .unwrap_or_default())
    }

    /// Fetches a category and up to `first` of its products in a channel.
    ///
    /// # Errors
    ///
    /// Any [`SaleorError`] from the underlying call.
    pub async fn category(
        &self,
        slug: &str,
        channel: &str,
        first: u32,
    ) -> Result<Option<CategoryListing>, SaleorError> {
        let data: CategoryData = self
            .execute(
                queries::PRODUCT_LIST_BY_CATEGORY,
                json!({ "slug": slug, "channel": channel, "first": first }),
                Auth::Anonymous,
                CacheClass::Products,
            )
            .await?;
        Ok(data.category.map(Into::into))
    }

    /// Fetches a single product by slug.
    ///
    /// # Errors
    ///
    /// Any [`SaleorError`] from the underlying call.
    pub async fn product(
        &self,
        slug: &str,
        channel: &str,
    ) -> Result<Option<ProductDetail>, SaleorError> {
        let data: ProductData = self
            .execute(
                queries::PRODUCT_DETAILS,
                json!({ "slug": slug, "channel": channel }),
                Auth::Anonymous,
                CacheClass::Products,
            )
            .await?;
        Ok(data.product.map(Into::into))
    }

    async fn menu_items(
        &self,
        slug: &str,
        channel: &str,
    ) -> Result<Vec<crate::types::MenuItemNode>, SaleorError> {
        let data: MenuData = self
            .execute(
                queries::MENU_GET_BY_SLUG,
                json!({ "slug": slug, "channel": channel }),
                Auth::Anonymous,
                CacheClass::Menus,
            )
            .await?;
        Ok(data.menu.and_then(|m| m.items).unwrap_or_default())
    }

    /// Fetches a menu as a flat list of navigable entries. Items that
    /// resolve to no target are skipped.
    ///
    /// # Errors
    ///
    /// Any [`SaleorError`] from the underlying call.
    pub async fn menu_entries(
        &self,
        slug: &str,
        channel: &str,
    ) -> Result<Vec<MenuEntry>, SaleorError> {
        let items = self.menu_items(slug, channel).await?;
        let total = items.len();
        let entries: Vec<MenuEntry> = items
            .into_iter()
            .filter_map(crate::types::MenuItemNode::into_entry)
            .collect();
        if entries.len() < total {
            tracing::debug!(
                menu = slug,
                skipped = total - entries.len(),
                "menu items without a link target skipped"
            );
        }
        Ok(entries)
    }

    /// Fetches a menu as headed sections (top-level items with children).
    ///
    /// # Errors
    ///
    /// Any [`SaleorError`] from the underlying call.
    pub async fn menu_sections(
        &self,
        slug: &str,
        channel: &str,
    ) -> Result<Vec<MenuSection>, SaleorError> {
        let items = self.menu_items(slug, channel).await?;
        Ok(items
            .into_iter()
            .map(crate::types::MenuItemNode::into_section)
            .collect())
    }

    /// Fetches a static CMS page by slug.
    ///
    /// # Errors
    ///
    /// Any [`SaleorError`] from the underlying call.
    pub async fn page(&self, slug: &str) -> Result<Option<CmsPage>, SaleorError> {
        let data: PageData = self
            .execute(
                queries::PAGE_GET_BY_SLUG,
                json!({ "slug": slug }),
                Auth::Anonymous,
                CacheClass::Menus,
            )
            .await?;
        Ok(data.page.map(Into::into))
    }

    /// Lists channels using the app token. Returns `Ok(None)` without a
    /// request when no token is configured.
    ///
    /// # Errors
    ///
    /// Any [`SaleorError`] from the underlying call.
    pub async fn channels(&self) -> Result<Option<Vec<Channel>>, SaleorError> {
        if self.app_token.is_none() {
            return Ok(None);
        }
        let data: ChannelsData = self
            .execute(
                queries::CHANNELS_LIST,
                json!({}),
                Auth::AppToken,
                CacheClass::Menus,
            )
            .await?;
        Ok(Some(
            data.channels
                .unwrap_or_default()
                .into_iter()
                .map(Into::into)
                .collect(),
        ))
    }

    fn cache_for(&self, class: CacheClass) -> &ResponseCache {
        match class {
            CacheClass::Products => &self.product_cache,
            CacheClass::Menus => &self.menu_cache,
        }
    }

    /// Runs an operation through its cache and decodes the `data` payload.
    async fn execute<T: DeserializeOwned>(
        &self,
        operation: Operation,
        variables: serde_json::Value,
        auth: Auth,
        class: CacheClass,
    ) -> Result<T, SaleorError> {
        let cache = self.cache_for(class);
        let key = ResponseCache::key(operation.name, &variables);

        let data = if let Some(hit) = cache.get(&key).await {
            tracing::debug!(operation = operation.name, "saleor cache hit");
            hit
        } else {
            let fresh = self.send(operation, &variables, auth).await?;
            cache.insert(key, fresh.clone()).await;
            fresh
        };

        serde_json::from_value(data).map_err(|e| SaleorError::Deserialize {
            context: format!("{}({variables})", operation.name),
            source: e,
        })
    }

    /// Posts one GraphQL request and returns the raw `data` value.
    async fn send(
        &self,
        operation: Operation,
        variables: &serde_json::Value,
        auth: Auth,
    ) -> Result<serde_json::Value, SaleorError> {
        let body = json!({
            "query": operation.document(),
            "variables": variables,
            "operationName": operation.name,
        });

        let mut request = self.client.post(self.endpoint.clone()).json(&body);
        if auth == Auth::AppToken {
            if let Some(token) = &self.app_token {
                request = request.bearer_auth(token);
            }
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                operation = operation.name,
                status = status.as_u16(),
                "saleor request failed"
            );
            return Err(SaleorError::UnexpectedStatus {
                status: status.as_u16(),
                operation: operation.name.to_owned(),
            });
        }

        let text = response.text().await?;
        let envelope: GraphQlResponse<serde_json::Value> =
            serde_json::from_str(&text).map_err(|e| SaleorError::Deserialize {
                context: operation.name.to_owned(),
                source: e,
            })?;

        if !envelope.errors.is_empty() {
            return Err(SaleorError::GraphQl {
                operation: operation.name.to_owned(),
                messages: envelope.errors.into_iter().map(|e| e.message).collect(),
            });
        }

        envelope.data.ok_or_else(|| SaleorError::MissingData {
            operation: operation.name.to_owned(),
        })
    }
}
