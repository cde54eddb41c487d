//! Saleor GraphQL response shapes and their conversion into domain records.
//!
//! Field names follow the GraphQL schema (camelCase). Everything the schema
//! marks nullable is `Option` here; conversion drops what the storefront
//! cannot render instead of failing the page.

use apexmoto_core::{
    Channel, MenuEntry, MenuSection, MenuTarget, Money, MoneyRange, ProductSummary, Thumbnail,
};
use rust_decimal::Decimal;
use serde::Deserialize;

/// GraphQL response envelope: `{ "data": ..., "errors": [...] }`.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct Connection<T> {
    #[serde(default = "Vec::new")]
    pub edges: Vec<Edge<T>>,
}

#[derive(Debug, Deserialize)]
pub struct Edge<T> {
    pub node: T,
}

impl<T> Connection<T> {
    pub fn into_nodes(self) -> impl Iterator<Item = T> {
        self.edges.into_iter().map(|edge| edge.node)
    }
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct MoneyNode {
    pub amount: Decimal,
    pub currency: String,
}

#[derive(Debug, Deserialize)]
pub struct TaxedMoney {
    pub gross: MoneyNode,
}

#[derive(Debug, Deserialize)]
pub struct PriceRangeNode {
    pub start: Option<TaxedMoney>,
    pub stop: Option<TaxedMoney>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingNode {
    pub price_range: Option<PriceRangeNode>,
}

#[derive(Debug, Deserialize)]
pub struct NamedRef {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ImageNode {
    pub url: String,
    pub alt: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProductListItem {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub pricing: Option<PricingNode>,
    pub category: Option<NamedRef>,
    pub thumbnail: Option<ImageNode>,
}

impl From<MoneyNode> for Money {
    fn from(node: MoneyNode) -> Self {
        Money {
            amount: node.amount,
            currency: node.currency,
        }
    }
}

impl From<ProductListItem> for ProductSummary {
    fn from(item: ProductListItem) -> Self {
        let price_range = item
            .pricing
            .and_then(|p| p.price_range)
            .map(|range| MoneyRange {
                start: range.start.map(|m| m.gross.into()),
                stop: range.stop.map(|m| m.gross.into()),
            });
        ProductSummary {
            id: item.id,
            slug: item.slug,
            name: item.name,
            thumbnail: item
                .thumbnail
                .filter(|t| !t.url.is_empty())
                .map(|t| Thumbnail {
                    url: t.url,
                    alt: t.alt,
                }),
            category_name: item.category.map(|c| c.name),
            price_range,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ProductListData {
    pub products: Option<Connection<ProductListItem>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionNode {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub products: Option<Connection<ProductListItem>>,
}

#[derive(Debug, Deserialize)]
pub struct CollectionData {
    pub collection: Option<CollectionNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryNode {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub products: Option<Connection<ProductListItem>>,
}

#[derive(Debug, Deserialize)]
pub struct CategoryData {
    pub category: Option<CategoryNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductNode {
    #[serde(flatten)]
    pub item: ProductListItem,
    pub description: Option<String>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProductData {
    pub product: Option<ProductNode>,
}

/// A curated collection and the products it holds.
#[derive(Debug, Clone)]
pub struct CollectionListing {
    pub name: String,
    pub slug: String,
    /// Raw rich-text JSON as stored by the dashboard editor.
    pub description: Option<String>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub products: Vec<ProductSummary>,
}

impl From<CollectionNode> for CollectionListing {
    fn from(node: CollectionNode) -> Self {
        CollectionListing {
            name: node.name,
            slug: node.slug,
            description: node.description,
            seo_title: node.seo_title,
            seo_description: node.seo_description,
            products: node
                .products
                .map(|c| c.into_nodes().map(Into::into).collect())
                .unwrap_or_default(),
        }
    }
}

/// A category and its products in one channel.
#[derive(Debug, Clone)]
pub struct CategoryListing {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub products: Vec<ProductSummary>,
}

impl From<CategoryNode> for CategoryListing {
    fn from(node: CategoryNode) -> Self {
        CategoryListing {
            name: node.name,
            slug: node.slug,
            description: node.description,
            seo_title: node.seo_title,
            seo_description: node.seo_description,
            products: node
                .products
                .map(|c| c.into_nodes().map(Into::into).collect())
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProductDetail {
    pub summary: ProductSummary,
    pub description: Option<String>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
}

impl From<ProductNode> for ProductDetail {
    fn from(node: ProductNode) -> Self {
        ProductDetail {
            summary: node.item.into(),
            description: node.description,
            seo_title: node.seo_title,
            seo_description: node.seo_description,
        }
    }
}

// ---------------------------------------------------------------------------
// Menus
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct SlugRef {
    pub slug: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct PageRef {
    pub slug: String,
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct MenuItemNode {
    pub id: String,
    pub name: String,
    pub category: Option<SlugRef>,
    pub collection: Option<SlugRef>,
    pub page: Option<PageRef>,
    pub url: Option<String>,
    #[serde(default)]
    pub children: Option<Vec<MenuItemNode>>,
}

impl MenuItemNode {
    /// Resolves the link target, first populated kind wins in the order
    /// category, collection, page, url.
    fn target(&self) -> Option<MenuTarget> {
        if let Some(c) = &self.category {
            return Some(MenuTarget::Category {
                slug: c.slug.clone(),
                name: c.name.clone(),
            });
        }
        if let Some(c) = &self.collection {
            return Some(MenuTarget::Collection {
                slug: c.slug.clone(),
                name: c.name.clone(),
            });
        }
        if let Some(p) = &self.page {
            return Some(MenuTarget::Page {
                slug: p.slug.clone(),
                title: p.title.clone(),
            });
        }
        self.url
            .as_ref()
            .filter(|u| !u.is_empty())
            .map(|url| MenuTarget::Url { url: url.clone() })
    }

    /// Converts into a navigable entry; items without any target yield `None`.
    #[must_use]
    pub fn into_entry(self) -> Option<MenuEntry> {
        let target = self.target()?;
        Some(MenuEntry {
            id: self.id,
            name: self.name,
            target,
        })
    }

    /// Converts a top-level item into a footer section. Children without a
    /// target are kept as `#` links so the column still lists them.
    #[must_use]
    pub fn into_section(self) -> MenuSection {
        let children = self
            .children
            .unwrap_or_default()
            .into_iter()
            .map(|child| {
                let target = child.target().unwrap_or(MenuTarget::Url {
                    url: "#".to_owned(),
                });
                MenuEntry {
                    id: child.id,
                    name: child.name,
                    target,
                }
            })
            .collect();
        MenuSection {
            id: self.id,
            name: self.name,
            children,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MenuNode {
    pub items: Option<Vec<MenuItemNode>>,
}

#[derive(Debug, Deserialize)]
pub struct MenuData {
    pub menu: Option<MenuNode>,
}

// ---------------------------------------------------------------------------
// Pages and channels
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageNode {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PageData {
    pub page: Option<PageNode>,
}

/// A static CMS page.
#[derive(Debug, Clone)]
pub struct CmsPage {
    pub slug: String,
    pub title: String,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    /// Rich-text JSON document, rendered by the storefront.
    pub content: Option<String>,
}

impl From<PageNode> for CmsPage {
    fn from(node: PageNode) -> Self {
        CmsPage {
            slug: node.slug,
            title: node.title,
            seo_title: node.seo_title,
            seo_description: node.seo_description,
            content: node.content,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelNode {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub is_active: bool,
    pub currency_code: String,
}

impl From<ChannelNode> for Channel {
    fn from(node: ChannelNode) -> Self {
        Channel {
            id: node.id,
            slug: node.slug,
            name: node.name,
            currency_code: node.currency_code,
            is_active: node.is_active,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChannelsData {
    pub channels: Option<Vec<ChannelNode>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn menu_item(value: serde_json::Value) -> MenuItemNode {
        serde_json::from_value(value).expect("menu item")
    }

    #[test]
    fn product_item_converts_price_range_from_float_amounts() {
        let item: ProductListItem = serde_json::from_value(json!({
            "id": "UHJvZHVjdDox",
            "name": "Carbon Helmet",
            "slug": "carbon-helmet",
            "pricing": { "priceRange": {
                "start": { "gross": { "amount": 299.99, "currency": "USD" } },
                "stop": { "gross": { "amount": 349.0, "currency": "USD" } }
            }},
            "category": { "id": "Q2F0OjE=", "name": "Helmets" },
            "thumbnail": { "url": "https://cdn.example.com/h.webp", "alt": null }
        }))
        .expect("product item");

        let summary = ProductSummary::from(item);
        let range = summary.price_range.expect("range");
        assert_eq!(range.start.unwrap().amount.to_string(), "299.99");
        assert_eq!(range.stop.unwrap().currency, "USD");
        assert_eq!(summary.category_name.as_deref(), Some("Helmets"));
        assert!(summary.thumbnail.is_some());
    }

    #[test]
    fn product_item_tolerates_missing_pricing_and_thumbnail() {
        let item: ProductListItem = serde_json::from_value(json!({
            "id": "1", "name": "Gloves", "slug": "gloves",
            "pricing": null, "category": null, "thumbnail": null
        }))
        .expect("product item");
        let summary = ProductSummary::from(item);
        assert!(summary.price_range.is_none());
        assert!(summary.thumbnail.is_none());
    }

    #[test]
    fn menu_item_prefers_category_over_other_targets() {
        let item = menu_item(json!({
            "id": "1", "name": "Helmets",
            "category": { "id": "c1", "slug": "helmets", "name": "Helmets" },
            "collection": { "id": "k1", "slug": "summer", "name": "Summer" },
            "page": null, "url": null
        }));
        let entry = item.into_entry().expect("entry");
        assert!(matches!(entry.target, MenuTarget::Category { ref slug, .. } if slug == "helmets"));
    }

    #[test]
    fn menu_item_without_target_is_dropped() {
        let item = menu_item(json!({
            "id": "1", "name": "Heading",
            "category": null, "collection": null, "page": null, "url": null
        }));
        assert!(item.into_entry().is_none());
    }

    #[test]
    fn footer_section_keeps_untargeted_children_as_hash_links() {
        let item = menu_item(json!({
            "id": "s1", "name": "Help",
            "category": null, "collection": null, "page": null, "url": null,
            "children": [
                { "id": "c1", "name": "Shipping", "category": null, "collection": null,
                  "page": { "id": "p1", "slug": "shipping", "title": "Shipping Info" }, "url": null },
                { "id": "c2", "name": "Coming soon", "category": null, "collection": null,
                  "page": null, "url": null }
            ]
        }));
        let section = item.into_section();
        assert_eq!(section.name, "Help");
        assert_eq!(section.children.len(), 2);
        assert_eq!(section.children[0].href(), "/pages/shipping");
        assert_eq!(section.children[0].label(), "Shipping Info");
        assert_eq!(section.children[1].href(), "#");
        assert_eq!(section.children[1].label(), "Coming soon");
    }
}
