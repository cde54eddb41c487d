//! Serializable page bodies handed to the templates.

use apexmoto_core::{format_money_range, ProductSummary, RequestContext};
use apexmoto_saleor::{CategoryListing, CmsPage, CollectionListing, ProductDetail};
use serde::Serialize;

use crate::chrome::COMPANY_NAME;
use crate::rich_text::{parse_blocks, summary, TextBlock};

/// Cards before this index get a high fetch priority.
pub const PRIORITY_IMAGES: usize = 4;
/// Cards before this index load eagerly; the rest lazily.
pub const EAGER_IMAGES: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: Option<String>,
}

impl PageMeta {
    /// `"{title} | APEX MOTO"`, or just the company name for an empty title.
    #[must_use]
    pub fn titled(title: &str, description: Option<String>) -> Self {
        let title = if title.is_empty() {
            COMPANY_NAME.to_owned()
        } else {
            format!("{title} | {COMPANY_NAME}")
        };
        Self { title, description }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageView {
    pub url: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCardView {
    pub name: String,
    pub href: String,
    pub category: String,
    pub price: String,
    pub image: Option<ImageView>,
    pub loading: &'static str,
    pub priority: bool,
}

fn image_view(product: &ProductSummary) -> Option<ImageView> {
    product.thumbnail.as_ref().map(|thumb| ImageView {
        url: thumb.url.clone(),
        alt: thumb
            .alt
            .clone()
            .filter(|alt| !alt.is_empty())
            .unwrap_or_else(|| product.name.clone()),
    })
}

#[must_use]
pub fn product_cards(ctx: &RequestContext, products: &[ProductSummary]) -> Vec<ProductCardView> {
    products
        .iter()
        .enumerate()
        .map(|(index, product)| ProductCardView {
            name: product.name.clone(),
            href: ctx.href(&product.href()),
            category: product.category_label().to_owned(),
            price: format_money_range(product.price_range.as_ref()),
            image: image_view(product),
            loading: if index < EAGER_IMAGES { "eager" } else { "lazy" },
            priority: index < PRIORITY_IMAGES,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeView {
    pub products: Vec<ProductCardView>,
    pub all_products_href: String,
}

/// Shared by the all-products, category and collection pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingView {
    pub title: String,
    pub blocks: Vec<TextBlock>,
    pub products: Vec<ProductCardView>,
}

impl ListingView {
    #[must_use]
    pub fn all_products(ctx: &RequestContext, products: &[ProductSummary]) -> Self {
        Self {
            title: "All Products".to_owned(),
            blocks: Vec::new(),
            products: product_cards(ctx, products),
        }
    }

    #[must_use]
    pub fn category(ctx: &RequestContext, category: &CategoryListing) -> Self {
        Self {
            title: category.name.clone(),
            blocks: category
                .description
                .as_deref()
                .map(parse_blocks)
                .unwrap_or_default(),
            products: product_cards(ctx, &category.products),
        }
    }

    #[must_use]
    pub fn collection(ctx: &RequestContext, collection: &CollectionListing) -> Self {
        Self {
            title: collection.name.clone(),
            blocks: collection
                .description
                .as_deref()
                .map(parse_blocks)
                .unwrap_or_default(),
            products: product_cards(ctx, &collection.products),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductView {
    pub name: String,
    pub category: String,
    pub price: String,
    pub image: Option<ImageView>,
    pub blocks: Vec<TextBlock>,
    pub all_products_href: String,
}

impl ProductView {
    #[must_use]
    pub fn new(ctx: &RequestContext, product: &ProductDetail) -> Self {
        let summary = &product.summary;
        Self {
            name: summary.name.clone(),
            category: summary.category_label().to_owned(),
            price: format_money_range(summary.price_range.as_ref()),
            image: image_view(summary),
            blocks: product
                .description
                .as_deref()
                .map(parse_blocks)
                .unwrap_or_default(),
            all_products_href: ctx.href("/products"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmsView {
    pub title: String,
    pub blocks: Vec<TextBlock>,
}

impl From<&CmsPage> for CmsView {
    fn from(page: &CmsPage) -> Self {
        Self {
            title: page.title.clone(),
            blocks: page.content.as_deref().map(parse_blocks).unwrap_or_default(),
        }
    }
}

/// SEO description with a fallback to the first paragraph of the body.
#[must_use]
pub fn describe(seo_description: Option<&str>, content: Option<&str>) -> Option<String> {
    seo_description
        .filter(|d| !d.trim().is_empty())
        .map(str::to_owned)
        .or_else(|| content.and_then(summary))
}
