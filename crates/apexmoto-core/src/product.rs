use serde::{Deserialize, Serialize};

use crate::links::encode_segment;
use crate::money::MoneyRange;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnail {
    pub url: String,
    pub alt: Option<String>,
}

/// A product as it appears in listing grids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub thumbnail: Option<Thumbnail>,
    pub category_name: Option<String>,
    pub price_range: Option<MoneyRange>,
}

impl ProductSummary {
    #[must_use]
    pub fn href(&self) -> String {
        format!("/products/{}", encode_segment(&self.slug))
    }

    /// Category shown on the card; products without one are labelled "Gear".
    #[must_use]
    pub fn category_label(&self) -> &str {
        match self.category_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => "Gear",
        }
    }
}

/// A storefront sales channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub currency_code: String,
    pub is_active: bool,
}
