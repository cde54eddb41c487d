//! Grouping of navbar entries into the shop dropdown.

use apexmoto_core::{MenuEntry, MenuTarget};
use serde::Serialize;

/// Shown when the navbar menu carries no category entries.
pub const FALLBACK_CATEGORIES: [(&str, &str); 6] = [
    ("helmets", "Helmets"),
    ("jackets", "Jackets"),
    ("gloves", "Gloves"),
    ("boots", "Boots"),
    ("pants", "Pants"),
    ("accessories", "Accessories"),
];

/// A label with a channel-relative href.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShopLink {
    pub label: String,
    pub href: String,
}

impl ShopLink {
    fn from_entry(entry: &MenuEntry) -> Self {
        Self {
            label: entry.label().to_owned(),
            href: entry.href(),
        }
    }
}

/// Dropdown content: "All Products", then categories, then collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShopMenu {
    pub all_products: ShopLink,
    pub categories: Vec<ShopLink>,
    pub collections: Vec<ShopLink>,
    pub uses_fallback_categories: bool,
}

impl ShopMenu {
    /// Builds the dropdown from navbar entries. Entries that are neither
    /// category nor collection backed are ignored here.
    #[must_use]
    pub fn from_entries(entries: &[MenuEntry]) -> Self {
        let mut categories = Vec::new();
        let mut collections = Vec::new();
        for entry in entries {
            match entry.target {
                MenuTarget::Category { .. } => categories.push(ShopLink::from_entry(entry)),
                MenuTarget::Collection { .. } => collections.push(ShopLink::from_entry(entry)),
                MenuTarget::Page { .. } | MenuTarget::Url { .. } => {}
            }
        }

        let uses_fallback_categories = categories.is_empty();
        if uses_fallback_categories {
            categories = fallback_categories();
        }

        Self {
            all_products: ShopLink {
                label: "All Products".to_owned(),
                href: "/products".to_owned(),
            },
            categories,
            collections,
            uses_fallback_categories,
        }
    }

    /// Every link in display order.
    pub fn links(&self) -> impl Iterator<Item = &ShopLink> {
        std::iter::once(&self.all_products)
            .chain(&self.categories)
            .chain(&self.collections)
    }
}

fn fallback_categories() -> Vec<ShopLink> {
    FALLBACK_CATEGORIES
        .iter()
        .map(|(slug, label)| ShopLink {
            label: (*label).to_owned(),
            href: format!("/categories/{slug}"),
        })
        .collect()
}
