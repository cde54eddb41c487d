//! Navigation menu records resolved from the commerce backend.

use serde::Serialize;

use crate::links::encode_segment;

/// What a menu entry points at. Exactly one kind per entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuTarget {
    Category { slug: String, name: String },
    Collection { slug: String, name: String },
    Page { slug: String, title: String },
    Url { url: String },
}

impl MenuTarget {
    /// Channel-relative href for internal targets, raw URL otherwise.
    #[must_use]
    pub fn href(&self) -> String {
        match self {
            MenuTarget::Category { slug, .. } => format!("/categories/{}", encode_segment(slug)),
            MenuTarget::Collection { slug, .. } => {
                format!("/collections/{}", encode_segment(slug))
            }
            MenuTarget::Page { slug, .. } => format!("/pages/{}", encode_segment(slug)),
            MenuTarget::Url { url } => url.clone(),
        }
    }

    /// Entries that belong in the shop dropdown rather than the nav bar.
    #[must_use]
    pub fn is_shop(&self) -> bool {
        matches!(
            self,
            MenuTarget::Category { .. } | MenuTarget::Collection { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub id: String,
    pub name: String,
    pub target: MenuTarget,
}

impl MenuEntry {
    #[must_use]
    pub fn href(&self) -> String {
        self.target.href()
    }

    /// Display label: the target's own name or title, falling back to the
    /// entry name for raw URLs.
    #[must_use]
    pub fn label(&self) -> &str {
        let own = match &self.target {
            MenuTarget::Category { name, .. } | MenuTarget::Collection { name, .. } => name,
            MenuTarget::Page { title, .. } => title,
            MenuTarget::Url { .. } => &self.name,
        };
        if own.is_empty() {
            &self.name
        } else {
            own
        }
    }
}

/// A top-level footer heading with its child links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuSection {
    pub id: String,
    pub name: String,
    pub children: Vec<MenuEntry>,
}
