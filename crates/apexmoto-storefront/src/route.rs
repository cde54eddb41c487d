use apexmoto_core::links::encode_segment;

/// A storefront page, addressed by its path below `/{channel}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageRoute {
    Home,
    About,
    Products,
    Product(String),
    Category(String),
    Collection(String),
    CmsPage(String),
}

impl PageRoute {
    /// Parses an already percent-decoded, channel-stripped path. Returns
    /// `None` for anything that is not a storefront page.
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Some(Self::Home),
            ["about"] => Some(Self::About),
            ["products"] => Some(Self::Products),
            ["products", slug] => Some(Self::Product((*slug).to_owned())),
            ["categories", slug] => Some(Self::Category((*slug).to_owned())),
            ["collections", slug] => Some(Self::Collection((*slug).to_owned())),
            ["pages", slug] => Some(Self::CmsPage((*slug).to_owned())),
            _ => None,
        }
    }

    /// Canonical channel-relative path, slugs percent-encoded.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_owned(),
            Self::About => "/about".to_owned(),
            Self::Products => "/products".to_owned(),
            Self::Product(slug) => format!("/products/{}", encode_segment(slug)),
            Self::Category(slug) => format!("/categories/{}", encode_segment(slug)),
            Self::Collection(slug) => format!("/collections/{}", encode_segment(slug)),
            Self::CmsPage(slug) => format!("/pages/{}", encode_segment(slug)),
        }
    }
}
