//! GraphQL documents sent to Saleor.
//!
//! Each document names its operation; the name doubles as the
//! `operationName` field and as the response-cache key prefix.

const PRODUCT_LIST_ITEM: &str = r"
fragment ProductListItem on Product {
  id
  name
  slug
  pricing {
    priceRange {
      start { gross { amount currency } }
      stop { gross { amount currency } }
    }
  }
  category { id name }
  thumbnail(size: 1024, format: WEBP) { url alt }
}
";

const MENU_ITEM: &str = r"
fragment MenuItem on MenuItem {
  id
  name
  level
  category { id slug name }
  collection { id slug name }
  page { id slug title }
  url
}
";

/// A named GraphQL operation and its full document text.
#[derive(Debug, Clone, Copy)]
pub struct Operation {
    pub name: &'static str,
    body: &'static str,
    fragments: &'static [&'static str],
}

impl Operation {
    /// Document text with the fragments it spreads appended.
    #[must_use]
    pub fn document(&self) -> String {
        let mut doc = String::from(self.body);
        for fragment in self.fragments {
            doc.push_str(fragment);
        }
        doc
    }
}

pub const PRODUCT_LIST_BY_COLLECTION: Operation = Operation {
    name: "ProductListByCollection",
    body: r"
query ProductListByCollection($slug: String!, $channel: String!) {
  collection(slug: $slug, channel: $channel) {
    id
    name
    slug
    description
    seoTitle
    seoDescription
    products(first: 100) {
      edges { node { ...ProductListItem } }
    }
  }
}
",
    fragments: &[PRODUCT_LIST_ITEM],
};

pub const PRODUCT_LIST: Operation = Operation {
    name: "ProductList",
    body: r"
query ProductList($first: Int!, $channel: String!) {
  products(first: $first, channel: $channel) {
    edges { node { ...ProductListItem } }
  }
}
",
    fragments: &[PRODUCT_LIST_ITEM],
};

pub const PRODUCT_LIST_BY_CATEGORY: Operation = Operation {
    name: "ProductListByCategory",
    body: r"
query ProductListByCategory($slug: String!, $channel: String!, $first: Int!) {
  category(slug: $slug) {
    id
    name
    slug
    description
    seoTitle
    seoDescription
    products(first: $first, channel: $channel) {
      edges { node { ...ProductListItem } }
    }
  }
}
",
    fragments: &[PRODUCT_LIST_ITEM],
};

pub const PRODUCT_DETAILS: Operation = Operation {
    name: "ProductDetails",
    body: r"
query ProductDetails($slug: String!, $channel: String!) {
  product(slug: $slug, channel: $channel) {
    ...ProductListItem
    description
    seoTitle
    seoDescription
  }
}
",
    fragments: &[PRODUCT_LIST_ITEM],
};

pub const MENU_GET_BY_SLUG: Operation = Operation {
    name: "MenuGetBySlug",
    body: r"
query MenuGetBySlug($slug: String!, $channel: String!) {
  menu(slug: $slug, channel: $channel) {
    items {
      ...MenuItem
      children { ...MenuItem }
    }
  }
}
",
    fragments: &[MENU_ITEM],
};

pub const PAGE_GET_BY_SLUG: Operation = Operation {
    name: "PageGetBySlug",
    body: r"
query PageGetBySlug($slug: String!) {
  page(slug: $slug) {
    id
    slug
    title
    seoTitle
    seoDescription
    content
  }
}
",
    fragments: &[],
};

pub const CHANNELS_LIST: Operation = Operation {
    name: "ChannelsList",
    body: r"
query ChannelsList {
  channels {
    id
    name
    slug
    isActive
    currencyCode
  }
}
",
    fragments: &[],
};
