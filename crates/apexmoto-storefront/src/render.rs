//! HTML rendering through handlebars templates compiled into the binary.

use handlebars::Handlebars;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::chrome::{FooterView, NavView};
use crate::views::{CmsView, HomeView, ListingView, PageMeta, ProductView};

const PARTIALS: [(&str, &str); 4] = [
    ("header", include_str!("../templates/header.hbs")),
    ("footer", include_str!("../templates/footer.hbs")),
    ("product_grid", include_str!("../templates/product_grid.hbs")),
    ("rich_text", include_str!("../templates/rich_text.hbs")),
];

const TEMPLATES: [(&str, &str); 8] = [
    ("layout", include_str!("../templates/layout.hbs")),
    ("home", include_str!("../templates/home.hbs")),
    ("about", include_str!("../templates/about.hbs")),
    ("listing", include_str!("../templates/listing.hbs")),
    ("product", include_str!("../templates/product.hbs")),
    ("page", include_str!("../templates/page.hbs")),
    ("not_found", include_str!("../templates/not_found.hbs")),
    ("error", include_str!("../templates/error.hbs")),
];

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template failed to compile: {0}")]
    Template(#[from] Box<handlebars::TemplateError>),

    #[error("template failed to render: {0}")]
    Render(#[from] handlebars::RenderError),
}

impl From<handlebars::TemplateError> for RenderError {
    fn from(err: handlebars::TemplateError) -> Self {
        Self::Template(Box::new(err))
    }
}

/// Header and footer data, present on every full storefront page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chrome {
    pub nav: NavView,
    pub footer: FooterView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageBody {
    Home(HomeView),
    About,
    Listing(ListingView),
    Product(ProductView),
    Cms(CmsView),
    NotFound { home_href: String },
    Error {
        home_href: String,
        request_id: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent {
    pub meta: PageMeta,
    pub body: PageBody,
}

#[derive(Serialize)]
struct LayoutData<'a> {
    meta: &'a PageMeta,
    nav: Option<&'a NavView>,
    footer: Option<&'a FooterView>,
    body: &'a str,
}

/// Template registry. Built once at startup and shared read-only.
#[derive(Debug)]
pub struct Renderer {
    registry: Handlebars<'static>,
}

impl Renderer {
    /// Compiles every embedded template.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] if a template does not parse.
    pub fn new() -> Result<Self, RenderError> {
        let mut registry = Handlebars::new();
        for (name, source) in PARTIALS {
            registry.register_partial(name, source)?;
        }
        for (name, source) in TEMPLATES {
            registry.register_template_string(name, source)?;
        }
        Ok(Self { registry })
    }

    /// Renders a full HTML document. Without `chrome` the page is rendered
    /// bare, which is what status pages use when the menus are unavailable.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Render`] if a template fails on the data.
    pub fn render_document(
        &self,
        content: &PageContent,
        chrome: Option<&Chrome>,
    ) -> Result<String, RenderError> {
        let body = self.render_body(&content.body)?;
        let layout = LayoutData {
            meta: &content.meta,
            nav: chrome.map(|c| &c.nav),
            footer: chrome.map(|c| &c.footer),
            body: &body,
        };
        Ok(self.registry.render("layout", &layout)?)
    }

    fn render_body(&self, body: &PageBody) -> Result<String, RenderError> {
        let html = match body {
            PageBody::Home(view) => self.registry.render("home", view)?,
            PageBody::About => self.registry.render("about", &json!({}))?,
            PageBody::Listing(view) => self.registry.render("listing", view)?,
            PageBody::Product(view) => self.registry.render("product", view)?,
            PageBody::Cms(view) => self.registry.render("page", view)?,
            PageBody::NotFound { home_href } => self
                .registry
                .render("not_found", &json!({ "home_href": home_href }))?,
            PageBody::Error {
                home_href,
                request_id,
            } => self.registry.render(
                "error",
                &json!({ "home_href": home_href, "request_id": request_id }),
            )?,
        };
        Ok(html)
    }
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
