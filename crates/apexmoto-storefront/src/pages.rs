//! Per-request page assembly: upstream fetches, view models, rendering.

use apexmoto_core::RequestContext;
use apexmoto_saleor::{featured_products, CatalogSettings, SaleorClient, SaleorError};
use chrono::Datelike;
use thiserror::Error;

use crate::chrome::{build_footer, build_nav};
use crate::dropdown::MenuDropdown;
use crate::render::{Chrome, PageBody, PageContent, RenderError, Renderer};
use crate::route::PageRoute;
use crate::views::{describe, CmsView, HomeView, ListingView, PageMeta, ProductView};

pub const NAVBAR_MENU: &str = "navbar";
pub const FOOTER_MENU: &str = "footer";

/// Products requested for the all-products, category and collection pages.
pub const LISTING_PAGE_SIZE: u32 = 48;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("page not found")]
    NotFound,

    #[error("upstream request failed: {0}")]
    Upstream(#[from] SaleorError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Everything needed to turn a route into HTML. Cheap to share behind an
/// `Arc`; all per-request state lives on the stack.
#[derive(Debug)]
pub struct Storefront {
    client: SaleorClient,
    catalog: CatalogSettings,
    renderer: Renderer,
}

impl Storefront {
    /// # Errors
    ///
    /// Returns [`RenderError`] if the embedded templates fail to compile.
    pub fn new(client: SaleorClient, catalog: CatalogSettings) -> Result<Self, RenderError> {
        Ok(Self {
            client,
            catalog,
            renderer: Renderer::new()?,
        })
    }

    #[must_use]
    pub fn client(&self) -> &SaleorClient {
        &self.client
    }

    /// Renders a full page for `route` in `channel`.
    ///
    /// Page data and the header/footer menus are fetched concurrently; the
    /// first failure fails the page.
    ///
    /// # Errors
    ///
    /// [`PageError::NotFound`] for an unknown slug, [`PageError::Upstream`]
    /// when the commerce API fails, [`PageError::Render`] when a template
    /// fails.
    pub async fn render(&self, channel: &str, route: &PageRoute) -> Result<String, PageError> {
        let ctx = RequestContext::new(channel, &route.path());
        let (chrome, content) = tokio::try_join!(self.chrome(&ctx), self.content(&ctx, route))?;
        tracing::debug!(channel, path = %ctx.path, "page assembled");
        Ok(self.renderer.render_document(&content, Some(&chrome))?)
    }

    /// Bare 404 page. Makes no upstream requests.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the template fails.
    pub fn render_not_found(&self, channel: &str) -> Result<String, RenderError> {
        let ctx = RequestContext::new(channel, "/");
        let content = PageContent {
            meta: PageMeta::titled("Page not found", None),
            body: PageBody::NotFound {
                home_href: ctx.href("/"),
            },
        };
        self.renderer.render_document(&content, None)
    }

    /// Bare error page carrying the request id for support lookups.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the template fails.
    pub fn render_error(&self, channel: &str, request_id: Option<&str>) -> Result<String, RenderError> {
        let ctx = RequestContext::new(channel, "/");
        let content = PageContent {
            meta: PageMeta::titled("Something went wrong", None),
            body: PageBody::Error {
                home_href: ctx.href("/"),
                request_id: request_id.map(str::to_owned),
            },
        };
        self.renderer.render_document(&content, None)
    }

    async fn chrome(&self, ctx: &RequestContext) -> Result<Chrome, PageError> {
        let (nav_entries, footer_sections, channels) = tokio::try_join!(
            self.client.menu_entries(NAVBAR_MENU, &ctx.channel),
            self.client.menu_sections(FOOTER_MENU, &ctx.channel),
            self.client.channels(),
        )?;

        // Server output is always the closed, unplaced snapshot.
        let dropdown = MenuDropdown::new();
        let year = chrono::Utc::now().year();

        Ok(Chrome {
            nav: build_nav(ctx, &nav_entries, &dropdown),
            footer: build_footer(ctx, &footer_sections, channels.as_deref(), year),
        })
    }

    async fn content(
        &self,
        ctx: &RequestContext,
        route: &PageRoute,
    ) -> Result<PageContent, PageError> {
        let channel = ctx.channel.as_str();
        let content = match route {
            PageRoute::Home => {
                let products = featured_products(&self.client, channel, &self.catalog).await?;
                PageContent {
                    meta: PageMeta::titled(
                        "",
                        Some("Premium motorcycle gear for the track and the street.".to_owned()),
                    ),
                    body: PageBody::Home(HomeView {
                        products: crate::views::product_cards(ctx, &products),
                        all_products_href: ctx.href("/products"),
                    }),
                }
            }
            PageRoute::About => PageContent {
                meta: PageMeta::titled(
                    "About Us",
                    Some("Learn about APEX MOTO and the riders behind our gear.".to_owned()),
                ),
                body: PageBody::About,
            },
            PageRoute::Products => {
                let products = self.client.product_list(LISTING_PAGE_SIZE, channel).await?;
                PageContent {
                    meta: PageMeta::titled("All Products", None),
                    body: PageBody::Listing(ListingView::all_products(ctx, &products)),
                }
            }
            PageRoute::Product(slug) => {
                let product = self
                    .client
                    .product(slug, channel)
                    .await?
                    .ok_or(PageError::NotFound)?;
                PageContent {
                    meta: PageMeta::titled(
                        title_or(product.seo_title.as_deref(), &product.summary.name),
                        describe(
                            product.seo_description.as_deref(),
                            product.description.as_deref(),
                        ),
                    ),
                    body: PageBody::Product(ProductView::new(ctx, &product)),
                }
            }
            PageRoute::Category(slug) => {
                let category = self
                    .client
                    .category(slug, channel, LISTING_PAGE_SIZE)
                    .await?
                    .ok_or(PageError::NotFound)?;
                PageContent {
                    meta: PageMeta::titled(
                        title_or(category.seo_title.as_deref(), &category.name),
                        describe(
                            category.seo_description.as_deref(),
                            category.description.as_deref(),
                        ),
                    ),
                    body: PageBody::Listing(ListingView::category(ctx, &category)),
                }
            }
            PageRoute::Collection(slug) => {
                let collection = self
                    .client
                    .collection(slug, channel)
                    .await?
                    .ok_or(PageError::NotFound)?;
                PageContent {
                    meta: PageMeta::titled(
                        title_or(collection.seo_title.as_deref(), &collection.name),
                        describe(
                            collection.seo_description.as_deref(),
                            collection.description.as_deref(),
                        ),
                    ),
                    body: PageBody::Listing(ListingView::collection(ctx, &collection)),
                }
            }
            PageRoute::CmsPage(slug) => {
                let page = self.client.page(slug).await?.ok_or(PageError::NotFound)?;
                PageContent {
                    meta: PageMeta::titled(
                        title_or(page.seo_title.as_deref(), &page.title),
                        describe(page.seo_description.as_deref(), page.content.as_deref()),
                    ),
                    body: PageBody::Cms(CmsView::from(&page)),
                }
            }
        };
        Ok(content)
    }
}

fn title_or<'a>(seo_title: Option<&'a str>, fallback: &'a str) -> &'a str {
    seo_title.filter(|t| !t.trim().is_empty()).unwrap_or(fallback)
}
