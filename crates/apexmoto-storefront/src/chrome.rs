//! Header and footer view models shared by every page.

use apexmoto_core::{is_external, Channel, MenuEntry, MenuSection, RequestContext};
use serde::Serialize;

use crate::dropdown::{MenuDropdown, CLOSE_GRACE_MS, PANEL_GAP};
use crate::shop_menu::{ShopLink, ShopMenu};

pub const COMPANY_NAME: &str = "APEX MOTO";

/// Footer columns beyond this many are not rendered.
pub const FOOTER_COLUMNS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkView {
    pub label: String,
    pub href: String,
    pub active: bool,
    pub external: bool,
}

impl LinkView {
    fn new(ctx: &RequestContext, label: &str, href: &str) -> Self {
        Self {
            label: label.to_owned(),
            href: ctx.href(href),
            active: ctx.is_active(href),
            external: is_external(href) && href != "#",
        }
    }

    fn from_shop(ctx: &RequestContext, link: &ShopLink) -> Self {
        Self::new(ctx, &link.label, &link.href)
    }
}

/// Server-side snapshot of the shop dropdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShopDropdownView {
    pub expanded: bool,
    /// Inline `left`/`top` style for the floating panel, when placed.
    pub panel_style: Option<String>,
    pub close_grace_ms: u64,
    pub panel_gap_px: f64,
    pub all_products: LinkView,
    pub categories: Vec<LinkView>,
    pub collections: Vec<LinkView>,
}

impl ShopDropdownView {
    #[must_use]
    pub fn new(ctx: &RequestContext, menu: &ShopMenu, dropdown: &MenuDropdown) -> Self {
        Self {
            expanded: dropdown.is_open(),
            panel_style: dropdown
                .panel_placement()
                .map(|p| format!("left: {}px; top: {}px", p.left, p.top)),
            close_grace_ms: CLOSE_GRACE_MS,
            panel_gap_px: PANEL_GAP,
            all_products: LinkView::from_shop(ctx, &menu.all_products),
            categories: menu
                .categories
                .iter()
                .map(|link| LinkView::from_shop(ctx, link))
                .collect(),
            collections: menu
                .collections
                .iter()
                .map(|link| LinkView::from_shop(ctx, link))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavView {
    pub company_name: &'static str,
    /// On the home page the logo is the page heading instead of a link.
    pub logo_is_heading: bool,
    pub home_href: String,
    pub shop: ShopDropdownView,
    pub links: Vec<LinkView>,
}

/// Builds the header from the `navbar` menu. Category and collection entries
/// feed the shop dropdown; everything else becomes a plain link, followed by
/// the fixed "About Us" link.
#[must_use]
pub fn build_nav(ctx: &RequestContext, entries: &[MenuEntry], dropdown: &MenuDropdown) -> NavView {
    let menu = ShopMenu::from_entries(entries);
    let mut links: Vec<LinkView> = entries
        .iter()
        .filter(|entry| !entry.target.is_shop())
        .map(|entry| LinkView::new(ctx, entry.label(), &entry.href()))
        .collect();
    links.push(LinkView::new(ctx, "About Us", "/about"));

    NavView {
        company_name: COMPANY_NAME,
        logo_is_heading: ctx.is_home(),
        home_href: ctx.href("/"),
        shop: ShopDropdownView::new(ctx, &menu, dropdown),
        links,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterColumn {
    pub title: String,
    pub links: Vec<LinkView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelOption {
    pub name: String,
    pub currency_code: String,
    pub href: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterView {
    pub company_name: &'static str,
    pub columns: Vec<FooterColumn>,
    /// `None` when the channel list could not be requested (no app token).
    pub channels: Option<Vec<ChannelOption>>,
    pub year: i32,
}

/// Builds the footer from the first [`FOOTER_COLUMNS`] sections of the
/// `footer` menu and, when available, the channel list.
#[must_use]
pub fn build_footer(
    ctx: &RequestContext,
    sections: &[MenuSection],
    channels: Option<&[Channel]>,
    year: i32,
) -> FooterView {
    let columns = sections
        .iter()
        .take(FOOTER_COLUMNS)
        .map(|section| FooterColumn {
            title: section.name.clone(),
            links: section
                .children
                .iter()
                .map(|child| LinkView::new(ctx, child.label(), &child.href()))
                .collect(),
        })
        .collect();

    let channels = channels.map(|channels| {
        channels
            .iter()
            .filter(|channel| channel.is_active)
            .map(|channel| ChannelOption {
                name: channel.name.clone(),
                currency_code: channel.currency_code.clone(),
                href: apexmoto_core::channel_href(&channel.slug, &ctx.path),
                selected: channel.slug == ctx.channel,
            })
            .collect()
    });

    FooterView {
        company_name: COMPANY_NAME,
        columns,
        channels,
        year,
    }
}

#[cfg(test)]
#[path = "chrome_test.rs"]
mod tests;
