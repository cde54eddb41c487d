use apexmoto_core::{MenuEntry, MenuSection, MenuTarget, RequestContext};

use super::*;
use crate::chrome::{build_footer, build_nav};
use crate::dropdown::MenuDropdown;
use crate::rich_text::parse_blocks;
use crate::views::{ImageView, ProductCardView};

fn chrome(ctx: &RequestContext) -> Chrome {
    let entries = vec![MenuEntry {
        id: "1".to_owned(),
        name: "FAQ".to_owned(),
        target: MenuTarget::Page {
            slug: "faq".to_owned(),
            title: "FAQ".to_owned(),
        },
    }];
    let sections = vec![MenuSection {
        id: "s1".to_owned(),
        name: "Support".to_owned(),
        children: Vec::new(),
    }];
    Chrome {
        nav: build_nav(ctx, &entries, &MenuDropdown::new()),
        footer: build_footer(ctx, &sections, None, 2026),
    }
}

fn card(name: &str) -> ProductCardView {
    ProductCardView {
        name: name.to_owned(),
        href: "/default-channel/products/x".to_owned(),
        category: "Helmets".to_owned(),
        price: "$99.00".to_owned(),
        image: Some(ImageView {
            url: "https://cdn.example.com/x.png".to_owned(),
            alt: name.to_owned(),
        }),
        loading: "eager",
        priority: true,
    }
}

#[test]
fn all_templates_compile() {
    Renderer::new().expect("templates compile");
}

#[test]
fn home_renders_chrome_and_featured_grid() {
    let renderer = Renderer::new().expect("renderer");
    let ctx = RequestContext::new("default-channel", "/");
    let content = PageContent {
        meta: PageMeta::titled("", None),
        body: PageBody::Home(HomeView {
            products: vec![card("Carbon Helmet")],
            all_products_href: ctx.href("/products"),
        }),
    };

    let html = renderer
        .render_document(&content, Some(&chrome(&ctx)))
        .expect("render");

    assert!(html.contains("<title>APEX MOTO</title>"));
    assert!(html.contains("<h1>APEX MOTO</h1>"));
    assert!(html.contains("Featured Gear"));
    assert!(html.contains("Carbon Helmet"));
    assert!(html.contains(r#"fetchpriority="high""#));
    assert!(html.contains(r#"href="/default-channel/categories/helmets""#));
    assert!(html.contains(r#"href="/default-channel/pages/faq""#));
    assert!(html.contains(r#"data-close-grace-ms="150""#));
    assert!(html.contains(r#"aria-expanded="false""#));
    assert!(!html.contains("style=\"left"));
    assert!(html.contains("Copyright &copy; 2026 APEX MOTO"));
    assert!(!html.contains("channel-select"));
}

#[test]
fn empty_featured_grid_renders_no_section() {
    let renderer = Renderer::new().expect("renderer");
    let content = PageContent {
        meta: PageMeta::titled("", None),
        body: PageBody::Home(HomeView {
            products: Vec::new(),
            all_products_href: "/c/products".to_owned(),
        }),
    };

    let html = renderer.render_document(&content, None).expect("render");

    assert!(!html.contains("Featured Gear"));
    assert!(!html.contains("product-grid"));
}

#[test]
fn empty_listing_renders_heading_only() {
    let renderer = Renderer::new().expect("renderer");
    let content = PageContent {
        meta: PageMeta::titled("Helmets", None),
        body: PageBody::Listing(ListingView {
            title: "Helmets".to_owned(),
            blocks: Vec::new(),
            products: Vec::new(),
        }),
    };

    let html = renderer.render_document(&content, None).expect("render");

    assert!(html.contains("<h1>Helmets</h1>"));
    assert!(!html.contains("product-grid"));
    assert!(!html.contains("No products found"));
}

#[test]
fn interpolated_text_is_escaped() {
    let renderer = Renderer::new().expect("renderer");
    let content = PageContent {
        meta: PageMeta::titled("<script>", Some("\"quoted\"".to_owned())),
        body: PageBody::Listing(ListingView {
            title: "<b>Sale</b>".to_owned(),
            blocks: Vec::new(),
            products: vec![card("A & B")],
        }),
    };

    let html = renderer.render_document(&content, None).expect("render");

    assert!(html.contains("&lt;b&gt;Sale&lt;/b&gt;"));
    assert!(html.contains("A &amp; B"));
    assert!(!html.contains("<script>"));
    assert!(html.contains("&quot;quoted&quot;"));
}

#[test]
fn cms_page_renders_blocks() {
    let renderer = Renderer::new().expect("renderer");
    let blocks = parse_blocks(
        r#"{"blocks":[
            {"type":"header","data":{"text":"Returns","level":3}},
            {"type":"list","data":{"style":"unordered","items":["30 days"]}}
        ]}"#,
    );
    let content = PageContent {
        meta: PageMeta::titled("Returns", None),
        body: PageBody::Cms(CmsView {
            title: "Returns".to_owned(),
            blocks,
        }),
    };

    let html = renderer.render_document(&content, None).expect("render");

    assert!(html.contains("<h3>Returns</h3>"));
    assert!(html.contains("<ul><li>30 days</li></ul>"));
}

#[test]
fn error_page_shows_request_id() {
    let renderer = Renderer::new().expect("renderer");
    let content = PageContent {
        meta: PageMeta::titled("Error", None),
        body: PageBody::Error {
            home_href: "/default-channel".to_owned(),
            request_id: Some("req-123".to_owned()),
        },
    };

    let html = renderer.render_document(&content, None).expect("render");

    assert!(html.contains("Something went wrong"));
    assert!(html.contains("req-123"));
    assert!(!html.contains("site-header"));
}
