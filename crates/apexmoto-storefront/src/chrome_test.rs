use apexmoto_core::MenuTarget;

use super::*;

fn entry(name: &str, target: MenuTarget) -> MenuEntry {
    MenuEntry {
        id: name.to_owned(),
        name: name.to_owned(),
        target,
    }
}

fn navbar() -> Vec<MenuEntry> {
    vec![
        entry(
            "Helmets",
            MenuTarget::Category {
                slug: "helmets".to_owned(),
                name: "Helmets".to_owned(),
            },
        ),
        entry(
            "Shipping",
            MenuTarget::Page {
                slug: "shipping".to_owned(),
                title: "Shipping & Returns".to_owned(),
            },
        ),
        entry(
            "Blog",
            MenuTarget::Url {
                url: "https://blog.example.com".to_owned(),
            },
        ),
    ]
}

fn channel(slug: &str, active: bool) -> Channel {
    Channel {
        id: slug.to_owned(),
        slug: slug.to_owned(),
        name: slug.to_uppercase(),
        currency_code: "USD".to_owned(),
        is_active: active,
    }
}

#[test]
fn nav_splits_shop_entries_from_links() {
    let ctx = RequestContext::new("default-channel", "/products");
    let nav = build_nav(&ctx, &navbar(), &MenuDropdown::new());

    let labels: Vec<&str> = nav.links.iter().map(|l| l.label.as_str()).collect();
    assert_eq!(labels, ["Shipping & Returns", "Blog", "About Us"]);
    assert_eq!(nav.links[0].href, "/default-channel/pages/shipping");
    assert_eq!(nav.links[1].href, "https://blog.example.com");
    assert!(nav.links[1].external);
    assert_eq!(nav.links[2].href, "/default-channel/about");

    assert_eq!(nav.shop.categories.len(), 1);
    assert_eq!(nav.shop.categories[0].href, "/default-channel/categories/helmets");
    assert_eq!(nav.shop.all_products.href, "/default-channel/products");
    assert!(nav.shop.all_products.active);
}

#[test]
fn active_link_matches_channel_stripped_path() {
    let ctx = RequestContext::new("eu", "/about");
    let nav = build_nav(&ctx, &[], &MenuDropdown::new());

    let about = nav.links.last().expect("about link");
    assert!(about.active);
    assert!(!nav.logo_is_heading);
    assert_eq!(nav.home_href, "/eu");
}

#[test]
fn logo_is_heading_on_home() {
    let ctx = RequestContext::new("eu", "/");
    let nav = build_nav(&ctx, &[], &MenuDropdown::new());
    assert!(nav.logo_is_heading);
    assert_eq!(nav.company_name, "APEX MOTO");
}

#[test]
fn server_snapshot_has_closed_dropdown_without_panel() {
    let ctx = RequestContext::new("eu", "/");
    let nav = build_nav(&ctx, &[], &MenuDropdown::new());
    assert!(!nav.shop.expanded);
    assert!(nav.shop.panel_style.is_none());
    assert_eq!(nav.shop.close_grace_ms, 150);
}

#[test]
fn footer_keeps_first_three_sections() {
    let ctx = RequestContext::new("eu", "/");
    let sections: Vec<MenuSection> = (1..=4)
        .map(|i| MenuSection {
            id: i.to_string(),
            name: format!("Column {i}"),
            children: vec![entry(
                "Untargeted",
                MenuTarget::Url {
                    url: "#".to_owned(),
                },
            )],
        })
        .collect();

    let footer = build_footer(&ctx, &sections, None, 2026);

    assert_eq!(footer.columns.len(), 3);
    assert_eq!(footer.columns[2].title, "Column 3");
    let link = &footer.columns[0].links[0];
    assert_eq!(link.href, "#");
    assert!(!link.external);
    assert_eq!(footer.year, 2026);
    assert!(footer.channels.is_none());
}

#[test]
fn footer_channel_selector_lists_active_channels() {
    let ctx = RequestContext::new("eu", "/products");
    let channels = vec![channel("eu", true), channel("us", true), channel("old", false)];

    let footer = build_footer(&ctx, &[], Some(&channels), 2026);

    let options = footer.channels.expect("selector rendered");
    assert_eq!(options.len(), 2);
    assert!(options[0].selected);
    assert_eq!(options[1].href, "/us/products");
    assert!(!options[1].selected);
}
