//! Page assembly against a mocked Saleor endpoint.

use std::time::Duration;

use apexmoto_saleor::{CatalogSettings, SaleorClient};
use apexmoto_storefront::{PageError, PageRoute, Storefront};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method};
use wiremock::{Mock, MockServer, ResponseTemplate, Times};

fn storefront(base_url: &str, token: Option<&str>) -> Storefront {
    let client = SaleorClient::new(base_url, 5, "apexmoto-test/0.1")
        .expect("client construction should not fail")
        .with_cache_ttls(Duration::ZERO, Duration::ZERO)
        .with_app_token(token.map(str::to_owned));
    Storefront::new(client, CatalogSettings::default()).expect("templates compile")
}

fn product_node(id: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "slug": name.to_lowercase().replace(' ', "-"),
        "pricing": { "priceRange": {
            "start": { "gross": { "amount": 149.0, "currency": "USD" } },
            "stop": { "gross": { "amount": 149.0, "currency": "USD" } }
        }},
        "category": null,
        "thumbnail": null
    })
}

fn menu_item(id: &str, name: &str, field: &str, value: serde_json::Value) -> serde_json::Value {
    let mut item = json!({
        "id": id,
        "name": name,
        "category": null,
        "collection": null,
        "page": null,
        "url": null,
        "children": []
    });
    item[field] = value;
    item
}

async fn mount_op(
    server: &MockServer,
    filter: serde_json::Value,
    body: serde_json::Value,
    times: impl Into<Times>,
) {
    Mock::given(method("POST"))
        .and(body_partial_json(filter))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(times)
        .mount(server)
        .await;
}

async fn mount_menus(server: &MockServer, navbar: serde_json::Value, footer: serde_json::Value) {
    mount_op(
        server,
        json!({ "operationName": "MenuGetBySlug", "variables": { "slug": "navbar" } }),
        json!({ "data": { "menu": { "items": navbar } } }),
        1,
    )
    .await;
    mount_op(
        server,
        json!({ "operationName": "MenuGetBySlug", "variables": { "slug": "footer" } }),
        json!({ "data": { "menu": { "items": footer } } }),
        1,
    )
    .await;
}

#[tokio::test]
async fn home_falls_back_to_product_list_when_collection_is_empty() {
    let server = MockServer::start().await;
    mount_menus(&server, json!([]), json!([])).await;
    mount_op(
        &server,
        json!({ "operationName": "ProductListByCollection" }),
        json!({ "data": { "collection": null } }),
        1,
    )
    .await;
    mount_op(
        &server,
        json!({ "operationName": "ProductList", "variables": { "first": 12 } }),
        json!({ "data": { "products": { "edges": [
            { "node": product_node("p1", "Race Boots") }
        ] } } }),
        1,
    )
    .await;

    let html = storefront(&server.uri(), None)
        .render("default-channel", &PageRoute::Home)
        .await
        .expect("home renders");

    assert!(html.contains("Featured Gear"));
    assert!(html.contains("Race Boots"));
    assert!(html.contains("$149.00"));
    assert!(html.contains(r#"href="/default-channel/products/race-boots""#));
    // Product without a category is labelled "Gear".
    assert!(html.contains(r#"<p class="category">Gear</p>"#));
    // Navbar without categories shows the fixed fallback list.
    assert!(html.contains(r#"href="/default-channel/categories/accessories""#));
}

#[tokio::test]
async fn nav_and_footer_come_from_menus() {
    let server = MockServer::start().await;
    let navbar = json!([
        menu_item("1", "Helmets", "category", json!({ "slug": "helmets", "name": "Helmets" })),
        menu_item("2", "Sale", "collection", json!({ "slug": "sale", "name": "Summer Sale" })),
        menu_item("3", "FAQ", "page", json!({ "slug": "faq", "title": "Questions" })),
    ]);
    let mut support = menu_item("10", "Support", "url", serde_json::Value::Null);
    support["children"] = json!([
        menu_item("11", "Shipping", "page", json!({ "slug": "shipping", "title": "Shipping" })),
        menu_item("12", "Placeholder", "url", serde_json::Value::Null),
    ]);
    mount_menus(&server, navbar, json!([support])).await;

    let html = storefront(&server.uri(), None)
        .render("eu", &PageRoute::About)
        .await
        .expect("about renders");

    assert!(html.contains(r#"href="/eu/categories/helmets""#));
    assert!(!html.contains(r#"href="/eu/categories/jackets""#));
    assert!(html.contains("Summer Sale"));
    assert!(html.contains(r#"href="/eu/pages/faq""#));
    assert!(html.contains(">Questions</a>"));
    assert!(html.contains(r#"<a href="/eu/about" aria-current="page">About Us</a>"#));
    assert!(html.contains("<h3>Support</h3>"));
    assert!(html.contains(r#"href="/eu/pages/shipping""#));
    assert!(html.contains(r##"<a href="#">Placeholder</a>"##));
    assert!(html.contains(r#"<a href="/eu" aria-label="Homepage">"#));
}

#[tokio::test]
async fn footer_channel_selector_uses_app_token() {
    let server = MockServer::start().await;
    mount_menus(&server, json!([]), json!([])).await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "operationName": "ChannelsList" })))
        .and(header("authorization", "Bearer app-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "channels": [
            { "id": "c1", "name": "Europe", "slug": "eu", "isActive": true, "currencyCode": "EUR" },
            { "id": "c2", "name": "United States", "slug": "us", "isActive": true, "currencyCode": "USD" }
        ] } })))
        .expect(1)
        .mount(&server)
        .await;

    let html = storefront(&server.uri(), Some("app-token"))
        .render("eu", &PageRoute::About)
        .await
        .expect("about renders");

    assert!(html.contains("channel-select"));
    assert!(html.contains(r#"<a href="/us/about">United States (USD)</a>"#));
    assert!(html.contains(r#"<a href="/eu/about" aria-current="true">Europe (EUR)</a>"#));
}

#[tokio::test]
async fn unknown_category_is_not_found() {
    let server = MockServer::start().await;
    mount_op(
        &server,
        json!({ "operationName": "MenuGetBySlug" }),
        json!({ "data": { "menu": null } }),
        0..=2,
    )
    .await;
    mount_op(
        &server,
        json!({ "operationName": "ProductListByCategory" }),
        json!({ "data": { "category": null } }),
        1,
    )
    .await;

    let err = storefront(&server.uri(), None)
        .render("default-channel", &PageRoute::Category("nope".to_owned()))
        .await
        .unwrap_err();

    assert!(matches!(err, PageError::NotFound));
}

#[tokio::test]
async fn upstream_failure_fails_the_page() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let err = storefront(&server.uri(), None)
        .render("default-channel", &PageRoute::Products)
        .await
        .unwrap_err();

    assert!(matches!(err, PageError::Upstream(_)));
}

#[tokio::test]
async fn product_page_renders_detail() {
    let server = MockServer::start().await;
    mount_menus(&server, json!([]), json!([])).await;
    let mut product = product_node("p1", "Carbon Helmet");
    product["category"] = json!({ "id": "cat-1", "name": "Helmets" });
    product["description"] =
        json!(r#"{"blocks":[{"type":"paragraph","data":{"text":"DOT and ECE certified."}}]}"#);
    product["seoTitle"] = json!(null);
    product["seoDescription"] = json!(null);
    mount_op(
        &server,
        json!({ "operationName": "ProductDetails", "variables": { "slug": "carbon-helmet" } }),
        json!({ "data": { "product": product } }),
        1,
    )
    .await;

    let html = storefront(&server.uri(), None)
        .render("default-channel", &PageRoute::Product("carbon-helmet".to_owned()))
        .await
        .expect("product renders");

    assert!(html.contains("<title>Carbon Helmet | APEX MOTO</title>"));
    assert!(html.contains(r#"<meta name="description" content="DOT and ECE certified.">"#));
    assert!(html.contains("<p>DOT and ECE certified.</p>"));
    assert!(html.contains(r#"<p class="category">Helmets</p>"#));
}

#[test]
fn status_pages_render_without_upstream() {
    let storefront = storefront("http://127.0.0.1:9/graphql/", None);

    let not_found = storefront.render_not_found("eu").expect("404 page");
    assert!(not_found.contains("Page not found"));
    assert!(not_found.contains(r#"href="/eu""#));

    let error = storefront
        .render_error("eu", Some("abc-123"))
        .expect("error page");
    assert!(error.contains("abc-123"));
}
