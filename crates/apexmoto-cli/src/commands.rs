//! Command handlers. Each prints to stdout and returns `anyhow` errors.

use std::path::Path;

use apexmoto_core::{format_money_range, AppConfig, MenuTarget};
use apexmoto_saleor::{featured_products, CatalogSettings, SaleorClient};
use apexmoto_storefront::{PageError, PageRoute, Storefront};

/// Truncates to `max` characters with a trailing ellipsis.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        format!("{}...", text.chars().take(max).collect::<String>())
    } else {
        text.to_owned()
    }
}

fn target_kind(target: &MenuTarget) -> &'static str {
    match target {
        MenuTarget::Category { .. } => "category",
        MenuTarget::Collection { .. } => "collection",
        MenuTarget::Page { .. } => "page",
        MenuTarget::Url { .. } => "url",
    }
}

/// Render one page exactly as the server would.
///
/// # Errors
///
/// Returns an error for unknown paths, upstream failures, or when the
/// output file cannot be written.
pub(crate) async fn run_render(
    config: &AppConfig,
    client: SaleorClient,
    channel: &str,
    path: &str,
    out: Option<&Path>,
) -> anyhow::Result<()> {
    let route = PageRoute::parse(path)
        .ok_or_else(|| anyhow::anyhow!("'{path}' is not a storefront page"))?;
    let storefront = Storefront::new(client, CatalogSettings::from_app_config(config))?;

    let html = match storefront.render(channel, &route).await {
        Ok(html) => html,
        Err(PageError::NotFound) => {
            anyhow::bail!("'{path}' not found in channel '{channel}'")
        }
        Err(e) => return Err(e.into()),
    };

    match out {
        Some(file) => {
            std::fs::write(file, &html)?;
            tracing::info!(file = %file.display(), bytes = html.len(), "page written");
        }
        None => println!("{html}"),
    }
    Ok(())
}

/// Print a menu as a table; footer-style sections are printed with their
/// children indented.
///
/// # Errors
///
/// Returns an error if the menu query fails.
pub(crate) async fn run_menu(client: &SaleorClient, channel: &str, slug: &str) -> anyhow::Result<()> {
    let sections = client.menu_sections(slug, channel).await?;
    if sections.is_empty() {
        println!("menu '{slug}' is empty or missing in channel '{channel}'");
        return Ok(());
    }

    let entries = client.menu_entries(slug, channel).await?;
    println!("{:<12}{:<30}HREF", "KIND", "LABEL");
    for section in &sections {
        match entries.iter().find(|e| e.id == section.id) {
            Some(entry) => println!(
                "{:<12}{:<30}{}",
                target_kind(&entry.target),
                truncate(entry.label(), 28),
                entry.href()
            ),
            None => println!("{:<12}{:<30}", "heading", truncate(&section.name, 28)),
        }
        for child in &section.children {
            println!(
                "  {:<10}{:<30}{}",
                target_kind(&child.target),
                truncate(child.label(), 28),
                child.href()
            );
        }
    }
    Ok(())
}

/// Print the home grid products, after the curated-collection fallback.
///
/// # Errors
///
/// Returns an error if an upstream query fails.
pub(crate) async fn run_featured(
    config: &AppConfig,
    client: &SaleorClient,
    channel: &str,
) -> anyhow::Result<()> {
    let settings = CatalogSettings::from_app_config(config);
    let products = featured_products(client, channel, &settings).await?;
    if products.is_empty() {
        println!("no products in channel '{channel}'");
        return Ok(());
    }

    println!("{:<36}{:<16}PRICE", "NAME", "CATEGORY");
    for product in &products {
        println!(
            "{:<36}{:<16}{}",
            truncate(&product.name, 34),
            truncate(product.category_label(), 14),
            format_money_range(product.price_range.as_ref())
        );
    }
    Ok(())
}

/// List channels through the app token.
///
/// # Errors
///
/// Returns an error if no app token is configured or the query fails.
pub(crate) async fn run_channels(client: &SaleorClient) -> anyhow::Result<()> {
    let channels = client
        .channels()
        .await?
        .ok_or_else(|| anyhow::anyhow!("SALEOR_APP_TOKEN is required to list channels"))?;

    println!("{:<24}{:<30}{:<10}ACTIVE", "SLUG", "NAME", "CURRENCY");
    for channel in &channels {
        println!(
            "{:<24}{:<30}{:<10}{}",
            channel.slug,
            truncate(&channel.name, 28),
            channel.currency_code,
            if channel.is_active { "yes" } else { "no" }
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_adds_ellipsis_past_limit() {
        assert_eq!(truncate("Helmets", 10), "Helmets");
        assert_eq!(truncate("Touring Jacket", 7), "Touring...");
    }

    #[test]
    fn target_kind_names() {
        let target = MenuTarget::Page {
            slug: "faq".to_owned(),
            title: "FAQ".to_owned(),
        };
        assert_eq!(target_kind(&target), "page");
    }
}
