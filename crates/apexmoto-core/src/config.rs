use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Kept separate from the process environment so tests can feed a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let saleor_api_url = require("SALEOR_API_URL")?;
    let saleor_app_token = lookup("SALEOR_APP_TOKEN")
        .ok()
        .filter(|v| !v.trim().is_empty());

    let env = parse_environment(&or_default("STOREFRONT_ENV", "development"));
    let bind_addr = parse_addr("STOREFRONT_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("STOREFRONT_LOG_LEVEL", "info");
    let default_channel = or_default("STOREFRONT_DEFAULT_CHANNEL", "default-channel");

    let request_timeout_secs = parse_u64("STOREFRONT_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("STOREFRONT_USER_AGENT", "apexmoto-storefront/0.1");
    let product_cache_secs = parse_u64("STOREFRONT_PRODUCT_CACHE_SECS", "60")?;
    let menu_cache_secs = parse_u64("STOREFRONT_MENU_CACHE_SECS", "86400")?;
    let featured_collection =
        or_default("STOREFRONT_FEATURED_COLLECTION", "featured-products");

    let fallback_product_limit = parse_u32("STOREFRONT_FALLBACK_PRODUCT_LIMIT", "12")?;
    if fallback_product_limit == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "STOREFRONT_FALLBACK_PRODUCT_LIMIT".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        saleor_api_url,
        saleor_app_token,
        default_channel,
        request_timeout_secs,
        user_agent,
        product_cache_secs,
        menu_cache_secs,
        featured_collection,
        fallback_product_limit,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
