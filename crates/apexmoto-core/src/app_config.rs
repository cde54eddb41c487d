use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub saleor_api_url: String,
    /// App token used only for calls that must bypass customer auth (channel list).
    pub saleor_app_token: Option<String>,
    pub default_channel: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub product_cache_secs: u64,
    pub menu_cache_secs: u64,
    pub featured_collection: String,
    pub fallback_product_limit: u32,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("saleor_api_url", &self.saleor_api_url)
            .field(
                "saleor_app_token",
                &self.saleor_app_token.as_ref().map(|_| "[redacted]"),
            )
            .field("default_channel", &self.default_channel)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("product_cache_secs", &self.product_cache_secs)
            .field("menu_cache_secs", &self.menu_cache_secs)
            .field("featured_collection", &self.featured_collection)
            .field("fallback_product_limit", &self.fallback_product_limit)
            .finish()
    }
}
