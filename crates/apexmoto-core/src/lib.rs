pub mod app_config;
pub mod config;
pub mod context;
pub mod links;
pub mod menu;
pub mod money;
pub mod product;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use context::RequestContext;
pub use links::{channel_href, is_external};
pub use menu::{MenuEntry, MenuSection, MenuTarget};
pub use money::{format_money, format_money_range, Money, MoneyRange};
pub use product::{Channel, ProductSummary, Thumbnail};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
