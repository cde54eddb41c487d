//! Storefront presentation: the shop dropdown state machine, header and
//! footer assembly, page routing and HTML rendering.

pub mod chrome;
pub mod dropdown;
pub mod pages;
pub mod render;
pub mod rich_text;
pub mod route;
pub mod shop_menu;
pub mod views;

pub use dropdown::{DropdownEvent, DropdownState, Effect, MenuDropdown, PanelPlacement, Rect};
pub use pages::{PageError, Storefront};
pub use render::{RenderError, Renderer};
pub use route::PageRoute;
pub use shop_menu::ShopMenu;
