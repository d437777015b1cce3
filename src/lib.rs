//! # Bracket Menu
//!
//! Renders nested navigation menus as HTML for the bracket admin theme.
//!
//! Items are normalized first (hidden entries dropped, labels escaped, the
//! active path worked out from the current route), then rendered as nested
//! list markup carrying the theme's CSS hooks.
//!
//! ```
//! use bracket_menu::{BracketMenu, Menu, MenuItem, RouteContext, RouteUrl};
//!
//! let items = vec![
//!     MenuItem::new("Dashboard").with_route(RouteUrl::new("site/index")),
//!     MenuItem::new("About").with_route(RouteUrl::new("site/about")),
//! ];
//! let html = BracketMenu::default().render_menu(&items, &RouteContext::new("site/about"));
//! assert!(html.starts_with("<ul class=\"br-sideleft-menu\">"));
//! ```

pub mod config;
pub mod menu;
pub mod renderer;

#[cfg(test)]
mod tests;

pub use config::*;
pub use menu::*;
pub use renderer::*;
