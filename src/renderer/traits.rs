use crate::config::MenuConfig;
use crate::menu::{active, normalize, MenuItem, NormalizedItem};
use crate::renderer::components::Html;
use std::collections::HashMap;

/// The request a menu is rendered for
#[derive(Debug, Clone, Default)]
pub struct RouteContext {
    /// Route of the current request, without a leading slash (`site/about`)
    pub route: String,
    pub params: HashMap<String, String>,
    /// Namespace of the module handling the request. Relative item routes
    /// are prefixed with it; `None` leaves them untouched.
    pub module_prefix: Option<String>,
}

impl RouteContext {
    pub fn new(route: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            params: HashMap::new(),
            module_prefix: None,
        }
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn with_module_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.module_prefix = Some(prefix.into());
        self
    }

    /// Turns an item route into an absolute one, without the leading slash.
    pub fn resolve_route(&self, route: &str) -> String {
        let route = match &self.module_prefix {
            Some(prefix) if !route.starts_with('/') => format!("{}/{}", prefix, route),
            _ => route.to_string(),
        };
        route.trim_start_matches('/').to_string()
    }
}

/// A menu widget. Implementors supply the markup; normalization and active
/// matching come with defaults that variants may override.
pub trait Menu {
    fn config(&self) -> &MenuConfig;

    fn is_item_active(&self, item: &MenuItem, context: &RouteContext) -> bool {
        active::is_item_active(item, context)
    }

    /// Returns the surviving items and whether any of them is active.
    fn normalize_items(
        &self,
        items: &[MenuItem],
        context: &RouteContext,
    ) -> (Vec<NormalizedItem>, bool) {
        normalize::normalize_items(items, self.config(), &|item: &MenuItem| {
            self.is_item_active(item, context)
        })
    }

    /// Markup for one item's link or heading, without its container tag
    fn render_item(&self, item: &NormalizedItem, context: &RouteContext) -> String;

    /// Markup for a level of siblings, joined by newlines
    fn render_items(&self, items: &[NormalizedItem], context: &RouteContext) -> String;

    fn render(&self, items: &[MenuItem], context: &RouteContext) -> String {
        let (items, _) = self.normalize_items(items, context);
        self.render_items(&items, context)
    }

    /// Renders the whole menu inside its container tag. Nothing is emitted
    /// when no item survives normalization.
    fn render_menu(&self, items: &[MenuItem], context: &RouteContext) -> String {
        let (items, _) = self.normalize_items(items, context);
        if items.is_empty() {
            return String::new();
        }

        let mut options = self.config().options.clone();
        let tag = options.remove("tag").unwrap_or_else(|| "ul".to_string());
        Html::tag(&tag, &self.render_items(&items, context), &options)
    }
}
