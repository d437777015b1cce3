use crate::config::MenuConfig;
use crate::menu::{resolve_href, NormalizedItem};
use crate::renderer::components::*;
use crate::renderer::traits::*;

/// Class on the link of items that open a submenu
pub const TOGGLE_CSS_CLASS: &str = "tree-toggle";

/// Sidebar menu for the bracket admin theme
#[derive(Debug, Clone, Default)]
pub struct BracketMenu {
    config: MenuConfig,
}

impl BracketMenu {
    pub fn new(config: MenuConfig) -> Self {
        Self { config }
    }

    fn item_classes(&self, item: &NormalizedItem, index: usize, count: usize) -> Vec<&str> {
        let mut classes = Vec::new();
        if item.active {
            classes.push(self.config.active_css_class.as_str());
        }
        if index == 0 {
            if let Some(class) = &self.config.first_item_css_class {
                classes.push(class.as_str());
            }
        }
        if index + 1 == count {
            if let Some(class) = &self.config.last_item_css_class {
                classes.push(class.as_str());
            }
        }
        classes
    }
}

impl Menu for BracketMenu {
    fn config(&self) -> &MenuConfig {
        &self.config
    }

    fn render_item(&self, item: &NormalizedItem, context: &RouteContext) -> String {
        let default_template = match (&item.items, &item.url) {
            (Some(_), Some(_)) => &self.config.parent_link_template,
            (Some(_), None) => &self.config.parent_label_template,
            (None, _) => &self.config.link_template,
        };
        let template = item.template.as_ref().unwrap_or(default_template);

        let href = resolve_href(item.url.as_ref(), context, &self.config.url_style);
        let icon = IconRenderer::render_icon(&item.icon);
        let class = if item.has_children() { TOGGLE_CSS_CLASS } else { "" };

        TemplateRenderer::substitute(
            template,
            &[
                ("{url}", href.as_str()),
                ("{icon}", icon.as_str()),
                ("{class}", class),
                ("{label}", item.label.as_str()),
                ("{badge}", item.badge.as_str()),
            ],
        )
    }

    fn render_items(&self, items: &[NormalizedItem], context: &RouteContext) -> String {
        let count = items.len();
        let mut lines = Vec::with_capacity(count);

        for (index, item) in items.iter().enumerate() {
            let mut options = self.config.item_options.clone();
            options.extend(item.options.clone());
            let tag = options.remove("tag").unwrap_or_else(|| "li".to_string());

            // Without active/first/last classes the item class is cleared,
            // including any default from item_options.
            let classes = self.item_classes(item, index, count).join(" ");
            let class = options.entry("class".to_string()).or_default();
            if classes.is_empty() {
                class.clear();
            } else {
                if !class.is_empty() {
                    class.push(' ');
                }
                class.push_str(&classes);
            }

            let mut menu = self.render_item(item, context);
            if let Some(children) = item.items.as_ref().filter(|children| !children.is_empty()) {
                let show = if item.active {
                    "style='display: block'"
                } else {
                    "style='display: none'"
                };
                let children = self.render_items(children, context);
                menu.push_str(&TemplateRenderer::substitute(
                    &self.config.submenu_template,
                    &[("{show}", show), ("{items}", children.as_str())],
                ));
            }

            lines.push(Html::tag(&tag, &menu, &options));
        }

        lines.join("\n")
    }
}
