use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub const LINK_TEMPLATE: &str =
    r#"<a href="{url}" class="br-menu-link">{icon}<span class="menu-item-label">{label}</span>{badge}</a>"#;
pub const PARENT_LINK_TEMPLATE: &str = r#"<a href="{url}" class="{class}">{icon} {label}</a>"#;
pub const PARENT_LABEL_TEMPLATE: &str = r#"<a href="{url}" class="{class}"> {label}</a>"#;
pub const SUBMENU_TEMPLATE: &str = "\n<ul class=\"br-menu-sub\" {show}>\n{items}\n</ul>\n";

/// How route urls are turned into hrefs
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(tag = "style", rename_all = "lowercase")]
pub enum UrlStyle {
    /// `/post/view?id=5`
    #[default]
    Path,
    /// `/index.php?r=post%2Fview&id=5`
    Query { script: String },
}

/// Renderer-level settings. Defaults give the bracket sidebar theme.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Template for leaf items
    pub link_template: String,
    /// Template for items with children and a url
    pub parent_link_template: String,
    /// Template for items with children and no url
    pub parent_label_template: String,
    pub submenu_template: String,
    pub encode_labels: bool,
    pub hide_empty_items: bool,
    pub activate_parents: bool,
    pub activate_items: bool,
    pub active_css_class: String,
    pub first_item_css_class: Option<String>,
    pub last_item_css_class: Option<String>,
    /// Attributes for every item container; a `tag` entry picks the element
    pub item_options: BTreeMap<String, String>,
    /// Attributes for the outer menu container; a `tag` entry picks the element
    pub options: BTreeMap<String, String>,
    pub url_style: UrlStyle,
}

impl MenuConfig {
    pub fn new() -> Self {
        Self {
            link_template: LINK_TEMPLATE.to_string(),
            parent_link_template: PARENT_LINK_TEMPLATE.to_string(),
            parent_label_template: PARENT_LABEL_TEMPLATE.to_string(),
            submenu_template: SUBMENU_TEMPLATE.to_string(),
            encode_labels: true,
            hide_empty_items: true,
            activate_parents: true,
            activate_items: true,
            active_css_class: "active".to_string(),
            first_item_css_class: None,
            last_item_css_class: None,
            item_options: BTreeMap::from([("class".to_string(), "br-menu-item".to_string())]),
            options: BTreeMap::from([("class".to_string(), "br-sideleft-menu".to_string())]),
            url_style: UrlStyle::Path,
        }
    }

    /// Reads a JSON config file. Missing keys keep their theme defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read menu config {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("invalid menu config {}", path.display()))
    }

    pub fn with_encode_labels(mut self, encode: bool) -> Self {
        self.encode_labels = encode;
        self
    }

    pub fn with_hide_empty_items(mut self, hide: bool) -> Self {
        self.hide_empty_items = hide;
        self
    }

    pub fn with_activate_parents(mut self, activate: bool) -> Self {
        self.activate_parents = activate;
        self
    }

    pub fn with_activate_items(mut self, activate: bool) -> Self {
        self.activate_items = activate;
        self
    }

    pub fn with_first_item_css_class(mut self, class: impl Into<String>) -> Self {
        self.first_item_css_class = Some(class.into());
        self
    }

    pub fn with_last_item_css_class(mut self, class: impl Into<String>) -> Self {
        self.last_item_css_class = Some(class.into());
        self
    }

    pub fn with_url_style(mut self, style: UrlStyle) -> Self {
        self.url_style = style;
        self
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self::new()
    }
}
