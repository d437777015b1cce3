use crate::menu::types::MenuItem;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Reads menu item trees from JSON
pub struct ItemLoader;

impl ItemLoader {
    /// Parses a JSON array of items.
    pub fn parse_items(json: &str) -> Result<Vec<MenuItem>> {
        serde_json::from_str(json).context("invalid menu item JSON")
    }

    pub fn load_items(path: &Path) -> Result<Vec<MenuItem>> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read menu items from {}", path.display()))?;
        Self::parse_items(&content).with_context(|| format!("in {}", path.display()))
    }
}
