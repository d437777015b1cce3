use crate::config::MenuConfig;
use crate::menu::types::{MenuItem, NormalizedItem};
use crate::renderer::components::Html;
use tracing::debug;

/// Filters, defaults and flags a raw item tree.
///
/// Returns the surviving items in their original order and whether any of
/// them, at this level or below, is active. `is_active` decides route
/// matching for items whose `active` flag is unset.
pub fn normalize_items<F>(
    items: &[MenuItem],
    config: &MenuConfig,
    is_active: &F,
) -> (Vec<NormalizedItem>, bool)
where
    F: Fn(&MenuItem) -> bool,
{
    let mut any_active = false;
    let mut normalized = Vec::with_capacity(items.len());

    for item in items {
        let raw_label = item.label.as_deref().unwrap_or_default();
        if !item.visible {
            debug!(label = raw_label, "dropping hidden menu item");
            continue;
        }

        let label = if item.encode.unwrap_or(config.encode_labels) {
            Html::encode(raw_label)
        } else {
            raw_label.to_string()
        };

        let mut has_active_child = false;
        let mut children = None;
        if let Some(items) = &item.items {
            let (items, child_active) = normalize_items(items, config, is_active);
            has_active_child = child_active;
            if items.is_empty() && config.hide_empty_items {
                if item.url.is_none() {
                    debug!(label = raw_label, "dropping menu item without url or visible children");
                    continue;
                }
            } else {
                children = Some(items);
            }
        }

        let active = match item.active {
            Some(active) => active,
            None => {
                (config.activate_parents && has_active_child)
                    || (config.activate_items && is_active(item))
            }
        };
        if active {
            if item.active.is_none() {
                debug!(label = raw_label, "menu item activated");
            }
            any_active = true;
        }

        normalized.push(NormalizedItem {
            label,
            url: item.url.clone(),
            icon: item.icon.clone().unwrap_or_default(),
            badge: item.badge.clone().unwrap_or_default(),
            active,
            items: children,
            options: item.options.clone(),
            template: item.template.clone(),
        });
    }

    (normalized, any_active)
}
