use crate::menu::types::{MenuItem, MenuUrl};
use crate::renderer::traits::RouteContext;
use tracing::trace;

/// Route segments compared when matching; deeper segments are ignored.
pub const MATCHED_SEGMENTS: usize = 3;

/// Checks whether an item points at the current request.
///
/// Only route urls can match. The item route is resolved against the module
/// prefix, then its first [`MATCHED_SEGMENTS`] segments must equal the same
/// positions in the current route. A segment present in the item route but
/// missing from the current route is a mismatch. Every non-null parameter
/// except the anchor must then be present in the request and loosely equal.
pub fn is_item_active(item: &MenuItem, context: &RouteContext) -> bool {
    let Some(MenuUrl::Route(url)) = &item.url else {
        return false;
    };

    let route = context.resolve_route(&url.route);
    let item_segments: Vec<&str> = route.split('/').collect();
    let current_segments: Vec<&str> = context.route.split('/').collect();

    for (position, expected) in item_segments.iter().take(MATCHED_SEGMENTS).enumerate() {
        if current_segments.get(position) != Some(expected) {
            trace!(
                item_route = %route,
                current_route = %context.route,
                position,
                "route segment mismatch"
            );
            return false;
        }
    }

    url.query_params().all(|(name, value)| {
        context
            .params
            .get(name)
            .is_some_and(|current| value.loosely_equals(current))
    })
}
