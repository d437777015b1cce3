use crate::config::UrlStyle;
use crate::menu::types::{MenuUrl, RouteUrl};
use crate::renderer::traits::RouteContext;
use url::form_urlencoded;

/// Href used for items without a url
pub const PLACEHOLDER_HREF: &str = "#";

/// Resolves an item url into an href.
///
/// Plain urls pass through untouched. Route urls are resolved against the
/// module prefix and formatted per `style`.
pub fn resolve_href(url: Option<&MenuUrl>, context: &RouteContext, style: &UrlStyle) -> String {
    match url {
        None => PLACEHOLDER_HREF.to_string(),
        Some(MenuUrl::Plain(url)) => url.clone(),
        Some(MenuUrl::Route(url)) => route_href(url, context, style),
    }
}

fn route_href(url: &RouteUrl, context: &RouteContext, style: &UrlStyle) -> String {
    let route = context.resolve_route(&url.route);
    let mut query = form_urlencoded::Serializer::new(String::new());

    let mut href = match style {
        UrlStyle::Path => format!("/{}", route),
        UrlStyle::Query { script } => {
            query.append_pair("r", &route);
            script.clone()
        }
    };

    for (name, value) in url.query_params() {
        query.append_pair(name, &value.to_string());
    }
    let query = query.finish();
    if !query.is_empty() {
        href.push('?');
        href.push_str(&query);
    }

    if let Some(anchor) = url.anchor() {
        href.push('#');
        href.push_str(&anchor);
    }
    href
}
