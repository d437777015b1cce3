use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

/// Param key that carries the url fragment instead of a query value
pub const ANCHOR_PARAM: &str = "#";

/// A route parameter value as it appears in menu data.
///
/// Menu data written by hand mixes `"5"` and `5` freely, so values compare
/// loosely (see [`ParamValue::loosely_equals`]).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
}

impl ParamValue {
    /// Compares against a request parameter.
    ///
    /// Equal string forms match; otherwise both sides must be finite
    /// numbers with the same value, so `5`, `"5"` and `"5.0"` are all equal.
    /// Flags follow request truthiness: `false` matches `""` and `"0"`,
    /// `true` matches anything else.
    pub fn loosely_equals(&self, other: &str) -> bool {
        if let ParamValue::Flag(flag) = self {
            return *flag == !(other.is_empty() || other == "0");
        }
        let own = self.to_string();
        if own == other {
            return true;
        }
        match (parse_numeric(&own), parse_numeric(other)) {
            (Some(left), Some(right)) => left == right,
            _ => false,
        }
    }
}

// Decimal or exponent notation only; `inf` and `NaN` spellings are text.
fn parse_numeric(text: &str) -> Option<f64> {
    let text = text.trim();
    if text
        .chars()
        .any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E')
    {
        return None;
    }
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

impl std::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamValue::Text(text) => write!(f, "{}", text),
            ParamValue::Number(number) => write!(f, "{}", number),
            ParamValue::Flag(true) => write!(f, "1"),
            ParamValue::Flag(false) => Ok(()),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Number(value.into())
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Flag(value)
    }
}

/// A url given as a route plus parameters.
///
/// A `None` parameter is a wildcard: it is skipped both when matching the
/// current request and when building the query string.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(try_from = "RawRouteUrl")]
pub struct RouteUrl {
    pub route: String,
    pub params: BTreeMap<String, Option<ParamValue>>,
}

impl RouteUrl {
    pub fn new(route: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            params: BTreeMap::new(),
        }
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(name.into(), Some(value.into()));
        self
    }

    pub fn with_wildcard(mut self, name: impl Into<String>) -> Self {
        self.params.insert(name.into(), None);
        self
    }

    pub fn with_anchor(mut self, anchor: impl Into<String>) -> Self {
        self.params
            .insert(ANCHOR_PARAM.to_string(), Some(ParamValue::Text(anchor.into())));
        self
    }

    /// Non-null parameters other than the anchor
    pub fn query_params(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.params
            .iter()
            .filter(|(name, _)| name.as_str() != ANCHOR_PARAM)
            .filter_map(|(name, value)| value.as_ref().map(|v| (name.as_str(), v)))
    }

    pub fn anchor(&self) -> Option<String> {
        self.params
            .get(ANCHOR_PARAM)
            .and_then(|value| value.as_ref())
            .map(|value| value.to_string())
            .filter(|anchor| !anchor.is_empty())
    }
}

// Route urls arrive either as `{"route": ..., "params": {...}}` or in the
// positional form `["route", {...}]`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawRouteUrl {
    Structured {
        route: String,
        #[serde(default)]
        params: BTreeMap<String, Option<ParamValue>>,
    },
    Positional(Vec<serde_json::Value>),
}

impl TryFrom<RawRouteUrl> for RouteUrl {
    type Error = String;

    fn try_from(raw: RawRouteUrl) -> Result<Self, Self::Error> {
        match raw {
            RawRouteUrl::Structured { route, params } => Ok(RouteUrl { route, params }),
            RawRouteUrl::Positional(parts) => {
                let mut parts = parts.into_iter();
                let route = match parts.next() {
                    Some(serde_json::Value::String(route)) => route,
                    Some(other) => return Err(format!("route must be a string, got {}", other)),
                    None => return Err("url array must start with a route".to_string()),
                };
                let params = match parts.next() {
                    Some(value) => serde_json::from_value(value).map_err(|e| e.to_string())?,
                    None => BTreeMap::new(),
                };
                if parts.next().is_some() {
                    return Err("url array takes a route and at most one params object".to_string());
                }
                Ok(RouteUrl { route, params })
            }
        }
    }
}

/// Where a menu item points
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MenuUrl {
    Plain(String),
    Route(RouteUrl),
}

impl From<RouteUrl> for MenuUrl {
    fn from(url: RouteUrl) -> Self {
        MenuUrl::Route(url)
    }
}

/// A menu entry as supplied by the caller, before normalization
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MenuItem {
    #[serde(deserialize_with = "lenient_label")]
    pub label: Option<String>,
    #[serde(deserialize_with = "lenient_url")]
    pub url: Option<MenuUrl>,
    pub icon: Option<String>,
    pub badge: Option<String>,
    pub visible: bool,
    pub active: Option<bool>,
    pub items: Option<Vec<MenuItem>>,
    pub options: BTreeMap<String, String>,
    pub encode: Option<bool>,
    pub template: Option<String>,
}

// Numbers and booleans in label position are shown as text.
fn lenient_label<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<ParamValue>::deserialize(deserializer)?;
    Ok(value.map(|value| value.to_string()))
}

// An empty url array names no route, so the item is treated as having no url.
fn lenient_url<'de, D>(deserializer: D) -> Result<Option<MenuUrl>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Array(parts) if parts.is_empty() => Ok(None),
        value => serde_json::from_value(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

impl Default for MenuItem {
    fn default() -> Self {
        Self {
            label: None,
            url: None,
            icon: None,
            badge: None,
            visible: true,
            active: None,
            items: None,
            options: BTreeMap::new(),
            encode: None,
            template: None,
        }
    }
}

impl MenuItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(MenuUrl::Plain(url.into()));
        self
    }

    pub fn with_route(mut self, url: RouteUrl) -> Self {
        self.url = Some(MenuUrl::Route(url));
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    pub fn with_items(mut self, items: Vec<MenuItem>) -> Self {
        self.items = Some(items);
        self
    }

    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(name.into(), value.into());
        self
    }

    pub fn with_encode(mut self, encode: bool) -> Self {
        self.encode = Some(encode);
        self
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }
}

/// A menu entry after normalization: hidden entries are gone, defaults are
/// filled in and `active` is decided.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedItem {
    /// Final markup for the label, already escaped when encoding applies
    pub label: String,
    pub url: Option<MenuUrl>,
    pub icon: String,
    pub badge: String,
    pub active: bool,
    /// `Some(vec![])` survives only when empty items are not hidden
    pub items: Option<Vec<NormalizedItem>>,
    pub options: BTreeMap<String, String>,
    pub template: Option<String>,
}

impl NormalizedItem {
    pub fn has_children(&self) -> bool {
        self.items.as_ref().is_some_and(|items| !items.is_empty())
    }
}
