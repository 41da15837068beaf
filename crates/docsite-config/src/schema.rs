//! Typed site configuration schema.
//!
//! Field names serialize in the spelling the site generator expects
//! (`themeConfig`, `collapsable`), so a loaded [`SiteConfig`] can be handed
//! to it as JSON unchanged. Keys the schema does not model are kept in the
//! `extra` maps and written back out in place.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Root of a site configuration.
///
/// Produced by [`SiteConfig::parse`](crate::SiteConfig::parse) or
/// [`Config::load`](crate::Config::load); there is no way to build an
/// unchecked one from a deserializer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Human-readable site name.
    pub title: String,
    /// URL prefix the site is served under. Starts and ends with `/`.
    pub base: String,
    /// Tags injected into the document head, in order.
    pub head: Vec<HeadTag>,
    /// Site tagline.
    pub description: String,
    /// Navigation and sidebar.
    pub theme_config: ThemeConfig,
    /// Top-level keys passed through to the site generator as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Navigation and sidebar configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ThemeConfig {
    /// Top navigation entries, left to right.
    pub nav: Vec<NavItem>,
    /// Sidebar groups keyed by URL path prefix, in source order.
    pub sidebar: IndexMap<String, Vec<SidebarGroup>>,
    /// Theme keys passed through as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ThemeConfig {
    /// Select the sidebar for a route.
    ///
    /// The key that is the longest prefix of `route` wins. A route without a
    /// trailing slash also matches the key naming it as a directory, so
    /// `/code` selects `/code/`.
    #[must_use]
    pub fn sidebar_for(&self, route: &str) -> Option<(&str, &[SidebarGroup])> {
        let route = if route.ends_with('/') {
            route.to_owned()
        } else {
            format!("{route}/")
        };

        self.sidebar
            .iter()
            .filter(|(prefix, _)| route.starts_with(prefix.as_str()))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(prefix, groups)| (prefix.as_str(), groups.as_slice()))
    }
}

/// Navigation menu entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    /// Display label.
    pub text: String,
    /// Site-relative path or external URL. Dropdown parents may omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Dropdown entries.
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<NavItem>,
    /// Entry keys passed through as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NavItem {
    /// Whether this entry opens a dropdown.
    #[must_use]
    pub fn is_dropdown(&self) -> bool {
        !self.items.is_empty()
    }
}

/// Titled group of documents in a sidebar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SidebarGroup {
    /// Group heading.
    pub title: String,
    /// Whether the group can be collapsed.
    #[serde(default = "default_collapsable", deserialize_with = "null_as_collapsable")]
    pub collapsable: bool,
    /// Document paths relative to the sidebar key, in display order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub children: Vec<String>,
    /// Group keys passed through as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_collapsable() -> bool {
    true
}

/// Optional fields treat an explicit `null` like an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_collapsable<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_else(default_collapsable))
}

/// Head tag descriptor: `[tag, {attrs}, innerHTML]`.
///
/// Attributes and inner content are opaque to this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Value>", into = "Vec<Value>")]
pub struct HeadTag {
    /// Element name (e.g., `link`, `meta`).
    pub tag: String,
    /// Element attributes, in source order.
    pub attrs: Map<String, Value>,
    /// Inner HTML, if any.
    pub content: Option<String>,
}

impl TryFrom<Vec<Value>> for HeadTag {
    type Error = String;

    fn try_from(parts: Vec<Value>) -> Result<Self, Self::Error> {
        if parts.is_empty() || parts.len() > 3 {
            return Err(format!(
                "expected [tag], [tag, attrs] or [tag, attrs, content], found {} element(s)",
                parts.len()
            ));
        }

        let mut parts = parts.into_iter();
        let tag = match parts.next() {
            Some(Value::String(tag)) if !tag.is_empty() => tag,
            _ => return Err("tag name must be a non-empty string".to_owned()),
        };
        let attrs = match parts.next() {
            None | Some(Value::Null) => Map::new(),
            Some(Value::Object(attrs)) => attrs,
            Some(_) => return Err(format!("attributes of <{tag}> must be a table/object")),
        };
        let content = match parts.next() {
            None | Some(Value::Null) => None,
            Some(Value::String(content)) => Some(content),
            Some(_) => return Err(format!("content of <{tag}> must be a string")),
        };

        Ok(Self {
            tag,
            attrs,
            content,
        })
    }
}

impl From<HeadTag> for Vec<Value> {
    fn from(tag: HeadTag) -> Self {
        let mut parts = vec![Value::String(tag.tag), Value::Object(tag.attrs)];
        if let Some(content) = tag.content {
            parts.push(Value::String(content));
        }
        parts
    }
}
