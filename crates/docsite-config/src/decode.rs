//! Conversion from a parsed document to [`SiteConfig`].
//!
//! Each field is decoded on its own so errors carry the field path
//! (`themeConfig.sidebar['/code/'][2].title`) instead of a bare serde message.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::ConfigError;
use crate::links::is_external;
use crate::schema::{HeadTag, NavItem, SidebarGroup, SiteConfig, ThemeConfig};

/// Decode the document root into a [`SiteConfig`].
pub(crate) fn site_config(document: Value) -> Result<SiteConfig, ConfigError> {
    let mut root = into_object(document, "(root)")?;

    let title: String = required(&mut root, "title", "title")?;
    let base: String = required(&mut root, "base", "base")?;
    let head = optional::<Vec<Value>>(&mut root, "head", "head")?
        .into_iter()
        .enumerate()
        .map(|(i, tag)| decode::<HeadTag>(tag, &format!("head[{i}]")))
        .collect::<Result<_, _>>()?;
    let description: String = optional(&mut root, "description", "description")?;

    let theme = root
        .shift_remove("themeConfig")
        .ok_or_else(|| ConfigError::malformed("themeConfig", "required field is missing"))?;
    let theme_config = theme_config(theme)?;

    for key in root.keys() {
        tracing::debug!(key = %key, "Passing through top-level key");
    }

    Ok(SiteConfig {
        title,
        base,
        head,
        description,
        theme_config,
        extra: root,
    })
}

fn theme_config(value: Value) -> Result<ThemeConfig, ConfigError> {
    let mut theme = into_object(value, "themeConfig")?;

    let nav = optional::<Vec<Value>>(&mut theme, "nav", "themeConfig.nav")?
        .into_iter()
        .enumerate()
        .map(|(i, item)| decode::<NavItem>(item, &format!("themeConfig.nav[{i}]")))
        .collect::<Result<_, _>>()?;

    let sidebar = match theme.shift_remove("sidebar") {
        None | Some(Value::Null) => IndexMap::new(),
        Some(value) => sidebar(value)?,
    };

    for key in theme.keys() {
        tracing::debug!(key = %key, "Passing through themeConfig key");
    }

    Ok(ThemeConfig {
        nav,
        sidebar,
        extra: theme,
    })
}

fn sidebar(value: Value) -> Result<IndexMap<String, Vec<SidebarGroup>>, ConfigError> {
    let entries = into_object(value, "themeConfig.sidebar")?;
    let mut sidebar = IndexMap::with_capacity(entries.len());

    for (prefix, groups) in entries {
        let field = format!("themeConfig.sidebar['{prefix}']");
        let groups: Vec<Value> = decode(groups, &field)?;
        let groups = groups
            .into_iter()
            .enumerate()
            .map(|(i, group)| decode::<SidebarGroup>(group, &format!("{field}[{i}]")))
            .collect::<Result<_, _>>()?;
        sidebar.insert(prefix, groups);
    }

    Ok(sidebar)
}

/// Check every path-valued field.
///
/// Fails on the first offending value.
pub(crate) fn check_paths(site: &SiteConfig) -> Result<(), ConfigError> {
    check_base(&site.base, "base")?;

    for (i, item) in site.theme_config.nav.iter().enumerate() {
        check_nav_item(item, &format!("themeConfig.nav[{i}]"))?;
    }

    for prefix in site.theme_config.sidebar.keys() {
        check_dir_path(prefix, &format!("themeConfig.sidebar['{prefix}']"))?;
    }

    Ok(())
}

/// Check the base path: it must start and end with `/`.
fn check_base(base: &str, field: &str) -> Result<(), ConfigError> {
    check_dir_path(base, field)
}

fn check_dir_path(path: &str, field: &str) -> Result<(), ConfigError> {
    if !path.starts_with('/') {
        return Err(ConfigError::invalid_path(field, path, "must start with '/'"));
    }
    if !path.ends_with('/') {
        return Err(ConfigError::invalid_path(field, path, "must end with '/'"));
    }
    Ok(())
}

fn check_nav_item(item: &NavItem, field: &str) -> Result<(), ConfigError> {
    match item.link.as_deref() {
        Some("") => {
            return Err(ConfigError::invalid_path(
                format!("{field}.link"),
                "",
                "must not be empty",
            ));
        }
        Some(link) if !is_external(link) && !link.starts_with('/') => {
            return Err(ConfigError::invalid_path(
                format!("{field}.link"),
                link,
                "must start with '/' or be an external URL",
            ));
        }
        Some(_) => {}
        None if !item.is_dropdown() => {
            return Err(ConfigError::malformed(
                format!("{field}.link"),
                "required field is missing (only dropdown entries may omit it)",
            ));
        }
        None => {}
    }

    for (i, child) in item.items.iter().enumerate() {
        check_nav_item(child, &format!("{field}.items[{i}]"))?;
    }
    Ok(())
}

fn into_object(value: Value, field: &str) -> Result<Map<String, Value>, ConfigError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(ConfigError::malformed(
            field,
            format!("expected a table/object, found {}", kind(&other)),
        )),
    }
}

fn required<T: DeserializeOwned>(
    map: &mut Map<String, Value>,
    key: &str,
    field: &str,
) -> Result<T, ConfigError> {
    let value = map
        .shift_remove(key)
        .ok_or_else(|| ConfigError::malformed(field, "required field is missing"))?;
    decode(value, field)
}

fn optional<T: DeserializeOwned + Default>(
    map: &mut Map<String, Value>,
    key: &str,
    field: &str,
) -> Result<T, ConfigError> {
    match map.shift_remove(key) {
        None | Some(Value::Null) => Ok(T::default()),
        Some(value) => decode(value, field),
    }
}

fn decode<T: DeserializeOwned>(value: Value, field: &str) -> Result<T, ConfigError> {
    serde_json::from_value(value).map_err(|e| ConfigError::malformed(field, e.to_string()))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a table/object",
    }
}
