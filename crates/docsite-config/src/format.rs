//! Source formats for configuration definitions.

use std::fmt;
use std::path::Path;

use serde_json::Value;

use crate::ConfigError;

/// Serialization format of a configuration definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML document.
    Toml,
    /// JSON document.
    Json,
    /// YAML document.
    Yaml,
}

impl ConfigFormat {
    /// Detect format from a file extension.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnsupportedFormat` for unknown or missing extensions.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Parse source text into a generic document tree.
    ///
    /// Object keys keep their source order.
    pub(crate) fn parse(self, source: &str) -> Result<Value, ConfigError> {
        let parsed = match self {
            Self::Toml => toml::from_str::<Value>(source).map_err(|e| e.to_string()),
            Self::Json => serde_json::from_str::<Value>(source).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::from_str::<Value>(source).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| ConfigError::Parse {
            format: self,
            message: message.trim_end().to_owned(),
        })
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Toml => "TOML",
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("site.toml")).unwrap(),
            ConfigFormat::Toml
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new(".vuepress/config.json")).unwrap(),
            ConfigFormat::Json
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("site.yml")).unwrap(),
            ConfigFormat::Yaml
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("site.yaml")).unwrap(),
            ConfigFormat::Yaml
        );
    }

    #[test]
    fn test_from_path_unsupported() {
        let err = ConfigFormat::from_path(Path::new("docs/.vuepress/config.js")).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
        assert!(err.to_string().contains("config.js"));

        let err = ConfigFormat::from_path(Path::new("site")).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_parse_keeps_key_order() {
        let value = ConfigFormat::Json
            .parse(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#)
            .unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_parse_toml_and_yaml() {
        let toml = ConfigFormat::Toml.parse("title = \"JiZhi\"").unwrap();
        assert_eq!(toml["title"], "JiZhi");

        let yaml = ConfigFormat::Yaml.parse("title: JiZhi\n").unwrap();
        assert_eq!(yaml["title"], "JiZhi");
    }

    #[test]
    fn test_parse_error_names_format() {
        let err = ConfigFormat::Toml.parse("title = ").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Parse {
                format: ConfigFormat::Toml,
                ..
            }
        ));
        assert!(err.to_string().starts_with("TOML parse error"));

        let err = ConfigFormat::Json.parse("{").unwrap_err();
        assert!(err.to_string().starts_with("JSON parse error"));
    }
}
