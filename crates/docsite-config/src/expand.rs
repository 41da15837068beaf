//! Environment variable expansion for configuration strings.
//!
//! Supports:
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

use crate::ConfigError;

/// Expand environment variable references in a string.
///
/// Returns the original string unchanged if no `${}` patterns are present.
/// Bare `$VAR` syntax is not expanded (only `${VAR}` with braces).
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, UnsetVar> {
        std::env::var(var).map(Some).map_err(|_| UnsetVar(var.to_owned()))
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.0),
    })
}

/// Name of a variable that had no value.
struct UnsetVar(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_simple_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("DOCSITE_TEST_TITLE", "JiZhi");
        }
        let result = expand_env("${DOCSITE_TEST_TITLE}", "title").unwrap();
        assert_eq!(result, "JiZhi");
        unsafe {
            std::env::remove_var("DOCSITE_TEST_TITLE");
        }
    }

    #[test]
    fn test_expand_with_default_uses_default() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("DOCSITE_UNSET_BASE");
        }
        let result = expand_env("${DOCSITE_UNSET_BASE:-/blog/}", "base").unwrap();
        assert_eq!(result, "/blog/");
    }

    #[test]
    fn test_expand_embedded_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("DOCSITE_TEST_PREFIX", "docs");
        }
        let result = expand_env("/${DOCSITE_TEST_PREFIX}/v2/", "base").unwrap();
        assert_eq!(result, "/docs/v2/");
        unsafe {
            std::env::remove_var("DOCSITE_TEST_PREFIX");
        }
    }

    #[test]
    fn test_expand_missing_var_error() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("DOCSITE_MISSING_VAR");
        }
        let err = expand_env("${DOCSITE_MISSING_VAR}", "description").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("DOCSITE_MISSING_VAR"));
        assert!(err.to_string().contains("description"));
    }

    #[test]
    fn test_literal_unchanged() {
        assert_eq!(expand_env("每天都是充实的一天。", "description").unwrap(), "每天都是充实的一天。");
        // $VAR without braces is not expanded
        assert_eq!(expand_env("costs $5", "title").unwrap(), "costs $5");
    }
}
