//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` references in a configuration value.
///
/// `field` names the config field for error reporting.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    match shellexpand::env(value) {
        Ok(expanded) => Ok(expanded.into_owned()),
        Err(err) => Err(ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}}: {}", err.var_name, err.cause),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_expand_literal() {
        assert_eq!(expand_env("plain-value", "f").unwrap(), "plain-value");
    }

    #[test]
    fn test_expand_set_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("SAR_EXPAND_TEST_VAR", "value123");
        }
        assert_eq!(
            expand_env("${SAR_EXPAND_TEST_VAR}", "f").unwrap(),
            "value123"
        );
        unsafe {
            std::env::remove_var("SAR_EXPAND_TEST_VAR");
        }
    }

    #[test]
    fn test_expand_embedded_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("SAR_EXPAND_TEST_HOST", "cdn.example.com");
        }
        assert_eq!(
            expand_env("https://${SAR_EXPAND_TEST_HOST}", "f").unwrap(),
            "https://cdn.example.com"
        );
        unsafe {
            std::env::remove_var("SAR_EXPAND_TEST_HOST");
        }
    }

    #[test]
    fn test_expand_unset_var_reports_field() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("SAR_EXPAND_TEST_UNSET");
        }
        let err = expand_env("${SAR_EXPAND_TEST_UNSET}", "store.preview_token").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("store.preview_token"));
        assert!(msg.contains("SAR_EXPAND_TEST_UNSET"));
    }
}
