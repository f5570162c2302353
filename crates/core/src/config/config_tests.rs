//! Tests for configuration resolution.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use crate::config::{AppConfig, BundledExtras};

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn extras(json: &str) -> BundledExtras {
        BundledExtras::from_json(json).unwrap()
    }

    // ==================== Precedence Tests ====================

    #[test]
    fn test_defaults_when_no_sources() {
        let config = AppConfig::resolve(&env(&[]), &BundledExtras::default());
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_timeout_ms, 30_000);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_extras_override_defaults() {
        let config = AppConfig::resolve(
            &env(&[]),
            &extras(r#"{"apiBaseUrl": "https://staging.finmate.id/api/", "appEnv": "staging"}"#),
        );
        assert_eq!(config.api_base_url, "https://staging.finmate.id/api");
        assert_eq!(config.environment, "staging");
    }

    #[test]
    fn test_env_overrides_extras() {
        let config = AppConfig::resolve(
            &env(&[("FINMATE_API_BASE_URL", "http://localhost:8000/api")]),
            &extras(r#"{"apiBaseUrl": "https://staging.finmate.id/api"}"#),
        );
        assert_eq!(config.api_base_url, "http://localhost:8000/api");
    }

    #[test]
    fn test_empty_env_string_falls_through() {
        let config = AppConfig::resolve(
            &env(&[("FINMATE_SUPPORT_EMAIL", "  ")]),
            &extras(r#"{"supportEmail": "help@finmate.id"}"#),
        );
        assert_eq!(config.support_email, "help@finmate.id");
    }

    // ==================== Flag Tests ====================

    #[test]
    fn test_env_false_beats_extras_true() {
        let config = AppConfig::resolve(
            &env(&[("FINMATE_ENABLE_ANALYTICS", "false")]),
            &extras(r#"{"enableAnalytics": true}"#),
        );
        assert!(!config.enable_analytics);
    }

    #[test]
    fn test_env_true_beats_extras_false() {
        let config = AppConfig::resolve(
            &env(&[("FINMATE_DEBUG_MODE", "true")]),
            &extras(r#"{"debugMode": "false"}"#),
        );
        assert!(config.debug_mode);
    }

    #[test]
    fn test_non_literal_flag_is_ignored() {
        let config = AppConfig::resolve(
            &env(&[("FINMATE_ENABLE_CRASH_REPORTING", "yes")]),
            &extras(r#"{"enableCrashReporting": true}"#),
        );
        assert!(config.enable_crash_reporting);

        let config = AppConfig::resolve(
            &env(&[("FINMATE_ENABLE_CRASH_REPORTING", "TRUE")]),
            &BundledExtras::default(),
        );
        assert!(!config.enable_crash_reporting);
    }

    #[test]
    fn test_extras_string_flag() {
        let config = AppConfig::resolve(&env(&[]), &extras(r#"{"enableAnalytics": "true"}"#));
        assert!(config.enable_analytics);
    }

    // ==================== Numeric Tests ====================

    #[test]
    fn test_timeout_from_env() {
        let config = AppConfig::resolve(
            &env(&[("FINMATE_API_TIMEOUT", "5000")]),
            &extras(r#"{"apiTimeout": 10000}"#),
        );
        assert_eq!(config.api_timeout_ms, 5000);
    }

    #[test]
    fn test_unparseable_timeout_falls_back() {
        let config = AppConfig::resolve(
            &env(&[("FINMATE_API_TIMEOUT", "soon")]),
            &extras(r#"{"apiTimeout": "12000"}"#),
        );
        assert_eq!(config.api_timeout_ms, 12_000);

        let config = AppConfig::resolve(
            &env(&[("FINMATE_API_TIMEOUT", "0")]),
            &extras(r#"{"apiTimeout": -1}"#),
        );
        assert_eq!(config.api_timeout_ms, 30_000);
    }

    // ==================== Extras Parsing Tests ====================

    #[test]
    fn test_bundled_extras_parse() {
        let bundled = BundledExtras::bundled().unwrap();
        assert_eq!(bundled.number("apiTimeout"), Some(30_000));
        assert_eq!(bundled.flag("debugMode"), Some(false));
    }

    #[test]
    fn test_extras_must_be_object() {
        assert!(BundledExtras::from_json("[1, 2]").is_err());
        assert!(BundledExtras::from_json("not json").is_err());
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let sources = env(&[("FINMATE_APP_ENV", "production")]);
        let bundled = BundledExtras::bundled().unwrap();
        let first = AppConfig::resolve(&sources, &bundled);
        let second = AppConfig::resolve(&sources, &bundled);
        assert_eq!(first, second);
        assert!(first.is_production());
    }
}
