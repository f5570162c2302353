//! Resolved runtime configuration.

use std::time::Duration;

use serde::Serialize;

use super::config_sources::{parse_flag, parse_positive, BundledExtras, EnvSource, ProcessEnv};
use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_API_TIMEOUT_MS, DEFAULT_APP_ENV, DEFAULT_CDN_URL,
    DEFAULT_IMAGE_CDN_URL, DEFAULT_PRIVACY_EMAIL, DEFAULT_SUPPORT_EMAIL,
};
use crate::errors::Result;

/// Environment variable and bundled-extras key for one setting.
struct Key {
    env: &'static str,
    extra: &'static str,
}

const API_BASE_URL: Key = Key { env: "FINMATE_API_BASE_URL", extra: "apiBaseUrl" };
const API_TIMEOUT: Key = Key { env: "FINMATE_API_TIMEOUT", extra: "apiTimeout" };
const DEBUG_MODE: Key = Key { env: "FINMATE_DEBUG_MODE", extra: "debugMode" };
const ENABLE_ANALYTICS: Key = Key { env: "FINMATE_ENABLE_ANALYTICS", extra: "enableAnalytics" };
const ENABLE_CRASH_REPORTING: Key = Key {
    env: "FINMATE_ENABLE_CRASH_REPORTING",
    extra: "enableCrashReporting",
};
const APP_ENV: Key = Key { env: "FINMATE_APP_ENV", extra: "appEnv" };
const SUPPORT_EMAIL: Key = Key { env: "FINMATE_SUPPORT_EMAIL", extra: "supportEmail" };
const PRIVACY_EMAIL: Key = Key { env: "FINMATE_PRIVACY_EMAIL", extra: "privacyEmail" };
const CDN_URL: Key = Key { env: "FINMATE_CDN_URL", extra: "cdnUrl" };
const IMAGE_CDN_URL: Key = Key { env: "FINMATE_IMAGE_CDN_URL", extra: "imageCdnUrl" };

/// Flat, read-only runtime configuration.
///
/// Built once at startup with [`AppConfig::from_env`] (or [`AppConfig::resolve`]
/// in tests) and passed by reference afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub api_base_url: String,
    pub api_timeout_ms: u64,
    pub debug_mode: bool,
    pub enable_analytics: bool,
    pub enable_crash_reporting: bool,
    pub environment: String,
    pub support_email: String,
    pub privacy_email: String,
    pub cdn_url: String,
    pub image_cdn_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_timeout_ms: DEFAULT_API_TIMEOUT_MS,
            debug_mode: false,
            enable_analytics: false,
            enable_crash_reporting: false,
            environment: DEFAULT_APP_ENV.to_string(),
            support_email: DEFAULT_SUPPORT_EMAIL.to_string(),
            privacy_email: DEFAULT_PRIVACY_EMAIL.to_string(),
            cdn_url: DEFAULT_CDN_URL.to_string(),
            image_cdn_url: DEFAULT_IMAGE_CDN_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// One-time construction from the process environment (plus `.env`, if
    /// present) layered over the bundled extras.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        let extras = BundledExtras::bundled()?;
        Ok(Self::resolve(&ProcessEnv, &extras))
    }

    /// Layers, per key: environment over extras over defaults.
    pub fn resolve(env: &impl EnvSource, extras: &BundledExtras) -> Self {
        let defaults = Self::default();
        let layer = Layers { env, extras };

        Self {
            api_base_url: layer
                .string(&API_BASE_URL)
                .unwrap_or(defaults.api_base_url)
                .trim_end_matches('/')
                .to_string(),
            api_timeout_ms: layer.number(&API_TIMEOUT).unwrap_or(defaults.api_timeout_ms),
            debug_mode: layer.flag(&DEBUG_MODE).unwrap_or(defaults.debug_mode),
            enable_analytics: layer.flag(&ENABLE_ANALYTICS).unwrap_or(defaults.enable_analytics),
            enable_crash_reporting: layer
                .flag(&ENABLE_CRASH_REPORTING)
                .unwrap_or(defaults.enable_crash_reporting),
            environment: layer.string(&APP_ENV).unwrap_or(defaults.environment),
            support_email: layer.string(&SUPPORT_EMAIL).unwrap_or(defaults.support_email),
            privacy_email: layer.string(&PRIVACY_EMAIL).unwrap_or(defaults.privacy_email),
            cdn_url: layer
                .string(&CDN_URL)
                .unwrap_or(defaults.cdn_url)
                .trim_end_matches('/')
                .to_string(),
            image_cdn_url: layer
                .string(&IMAGE_CDN_URL)
                .unwrap_or(defaults.image_cdn_url)
                .trim_end_matches('/')
                .to_string(),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.api_timeout_ms)
    }

    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }
}

struct Layers<'a, E: EnvSource> {
    env: &'a E,
    extras: &'a BundledExtras,
}

impl<E: EnvSource> Layers<'_, E> {
    fn string(&self, key: &Key) -> Option<String> {
        self.env
            .var(key.env)
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.extras.string(key.extra).filter(|v| !v.trim().is_empty()))
    }

    fn flag(&self, key: &Key) -> Option<bool> {
        self.env
            .var(key.env)
            .and_then(|v| parse_flag(&v))
            .or_else(|| self.extras.flag(key.extra))
    }

    fn number(&self, key: &Key) -> Option<u64> {
        self.env
            .var(key.env)
            .and_then(|v| parse_positive(&v))
            .or_else(|| self.extras.number(key.extra))
    }
}
