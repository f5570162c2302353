//! Raw configuration sources: the environment and the bundled extras.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::errors::{Error, Result};

const BUNDLED_EXTRAS: &str = include_str!("extras.json");

/// A source of environment-style string values.
pub trait EnvSource {
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Static fallback values shipped with the application.
///
/// Values may be JSON strings, numbers or booleans. Lookups never fail; a
/// value of the wrong shape is treated as absent.
#[derive(Debug, Clone, Default)]
pub struct BundledExtras {
    values: Map<String, Value>,
}

impl BundledExtras {
    /// The extras compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_EXTRAS)
    }

    /// Parses extras from a JSON document. The top level must be an object.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| Error::InvalidConfigValue(format!("bundled extras: {}", e)))?;
        match value {
            Value::Object(values) => Ok(Self { values }),
            other => Err(Error::InvalidConfigValue(format!(
                "bundled extras must be a JSON object, got {}",
                other
            ))),
        }
    }

    pub fn string(&self, key: &str) -> Option<String> {
        match self.values.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Boolean lookup. Strings only count when they are exactly `"true"` or `"false"`.
    pub fn flag(&self, key: &str) -> Option<bool> {
        match self.values.get(key)? {
            Value::Bool(b) => Some(*b),
            Value::String(s) => parse_flag(s),
            _ => None,
        }
    }

    pub fn number(&self, key: &str) -> Option<u64> {
        match self.values.get(key)? {
            Value::Number(n) => n.as_u64().filter(|v| *v > 0),
            Value::String(s) => parse_positive(s),
            _ => None,
        }
    }
}

/// Strict string-to-bool: anything other than `"true"`/`"false"` is not a flag.
pub(crate) fn parse_flag(raw: &str) -> Option<bool> {
    match raw {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

pub(crate) fn parse_positive(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok().filter(|v| *v > 0)
}
