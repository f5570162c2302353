//! Runtime configuration: environment over bundled extras over defaults.

mod config_model;
mod config_sources;

mod config_tests;

pub use config_model::AppConfig;
pub use config_sources::{BundledExtras, EnvSource, ProcessEnv};
