//! Shared configuration for streamscope.
//!
//! Settings come from, in order, `$STREAMSCOPE_CONFIG_PATH`,
//! `$STREAMSCOPE_CONFIG_JSON`, a `streamscope.toml`/`streamscope.json` in the
//! working directory (or `config/`), and finally the built-in defaults. A
//! loaded config is checked by [`validation::validate`] before use.

pub mod loader;
pub mod models;
pub mod validation;

pub use loader::{CONFIG_JSON_ENV, CONFIG_PATH_ENV, ConfigLoad, ConfigSource};
pub use models::{
    DashboardConfig, DashboardSettings, HttpConfig, LoggingConfig,
    RetryConfig, SourcesConfig, SynthConfig,
};
pub use validation::{ConfigValidationError, ConfigWarning, ConfigWarnings};
