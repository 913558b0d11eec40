use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use streamscope_core::{
    dashboard::DEFAULT_TOP_N,
    fetch::{CatalogSource, RetryPolicy},
};
use streamscope_model::Platform;

fn default_source(platform: Platform) -> String {
    format!("data/{}", platform.default_file_name())
}

/// Top-level settings for the dashboards and the CLI.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub sources: SourcesConfig,
    pub retry: RetryConfig,
    pub http: HttpConfig,
    pub dashboard: DashboardSettings,
    pub logging: LoggingConfig,
    pub synth: SynthConfig,
}

/// Where each platform's catalog export lives. Values starting with
/// `http://` or `https://` are fetched over HTTP, anything else is read from
/// disk.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SourcesConfig {
    pub netflix: String,
    pub hulu: String,
    pub disney_plus: String,
    /// Pre-generated comparison dataset. When unset the comparison dashboard
    /// synthesizes one from [`SynthConfig`].
    pub comparison: Option<String>,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            netflix: default_source(Platform::Netflix),
            hulu: default_source(Platform::Hulu),
            disney_plus: default_source(Platform::DisneyPlus),
            comparison: None,
        }
    }
}

impl SourcesConfig {
    pub fn raw(&self, platform: Platform) -> Option<&str> {
        match platform {
            Platform::Netflix => Some(&self.netflix),
            Platform::Hulu => Some(&self.hulu),
            Platform::DisneyPlus => Some(&self.disney_plus),
            Platform::Comparison => self.comparison.as_deref(),
        }
    }

    pub fn catalog_source(
        &self,
        platform: Platform,
    ) -> anyhow::Result<Option<CatalogSource>> {
        self.raw(platform)
            .map(|raw| {
                raw.parse::<CatalogSource>().with_context(|| {
                    format!("invalid {platform} catalog source {raw:?}")
                })
            })
            .transpose()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Total attempts, including the first.
    pub max_attempts: u32,
    /// Wait before attempt `n + 1` is `base_delay_ms * n`.
    pub base_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        let policy = RetryPolicy::default();
        Self {
            max_attempts: policy.max_attempts,
            base_delay_ms: policy.base_delay.as_millis() as u64,
        }
    }
}

impl RetryConfig {
    pub fn to_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts,
            base_delay: Duration::from_millis(self.base_delay_ms),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct HttpConfig {
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// Countries shown before the remainder is folded into "Other".
    pub top_n: usize,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SynthConfig {
    pub seed: u64,
    pub per_platform: usize,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            per_platform: 200,
        }
    }
}
