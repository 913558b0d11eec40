use std::path::Path;

use streamscope_model::Platform;
use thiserror::Error;

use crate::models::DashboardConfig;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("retry.max_attempts must be at least 1")]
    ZeroAttempts,
    #[error("dashboard.top_n must be at least 1")]
    ZeroTopN,
    #[error("http.timeout_secs must be at least 1")]
    ZeroTimeout,
    #[error("source for {platform} is empty")]
    EmptySource { platform: Platform },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Reject settings the dashboards cannot run with and collect warnings for
/// the ones that merely look suspicious.
pub fn validate(
    config: &DashboardConfig,
) -> Result<ConfigWarnings, ConfigValidationError> {
    if config.retry.max_attempts == 0 {
        return Err(ConfigValidationError::ZeroAttempts);
    }
    if config.dashboard.top_n == 0 {
        return Err(ConfigValidationError::ZeroTopN);
    }
    if config.http.timeout_secs == 0 {
        return Err(ConfigValidationError::ZeroTimeout);
    }
    for platform in Platform::all() {
        if let Some(raw) = config.sources.raw(*platform)
            && raw.trim().is_empty()
        {
            return Err(ConfigValidationError::EmptySource {
                platform: *platform,
            });
        }
    }

    let mut warnings = ConfigWarnings::default();

    if config.retry.max_attempts > 1 && config.retry.base_delay_ms == 0 {
        warnings
            .push("retry.base_delay_ms is 0; failed fetches retry immediately");
    }

    for platform in Platform::all() {
        let Some(raw) = config.sources.raw(*platform) else {
            continue;
        };
        let lowered = raw.trim().to_ascii_lowercase();
        if lowered.starts_with("http://") || lowered.starts_with("https://") {
            continue;
        }
        if !Path::new(raw.trim()).exists() {
            warnings.push_with_hint(
                format!("{platform} catalog {raw} does not exist"),
                format!(
                    "set sources.{} to a readable CSV export",
                    source_key(*platform)
                ),
            );
        }
    }

    if config.synth.per_platform == 0 {
        warnings.push(
            "synth.per_platform is 0; the comparison dataset will be empty",
        );
    }

    Ok(warnings)
}

fn source_key(platform: Platform) -> &'static str {
    match platform {
        Platform::Netflix => "netflix",
        Platform::Hulu => "hulu",
        Platform::DisneyPlus => "disney_plus",
        Platform::Comparison => "comparison",
    }
}
