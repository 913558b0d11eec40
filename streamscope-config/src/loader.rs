use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, anyhow};
use tracing::{debug, info};

use crate::{
    models::DashboardConfig,
    validation::{ConfigWarnings, validate},
};

pub const CONFIG_PATH_ENV: &str = "STREAMSCOPE_CONFIG_PATH";
pub const CONFIG_JSON_ENV: &str = "STREAMSCOPE_CONFIG_JSON";

const DEFAULT_CANDIDATES: &[&str] = &[
    "streamscope.toml",
    "streamscope.json",
    "config/streamscope.toml",
];

/// Source that produced the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
    /// Explicit `--config` style override.
    Explicit(PathBuf),
}

/// A validated configuration plus where it came from.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: DashboardConfig,
    pub source: ConfigSource,
    pub warnings: ConfigWarnings,
}

impl ConfigLoad {
    fn checked(
        config: DashboardConfig,
        source: ConfigSource,
    ) -> anyhow::Result<Self> {
        let warnings = validate(&config)
            .with_context(|| format!("invalid configuration from {source:?}"))?;
        debug!(
            ?source,
            warnings = warnings.items.len(),
            "configuration loaded"
        );
        Ok(Self {
            config,
            source,
            warnings,
        })
    }
}

impl DashboardConfig {
    /// Load configuration using the process environment and working
    /// directory. Evaluation order:
    /// 1) `$STREAMSCOPE_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$STREAMSCOPE_CONFIG_JSON` (inline JSON),
    /// 3) `streamscope.toml`, `streamscope.json`, `config/streamscope.toml`,
    /// 4) defaults if none of the above is present.
    pub fn load_from_env() -> anyhow::Result<ConfigLoad> {
        Self::load_with(|key| env::var(key).ok(), Path::new("."))
    }

    /// [`Self::load_from_env`] with an injected variable lookup and search
    /// root for the default files.
    pub fn load_with<F>(lookup: F, root: &Path) -> anyhow::Result<ConfigLoad>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path_str) = lookup(CONFIG_PATH_ENV)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str.trim());
            let config = Self::load_from_file(&path)?;
            return ConfigLoad::checked(config, ConfigSource::EnvPath(path));
        }

        if let Some(raw) = lookup(CONFIG_JSON_ENV)
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse_json(&raw)
                .with_context(|| format!("failed to parse {CONFIG_JSON_ENV}"))?;
            return ConfigLoad::checked(parsed, ConfigSource::EnvInline);
        }

        if let Some(path) = Self::find_default_file(root) {
            let config = Self::load_from_file(&path)?;
            return ConfigLoad::checked(config, ConfigSource::File(path));
        }

        info!("no configuration found, using defaults");
        ConfigLoad::checked(Self::default(), ConfigSource::Default)
    }

    /// Load and validate one specific file, bypassing the search order.
    pub fn load_explicit(path: &Path) -> anyhow::Result<ConfigLoad> {
        let config = Self::load_from_file(path)?;
        ConfigLoad::checked(config, ConfigSource::Explicit(path.to_path_buf()))
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read streamscope config from {}", path.display())
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents).with_context(|| {
                format!("invalid streamscope config {}", path.display())
            }),
            Some("toml") => toml::from_str(&contents).map_err(|err| {
                anyhow!(
                    "invalid streamscope config {}: {}",
                    path.display(),
                    err
                )
            }),
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }
    }

    /// Try TOML first, then JSON.
    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> anyhow::Result<Self> {
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse streamscope config {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }

    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw)
            .map_err(|err| anyhow!("invalid streamscope config json: {err}"))
    }

    pub fn find_default_file(root: &Path) -> Option<PathBuf> {
        DEFAULT_CANDIDATES
            .iter()
            .map(|candidate| root.join(candidate))
            .find(|path| path.is_file())
    }
}
