//! Configuration sources, merged in the order they are added

use crate::error::{ConfigError, Result};
use figment::providers::{Env, Format, Json, Toml, Yaml};
use figment::Figment;
use std::path::{Path, PathBuf};

/// Separator between nested keys in environment variable names
pub const ENV_KEY_SEPARATOR: &str = "__";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// TOML, JSON or YAML file chosen by extension
    File { path: PathBuf, required: bool },
    /// Variables starting with `prefix`; `A__B` sets key `a.b`
    Env { prefix: String },
}

impl ConfigSource {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        ConfigSource::File {
            path: path.into(),
            required: true,
        }
    }

    /// A file that is skipped when absent
    pub fn optional_file(path: impl Into<PathBuf>) -> Self {
        ConfigSource::File {
            path: path.into(),
            required: false,
        }
    }

    pub fn env(prefix: impl Into<String>) -> Self {
        ConfigSource::Env {
            prefix: prefix.into(),
        }
    }

    pub(crate) fn merge_into(&self, figment: Figment) -> Result<Figment> {
        match self {
            ConfigSource::File { path, required } => {
                if !path.exists() {
                    if *required {
                        return Err(ConfigError::SourceNotFound(path.clone()));
                    }
                    tracing::debug!(path = %path.display(), "Optional config file absent");
                    return Ok(figment);
                }
                merge_file(figment, path)
            }
            ConfigSource::Env { prefix } => {
                Ok(figment.merge(Env::prefixed(prefix).split(ENV_KEY_SEPARATOR)))
            }
        }
    }
}

fn merge_file(figment: Figment, path: &Path) -> Result<Figment> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("toml") => Ok(figment.merge(Toml::file(path))),
        Some("json") => Ok(figment.merge(Json::file(path))),
        Some("yaml") | Some("yml") => Ok(figment.merge(Yaml::file(path))),
        _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    }
}
