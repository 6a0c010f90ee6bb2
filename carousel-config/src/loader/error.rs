use std::path::PathBuf;

use thiserror::Error;

use crate::validation::SettingsGuardRailError;

#[derive(Debug, Error)]
pub enum SettingsLoadError {
    #[error("settings file {path} does not exist")]
    MissingConfig { path: PathBuf },
    #[error("failed to read settings file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
    #[error(transparent)]
    GuardRail(#[from] SettingsGuardRailError),
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}

impl SettingsLoadError {
    pub(crate) fn invalid(
        key: &'static str,
        value: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        Self::InvalidValue {
            key,
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}
