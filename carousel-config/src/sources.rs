//! Raw settings as they appear in each source, before composition.

use std::path::PathBuf;

use serde::Deserialize;

pub const ENV_CONFIG_PATH: &str = "CAROUSEL_CONFIG";
pub const ENV_WRAP: &str = "CAROUSEL_WRAP";
pub const ENV_REDUCED_MOTION: &str = "CAROUSEL_REDUCED_MOTION";
pub const ENV_SLIDES_PER_VIEW: &str = "CAROUSEL_SLIDES_PER_VIEW";
pub const ENV_AUTOPLAY: &str = "CAROUSEL_AUTOPLAY";
pub const ENV_RESIZE_DEBOUNCE: &str = "CAROUSEL_RESIZE_DEBOUNCE";

/// Top level of a settings file.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct FileSettings {
    pub carousel: FileCarouselSection,
}

/// The `[carousel]` table. Durations are humantime strings.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileCarouselSection {
    pub wrap: Option<String>,
    pub reduced_motion: Option<bool>,
    pub slides_per_view: Option<usize>,
    pub autoplay: Option<FileAutoplay>,
    pub rubber_band: Option<f32>,
    pub swipe_min_px: Option<f32>,
    pub swipe_ratio: Option<f32>,
    pub resize_debounce: Option<String>,
    pub control_recheck: Option<String>,
}

/// `autoplay = false`, `autoplay = true` or `autoplay = "5s"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FileAutoplay {
    Enabled(bool),
    Interval(String),
}

/// Overrides gathered from the process environment and `.env` file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EnvSettings {
    pub config_path: Option<PathBuf>,
    pub wrap: Option<String>,
    pub reduced_motion: Option<String>,
    pub slides_per_view: Option<String>,
    pub autoplay: Option<String>,
    pub resize_debounce: Option<String>,
}

impl EnvSettings {
    pub fn gather() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Gather overrides through `lookup`; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key).filter(|value| !value.trim().is_empty())
        };

        Self {
            config_path: read(ENV_CONFIG_PATH).map(PathBuf::from),
            wrap: read(ENV_WRAP),
            reduced_motion: read(ENV_REDUCED_MOTION),
            slides_per_view: read(ENV_SLIDES_PER_VIEW),
            autoplay: read(ENV_AUTOPLAY),
            resize_debounce: read(ENV_RESIZE_DEBOUNCE),
        }
    }

    /// Names of the variables that carried a value.
    pub fn present(&self) -> Vec<&'static str> {
        [
            (ENV_WRAP, self.wrap.is_some()),
            (ENV_REDUCED_MOTION, self.reduced_motion.is_some()),
            (ENV_SLIDES_PER_VIEW, self.slides_per_view.is_some()),
            (ENV_AUTOPLAY, self.autoplay.is_some()),
            (ENV_RESIZE_DEBOUNCE, self.resize_debounce.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, set)| set.then_some(name))
        .collect()
    }
}
