pub mod error;

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use carousel_core::CarouselSettings;
use carousel_model::WrapMode;

use self::error::SettingsLoadError;
use crate::{
    sources::{
        ENV_AUTOPLAY, ENV_REDUCED_MOTION, ENV_RESIZE_DEBOUNCE,
        ENV_SLIDES_PER_VIEW, ENV_WRAP, EnvSettings, FileAutoplay,
        FileCarouselSection, FileSettings,
    },
    util::{parse_autoplay, parse_bool, parse_duration},
    validation::{self, SettingsWarnings},
};

const DEFAULT_CONFIG_LOCATIONS: [&str; 2] =
    ["carousel.toml", "config/carousel.toml"];

#[derive(Debug, Clone)]
pub struct SettingsLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
    /// Consult the process environment. Values from `env_file` are used
    /// either way, but the process environment wins when both are set.
    pub process_env: bool,
}

impl Default for SettingsLoaderOptions {
    fn default() -> Self {
        Self {
            config_path: None,
            env_file: None,
            process_env: true,
        }
    }
}

/// Where the loaded settings came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
    pub env_overrides: Vec<&'static str>,
}

#[derive(Debug, Clone)]
pub struct SettingsLoad {
    pub settings: CarouselSettings,
    pub warnings: SettingsWarnings,
    pub metadata: SettingsMetadata,
}

#[derive(Debug, Default)]
pub struct SettingsLoader {
    options: SettingsLoaderOptions,
}

impl SettingsLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: SettingsLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    pub fn without_process_env(mut self) -> Self {
        self.options.process_env = false;
        self
    }

    pub fn load(&self) -> Result<SettingsLoad, SettingsLoadError> {
        let (env_file_vars, env_file_loaded) = self.read_env_file()?;
        let process_env = self.options.process_env;
        let env = EnvSettings::from_lookup(|key| {
            process_env
                .then(|| std::env::var(key).ok())
                .flatten()
                .or_else(|| env_file_vars.get(key).cloned())
        });

        let (file, config_path) = self.load_file(&env)?;

        let mut settings = CarouselSettings::default();
        if let Some(file) = file {
            apply_file(&mut settings, &file.carousel)?;
        }
        apply_env(&mut settings, &env)?;

        let warnings = validation::apply_guard_rails(&settings)?;

        let metadata = SettingsMetadata {
            config_path,
            env_file_loaded,
            env_overrides: env.present(),
        };
        tracing::debug!(
            config = ?metadata.config_path,
            env_file = metadata.env_file_loaded,
            overrides = ?metadata.env_overrides,
            warnings = warnings.len(),
            "carousel settings loaded"
        );

        Ok(SettingsLoad {
            settings,
            warnings,
            metadata,
        })
    }

    fn read_env_file(
        &self,
    ) -> Result<(HashMap<String, String>, bool), SettingsLoadError> {
        let path = self
            .options
            .env_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(".env"));

        let entries = match dotenvy::from_path_iter(&path) {
            Ok(entries) => entries,
            Err(dotenvy::Error::Io(_)) => return Ok((HashMap::new(), false)),
            Err(err) => return Err(err.into()),
        };

        let mut vars = HashMap::new();
        for entry in entries {
            let (key, value) = entry?;
            vars.insert(key, value);
        }
        Ok((vars, true))
    }

    fn load_file(
        &self,
        env: &EnvSettings,
    ) -> Result<(Option<FileSettings>, Option<PathBuf>), SettingsLoadError> {
        let explicit = self
            .options
            .config_path
            .clone()
            .or_else(|| env.config_path.clone());

        let path = match explicit {
            Some(path) if path.exists() => path,
            Some(path) => return Err(SettingsLoadError::MissingConfig { path }),
            None => match DEFAULT_CONFIG_LOCATIONS
                .iter()
                .map(Path::new)
                .find(|candidate| candidate.exists())
            {
                Some(found) => found.to_path_buf(),
                None => return Ok((None, None)),
            },
        };

        let contents = fs::read_to_string(&path).map_err(|source| {
            SettingsLoadError::Io {
                path: path.clone(),
                source,
            }
        })?;
        let file: FileSettings =
            toml::from_str(&contents).map_err(|source| {
                SettingsLoadError::Parse {
                    path: path.clone(),
                    source,
                }
            })?;

        Ok((Some(file), Some(path)))
    }
}

fn parse_wrap(key: &'static str, raw: &str) -> Result<WrapMode, SettingsLoadError> {
    raw.parse::<WrapMode>()
        .map_err(|err| SettingsLoadError::invalid(key, raw, err))
}

fn apply_file(
    settings: &mut CarouselSettings,
    file: &FileCarouselSection,
) -> Result<(), SettingsLoadError> {
    if let Some(wrap) = &file.wrap {
        settings.wrap = parse_wrap("carousel.wrap", wrap)?;
    }
    if let Some(reduced) = file.reduced_motion {
        settings.reduced_motion = reduced;
    }
    if let Some(count) = file.slides_per_view {
        settings.slides_per_view = count;
    }
    match &file.autoplay {
        Some(FileAutoplay::Enabled(false)) => settings.autoplay = None,
        Some(FileAutoplay::Enabled(true)) => {
            settings.autoplay =
                Some(carousel_core::constants::timing::AUTOPLAY_INTERVAL);
        }
        Some(FileAutoplay::Interval(raw)) => {
            settings.autoplay = parse_autoplay(raw).map_err(|err| {
                SettingsLoadError::invalid("carousel.autoplay", raw, err)
            })?;
        }
        None => {}
    }
    if let Some(factor) = file.rubber_band {
        settings.rubber_band = factor;
    }
    if let Some(px) = file.swipe_min_px {
        settings.swipe_min_px = px;
    }
    if let Some(ratio) = file.swipe_ratio {
        settings.swipe_ratio = ratio;
    }
    if let Some(raw) = &file.resize_debounce {
        settings.resize_debounce = parse_duration(raw).map_err(|err| {
            SettingsLoadError::invalid("carousel.resize_debounce", raw, err)
        })?;
    }
    if let Some(raw) = &file.control_recheck {
        settings.control_recheck = parse_duration(raw).map_err(|err| {
            SettingsLoadError::invalid("carousel.control_recheck", raw, err)
        })?;
    }
    Ok(())
}

fn apply_env(
    settings: &mut CarouselSettings,
    env: &EnvSettings,
) -> Result<(), SettingsLoadError> {
    if let Some(raw) = &env.wrap {
        settings.wrap = parse_wrap(ENV_WRAP, raw)?;
    }
    if let Some(raw) = &env.reduced_motion {
        settings.reduced_motion = parse_bool(raw).ok_or_else(|| {
            SettingsLoadError::invalid(
                ENV_REDUCED_MOTION,
                raw,
                "expected a boolean such as true/false or 1/0",
            )
        })?;
    }
    if let Some(raw) = &env.slides_per_view {
        settings.slides_per_view = raw.trim().parse().map_err(|err| {
            SettingsLoadError::invalid(ENV_SLIDES_PER_VIEW, raw, err)
        })?;
    }
    if let Some(raw) = &env.autoplay {
        settings.autoplay = parse_autoplay(raw)
            .map_err(|err| SettingsLoadError::invalid(ENV_AUTOPLAY, raw, err))?;
    }
    if let Some(raw) = &env.resize_debounce {
        settings.resize_debounce = parse_duration(raw).map_err(|err| {
            SettingsLoadError::invalid(ENV_RESIZE_DEBOUNCE, raw, err)
        })?;
    }
    Ok(())
}
