//! Settings loading for the carousel controller.
//!
//! A [`CarouselSettings`](carousel_core::CarouselSettings) value is composed
//! from, in increasing precedence: built-in defaults, an optional TOML file,
//! an optional `.env` file and `CAROUSEL_*` environment variables. The
//! result is then passed through [`apply_guard_rails`], which rejects
//! impossible values and collects warnings about odd ones.
//!
//! Browser hosts read the same options from data attributes on the carousel
//! root via [`settings_from_attributes`].

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

pub mod attributes;
pub mod loader;
pub mod sources;
pub mod util;
pub mod validation;

pub use attributes::settings_from_attributes;
pub use loader::{
    SettingsLoad, SettingsLoader, SettingsLoaderOptions, SettingsMetadata,
    error::SettingsLoadError,
};
pub use sources::{EnvSettings, FileAutoplay, FileCarouselSection, FileSettings};
pub use validation::{
    SettingsGuardRailError, SettingsWarning, SettingsWarnings,
    apply_guard_rails,
};
