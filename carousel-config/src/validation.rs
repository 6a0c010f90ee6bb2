use std::time::Duration;

use carousel_core::CarouselSettings;
use thiserror::Error;

use crate::util::format_duration;

const LONG_RESIZE_DEBOUNCE: Duration = Duration::from_secs(1);
const SHORT_AUTOPLAY: Duration = Duration::from_secs(1);

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SettingsGuardRailError {
    #[error("rubber_band must be within (0, 1], got {value}")]
    RubberBandOutOfRange { value: f32 },
    #[error("swipe_ratio must be within [0, 1], got {value}")]
    SwipeRatioOutOfRange { value: f32 },
    #[error("swipe_min_px must be a finite, non-negative pixel count, got {value}")]
    InvalidSwipeMinimum { value: f32 },
    #[error("slides_per_view must be at least 1")]
    ZeroSlidesPerView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SettingsWarnings {
    pub items: Vec<SettingsWarning>,
}

impl SettingsWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(SettingsWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(SettingsWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn extend(&mut self, other: SettingsWarnings) {
        self.items.extend(other.items);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SettingsWarning> {
        self.items.iter()
    }
}

pub fn apply_guard_rails(
    settings: &CarouselSettings,
) -> Result<SettingsWarnings, SettingsGuardRailError> {
    let mut warnings = SettingsWarnings::default();

    if !(settings.rubber_band > 0.0 && settings.rubber_band <= 1.0) {
        return Err(SettingsGuardRailError::RubberBandOutOfRange {
            value: settings.rubber_band,
        });
    }

    if !(0.0..=1.0).contains(&settings.swipe_ratio) {
        return Err(SettingsGuardRailError::SwipeRatioOutOfRange {
            value: settings.swipe_ratio,
        });
    }

    if !settings.swipe_min_px.is_finite() || settings.swipe_min_px < 0.0 {
        return Err(SettingsGuardRailError::InvalidSwipeMinimum {
            value: settings.swipe_min_px,
        });
    }

    if settings.slides_per_view == 0 {
        return Err(SettingsGuardRailError::ZeroSlidesPerView);
    }

    if settings.resize_debounce > LONG_RESIZE_DEBOUNCE {
        warnings.push_with_hint(
            format!(
                "resize_debounce of {} leaves the strip misaligned for a noticeable time after resizing",
                format_duration(settings.resize_debounce)
            ),
            "Values around 100ms keep layout responsive without thrashing",
        );
    }

    if let Some(interval) = settings.autoplay {
        if interval < SHORT_AUTOPLAY {
            warnings.push_with_hint(
                format!(
                    "autoplay interval of {} advances faster than most readers can follow",
                    format_duration(interval)
                ),
                "Use an interval of several seconds",
            );
        }
        if settings.reduced_motion {
            warnings.push(
                "autoplay is configured but reduced_motion is set; autoplay will stay off",
            );
        }
    }

    if settings.control_recheck.is_zero() {
        warnings.push_with_hint(
            "control_recheck is zero; snapping ends before the transition finishes",
            "Match control_recheck to the stylesheet transition duration",
        );
    }

    Ok(warnings)
}
