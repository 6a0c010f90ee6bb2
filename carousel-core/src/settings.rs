//! Per-instance carousel behaviour.

use std::time::Duration;

use carousel_model::WrapMode;

use crate::constants::{drag, timing};

/// Static configuration for a carousel instance. Hosts derive it from
/// presets, a settings file, or data attributes on the carousel root.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselSettings {
    pub wrap: WrapMode,
    /// Skip animated transitions entirely (user preference or page override).
    pub reduced_motion: bool,
    /// Number of slides visible at once; the last logical index keeps the
    /// final page filled.
    pub slides_per_view: usize,
    /// Advance automatically at this interval when set.
    pub autoplay: Option<Duration>,
    pub rubber_band: f32,
    pub swipe_min_px: f32,
    pub swipe_ratio: f32,
    pub resize_debounce: Duration,
    pub control_recheck: Duration,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self::standard()
    }
}

impl CarouselSettings {
    /// One slide per view, clamped at the ends, no autoplay.
    pub const fn standard() -> Self {
        Self {
            wrap: WrapMode::Finite,
            reduced_motion: false,
            slides_per_view: 1,
            autoplay: None,
            rubber_band: drag::RUBBER_BAND_FACTOR,
            swipe_min_px: drag::SWIPE_MIN_PX,
            swipe_ratio: drag::SWIPE_WIDTH_RATIO,
            resize_debounce: timing::RESIZE_DEBOUNCE,
            control_recheck: timing::CONTROL_RECHECK,
        }
    }

    /// Looping hero banner.
    pub const fn looping() -> Self {
        let mut s = Self::standard();
        s.wrap = WrapMode::Loop;
        s
    }

    /// Product row showing several cards at once.
    pub const fn row(slides_per_view: usize) -> Self {
        let mut s = Self::standard();
        s.slides_per_view = if slides_per_view == 0 {
            1
        } else {
            slides_per_view
        };
        s
    }

    pub fn with_wrap(mut self, wrap: WrapMode) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn with_reduced_motion(mut self, reduced: bool) -> Self {
        self.reduced_motion = reduced;
        self
    }

    pub fn with_autoplay(mut self, interval: Option<Duration>) -> Self {
        self.autoplay = interval;
        self
    }

    pub fn with_slides_per_view(mut self, count: usize) -> Self {
        self.slides_per_view = count.max(1);
        self
    }
}
