//! Default tuning values shared by settings presets and the config loader.

pub mod drag {
    /// Fraction of the out-of-range drag distance that still moves the strip.
    pub const RUBBER_BAND_FACTOR: f32 = 0.25;
    /// Minimum swipe distance in pixels before a release commits a step.
    pub const SWIPE_MIN_PX: f32 = 26.0;
    /// Swipe distance as a fraction of slide width before a release commits a step.
    pub const SWIPE_WIDTH_RATIO: f32 = 0.12;
}

pub mod timing {
    use std::time::Duration;

    pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(100);
    pub const CONTROL_RECHECK: Duration = Duration::from_millis(250);
    pub const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(5000);
}
