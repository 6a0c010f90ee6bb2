use std::time::Duration;

/// Automatic advance state. The timer itself lives in [`crate::TimerSlots`].
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Autoplay {
    interval: Option<Duration>,
    hovered: bool,
}

impl Autoplay {
    /// Autoplay is suppressed entirely under reduced motion and when there
    /// is nowhere to advance to.
    pub(crate) fn new(
        interval: Option<Duration>,
        reduced_motion: bool,
        positions: usize,
    ) -> Self {
        let interval = interval.filter(|d| {
            !reduced_motion && positions > 1 && !d.is_zero()
        });
        Self {
            interval,
            hovered: false,
        }
    }

    /// Interval to arm, if autoplay should currently be running.
    pub(crate) fn armed_interval(&self) -> Option<Duration> {
        if self.hovered { None } else { self.interval }
    }

    pub(crate) fn is_enabled(&self) -> bool {
        self.interval.is_some()
    }

    pub(crate) fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }
}
