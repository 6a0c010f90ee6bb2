use std::time::Duration;

/// The kinds of deferred callbacks a carousel may have outstanding.
/// At most one ticket per kind is live at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TimerKind {
    /// Settles a snap and refreshes controls if no transition-end arrives.
    ControlRecheck,
    /// Coalesces a burst of resize notifications into one re-measure.
    ResizeSettle,
    Autoplay,
}

impl TimerKind {
    pub const ALL: [TimerKind; 3] = [
        TimerKind::ControlRecheck,
        TimerKind::ResizeSettle,
        TimerKind::Autoplay,
    ];

    pub fn slot(self) -> usize {
        match self {
            TimerKind::ControlRecheck => 0,
            TimerKind::ResizeSettle => 1,
            TimerKind::Autoplay => 2,
        }
    }
}

/// A request to call back after `delay`. Hosts hand the same ticket back
/// when the timer fires; tickets superseded in the meantime are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimerTicket {
    pub kind: TimerKind,
    pub generation: u64,
    pub delay: Duration,
}
