//! Inputs to and outputs from [`crate::Carousel::update`].

use carousel_model::{KeyInput, PointerInput, TimerTicket};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselMessage {
    // Navigation
    Next,
    Prev,
    GoTo(isize),
    /// An indicator dot was activated.
    Indicator(usize),

    // Pointer drag
    PointerDown(PointerInput),
    PointerMove(PointerInput),
    PointerUp(PointerInput),
    PointerCancel(PointerInput),
    LostPointerCapture,

    Key(KeyInput),

    // Layout and timing
    Resized,
    TransitionEnd,
    Timer(TimerTicket),

    /// Pointer entered (true) or left (false) the carousel region.
    HoverChanged(bool),
}

/// Work the host must carry out after an update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Arm a timer and send `CarouselMessage::Timer(ticket)` when it elapses.
    Schedule(TimerTicket),
    CapturePointer(i32),
    ReleasePointer(i32),
    /// The input was consumed; suppress the browser's default action.
    PreventDefault,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Effects(Vec<Effect>);

impl Effects {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn push(&mut self, effect: Effect) {
        self.0.push(effect);
    }

    pub fn extend(&mut self, other: Effects) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Effect> {
        self.0.iter()
    }

    pub fn prevents_default(&self) -> bool {
        self.0.contains(&Effect::PreventDefault)
    }

    pub fn scheduled(&self) -> impl Iterator<Item = TimerTicket> + '_ {
        self.0.iter().filter_map(|effect| match effect {
            Effect::Schedule(ticket) => Some(*ticket),
            _ => None,
        })
    }
}

impl IntoIterator for Effects {
    type Item = Effect;
    type IntoIter = std::vec::IntoIter<Effect>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Effects {
    type Item = &'a Effect;
    type IntoIter = std::slice::Iter<'a, Effect>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
