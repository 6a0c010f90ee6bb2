//! Pointer drag protocol: idle → dragging → snapping.

/// Where the strip is in its gesture lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
    /// An animated settle toward `target` is in flight.
    Snapping { target: usize },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging(_))
    }

    pub fn session(&self) -> Option<&DragSession> {
        match self {
            DragState::Dragging(session) => Some(session),
            _ => None,
        }
    }
}

/// Bookkeeping for one active pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub pointer_id: i32,
    pub start_x: f32,
    pub current_x: f32,
    /// The controller's own offset when the gesture began.
    pub start_offset: f32,
}

impl DragSession {
    pub fn begin(pointer_id: i32, x: f32, start_offset: f32) -> Self {
        Self {
            pointer_id,
            start_x: x,
            current_x: x,
            start_offset,
        }
    }

    /// Net horizontal travel; negative when the pointer moved left.
    #[inline]
    pub fn displacement(&self) -> f32 {
        self.current_x - self.start_x
    }

    /// Offset the strip would take if it tracked the pointer 1:1.
    #[inline]
    pub fn candidate_offset(&self) -> f32 {
        self.start_offset + self.displacement()
    }
}

/// What a released gesture asks the carousel to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeIntent {
    /// Pointer travelled left far enough: show the next slide.
    Advance,
    /// Pointer travelled right far enough: show the previous slide.
    Retreat,
    /// Too short; return to the current slide.
    Stay,
}

impl SwipeIntent {
    /// Classify a release. Travel at or beyond `threshold` commits a step.
    pub fn classify(displacement: f32, threshold: f32) -> Self {
        if !displacement.is_finite()
            || displacement == 0.0
            || displacement.abs() < threshold
        {
            SwipeIntent::Stay
        } else if displacement < 0.0 {
            SwipeIntent::Advance
        } else {
            SwipeIntent::Retreat
        }
    }
}
