//! The structural contract a host page offers a carousel.

use crate::error::MountError;

/// What the host found when it looked up the carousel's elements. The
/// controller never holds element references itself; it only needs to know
/// which parts exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Structure {
    pub has_region: bool,
    pub has_viewport: bool,
    pub has_track: bool,
    pub slide_count: usize,
    pub has_prev: bool,
    pub has_next: bool,
    pub has_indicators: bool,
}

impl Structure {
    /// All required parts present, no optional controls.
    pub fn new(slide_count: usize) -> Self {
        Self {
            has_region: true,
            has_viewport: true,
            has_track: true,
            slide_count,
            has_prev: false,
            has_next: false,
            has_indicators: false,
        }
    }

    pub fn with_controls(mut self) -> Self {
        self.has_prev = true;
        self.has_next = true;
        self
    }

    pub fn with_indicators(mut self) -> Self {
        self.has_indicators = true;
        self
    }

    pub fn validate(&self) -> Result<(), MountError> {
        if !self.has_region {
            return Err(MountError::MissingRegion);
        }
        if !self.has_viewport {
            return Err(MountError::MissingViewport);
        }
        if !self.has_track {
            return Err(MountError::MissingTrack);
        }
        if self.slide_count == 0 {
            return Err(MountError::NoSlides);
        }
        Ok(())
    }
}
