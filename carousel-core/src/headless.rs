//! In-memory host used by the CLI replayer and tests.

use carousel_model::{Frame, Measurement};

use crate::host::CarouselHost;

/// Reports a fixed measurement (changeable to simulate resizes) and keeps
/// every frame it was asked to render.
#[derive(Debug, Clone, Default)]
pub struct HeadlessHost {
    measurement: Measurement,
    frames: Vec<Frame>,
}

impl HeadlessHost {
    pub fn new(measurement: Measurement) -> Self {
        Self {
            measurement,
            frames: Vec::new(),
        }
    }

    /// Change what the next `measure` call will report.
    pub fn set_measurement(&mut self, measurement: Measurement) {
        self.measurement = measurement;
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Remove and return the frames rendered so far.
    pub fn drain_frames(&mut self) -> Vec<Frame> {
        std::mem::take(&mut self.frames)
    }
}

impl CarouselHost for HeadlessHost {
    fn measure(&self) -> Measurement {
        self.measurement
    }

    fn render(&mut self, frame: &Frame) {
        self.frames.push(frame.clone());
    }
}
