//! Drives a carousel on a headless host through a script.

use std::{io::Write, time::Duration};

use anyhow::{Context, Result};
use carousel_core::{
    Carousel, CarouselMessage, CarouselSettings, Effect, Effects,
    HeadlessHost, Structure,
};
use carousel_model::{Frame, KeyInput, Measurement, PointerInput};
use serde::Serialize;

use crate::{
    clock::VirtualClock,
    script::{Drag, Step},
};

/// Page the replayed carousel lives on.
#[derive(Debug, Clone, Copy)]
pub struct Stage {
    pub slides: usize,
    pub measurement: Measurement,
    pub controls: bool,
    pub indicators: bool,
}

/// One rendered frame, as printed.
#[derive(Debug, Serialize)]
pub struct FrameRecord<'a> {
    pub at_ms: u64,
    pub step: usize,
    pub cause: &'a str,
    pub frame: &'a Frame,
}

#[derive(Debug)]
pub struct Replay<W: Write> {
    carousel: Carousel<HeadlessHost>,
    clock: VirtualClock,
    out: W,
    step: usize,
}

impl<W: Write> Replay<W> {
    pub fn new(stage: Stage, settings: CarouselSettings, out: W) -> Result<Self> {
        let mut structure = Structure::new(stage.slides);
        structure.has_prev = stage.controls;
        structure.has_next = stage.controls;
        structure.has_indicators = stage.indicators;

        let host = HeadlessHost::new(stage.measurement);
        let carousel = Carousel::mount(structure, host, settings)
            .context("carousel failed to mount")?;

        let mut replay = Self {
            carousel,
            clock: VirtualClock::default(),
            out,
            step: 0,
        };
        replay.flush("mount")?;
        let effects = replay.carousel.start();
        replay.apply(&effects);
        Ok(replay)
    }

    pub fn run(&mut self, steps: &[Step]) -> Result<()> {
        for (i, step) in steps.iter().enumerate() {
            self.step = i + 1;
            tracing::debug!(step = self.step, kind = step.name(), "replaying");
            self.perform(step);
            self.flush(step.name())?;
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn carousel(&self) -> &Carousel<HeadlessHost> {
        &self.carousel
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn perform(&mut self, step: &Step) {
        match step {
            Step::Next => self.send(CarouselMessage::Next),
            Step::Prev => self.send(CarouselMessage::Prev),
            Step::GoTo { index } => self.send(CarouselMessage::GoTo(*index)),
            Step::Indicator { index } => {
                self.send(CarouselMessage::Indicator(*index))
            }
            Step::Key { key, focus } => self.send(CarouselMessage::Key(KeyInput {
                key: *key,
                focus: *focus,
            })),
            Step::Drag(drag) => self.drag(drag, false),
            Step::CancelDrag(drag) => self.drag(drag, true),
            Step::Resize { width, gap } => {
                self.carousel
                    .host_mut()
                    .set_measurement(Measurement::new(*width, *gap));
                self.send(CarouselMessage::Resized);
            }
            Step::Advance { ms } => self.advance(Duration::from_millis(*ms)),
            Step::TransitionEnd => self.send(CarouselMessage::TransitionEnd),
            Step::Hover { inside } => {
                self.send(CarouselMessage::HoverChanged(*inside))
            }
        }
    }

    fn drag(&mut self, drag: &Drag, cancel: bool) {
        let pointer = PointerInput::new(drag.id, drag.pointer, drag.from)
            .with_button(drag.button);
        self.send(CarouselMessage::PointerDown(pointer));
        for x in drag.via.iter().copied().chain([drag.to]) {
            self.send(CarouselMessage::PointerMove(pointer.at(x)));
        }
        let last = pointer.at(drag.to);
        if cancel {
            self.send(CarouselMessage::PointerCancel(last));
        } else {
            self.send(CarouselMessage::PointerUp(last));
        }
    }

    /// Fire every timer that comes due within `by`, including ones armed by
    /// earlier timers in the same window.
    fn advance(&mut self, by: Duration) {
        let deadline = self.clock.now() + by;
        while let Some(ticket) = self.clock.pop_due(deadline) {
            self.send(CarouselMessage::Timer(ticket));
        }
        self.clock.set_now(deadline);
    }

    fn send(&mut self, message: CarouselMessage) {
        let effects = self.carousel.update(message);
        self.apply(&effects);
    }

    fn apply(&mut self, effects: &Effects) {
        for effect in effects {
            if let Effect::Schedule(ticket) = effect {
                self.clock.schedule(*ticket);
            }
        }
    }

    fn flush(&mut self, cause: &str) -> Result<()> {
        let at_ms = u64::try_from(self.clock.now().as_millis()).unwrap_or(u64::MAX);
        for frame in self.carousel.host_mut().drain_frames() {
            let record = FrameRecord {
                at_ms,
                step: self.step,
                cause,
                frame: &frame,
            };
            serde_json::to_writer(&mut self.out, &record)?;
            writeln!(self.out)?;
        }
        Ok(())
    }
}
