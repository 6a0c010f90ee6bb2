//! Carousel: index, offset and gesture state for one mounted instance.

use carousel_model::{
    Measurement, PointerInput, TimerKind, TimerTicket, Transition,
};

use crate::autoplay::Autoplay;
use crate::drag::{DragSession, DragState, SwipeIntent};
use crate::error::MountError;
use crate::geometry;
use crate::host::CarouselHost;
use crate::keyboard::{self, NavIntent};
use crate::message::{CarouselMessage, Effect, Effects};
use crate::settings::CarouselSettings;
use crate::structure::Structure;
use crate::timers::TimerSlots;

#[derive(Debug)]
pub struct Carousel<H: CarouselHost> {
    pub(crate) host: H,
    pub(crate) settings: CarouselSettings,
    pub(crate) structure: Structure,
    pub(crate) measurement: Measurement,
    /// Logical position; always within `[0, last_index]`.
    pub(crate) index: usize,
    /// Authoritative strip translation. Never read back from the host.
    pub(crate) offset: f32,
    pub(crate) transition: Transition,
    pub(crate) drag: DragState,
    timers: TimerSlots,
    autoplay: Autoplay,
}

impl<H: CarouselHost> Carousel<H> {
    /// Mount a carousel over the structure a host found.
    ///
    /// Fails without creating any state when required structure is missing.
    /// On success the strip is measured and rendered at index 0 with no
    /// transition.
    pub fn mount(
        structure: Structure,
        host: H,
        settings: CarouselSettings,
    ) -> Result<Self, MountError> {
        structure.validate()?;

        let positions =
            geometry::last_index(structure.slide_count, settings.slides_per_view)
                + 1;
        let mut carousel = Self {
            host,
            settings,
            structure,
            measurement: Measurement::default(),
            index: 0,
            offset: 0.0,
            transition: Transition::Immediate,
            drag: DragState::Idle,
            timers: TimerSlots::new(),
            autoplay: Autoplay::new(
                settings.autoplay,
                settings.reduced_motion,
                positions,
            ),
        };
        carousel.measure();
        carousel.settle(0, false);
        tracing::debug!(
            slides = structure.slide_count,
            wrap = %settings.wrap,
            step = carousel.measurement.step(),
            "carousel mounted"
        );
        Ok(carousel)
    }

    /// Arm long-running timers. Call once after mounting.
    pub fn start(&mut self) -> Effects {
        let mut effects = Effects::none();
        if self.autoplay.is_enabled() {
            tracing::debug!(interval = ?self.settings.autoplay, "autoplay armed");
        }
        self.restart_autoplay(&mut effects);
        effects
    }

    /// Apply one input and return the work the host must do.
    pub fn update(&mut self, message: CarouselMessage) -> Effects {
        match message {
            CarouselMessage::Next => self.navigate(NavIntent::Next),
            CarouselMessage::Prev => self.navigate(NavIntent::Prev),
            CarouselMessage::GoTo(target) => {
                let mut effects = self.go_to(target, true);
                self.restart_autoplay(&mut effects);
                effects
            }
            CarouselMessage::Indicator(i) => self.navigate(NavIntent::Index(i)),
            CarouselMessage::PointerDown(input) => self.pointer_down(input),
            CarouselMessage::PointerMove(input) => {
                self.pointer_move(input);
                Effects::none()
            }
            CarouselMessage::PointerUp(input) => match self.drag {
                DragState::Dragging(session) if session.pointer_id == input.id => {
                    let mut session = session;
                    session.current_x = input.x;
                    self.end_drag(session, session.displacement(), true)
                }
                _ => Effects::none(),
            },
            CarouselMessage::PointerCancel(input) => match self.drag {
                DragState::Dragging(session) if session.pointer_id == input.id => {
                    self.end_drag(session, 0.0, true)
                }
                _ => Effects::none(),
            },
            CarouselMessage::LostPointerCapture => match self.drag {
                DragState::Dragging(session) => self.end_drag(session, 0.0, false),
                _ => Effects::none(),
            },
            CarouselMessage::Key(input) => match keyboard::intent_for(input) {
                Some(intent) => {
                    let mut effects = self.navigate(intent);
                    effects.push(Effect::PreventDefault);
                    effects
                }
                None => Effects::none(),
            },
            CarouselMessage::Resized => {
                let mut effects = Effects::none();
                effects.push(Effect::Schedule(self.timers.schedule(
                    TimerKind::ResizeSettle,
                    self.settings.resize_debounce,
                )));
                effects
            }
            CarouselMessage::TransitionEnd => {
                if matches!(self.drag, DragState::Snapping { .. }) {
                    self.drag = DragState::Idle;
                    self.timers.cancel(TimerKind::ControlRecheck);
                }
                Effects::none()
            }
            CarouselMessage::Timer(ticket) => self.timer_fired(ticket),
            CarouselMessage::HoverChanged(hovered) => {
                self.autoplay.set_hovered(hovered);
                let mut effects = Effects::none();
                if hovered {
                    self.timers.cancel(TimerKind::Autoplay);
                } else {
                    self.restart_autoplay(&mut effects);
                }
                effects
            }
        }
    }

    /// Move to `target`, clamped or wrapped per the instance's wrap mode,
    /// and render. Animated moves enter `Snapping` until the host reports
    /// the transition finished or the recheck timer fires.
    pub fn go_to(&mut self, target: isize, animate: bool) -> Effects {
        let mut effects = Effects::none();
        if let DragState::Dragging(session) = self.drag {
            effects.push(Effect::ReleasePointer(session.pointer_id));
        }

        let index = self.settings.wrap.resolve(target, self.last_index());
        let animated = self.settle(index, animate);
        if animated {
            effects.push(Effect::Schedule(self.timers.schedule(
                TimerKind::ControlRecheck,
                self.settings.control_recheck,
            )));
        } else {
            self.timers.cancel(TimerKind::ControlRecheck);
        }
        effects
    }

    pub fn next(&mut self) -> Effects {
        self.go_to(self.index as isize + 1, true)
    }

    pub fn prev(&mut self) -> Effects {
        self.go_to(self.index as isize - 1, true)
    }

    /// Re-read slide width and gap from the host. Offsets computed after this
    /// use the new step; call [`Carousel::go_to`] to realign the strip.
    pub fn measure(&mut self) -> Measurement {
        let measured = self.host.measure();
        if measured != self.measurement {
            tracing::debug!(
                width = measured.slide_width,
                gap = measured.gap,
                "carousel measured"
            );
        }
        self.measurement = measured;
        measured
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    pub fn measurement(&self) -> Measurement {
        self.measurement
    }

    pub fn settings(&self) -> &CarouselSettings {
        &self.settings
    }

    pub fn structure(&self) -> &Structure {
        &self.structure
    }

    pub fn slide_count(&self) -> usize {
        self.structure.slide_count
    }

    pub fn last_index(&self) -> usize {
        geometry::last_index(
            self.structure.slide_count,
            self.settings.slides_per_view,
        )
    }

    pub fn can_go_prev(&self) -> bool {
        self.last_index() > 0 && (self.settings.wrap.is_loop() || self.index > 0)
    }

    pub fn can_go_next(&self) -> bool {
        let last = self.last_index();
        last > 0 && (self.settings.wrap.is_loop() || self.index < last)
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Set index and offset for `index` and render. Returns whether the move
    /// is animated.
    fn settle(&mut self, index: usize, animate: bool) -> bool {
        let animated = animate && !self.settings.reduced_motion;
        self.index = index;
        self.offset = geometry::settled_offset(index, self.measurement.step());
        self.transition = if animated {
            Transition::Animated
        } else {
            Transition::Immediate
        };
        self.drag = if animated {
            DragState::Snapping { target: index }
        } else {
            DragState::Idle
        };
        self.render();
        animated
    }

    fn navigate(&mut self, intent: NavIntent) -> Effects {
        let target = match intent {
            NavIntent::Prev => self.index as isize - 1,
            NavIntent::Next => self.index as isize + 1,
            NavIntent::First => 0,
            NavIntent::Last => self.last_index() as isize,
            NavIntent::Index(i) => i.min(isize::MAX as usize) as isize,
        };
        let mut effects = self.go_to(target, true);
        self.restart_autoplay(&mut effects);
        effects
    }

    fn pointer_down(&mut self, input: PointerInput) -> Effects {
        if !input.is_primary() || self.drag.is_dragging() {
            return Effects::none();
        }
        self.timers.cancel(TimerKind::ControlRecheck);
        self.drag =
            DragState::Dragging(DragSession::begin(input.id, input.x, self.offset));
        self.transition = Transition::Immediate;
        self.render();
        tracing::trace!(pointer = input.id, x = input.x, "drag started");

        let mut effects = Effects::none();
        effects.push(Effect::CapturePointer(input.id));
        effects
    }

    fn pointer_move(&mut self, input: PointerInput) {
        let DragState::Dragging(mut session) = self.drag else {
            return;
        };
        if session.pointer_id != input.id {
            return;
        }
        session.current_x = input.x;
        self.drag = DragState::Dragging(session);

        let (min, max) =
            geometry::offset_bounds(self.last_index(), self.measurement.step());
        self.offset = geometry::rubber_band(
            session.candidate_offset(),
            min,
            max,
            self.settings.rubber_band,
        );
        self.render();
    }

    /// Finish a gesture. Cancellations pass a zero displacement so they
    /// always snap back to the current index.
    fn end_drag(
        &mut self,
        session: DragSession,
        displacement: f32,
        release_capture: bool,
    ) -> Effects {
        self.drag = DragState::Idle;
        let threshold = geometry::swipe_threshold(
            self.measurement.slide_width,
            self.settings.swipe_min_px,
            self.settings.swipe_ratio,
        );
        let intent = SwipeIntent::classify(displacement, threshold);
        tracing::debug!(
            displacement,
            threshold,
            ?intent,
            index = self.index,
            "drag released"
        );

        let mut effects = match intent {
            SwipeIntent::Advance => self.navigate(NavIntent::Next),
            SwipeIntent::Retreat => self.navigate(NavIntent::Prev),
            SwipeIntent::Stay => self.go_to(self.index as isize, true),
        };
        if release_capture {
            effects.push(Effect::ReleasePointer(session.pointer_id));
        }
        effects
    }

    fn timer_fired(&mut self, ticket: TimerTicket) -> Effects {
        if !self.timers.accept(ticket) {
            return Effects::none();
        }
        match ticket.kind {
            TimerKind::ResizeSettle => {
                self.measure();
                if self.drag.is_dragging() {
                    // The release realigns against the new step.
                    Effects::none()
                } else {
                    self.go_to(self.index as isize, false)
                }
            }
            TimerKind::ControlRecheck => {
                if matches!(self.drag, DragState::Snapping { .. }) {
                    self.drag = DragState::Idle;
                }
                self.render();
                Effects::none()
            }
            TimerKind::Autoplay => self.autoplay_tick(),
        }
    }

    fn autoplay_tick(&mut self) -> Effects {
        let mut effects = Effects::none();
        if !self.drag.is_dragging() {
            let target = if self.index >= self.last_index() {
                0
            } else {
                self.index + 1
            };
            effects.extend(self.go_to(target as isize, true));
        }
        self.restart_autoplay(&mut effects);
        effects
    }

    fn restart_autoplay(&mut self, effects: &mut Effects) {
        if let Some(interval) = self.autoplay.armed_interval() {
            effects.push(Effect::Schedule(
                self.timers.schedule(TimerKind::Autoplay, interval),
            ));
        }
    }
}
