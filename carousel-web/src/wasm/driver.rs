//! Event wiring and effect execution for one mounted carousel.

use std::{cell::RefCell, rc::Rc};

use carousel_core::{Carousel, CarouselMessage, Effect, Effects};
use carousel_model::{Key, KeyInput, PointerInput, PointerKind, TimerTicket};
use wasm_bindgen::{JsCast, JsValue, closure::Closure, prelude::wasm_bindgen};
use web_sys::{
    Event, EventTarget, HtmlElement, KeyboardEvent, Node, PointerEvent, Window,
};

use super::host::DomHost;
use crate::focus;

#[derive(Debug)]
pub(crate) struct Driver {
    carousel: RefCell<Carousel<DomHost>>,
    window: Window,
    root: HtmlElement,
    viewport: HtmlElement,
    track: HtmlElement,
}

impl Driver {
    pub(crate) fn new(
        carousel: Carousel<DomHost>,
        window: Window,
        root: HtmlElement,
    ) -> Rc<Self> {
        let (viewport, track) = {
            let host = carousel.host();
            (host.viewport.clone(), host.track.clone())
        };
        Rc::new(Self {
            carousel: RefCell::new(carousel),
            window,
            root,
            viewport,
            track,
        })
    }

    /// Feed one message to the controller and carry out what it asks for.
    /// The controller borrow ends before any effect runs.
    pub(crate) fn dispatch(self: &Rc<Self>, message: CarouselMessage) -> Effects {
        let effects = self.carousel.borrow_mut().update(message);
        self.apply(&effects);
        effects
    }

    pub(crate) fn start(self: &Rc<Self>) {
        let effects = self.carousel.borrow_mut().start();
        self.apply(&effects);
    }

    fn apply(self: &Rc<Self>, effects: &Effects) {
        for effect in effects {
            let result = match *effect {
                Effect::Schedule(ticket) => self.schedule(ticket),
                Effect::CapturePointer(id) => self.viewport.set_pointer_capture(id),
                Effect::ReleasePointer(id) => {
                    self.viewport.release_pointer_capture(id)
                }
                // Handled by the listener that owns the event.
                Effect::PreventDefault => Ok(()),
            };
            if let Err(err) = result {
                tracing::warn!(?effect, error = ?err, "carousel effect failed");
            }
        }
    }

    fn schedule(self: &Rc<Self>, ticket: TimerTicket) -> Result<(), JsValue> {
        let driver = Rc::clone(self);
        let callback = Closure::once_into_js(move || {
            driver.dispatch(CarouselMessage::Timer(ticket));
        });
        let delay = i32::try_from(ticket.delay.as_millis()).unwrap_or(i32::MAX);
        self.window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                delay,
            )
            .map(|_| ())
    }

    pub(crate) fn current_index(&self) -> usize {
        self.carousel.borrow().current_index()
    }

    pub(crate) fn slide_count(&self) -> usize {
        self.carousel.borrow().slide_count()
    }

    /// Attach every DOM listener. Listeners live as long as the page.
    pub(crate) fn wire(self: &Rc<Self>) -> Result<(), JsValue> {
        let (prev, next, dots) = {
            let carousel = self.carousel.borrow();
            let host = carousel.host();
            (host.prev.clone(), host.next.clone(), host.dots.clone())
        };

        if let Some(prev) = prev {
            self.on_event(&prev, "click", |_, _| Some(CarouselMessage::Prev))?;
        }
        if let Some(next) = next {
            self.on_event(&next, "click", |_, _| Some(CarouselMessage::Next))?;
        }
        for (i, dot) in dots.iter().enumerate() {
            self.on_event(dot, "click", move |_, _| {
                Some(CarouselMessage::Indicator(i))
            })?;
        }

        self.on_event(&self.root, "keydown", |driver, event| {
            let event = event.dyn_ref::<KeyboardEvent>()?;
            let key = Key::from_dom_key(&event.key());
            Some(CarouselMessage::Key(KeyInput {
                key,
                focus: driver.focus_target(),
            }))
        })?;

        let pointer_messages: [(&str, fn(PointerInput) -> CarouselMessage); 4] = [
            ("pointerdown", CarouselMessage::PointerDown),
            ("pointermove", CarouselMessage::PointerMove),
            ("pointerup", CarouselMessage::PointerUp),
            ("pointercancel", CarouselMessage::PointerCancel),
        ];
        for (name, wrap) in pointer_messages {
            self.on_event(&self.viewport, name, move |_, event| {
                event.dyn_ref::<PointerEvent>().map(pointer_input).map(wrap)
            })?;
        }
        self.on_event(&self.viewport, "lostpointercapture", |_, _| {
            Some(CarouselMessage::LostPointerCapture)
        })?;

        self.on_event(&self.root, "mouseenter", |_, _| {
            Some(CarouselMessage::HoverChanged(true))
        })?;
        self.on_event(&self.root, "mouseleave", |_, _| {
            Some(CarouselMessage::HoverChanged(false))
        })?;

        self.on_event(&self.track, "transitionend", |driver, event| {
            let from_track = event
                .target()
                .and_then(|target| target.dyn_into::<Node>().ok())
                .is_some_and(|node| driver.track.is_same_node(Some(&node)));
            from_track.then_some(CarouselMessage::TransitionEnd)
        })?;

        let window = self.window.clone();
        self.on_event(&window, "resize", |_, _| Some(CarouselMessage::Resized))?;

        Ok(())
    }

    fn on_event<F>(
        self: &Rc<Self>,
        target: &EventTarget,
        name: &str,
        to_message: F,
    ) -> Result<(), JsValue>
    where
        F: Fn(&Rc<Driver>, &Event) -> Option<CarouselMessage> + 'static,
    {
        let driver = Rc::clone(self);
        let listener = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if let Some(message) = to_message(&driver, &event) {
                if driver.dispatch(message).prevents_default() {
                    event.prevent_default();
                }
            }
        });
        target.add_event_listener_with_callback(
            name,
            listener.as_ref().unchecked_ref(),
        )?;
        listener.forget();
        Ok(())
    }

    fn focus_target(&self) -> carousel_model::FocusTarget {
        let active = self
            .window
            .document()
            .and_then(|document| document.active_element());
        match active {
            Some(element) => {
                let node: &Node = &element;
                let inside = self.root.contains(Some(node));
                focus::classify(inside, &element.tag_name())
            }
            None => carousel_model::FocusTarget::Outside,
        }
    }
}

fn pointer_input(event: &PointerEvent) -> PointerInput {
    let kind = event.pointer_type().parse().unwrap_or(PointerKind::Mouse);
    PointerInput::new(event.pointer_id(), kind, event.client_x() as f32)
        .with_button(event.button())
}

/// A mounted carousel, returned to JavaScript for programmatic control.
#[wasm_bindgen]
#[derive(Debug)]
pub struct CarouselHandle {
    driver: Rc<Driver>,
}

impl CarouselHandle {
    pub(crate) fn new(driver: Rc<Driver>) -> Self {
        Self { driver }
    }
}

#[wasm_bindgen]
impl CarouselHandle {
    pub fn next(&self) {
        self.driver.dispatch(CarouselMessage::Next);
    }

    pub fn prev(&self) {
        self.driver.dispatch(CarouselMessage::Prev);
    }

    /// Out-of-range targets clamp or wrap depending on the carousel's mode.
    #[wasm_bindgen(js_name = goTo)]
    pub fn go_to(&self, index: i32) {
        self.driver.dispatch(CarouselMessage::GoTo(index as isize));
    }

    #[wasm_bindgen(getter, js_name = currentIndex)]
    pub fn current_index(&self) -> usize {
        self.driver.current_index()
    }

    #[wasm_bindgen(getter, js_name = slideCount)]
    pub fn slide_count(&self) -> usize {
        self.driver.slide_count()
    }
}
