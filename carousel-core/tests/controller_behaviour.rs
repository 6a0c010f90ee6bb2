use std::time::Duration;

use carousel_core::{
    Carousel, CarouselMessage, CarouselSettings, DragState, Effect,
    HeadlessHost, Structure,
};
use carousel_model::{
    FocusTarget, Key, KeyInput, Measurement, PointerInput, TimerKind,
    Transition, WrapMode,
};

fn mount(slides: usize, settings: CarouselSettings) -> Carousel<HeadlessHost> {
    let host = HeadlessHost::new(Measurement::new(300.0, 20.0));
    Carousel::mount(
        Structure::new(slides).with_controls().with_indicators(),
        host,
        settings,
    )
    .expect("mount")
}

fn finite(slides: usize) -> Carousel<HeadlessHost> {
    mount(slides, CarouselSettings::default())
}

fn looping(slides: usize) -> Carousel<HeadlessHost> {
    mount(slides, CarouselSettings::looping())
}

fn last_frame(carousel: &Carousel<HeadlessHost>) -> carousel_model::Frame {
    carousel.host().last_frame().cloned().expect("a frame was rendered")
}

#[test]
fn walkthrough_of_four_slides() {
    let mut carousel = finite(4);
    carousel.go_to(1, false);
    assert_eq!(carousel.offset(), -320.0);

    carousel.next();
    let frame = last_frame(&carousel);
    assert_eq!(carousel.current_index(), 2);
    assert_eq!(frame.offset, -640.0);
    assert!(!frame.prev_disabled);
    assert!(!frame.next_disabled);

    carousel.next();
    carousel.next();
    assert_eq!(carousel.current_index(), 3);
    let at_end = last_frame(&carousel);
    assert!(at_end.next_disabled);

    carousel.next();
    assert_eq!(carousel.current_index(), 3);
    assert_eq!(last_frame(&carousel), at_end);
}

#[test]
fn settled_offset_tracks_index() {
    let mut carousel = finite(6);
    for i in 0..6 {
        carousel.go_to(i, false);
        assert_eq!(carousel.offset(), -(i as f32) * 320.0);
        assert_eq!(last_frame(&carousel).offset, carousel.offset());
    }
}

#[test]
fn go_to_is_idempotent() {
    let mut carousel = finite(5);
    carousel.go_to(3, true);
    let first = last_frame(&carousel);
    carousel.go_to(3, true);
    assert_eq!(last_frame(&carousel), first);
    assert_eq!(carousel.current_index(), 3);
}

#[test]
fn finite_instance_clamps_out_of_range_targets() {
    let mut carousel = finite(4);
    carousel.go_to(-5, true);
    assert_eq!(carousel.current_index(), 0);
    assert!(last_frame(&carousel).prev_disabled);

    carousel.go_to(9, true);
    assert_eq!(carousel.current_index(), 3);
    assert!(last_frame(&carousel).next_disabled);
}

#[test]
fn looping_instance_wraps_to_opposite_end() {
    let mut carousel = looping(4);
    carousel.go_to(-5, true);
    assert_eq!(carousel.current_index(), 3);
    carousel.go_to(9, true);
    assert_eq!(carousel.current_index(), 0);

    carousel.prev();
    assert_eq!(carousel.current_index(), 3);
    let frame = last_frame(&carousel);
    assert!(!frame.prev_disabled && !frame.next_disabled);
}

#[test]
fn single_slide_never_moves() {
    for mut carousel in [finite(1), looping(1)] {
        let frame = last_frame(&carousel);
        assert!(frame.prev_disabled && frame.next_disabled);
        carousel.next();
        carousel.prev();
        carousel.update(CarouselMessage::PointerDown(PointerInput::mouse(400.0)));
        carousel.update(CarouselMessage::PointerUp(PointerInput::mouse(0.0)));
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.offset(), 0.0);
    }
}

#[test]
fn zero_width_measurement_is_stable() {
    let host = HeadlessHost::new(Measurement::new(0.0, 0.0));
    let mut carousel =
        Carousel::mount(Structure::new(3), host, CarouselSettings::default())
            .expect("mount");
    carousel.next();
    assert_eq!(carousel.current_index(), 1);
    assert_eq!(carousel.offset(), 0.0);
}

#[test]
fn short_drag_snaps_back() {
    // W = 300, threshold = max(26, 36) = 36
    let mut carousel = finite(4);
    carousel.go_to(1, false);

    carousel.update(CarouselMessage::PointerDown(PointerInput::touch(5, 500.0)));
    carousel.update(CarouselMessage::PointerMove(PointerInput::touch(5, 470.0)));
    assert_eq!(carousel.offset(), -350.0);
    assert_eq!(last_frame(&carousel).transition, Transition::Immediate);

    let effects =
        carousel.update(CarouselMessage::PointerUp(PointerInput::touch(5, 465.0)));
    assert_eq!(carousel.current_index(), 1);
    assert_eq!(carousel.offset(), -320.0);
    assert_eq!(last_frame(&carousel).transition, Transition::Animated);
    assert!(effects.iter().any(|e| *e == Effect::ReleasePointer(5)));
}

#[test]
fn drag_at_threshold_advances_exactly_one() {
    let mut carousel = finite(4);
    carousel.go_to(1, false);

    let down = carousel.update(CarouselMessage::PointerDown(PointerInput::touch(2, 500.0)));
    assert!(down.iter().any(|e| *e == Effect::CapturePointer(2)));
    carousel.update(CarouselMessage::PointerMove(PointerInput::touch(2, 100.0)));
    carousel.update(CarouselMessage::PointerUp(PointerInput::touch(2, 464.0)));
    assert_eq!(carousel.current_index(), 2);

    carousel.update(CarouselMessage::PointerDown(PointerInput::touch(2, 100.0)));
    carousel.update(CarouselMessage::PointerUp(PointerInput::touch(2, 136.0)));
    assert_eq!(carousel.current_index(), 1);
}

#[test]
fn drag_past_the_ends_is_damped() {
    let mut carousel = finite(3);
    carousel.update(CarouselMessage::PointerDown(PointerInput::mouse(100.0)));
    carousel.update(CarouselMessage::PointerMove(PointerInput::mouse(180.0)));
    assert_eq!(carousel.offset(), 20.0);

    carousel.update(CarouselMessage::PointerCancel(PointerInput::mouse(180.0)));
    carousel.go_to(2, false);
    carousel.update(CarouselMessage::PointerDown(PointerInput::mouse(500.0)));
    carousel.update(CarouselMessage::PointerMove(PointerInput::mouse(380.0)));
    assert_eq!(carousel.offset(), -640.0 - 30.0);

    carousel.update(CarouselMessage::PointerUp(PointerInput::mouse(380.0)));
    assert_eq!(carousel.current_index(), 2);
    assert_eq!(carousel.offset(), -640.0);
}

#[test]
fn cancellation_snaps_to_current_index() {
    let mut carousel = finite(4);
    carousel.go_to(2, false);
    carousel.update(CarouselMessage::PointerDown(PointerInput::touch(9, 600.0)));
    carousel.update(CarouselMessage::PointerMove(PointerInput::touch(9, 100.0)));

    carousel.update(CarouselMessage::PointerCancel(PointerInput::touch(9, 100.0)));
    assert_eq!(carousel.current_index(), 2);
    assert_eq!(carousel.offset(), -640.0);

    carousel.update(CarouselMessage::PointerDown(PointerInput::touch(9, 600.0)));
    carousel.update(CarouselMessage::PointerMove(PointerInput::touch(9, 0.0)));
    let effects = carousel.update(CarouselMessage::LostPointerCapture);
    assert_eq!(carousel.current_index(), 2);
    assert_eq!(carousel.offset(), -640.0);
    assert!(!effects.iter().any(|e| matches!(e, Effect::ReleasePointer(_))));
}

#[test]
fn foreign_pointers_and_secondary_buttons_are_ignored() {
    let mut carousel = finite(4);
    let effects = carousel.update(CarouselMessage::PointerDown(
        PointerInput::mouse(300.0).with_button(2),
    ));
    assert!(effects.is_empty());
    assert_eq!(*carousel.drag_state(), DragState::Idle);

    carousel.update(CarouselMessage::PointerDown(PointerInput::touch(1, 300.0)));
    carousel.update(CarouselMessage::PointerDown(PointerInput::touch(2, 0.0)));
    carousel.update(CarouselMessage::PointerMove(PointerInput::touch(2, 0.0)));
    assert_eq!(carousel.offset(), 0.0);
    carousel.update(CarouselMessage::PointerUp(PointerInput::touch(2, 0.0)));
    assert!(carousel.drag_state().is_dragging());

    carousel.update(CarouselMessage::PointerUp(PointerInput::touch(1, 200.0)));
    assert_eq!(carousel.current_index(), 1);
}

#[test]
fn keyboard_navigates_only_from_the_region() {
    let mut carousel = finite(4);
    let effects = carousel.update(CarouselMessage::Key(KeyInput::in_region(Key::End)));
    assert!(effects.prevents_default());
    assert_eq!(carousel.current_index(), 3);

    carousel.update(CarouselMessage::Key(KeyInput::in_region(Key::ArrowLeft)));
    assert_eq!(carousel.current_index(), 2);

    let on_button = KeyInput {
        key: Key::Home,
        focus: FocusTarget::Control,
    };
    let effects = carousel.update(CarouselMessage::Key(on_button));
    assert!(!effects.prevents_default());
    assert_eq!(carousel.current_index(), 2);

    carousel.update(CarouselMessage::Key(KeyInput::in_region(Key::Home)));
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn resize_realigns_without_changing_index() {
    let mut carousel = finite(4);
    carousel.go_to(2, false);

    carousel.host_mut().set_measurement(Measurement::new(500.0, 10.0));
    let mut tickets = Vec::new();
    for _ in 0..5 {
        tickets.extend(carousel.update(CarouselMessage::Resized).scheduled());
    }
    assert_eq!(tickets.len(), 5);
    assert!(tickets.iter().all(|t| t.kind == TimerKind::ResizeSettle));
    assert_eq!(carousel.offset(), -640.0);

    for stale in &tickets[..4] {
        carousel.update(CarouselMessage::Timer(*stale));
    }
    assert_eq!(carousel.offset(), -640.0);

    carousel.update(CarouselMessage::Timer(tickets[4]));
    assert_eq!(carousel.current_index(), 2);
    assert_eq!(carousel.offset(), -1020.0);
    assert_eq!(last_frame(&carousel).transition, Transition::Immediate);
}

#[test]
fn snapping_settles_on_transition_end_or_recheck() {
    let mut carousel = finite(4);
    let effects = carousel.update(CarouselMessage::Next);
    assert_eq!(*carousel.drag_state(), DragState::Snapping { target: 1 });
    let recheck = effects
        .scheduled()
        .find(|t| t.kind == TimerKind::ControlRecheck)
        .expect("recheck scheduled");
    assert_eq!(recheck.delay, Duration::from_millis(250));

    carousel.update(CarouselMessage::TransitionEnd);
    assert_eq!(*carousel.drag_state(), DragState::Idle);

    let effects = carousel.update(CarouselMessage::Next);
    let recheck = effects.scheduled().next().expect("recheck scheduled");
    carousel.update(CarouselMessage::Timer(recheck));
    assert_eq!(*carousel.drag_state(), DragState::Idle);
}

#[test]
fn reduced_motion_never_animates() {
    let mut carousel = mount(4, CarouselSettings::default().with_reduced_motion(true));
    let effects = carousel.update(CarouselMessage::Next);
    assert!(effects.is_empty());
    assert_eq!(last_frame(&carousel).transition, Transition::Immediate);
    assert_eq!(*carousel.drag_state(), DragState::Idle);
}

#[test]
fn indicators_and_slides_follow_index() {
    let mut carousel = finite(3);
    carousel.update(CarouselMessage::Indicator(2));
    let frame = last_frame(&carousel);
    assert_eq!(frame.active_indicator(), Some(2));
    assert_eq!(frame.visible_slides().collect::<Vec<_>>(), vec![2]);
    assert_eq!(frame.slides[2].label, "Slide 3 of 3");
}

#[test]
fn missing_indicator_container_yields_no_dots() {
    let host = HeadlessHost::new(Measurement::new(100.0, 0.0));
    let mut carousel =
        Carousel::mount(Structure::new(3), host, CarouselSettings::default())
            .expect("mount");
    carousel.update(CarouselMessage::Indicator(1));
    let frame = last_frame(&carousel);
    assert!(frame.indicators.is_empty());
    assert_eq!(carousel.current_index(), 1);
}

#[test]
fn slides_per_view_limits_last_index() {
    let mut carousel = mount(5, CarouselSettings::row(3));
    assert_eq!(carousel.last_index(), 2);
    carousel.go_to(10, false);
    assert_eq!(carousel.current_index(), 2);
    let frame = last_frame(&carousel);
    assert!(frame.next_disabled);
    assert_eq!(frame.visible_slides().collect::<Vec<_>>(), vec![2, 3, 4]);
}

#[test]
fn autoplay_advances_wraps_and_pauses_on_hover() {
    let interval = Duration::from_secs(3);
    let mut carousel = mount(
        3,
        CarouselSettings::default().with_autoplay(Some(interval)),
    );
    let armed: Vec<_> = carousel.start().scheduled().collect();
    assert_eq!(armed.len(), 1);
    assert_eq!(armed[0].kind, TimerKind::Autoplay);
    assert_eq!(armed[0].delay, interval);

    let mut ticket = armed[0];
    for expected in [1, 2, 0] {
        let effects = carousel.update(CarouselMessage::Timer(ticket));
        assert_eq!(carousel.current_index(), expected);
        ticket = effects
            .scheduled()
            .find(|t| t.kind == TimerKind::Autoplay)
            .expect("autoplay re-armed");
    }

    carousel.update(CarouselMessage::HoverChanged(true));
    let effects = carousel.update(CarouselMessage::Timer(ticket));
    assert!(effects.is_empty());
    assert_eq!(carousel.current_index(), 0);

    let resumed = carousel.update(CarouselMessage::HoverChanged(false));
    assert_eq!(resumed.scheduled().count(), 1);
}

#[test]
fn autoplay_is_suppressed_under_reduced_motion() {
    let mut carousel = mount(
        3,
        CarouselSettings::default()
            .with_autoplay(Some(Duration::from_secs(2)))
            .with_reduced_motion(true),
    );
    assert!(carousel.start().is_empty());
}

#[test]
fn manual_navigation_restarts_autoplay() {
    let mut carousel = mount(
        4,
        CarouselSettings::default()
            .with_wrap(WrapMode::Finite)
            .with_autoplay(Some(Duration::from_secs(5))),
    );
    let first = carousel.start().scheduled().next().expect("armed");
    let effects = carousel.update(CarouselMessage::Next);
    assert!(effects.scheduled().any(|t| t.kind == TimerKind::Autoplay));

    carousel.update(CarouselMessage::Timer(first));
    assert_eq!(carousel.current_index(), 1, "superseded autoplay tick ignored");
}
