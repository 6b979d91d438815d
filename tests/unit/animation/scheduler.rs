use super::*;
use crate::animation::tween::Repeat;
use crate::animation::value::{Property, Value};
use crate::foundation::core::Rgba;
use crate::scene::stage::Stage;
use std::cell::Cell;
use std::rc::Rc;

fn counter() -> (Rc<Cell<u32>>, impl FnOnce() + 'static) {
    let c = Rc::new(Cell::new(0));
    let c2 = c.clone();
    (c, move || c2.set(c2.get() + 1))
}

fn opacity(stage: &Stage, id: crate::foundation::core::ElementId) -> f64 {
    stage.style(id).unwrap().opacity
}

#[test]
fn idle_scheduler_does_not_advance() {
    let mut stage = Stage::new();
    let mut sched = Scheduler::new();
    assert!(!sched.is_running());
    assert!(sched.tick(1.0, &mut stage).is_empty());
    assert_eq!(sched.now(), 0.0);
    assert_eq!(sched.frames(), 0);
}

#[test]
fn tween_reaches_to_at_delay_plus_duration() {
    let mut stage = Stage::new();
    let card = stage.create_container(Rgba::WHITE);
    let mut sched = Scheduler::new();

    let (completed, on_complete) = counter();
    let id = sched
        .start_tween(
            TweenSpec::from_to(card, Property::Opacity, 0.0, 1.0, 0.5).with_delay(0.25),
            TweenOptions::default().on_complete(on_complete),
        )
        .unwrap();

    // Delay: nothing written yet.
    let events = sched.tick(0.125, &mut stage);
    assert!(events.is_empty());
    assert_eq!(opacity(&stage, card), 1.0);

    let events = sched.tick(0.125, &mut stage);
    assert_eq!(events, vec![FxEvent::TweenStarted(id)]);
    assert_eq!(opacity(&stage, card), 0.0);

    let events = sched.tick(0.5, &mut stage);
    assert_eq!(events, vec![FxEvent::TweenCompleted(id)]);
    assert_eq!(opacity(&stage, card), 1.0);
    assert_eq!(completed.get(), 1);
    assert!(!sched.is_running());

    // Late cancel after natural completion is a no-op and never re-fires.
    assert!(!sched.cancel(id));
    sched.tick(1.0, &mut stage);
    assert_eq!(completed.get(), 1);
}

#[test]
fn small_frames_still_land_exactly_on_to() {
    let mut stage = Stage::new();
    let card = stage.create_container(Rgba::WHITE);
    let mut sched = Scheduler::new();
    sched
        .start_tween(
            TweenSpec::from_to(card, Property::Scale, 0.05, 1.2, 0.5),
            TweenOptions::default(),
        )
        .unwrap();
    for _ in 0..30 {
        sched.tick(1.0 / 60.0, &mut stage);
    }
    assert_eq!(stage.style(card).unwrap().scale, 1.2);
    assert!(!sched.is_running());
}

#[test]
fn cancel_before_completion_stops_writes_and_suppresses_callback() {
    let mut stage = Stage::new();
    let card = stage.create_container(Rgba::WHITE);
    let mut sched = Scheduler::new();

    let (completed, on_complete) = counter();
    let id = sched
        .start_tween(
            TweenSpec::from_to(card, Property::Opacity, 0.0, 1.0, 1.0),
            TweenOptions::default().on_complete(on_complete),
        )
        .unwrap();
    sched.tick(0.5, &mut stage);
    let mid = opacity(&stage, card);
    assert!((mid - 0.5).abs() < 1e-9);

    assert!(sched.cancel(id));
    assert!(!sched.cancel(id));
    sched.tick(1.0, &mut stage);
    assert_eq!(opacity(&stage, card), mid);
    assert_eq!(completed.get(), 0);
}

#[test]
fn from_is_read_when_tween_first_applies() {
    let mut stage = Stage::new();
    let card = stage.create_container(Rgba::WHITE);
    let mut sched = Scheduler::new();
    sched
        .start_tween(
            TweenSpec::to(card, Property::Scale, 2.0, 1.0).with_delay(1.0),
            TweenOptions::default(),
        )
        .unwrap();
    // Changed after registration, before the tween starts.
    stage.style_mut(card).unwrap().scale = 1.5;
    sched.tick(1.0, &mut stage);
    assert_eq!(stage.style(card).unwrap().scale, 1.5);
    sched.tick(0.5, &mut stage);
    assert!((stage.style(card).unwrap().scale - 1.75).abs() < 1e-9);
}

#[test]
fn on_start_fires_once() {
    let mut stage = Stage::new();
    let card = stage.create_container(Rgba::WHITE);
    let mut sched = Scheduler::new();
    let (started, on_start) = counter();
    sched
        .start_tween(
            TweenSpec::to(card, Property::X, 10.0, 1.0),
            TweenOptions::default().on_start(on_start),
        )
        .unwrap();
    for _ in 0..5 {
        sched.tick(0.1, &mut stage);
    }
    assert_eq!(started.get(), 1);
}

#[test]
fn infinite_tween_keeps_running_until_cancelled() {
    let mut stage = Stage::new();
    let card = stage.create_container(Rgba::WHITE);
    let mut sched = Scheduler::new();
    let id = sched
        .start_tween(
            TweenSpec::from_to(card, Property::Y, -50.0, 300.0, 0.7).with_repeat(Repeat::Infinite),
            TweenOptions::default(),
        )
        .unwrap();
    for _ in 0..600 {
        let events = sched.tick(1.0 / 60.0, &mut stage);
        assert!(!events.contains(&FxEvent::TweenCompleted(id)));
    }
    assert!(sched.is_active(id));
    assert!(sched.cancel(id));
    let frozen = stage.style(card).unwrap().y;
    sched.tick(0.1, &mut stage);
    assert_eq!(stage.style(card).unwrap().y, frozen);
}

#[test]
fn last_registered_write_wins_on_conflict() {
    let mut stage = Stage::new();
    let card = stage.create_container(Rgba::WHITE);
    let mut sched = Scheduler::new();
    sched
        .start_tween(
            TweenSpec::from_to(card, Property::Opacity, 0.0, 1.0, 1.0),
            TweenOptions::default(),
        )
        .unwrap();
    sched
        .start_tween(
            TweenSpec::from_to(card, Property::Opacity, 0.0, 0.5, 1.0),
            TweenOptions::default(),
        )
        .unwrap();
    sched.tick(1.0, &mut stage);
    assert_eq!(opacity(&stage, card), 0.5);
}

#[test]
fn timer_fires_after_delay() {
    let mut stage = Stage::new();
    let mut sched = Scheduler::new();
    let (fired, f) = counter();
    let id = sched.start_timer_with(1.0, f).unwrap();
    assert!(sched.tick(0.5, &mut stage).is_empty());
    assert_eq!(sched.tick(0.5, &mut stage), vec![FxEvent::TimerFired(id)]);
    assert_eq!(fired.get(), 1);
    assert!(sched.start_timer(-1.0).is_err());
}

#[test]
fn detached_target_is_silently_ignored() {
    let mut stage = Stage::new();
    let card = stage.create_container(Rgba::WHITE);
    stage.detach(card);
    let mut sched = Scheduler::new();
    let id = sched
        .start_tween(
            TweenSpec::to(card, Property::GlowColor, Value::Color(Rgba::BLACK), 0.2),
            TweenOptions::default(),
        )
        .unwrap();
    let events = sched.tick(0.2, &mut stage);
    assert_eq!(
        events,
        vec![FxEvent::TweenStarted(id), FxEvent::TweenCompleted(id)]
    );
}

#[test]
fn looping_tween_on_detached_target_is_dropped() {
    let mut stage = Stage::new();
    let card = stage.create_container(Rgba::WHITE);
    let drop = stage
        .add_decoration(card, crate::scene::stage::Role::RainDrop)
        .unwrap();
    let mut sched = Scheduler::new();
    let (completed, on_complete) = counter();
    let id = sched
        .start_tween(
            TweenSpec::from_to(drop, Property::Y, -50.0, 300.0, 0.7).with_repeat(Repeat::Infinite),
            TweenOptions::default().on_complete(on_complete),
        )
        .unwrap();
    sched.tick(0.1, &mut stage);
    assert!(sched.is_active(id));

    stage.detach(card);
    let events = sched.tick(0.1, &mut stage);
    assert!(events.is_empty());
    assert!(!sched.is_running());
    assert_eq!(completed.get(), 0);

    let before = sched.now();
    sched.tick(0.1, &mut stage);
    assert_eq!(sched.now(), before);
}

#[test]
fn invalid_spec_is_rejected_at_registration() {
    let mut sched = Scheduler::new();
    let err = sched.start_tween(
        TweenSpec::to(
            crate::foundation::core::ElementId(1),
            Property::Opacity,
            1.0,
            -0.5,
        ),
        TweenOptions::default(),
    );
    assert!(err.is_err());
    assert!(!sched.is_running());
}
