use super::*;
use crate::animation::scheduler::FxEvent;
use crate::animation::tween::Repeat;
use crate::animation::value::Property;
use crate::foundation::core::{ElementId, Rgba};
use crate::scene::stage::Stage;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

fn card() -> (Stage, ElementId) {
    let mut stage = Stage::new();
    let id = stage.create_container(Rgba::WHITE);
    (stage, id)
}

#[test]
fn negative_offset_overlaps_previous_entry() {
    let (_, c) = card();
    let mut tl = Timeline::new(0.0).unwrap();
    let a = tl
        .add(TweenSpec::to(c, Property::Opacity, 1.0, 1.0), Position::At(0.0))
        .unwrap();
    let b = tl
        .add(
            TweenSpec::to(c, Property::Scale, 1.0, 0.5),
            Position::AfterPrevious(-0.2),
        )
        .unwrap();
    assert_eq!(tl.start_time(a), Some(0.0));
    assert_eq!(tl.start_time(b), Some(0.8));
    assert!((tl.duration() - 1.3).abs() < 1e-12);
}

#[test]
fn recorded_start_timestamps_follow_offsets() {
    let (mut stage, c) = card();
    let mut sched = Scheduler::new();
    let mut tl = Timeline::new(0.0).unwrap();
    tl.add(TweenSpec::to(c, Property::Opacity, 0.0, 1.0), Position::At(0.0))
        .unwrap();
    tl.add(
        TweenSpec::to(c, Property::Scale, 2.0, 1.0),
        Position::AfterPrevious(-0.2),
    )
    .unwrap();
    tl.start(&mut sched).unwrap();

    let mut starts = Vec::new();
    for _ in 0..200 {
        for ev in sched.tick(0.01, &mut stage) {
            if let FxEvent::TweenStarted(_) = ev {
                starts.push(sched.now());
            }
        }
    }
    assert_eq!(starts.len(), 2);
    assert!(starts[0].abs() < 0.011);
    assert!((starts[1] - 0.8).abs() < 0.011);
}

#[test]
fn with_previous_shares_start() {
    let (_, c) = card();
    let mut tl = Timeline::new(0.0).unwrap();
    tl.add(
        TweenSpec::to(c, Property::Opacity, 1.0, 0.2),
        Position::At(0.3),
    )
    .unwrap();
    let b = tl
        .add(
            TweenSpec::to(c, Property::Blur, 0.0, 0.5),
            Position::WithPrevious(0.0),
        )
        .unwrap();
    assert_eq!(tl.start_time(b), Some(0.3));
}

#[test]
fn negative_resolved_start_clamps_to_zero() {
    let (_, c) = card();
    let mut tl = Timeline::new(0.0).unwrap();
    let a = tl
        .add(
            TweenSpec::to(c, Property::Opacity, 1.0, 0.2),
            Position::AfterPrevious(-0.5),
        )
        .unwrap();
    assert_eq!(tl.start_time(a), Some(0.0));
}

#[test]
fn completes_once_after_last_entry() {
    let (mut stage, c) = card();
    let mut sched = Scheduler::new();
    let mut tl = Timeline::new(0.5).unwrap();
    tl.add(TweenSpec::to(c, Property::Opacity, 1.0, 0.5), Position::At(0.0))
        .unwrap();
    tl.add(
        TweenSpec::to(c, Property::Scale, 1.2, 0.5)
            .with_repeat(Repeat::Count(1))
            .with_yoyo(true),
        Position::AfterPrevious(-0.1),
    )
    .unwrap();
    let fired = Rc::new(Cell::new(0));
    let f = fired.clone();
    tl.on_complete(move || f.set(f.get() + 1)).unwrap();
    let id = tl.start(&mut sched).unwrap();
    assert!((tl.end_time().unwrap() - 1.9).abs() < 1e-12);

    let completed_at = Rc::new(RefCell::new(Vec::new()));
    for _ in 0..300 {
        for ev in sched.tick(0.01, &mut stage) {
            if ev == FxEvent::TimelineCompleted(id) {
                completed_at.borrow_mut().push(sched.now());
            }
        }
    }
    assert_eq!(fired.get(), 1);
    let at = completed_at.borrow();
    assert_eq!(at.len(), 1);
    assert!((at[0] - 1.9).abs() < 0.011);
    assert_eq!(stage.style(c).unwrap().scale, 1.0);
    assert!(!sched.is_timeline_active(id));
}

#[test]
fn start_twice_and_add_after_start_are_rejected() {
    let (_, c) = card();
    let mut sched = Scheduler::new();
    let mut tl = Timeline::new(0.0).unwrap();
    tl.add(TweenSpec::to(c, Property::Opacity, 1.0, 0.5), Position::At(0.0))
        .unwrap();
    tl.start(&mut sched).unwrap();

    assert!(matches!(tl.start(&mut sched), Err(FxError::AlreadyStarted)));
    assert!(matches!(
        tl.add(TweenSpec::to(c, Property::Scale, 1.0, 0.5), Position::At(0.0)),
        Err(FxError::TimelineSealed)
    ));
    assert!(matches!(tl.on_complete(|| {}), Err(FxError::TimelineSealed)));
}

#[test]
fn infinite_entries_are_rejected() {
    let (_, c) = card();
    let mut tl = Timeline::new(0.0).unwrap();
    let err = tl.add(
        TweenSpec::to(c, Property::Y, 300.0, 1.0).with_repeat(Repeat::Infinite),
        Position::At(0.0),
    );
    assert!(matches!(err, Err(FxError::Validation(_))));
    assert!(tl.is_empty());
}

#[test]
fn cancel_suppresses_completion_and_is_idempotent() {
    let (mut stage, c) = card();
    let mut sched = Scheduler::new();
    let mut tl = Timeline::new(0.0).unwrap();
    tl.add(TweenSpec::to(c, Property::Opacity, 0.0, 1.0), Position::At(0.0))
        .unwrap();
    let fired = Rc::new(Cell::new(false));
    let f = fired.clone();
    tl.on_complete(move || f.set(true)).unwrap();
    tl.start(&mut sched).unwrap();

    sched.tick(0.5, &mut stage);
    assert!(tl.cancel(&mut sched));
    assert!(!tl.cancel(&mut sched));
    let events = sched.tick(1.0, &mut stage);
    assert!(events.is_empty());
    assert!(!fired.get());
    assert!((stage.style(c).unwrap().opacity - 0.5).abs() < 1e-9);
}

#[test]
fn empty_timeline_completes_after_its_delay() {
    let (mut stage, _) = card();
    let mut sched = Scheduler::new();
    let mut tl = Timeline::new(0.5).unwrap();
    let id = tl.start(&mut sched).unwrap();
    assert!(sched.tick(0.25, &mut stage).is_empty());
    assert_eq!(
        sched.tick(0.25, &mut stage),
        vec![FxEvent::TimelineCompleted(id)]
    );
}
