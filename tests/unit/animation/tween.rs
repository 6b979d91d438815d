use super::*;

fn tween(spec: TweenSpec) -> Tween {
    Tween::new(spec, 0.0)
}

fn scalar(v: Value) -> f64 {
    v.as_scalar().unwrap()
}

#[test]
fn final_frame_is_exactly_to() {
    let t = tween(
        TweenSpec::from_to(ElementId(1), Property::Scale, 0.05, 1.2, 0.5).with_ease(Ease::OutQuint),
    );
    let (v, done) = t.sample(0.25);
    assert!(!done);
    assert!(scalar(v) > 0.05 && scalar(v) < 1.2);

    let (v, done) = t.sample(0.5);
    assert!(done);
    assert_eq!(scalar(v), 1.2);
}

#[test]
fn yoyo_with_one_repeat_returns_to_from() {
    let t = tween(
        TweenSpec::from_to(ElementId(1), Property::GlowRadius, 40.0, 15.0, 0.8)
            .with_repeat(Repeat::Count(1))
            .with_yoyo(true),
    );
    assert_eq!(t.spec.span(), Some(1.6));
    let (mid, _) = t.sample(0.8 + 0.4);
    assert!((scalar(mid) - 27.5).abs() < 1e-9);
    let (end, done) = t.sample(1.6);
    assert!(done);
    assert_eq!(scalar(end), 40.0);
}

#[test]
fn infinite_tween_never_finishes() {
    let t = tween(
        TweenSpec::from_to(ElementId(1), Property::Y, -50.0, 300.0, 1.0)
            .with_repeat(Repeat::Infinite),
    );
    for i in 0..50 {
        let (v, done) = t.sample(f64::from(i) * 0.37);
        assert!(!done);
        assert!((-50.0..=300.0).contains(&scalar(v)));
    }
    // Wraps to the start of the next cycle.
    assert!((scalar(t.sample(2.25).0) - 37.5).abs() < 1e-9);
}

#[test]
fn zero_duration_completes_immediately() {
    let t = tween(TweenSpec::set(ElementId(1), Property::Opacity, 0.5));
    let (v, done) = t.sample(0.0);
    assert!(done);
    assert_eq!(scalar(v), 0.5);
}

#[test]
fn validate_rejects_bad_specs() {
    let ok = TweenSpec::to(ElementId(1), Property::Opacity, 1.0, 0.3);
    assert!(ok.validate().is_ok());

    assert!(ok.clone().with_delay(-1.0).validate().is_err());
    assert!(
        TweenSpec::to(ElementId(1), Property::Opacity, 1.0, f64::NAN)
            .validate()
            .is_err()
    );
    assert!(
        TweenSpec::set(ElementId(1), Property::Opacity, 1.0)
            .with_repeat(Repeat::Infinite)
            .validate()
            .is_err()
    );
    assert!(
        TweenSpec::to(ElementId(1), Property::GlowColor, 1.0, 0.3)
            .validate()
            .is_err()
    );
    assert!(
        TweenSpec::from_to(
            ElementId(1),
            Property::Scale,
            crate::foundation::core::Rgba::WHITE,
            1.0,
            0.3
        )
        .validate()
        .is_err()
    );
}
