use super::*;

#[test]
fn scalar_lerp_allows_overshoot() {
    assert_eq!(f64::lerp(&0.0, &10.0, 0.5), 5.0);
    assert_eq!(f64::lerp(&0.0, &10.0, 1.2), 12.0);
}

#[test]
fn color_lerp_rounds_and_clamps() {
    let a = Rgba::new(0, 0, 0, 0.0);
    let b = Rgba::new(255, 100, 10, 1.0);
    let mid = Rgba::lerp(&a, &b, 0.5);
    assert_eq!((mid.r, mid.g, mid.b), (128, 50, 5));
    assert!((mid.a - 0.5).abs() < 1e-12);

    let over = Rgba::lerp(&a, &b, 1.5);
    assert_eq!(over.r, 255);
    assert_eq!(over.a, 1.0);
}

#[test]
fn mixed_kinds_hold_until_end() {
    let a = Value::Scalar(1.0);
    let b = Value::Color(Rgba::WHITE);
    assert_eq!(Value::lerp(&a, &b, 0.99), a);
    assert_eq!(Value::lerp(&a, &b, 1.0), b);
    assert!(!a.same_kind(b));
}

#[test]
fn property_serde_names() {
    assert_eq!(
        serde_json::to_string(&Property::GlowRadius).unwrap(),
        "\"glow_radius\""
    );
    let v: Value = serde_json::from_str("0.5").unwrap();
    assert_eq!(v, Value::Scalar(0.5));
}
