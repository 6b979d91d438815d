use super::*;

const ALL: [Ease; 15] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::OutQuart,
    Ease::InQuint,
    Ease::OutQuint,
    Ease::InSine,
    Ease::OutSine,
    Ease::InOutSine,
    Ease::OutBack { overshoot: 1.5 },
    Ease::OutElastic {
        amplitude: 1.2,
        period: 0.5,
    },
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
        assert_eq!(ease.apply(-3.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(7.0), 1.0, "{ease:?}");
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in &ALL[..13] {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease:?}");
        assert!(b < c, "{ease:?}");
    }
}

#[test]
fn back_and_elastic_overshoot() {
    let back = Ease::OutBack { overshoot: 1.5 };
    assert!((0..100).any(|i| back.apply(f64::from(i) / 100.0) > 1.0));

    let elastic = Ease::OutElastic {
        amplitude: 1.2,
        period: 0.5,
    };
    assert!((0..100).any(|i| elastic.apply(f64::from(i) / 100.0) > 1.0));
    // Near zero the elastic curve starts continuously from 0.
    assert!(elastic.apply(1e-6).abs() < 1e-3);
}

#[test]
fn parses_named_curves() {
    assert_eq!("power4.out".parse::<Ease>().unwrap(), Ease::OutQuint);
    assert_eq!("none".parse::<Ease>().unwrap(), Ease::Linear);
    assert_eq!(
        "back.out(1.5)".parse::<Ease>().unwrap(),
        Ease::OutBack { overshoot: 1.5 }
    );
    assert_eq!(
        "elastic.out(1.2, 0.3)".parse::<Ease>().unwrap(),
        Ease::OutElastic {
            amplitude: 1.2,
            period: 0.3
        }
    );
    assert!("bounce.out".parse::<Ease>().is_err());
    assert!("back.out(1.5".parse::<Ease>().is_err());
    assert!("back.out(x)".parse::<Ease>().is_err());
}
