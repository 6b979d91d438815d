use super::*;

#[test]
fn detach_removes_whole_subtree() {
    let mut stage = Stage::new();
    let card = stage.create_container(Rgba::WHITE);
    let holder = stage
        .add_child(card, Role::ParticleHolder, Style::default())
        .unwrap();
    let p1 = stage.add_child(holder, Role::Particle, Style::default()).unwrap();
    let p2 = stage.add_child(holder, Role::Particle, Style::default()).unwrap();
    assert_eq!(stage.len(), 4);

    assert!(stage.detach(holder));
    assert!(!stage.contains(p1));
    assert!(!stage.contains(p2));
    assert!(stage.children(card).is_empty());
    assert_eq!(stage.len(), 1);

    // Idempotent.
    assert!(!stage.detach(holder));
}

#[test]
fn add_child_to_detached_parent_is_rejected() {
    let mut stage = Stage::new();
    let card = stage.create_container(Rgba::WHITE);
    stage.detach(card);
    assert!(stage.add_decoration(card, Role::RainDrop).is_none());
    assert!(stage.is_empty());
}

#[test]
fn children_with_role_keeps_insertion_order() {
    let mut stage = Stage::new();
    let card = stage.create_container(Rgba::WHITE);
    let sun = stage.add_decoration(card, Role::Sun).unwrap();
    let r1 = stage.add_decoration(card, Role::SunRay).unwrap();
    let r2 = stage.add_decoration(card, Role::SunRay).unwrap();
    assert_eq!(stage.children_with_role(card, Role::SunRay), vec![r1, r2]);
    assert_eq!(stage.children_with_role(card, Role::Sun), vec![sun]);
    assert!(stage.is_container(card));
    assert!(!stage.is_container(sun));
}

#[test]
fn property_store_rejects_kind_mismatch_and_missing_targets() {
    let mut stage = Stage::new();
    let card = stage.create_container(Rgba::WHITE);

    assert!(stage.set_property(card, Property::Scale, Value::Scalar(1.2)));
    assert_eq!(
        stage.get_property(card, Property::Scale),
        Some(Value::Scalar(1.2))
    );
    assert!(!stage.set_property(card, Property::Scale, Value::Color(Rgba::WHITE)));
    assert!(!stage.set_property(card, Property::GlowColor, Value::Scalar(1.0)));
    assert!(stage.set_property(card, Property::GlowColor, Value::Color(Rgba::BLACK)));

    stage.detach(card);
    assert!(!stage.set_property(card, Property::Opacity, Value::Scalar(0.0)));
    assert_eq!(stage.get_property(card, Property::Opacity), None);
}

#[test]
fn snapshot_serializes_nested_children() {
    let mut stage = Stage::new();
    let card = stage.create_container(Rgba::WHITE);
    stage.add_decoration(card, Role::RainDrop).unwrap();
    let snap = stage.snapshot(card).unwrap();
    assert_eq!(snap.children.len(), 1);
    let json = serde_json::to_value(&snap).unwrap();
    assert_eq!(json["role"], "container");
    assert_eq!(json["children"][0]["role"], "rain_drop");
}
