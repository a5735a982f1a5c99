use super::*;

use crate::animation::ease::Ease;
use crate::layout::grid::Anchor;

fn position() -> PositionAnimation {
    PositionAnimation {
        target: PositionTarget::Cell {
            cell: (2.0, 3.0),
            anchor: Anchor::Center,
            offset: (0.0, 0.0),
        },
        duration: 1.0,
        start_delay: 0.0,
        easing: Ease::InQuad,
        each: 1.0,
    }
}

fn opacity() -> OpacityAnimation {
    OpacityAnimation {
        opacity: ScalarTarget::One(0.5),
        duration: 1.0,
        start_delay: 0.0,
        easing: Ease::Linear,
    }
}

#[test]
fn only_position_is_evaluated() {
    assert!(AnimationKind::Position.is_evaluated());
    for kind in [
        AnimationKind::Scale,
        AnimationKind::Rotation,
        AnimationKind::Opacity,
        AnimationKind::Color,
        AnimationKind::Custom,
    ] {
        assert!(!kind.is_evaluated(), "{kind:?} should be inert");
    }
}

#[test]
fn declared_lists_occupied_slots_in_order() {
    let mut set = AnimationSet::default();
    assert!(set.is_empty());
    assert!(set.declared().is_empty());

    set.position = Some(position());
    set.opacity = Some(opacity());
    set.custom.insert(
        "wobble".to_string(),
        CustomAnimation {
            duration: 1.0,
            start_delay: 0.0,
            easing: Ease::Linear,
            params: serde_json::json!({ "amplitude": 3 }),
        },
    );

    assert_eq!(
        set.declared(),
        vec![
            AnimationKind::Position,
            AnimationKind::Opacity,
            AnimationKind::Custom
        ]
    );
    assert_eq!(
        set.inert_declared(),
        vec![AnimationKind::Opacity, AnimationKind::Custom]
    );
}

#[test]
fn inert_kinds_are_recognized_not_dropped() {
    let mut set = AnimationSet::default();
    set.scale = Some(ScaleAnimation {
        scale: ScalarTarget::Many(vec![1.0, 2.0]),
        duration: 1.0,
        start_delay: 0.0,
        easing: Ease::OutCubic,
        maintain_aspect: true,
        pivot: (0.5, 0.5),
    });
    // The descriptor stays addressable in the model even though no evaluator
    // consumes it yet.
    assert_eq!(set.inert_declared(), vec![AnimationKind::Scale]);
    assert!(set.scale.is_some());
}

#[test]
fn descriptors_round_trip_through_serde() {
    let mut set = AnimationSet::default();
    set.position = Some(position());
    set.color = Some(ColorAnimation {
        color: vec![[255, 0, 0], [0, 0, 255]],
        duration: 2.0,
        start_delay: 0.5,
        easing: Ease::InOutSine,
        blend_mode: BlendMode::Multiply,
    });

    let json = serde_json::to_string(&set).unwrap();
    let back: AnimationSet = serde_json::from_str(&json).unwrap();
    assert_eq!(back, set);
}

#[test]
fn scalar_targets_accept_one_or_many() {
    let one: ScalarTarget = serde_json::from_str("0.5").unwrap();
    assert_eq!(one, ScalarTarget::One(0.5));
    let many: ScalarTarget = serde_json::from_str("[0.0, 1.0]").unwrap();
    assert_eq!(many, ScalarTarget::Many(vec![0.0, 1.0]));
}
