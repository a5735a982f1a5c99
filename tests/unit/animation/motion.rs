use super::*;

use kurbo::Point;

use crate::animation::ease::Ease;

#[test]
fn progress_is_zero_before_the_delay_and_one_after_the_window() {
    assert_eq!(progress_at(0.0, 1.0, 0.5, Ease::Linear), 0.0);
    assert_eq!(progress_at(0.499, 1.0, 0.5, Ease::Linear), 0.0);
    assert_eq!(progress_at(1.501, 1.0, 0.5, Ease::Linear), 1.0);
    assert_eq!(progress_at(100.0, 1.0, 0.5, Ease::Linear), 1.0);
}

#[test]
fn progress_is_quantized_to_three_decimals() {
    assert_eq!(progress_at(0.6185, 1.0, 0.0, Ease::Linear), 0.618);
    // An in-window sample that quantizes to zero picks up the legacy
    // zero-weight nudge from `interpolate`.
    assert_eq!(progress_at(0.0005, 1.0, 0.0, Ease::Linear), 0.0001);
}

#[test]
fn move_between_returns_endpoints_outside_the_window() {
    let m = MoveBetween {
        from: Point::new(10.0, 20.0),
        to: Point::new(110.0, 220.0),
        duration: 2.0,
        start_delay: 1.0,
        easing: Ease::Linear,
    };
    // Exactly `from` strictly before the delay, exactly `to` strictly after.
    assert_eq!(m.at(0.999), m.from);
    assert_eq!(m.at(0.0), m.from);
    assert_eq!(m.at(3.001), m.to);
    assert_eq!(m.at(50.0), m.to);
}

#[test]
fn move_between_interpolates_on_truncated_pixels() {
    let m = MoveBetween {
        from: Point::new(0.0, 0.0),
        to: Point::new(100.0, 50.0),
        duration: 1.0,
        start_delay: 0.0,
        easing: Ease::Linear,
    };
    assert_eq!(m.at(0.5), Point::new(50.0, 25.0));
    // 0.333 quantized, then truncated to whole pixels.
    let p = m.at(0.3333);
    assert_eq!(p, Point::new(33.0, 16.0));
}

#[test]
fn move_between_applies_the_easing_curve() {
    let m = MoveBetween {
        from: Point::new(0.0, 0.0),
        to: Point::new(1000.0, 0.0),
        duration: 1.0,
        start_delay: 0.0,
        easing: Ease::InQuad,
    };
    // InQuad(0.5) = 0.25 exactly; quantization is a no-op here.
    assert_eq!(m.at(0.5), Point::new(250.0, 0.0));
}

#[test]
fn move_through_dwells_and_clamps() {
    let m = MoveThrough {
        stops: vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(200.0, 0.0),
        ],
        each: 1.0,
        ease_duration: 0.5,
        start_delay: 0.0,
        easing: Ease::Linear,
    };
    // At the origin of the first segment.
    assert_eq!(m.at(0.0), Point::new(0.0, 0.0));
    // Past the ease window, holding at the arrived stop.
    assert_eq!(m.at(0.75), Point::new(100.0, 0.0));
    // At/after the total span: clamped to the last stop.
    assert_eq!(m.at(3.0), Point::new(200.0, 0.0));
    assert_eq!(m.at(99.0), Point::new(200.0, 0.0));
}

#[test]
fn move_through_eases_within_each_segment() {
    let m = MoveThrough {
        stops: vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0)],
        each: 2.0,
        ease_duration: 1.0,
        start_delay: 0.0,
        easing: Ease::Linear,
    };
    assert_eq!(m.at(0.5), Point::new(50.0, 0.0));
    // Never extrapolates into the next segment early.
    assert_eq!(m.at(1.5), Point::new(100.0, 0.0));
}

#[test]
fn move_through_respects_the_start_delay() {
    let m = MoveThrough {
        stops: vec![Point::new(7.0, 7.0), Point::new(0.0, 0.0)],
        each: 1.0,
        ease_duration: 0.5,
        start_delay: 2.0,
        easing: Ease::Linear,
    };
    assert_eq!(m.at(0.0), Point::new(7.0, 7.0));
    assert_eq!(m.at(1.999), Point::new(7.0, 7.0));
}

#[test]
fn move_through_index_at_or_beyond_last_stop_clamps() {
    let m = MoveThrough {
        stops: vec![Point::new(0.0, 0.0), Point::new(50.0, 0.0)],
        each: 1.0,
        ease_duration: 0.25,
        start_delay: 0.0,
        easing: Ease::Linear,
    };
    // t = 1.5: segment index 1 is the final stop.
    assert_eq!(m.at(1.5), Point::new(50.0, 0.0));
}

#[test]
fn position_track_dispatches_to_its_variant() {
    let stat = PositionTrack::Static(Point::new(4.0, 2.0));
    assert_eq!(stat.at(0.0), Point::new(4.0, 2.0));
    assert_eq!(stat.at(1e9), Point::new(4.0, 2.0));

    let between = PositionTrack::Between(MoveBetween {
        from: Point::new(0.0, 0.0),
        to: Point::new(10.0, 0.0),
        duration: 1.0,
        start_delay: 0.0,
        easing: Ease::Linear,
    });
    assert_eq!(between.at(2.0), Point::new(10.0, 0.0));
}
