//! Time-domain evaluation of position animations.
//!
//! The evaluator is a pair of data-carrying parameter bundles with a pure
//! `at(t)` sample function — no captured closures, no hidden state. Easing
//! output is quantized to three decimals before interpolation so repeated
//! samples of the same instant agree bit-for-bit, and interpolated pixel
//! coordinates are truncated to whole pixels.

use kurbo::Point;

use crate::animation::ease::Ease;
use crate::foundation::math::{interpolate, quantize_progress};

/// Normalized, eased, quantized progress of an animation window at time `t`.
///
/// Returns `0` before `start_delay`, `1` once `t - start_delay` exceeds
/// `duration`, and the quantized easing sample in between.
pub fn progress_at(t: f64, duration: f64, start_delay: f64, easing: Ease) -> f64 {
    if t < start_delay {
        0.0
    } else if (t - start_delay) > duration {
        1.0
    } else {
        let normalized = (t - start_delay) / duration;
        let weight = quantize_progress(easing.apply(normalized));
        interpolate(0.0, 1.0, weight)
    }
}

/// Single-target movement between two resolved screen positions.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MoveBetween {
    /// Position before the animation starts.
    pub from: Point,
    /// Position once the animation completes.
    pub to: Point,
    /// Easing window in seconds.
    pub duration: f64,
    /// Delay before the movement starts, in seconds.
    pub start_delay: f64,
    /// Easing curve shaping the movement.
    pub easing: Ease,
}

impl MoveBetween {
    /// Sample the position at time `t` (seconds from clip start).
    ///
    /// Exactly `from` before the delay and exactly `to` after the window;
    /// in between, per-axis interpolation on the quantized easing weight,
    /// truncated to whole pixels.
    pub fn at(&self, t: f64) -> Point {
        if t < self.start_delay {
            return self.from;
        }
        if (t - self.start_delay) > self.duration {
            return self.to;
        }
        let normalized = (t - self.start_delay) / self.duration;
        let weight = quantize_progress(self.easing.apply(normalized));
        Point::new(
            trunc_px(interpolate(self.from.x, self.to.x, weight)),
            trunc_px(interpolate(self.from.y, self.to.y, weight)),
        )
    }
}

/// Sequential movement through an ordered list of resolved screen positions.
///
/// The element dwells `each` seconds per stop; within the first
/// `ease_duration` seconds of a segment it eases toward the next stop, then
/// holds there for the rest of the dwell. It never extrapolates into the
/// following segment early.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MoveThrough {
    /// Stops visited in order.
    pub stops: Vec<Point>,
    /// Dwell time per stop, in seconds. Total span is `stops.len() * each`.
    pub each: f64,
    /// Ease window at the head of each segment, in seconds.
    pub ease_duration: f64,
    /// Delay before the first movement, in seconds.
    pub start_delay: f64,
    /// Easing curve shaping each segment.
    pub easing: Ease,
}

impl MoveThrough {
    /// Sample the position at time `t` (seconds from clip start).
    pub fn at(&self, t: f64) -> Point {
        let Some(&first) = self.stops.first() else {
            return Point::ZERO;
        };
        let last = self.stops[self.stops.len() - 1];
        let duration = self.stops.len() as f64 * self.each;

        if t < self.start_delay {
            return first;
        }
        let t = t - self.start_delay;
        if t >= duration {
            return last;
        }

        let index = (t / self.each) as usize;
        if index >= self.stops.len() - 1 {
            return last;
        }

        let segment_time = t - index as f64 * self.each;
        if segment_time <= self.ease_duration {
            let weight = quantize_progress(self.easing.apply(segment_time / self.ease_duration));
            let (a, b) = (self.stops[index], self.stops[index + 1]);
            Point::new(
                trunc_px(interpolate(a.x, b.x, weight)),
                trunc_px(interpolate(a.y, b.y, weight)),
            )
        } else {
            // Past the ease window: hold at the arrived stop.
            self.stops[index + 1]
        }
    }
}

/// A fully resolved position over time, ready to stamp onto a clip.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum PositionTrack {
    /// Fixed position for the clip's whole life.
    Static(Point),
    /// Single-target animated movement.
    Between(MoveBetween),
    /// Multi-keyframe animated movement.
    Through(MoveThrough),
}

impl PositionTrack {
    /// Sample the track at time `t` (seconds from clip start).
    pub fn at(&self, t: f64) -> Point {
        match self {
            Self::Static(p) => *p,
            Self::Between(m) => m.at(t),
            Self::Through(m) => m.at(t),
        }
    }
}

fn trunc_px(v: f64) -> f64 {
    v.trunc()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/motion.rs"]
mod tests;
