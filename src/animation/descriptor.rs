//! Declarative animation descriptors.
//!
//! A descriptor is pure data: what to animate, toward which target(s), over
//! what window, shaped by which easing curve. Descriptors are attached to a
//! tape and resolved once by [`Screen::compose`](crate::Screen::compose).
//!
//! Only position descriptors are evaluated today. The other kinds are
//! accepted into the model and surfaced as declared-but-inert (see
//! [`AnimationKind::is_evaluated`]) so evaluators can be added later without
//! changing the data contract.

use std::collections::BTreeMap;

use crate::animation::ease::Ease;
use crate::layout::grid::Anchor;

/// The animation kinds a tape can declare, used as a capability flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationKind {
    /// Screen-space movement. The only kind the orchestrator evaluates.
    Position,
    /// Uniform or per-axis scaling.
    Scale,
    /// Rotation about a pivot.
    Rotation,
    /// Opacity fades.
    Opacity,
    /// Color transitions.
    Color,
    /// Host-defined custom animation.
    Custom,
}

impl AnimationKind {
    /// Whether the orchestrator currently evaluates this kind at composition
    /// time. Declared kinds that are not evaluated are reported, not dropped.
    pub fn is_evaluated(self) -> bool {
        matches!(self, Self::Position)
    }
}

/// A scalar animation target: one value, or an ordered sequence of values.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum ScalarTarget {
    /// Single target value.
    One(f64),
    /// Ordered keyframe sequence.
    Many(Vec<f64>),
}

/// One stop on a multi-keyframe position path.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PathStop {
    /// Grid cell `(row, col)` — or raw pixels `(x, y)` when the path bypasses
    /// the grid.
    pub at: (f64, f64),
    /// Anchor used when resolving this stop through the grid.
    #[serde(default)]
    pub anchor: Anchor,
    /// Pixel offset used when resolving this stop through the grid.
    #[serde(default)]
    pub offset: (f64, f64),
}

impl PathStop {
    /// A stop at a grid cell with the default anchor and no offset.
    pub fn cell(row: f64, col: f64) -> Self {
        Self {
            at: (row, col),
            anchor: Anchor::default(),
            offset: (0.0, 0.0),
        }
    }
}

/// Where a position animation moves the element.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum PositionTarget {
    /// Single destination cell; the element eases from its static placement
    /// to this one.
    Cell {
        /// Destination grid cell `(row, col)`.
        cell: (f64, f64),
        /// Anchor for resolving the destination.
        anchor: Anchor,
        /// Pixel offset for resolving the destination.
        offset: (f64, f64),
    },
    /// Ordered multi-keyframe path, visited sequentially with a fixed dwell.
    Path {
        /// Stops visited in order.
        stops: Vec<PathStop>,
        /// Treat stop values as raw pixel coordinates, bypassing the grid.
        no_grid: bool,
    },
}

/// Descriptor for screen-space movement.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PositionAnimation {
    /// Destination (single target) or path (multi-keyframe).
    pub target: PositionTarget,
    /// Easing window in seconds: the whole move for a single target, the
    /// per-segment ease for a path.
    pub duration: f64,
    /// Delay before the animation starts, in seconds.
    pub start_delay: f64,
    /// Easing curve shaping the motion.
    pub easing: Ease,
    /// Dwell time per stop for multi-keyframe paths, in seconds.
    pub each: f64,
}

/// Descriptor for scaling. Declared but not evaluated yet.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScaleAnimation {
    /// Target scale factor(s).
    pub scale: ScalarTarget,
    /// Animation duration in seconds.
    pub duration: f64,
    /// Delay before the animation starts, in seconds.
    pub start_delay: f64,
    /// Easing curve.
    pub easing: Ease,
    /// Keep the aspect ratio while scaling.
    pub maintain_aspect: bool,
    /// Pivot point in relative coordinates `0..1`.
    pub pivot: (f64, f64),
}

/// Descriptor for rotation. Declared but not evaluated yet.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RotationAnimation {
    /// Target angle(s) in degrees.
    pub angles: ScalarTarget,
    /// Animation duration in seconds.
    pub duration: f64,
    /// Delay before the animation starts, in seconds.
    pub start_delay: f64,
    /// Easing curve.
    pub easing: Ease,
    /// Pivot point in relative coordinates `0..1`.
    pub pivot: (f64, f64),
    /// Rotate along the shortest arc.
    pub use_shortest_path: bool,
}

/// Descriptor for opacity fades. Declared but not evaluated yet.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OpacityAnimation {
    /// Target opacity value(s) in `0..1`.
    pub opacity: ScalarTarget,
    /// Animation duration in seconds.
    pub duration: f64,
    /// Delay before the animation starts, in seconds.
    pub start_delay: f64,
    /// Easing curve.
    pub easing: Ease,
}

/// Blend mode used by color transitions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlendMode {
    /// Multiply the target color over the source.
    #[default]
    Multiply,
    /// Replace the source color.
    Normal,
}

/// Descriptor for color transitions. Declared but not evaluated yet.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ColorAnimation {
    /// Target color(s) as straight RGB8.
    pub color: Vec<[u8; 3]>,
    /// Animation duration in seconds.
    pub duration: f64,
    /// Delay before the animation starts, in seconds.
    pub start_delay: f64,
    /// Easing curve.
    pub easing: Ease,
    /// Blend mode for the transition.
    pub blend_mode: BlendMode,
}

/// Descriptor for a host-defined animation. Declared but not evaluated yet.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CustomAnimation {
    /// Animation duration in seconds.
    pub duration: f64,
    /// Delay before the animation starts, in seconds.
    pub start_delay: f64,
    /// Easing curve.
    pub easing: Ease,
    /// Open payload interpreted by the host.
    #[serde(default)]
    pub params: serde_json::Value,
}

/// The animations attached to a tape: one optional slot per kind, plus a
/// named map of custom descriptors. At most one descriptor can occupy a slot,
/// so two animations of the same kind never layer on one element.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationSet {
    /// Position slot.
    pub position: Option<PositionAnimation>,
    /// Scale slot.
    pub scale: Option<ScaleAnimation>,
    /// Rotation slot.
    pub rotation: Option<RotationAnimation>,
    /// Opacity slot.
    pub opacity: Option<OpacityAnimation>,
    /// Color slot.
    pub color: Option<ColorAnimation>,
    /// Named custom descriptors.
    pub custom: BTreeMap<String, CustomAnimation>,
}

impl AnimationSet {
    /// The kinds this set declares, in slot order.
    pub fn declared(&self) -> Vec<AnimationKind> {
        let mut kinds = Vec::new();
        if self.position.is_some() {
            kinds.push(AnimationKind::Position);
        }
        if self.scale.is_some() {
            kinds.push(AnimationKind::Scale);
        }
        if self.rotation.is_some() {
            kinds.push(AnimationKind::Rotation);
        }
        if self.opacity.is_some() {
            kinds.push(AnimationKind::Opacity);
        }
        if self.color.is_some() {
            kinds.push(AnimationKind::Color);
        }
        if !self.custom.is_empty() {
            kinds.push(AnimationKind::Custom);
        }
        kinds
    }

    /// Declared kinds the orchestrator will not evaluate.
    pub fn inert_declared(&self) -> Vec<AnimationKind> {
        self.declared()
            .into_iter()
            .filter(|k| !k.is_evaluated())
            .collect()
    }

    /// Whether no animation of any kind is declared.
    pub fn is_empty(&self) -> bool {
        self.declared().is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/descriptor.rs"]
mod tests;
