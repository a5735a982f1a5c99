//! Reelgrid is a declarative timeline-composition and animation-evaluation
//! engine.
//!
//! Clients build a tree of timed elements — a [`Screen`] holding [`Film`]s
//! holding [`Tape`]s with attached [`Sound`]s — attach declarative animation
//! descriptors, and call [`Screen::compose`] to resolve, in one pass, the
//! concrete screen-space placement and timing of every element. The output is
//! a list of stamped clip handles for an external compositor; reelgrid never
//! decodes, renders or encodes media itself.
//!
//! # Pipeline overview
//!
//! 1. **Build**: construct tapes/films and insert them (by copy) under one of
//!    three sibling-placement policies ([`Placement`]).
//! 2. **Compose**: a single orchestrator pass resolves grid placement
//!    ([`GridSystem`]), samples easing curves ([`Ease`]) into position tracks
//!    ([`PositionTrack`]), and stamps start times, effects and audio.
//! 3. **Hand off**: the cached [`ResolvedComposition`] is consumed read-only
//!    by the host's rendering backend through the [`RenderableClip`] and
//!    [`AudioClip`] capabilities.
//!
//! The core is single-threaded, synchronous and side-effect-free apart from
//! the `begin` assignment at insertion and the one `compose()` transition.
//! Evaluation primitives are pure functions of time with no hidden state.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod foundation;
mod layout;
mod media;
mod timeline;

pub use animation::descriptor::{
    AnimationKind, AnimationSet, BlendMode, ColorAnimation, CustomAnimation, OpacityAnimation,
    PathStop, PositionAnimation, PositionTarget, RotationAnimation, ScalarTarget, ScaleAnimation,
};
pub use animation::ease::Ease;
pub use animation::motion::{MoveBetween, MoveThrough, PositionTrack, progress_at};
pub use foundation::error::{ReelgridError, ReelgridResult};
pub use foundation::math::{interpolate, invert_easing, quantize_progress};
pub use layout::grid::{Anchor, GRID_DIVISIONS, GridSystem};
pub use media::clip::{AudioClip, EffectInstance, RenderableClip};
pub use timeline::film::{Film, TapeOverrides};
pub use timeline::node::{Placement, Timed};
pub use timeline::screen::{ResolvedComposition, Screen};
pub use timeline::sound::Sound;
pub use timeline::tape::Tape;
