//! Leaf elements.

use std::sync::Arc;

use crate::animation::descriptor::{
    AnimationSet, ColorAnimation, CustomAnimation, OpacityAnimation, PathStop, PositionAnimation,
    PositionTarget, RotationAnimation, ScalarTarget, ScaleAnimation,
};
use crate::animation::ease::Ease;
use crate::foundation::error::{ReelgridError, ReelgridResult};
use crate::layout::grid::Anchor;
use crate::media::clip::{EffectInstance, RenderableClip};
use crate::timeline::node::{Placement, Timed, derived_finish, placed_begin};
use crate::timeline::sound::Sound;

/// A single media element on the timeline.
///
/// A tape wraps an opaque renderable clip and adds grid placement, effects,
/// animation descriptors and attached sounds. Tapes are inserted into a
/// [`Film`](crate::Film) by copy; an element with no attachments still
/// occupies time equal to its own media duration.
#[derive(Clone)]
pub struct Tape {
    /// Descriptive name for authoring/debugging.
    pub name: String,
    pub(crate) begin: f64,
    pub(crate) clip: Arc<dyn RenderableClip>,
    /// Start time is managed externally; `compose()` will not stamp it.
    pub custom_start: bool,
    /// Position is managed externally; `compose()` will not stamp a static
    /// placement when no position animation is declared.
    pub custom_position: bool,
    /// Static grid cell `(row, col)`.
    pub cell: (f64, f64),
    /// Grid span `(rows, cols)`. Carried on the model; the resolver does not
    /// consume it yet.
    pub span: (f64, f64),
    /// Static placement anchor.
    pub anchor: Anchor,
    /// Static placement pixel offset.
    pub offset: (f64, f64),
    /// Post-processing effect stack, applied in order.
    pub effects: Vec<EffectInstance>,
    /// Declared animations.
    pub animations: AnimationSet,
    pub(crate) sounds: Vec<Sound>,
}

impl Tape {
    /// Wrap a renderable clip with default placement (top-left of cell 0,0).
    pub fn new(clip: Arc<dyn RenderableClip>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            begin: 0.0,
            clip,
            custom_start: false,
            custom_position: false,
            cell: (0.0, 0.0),
            span: (1.0, 1.0),
            anchor: Anchor::TopLeft,
            offset: (0.0, 0.0),
            effects: Vec::new(),
            animations: AnimationSet::default(),
            sounds: Vec::new(),
        }
    }

    /// Set the static grid cell `(row, col)`.
    pub fn at_cell(mut self, row: f64, col: f64) -> Self {
        self.cell = (row, col);
        self
    }

    /// Set the static placement anchor.
    pub fn anchored(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Set the static placement pixel offset.
    pub fn offset_by(mut self, ox: f64, oy: f64) -> Self {
        self.offset = (ox, oy);
        self
    }

    /// Append a post-processing effect.
    pub fn with_effect(mut self, effect: EffectInstance) -> Self {
        self.effects.push(effect);
        self
    }

    /// Mark the start time as externally managed.
    pub fn custom_start(mut self) -> Self {
        self.custom_start = true;
        self
    }

    /// Mark the position as externally managed.
    pub fn custom_position(mut self) -> Self {
        self.custom_position = true;
        self
    }

    /// Declare a single-target position animation toward `cell`.
    pub fn with_position_animation(
        mut self,
        cell: (f64, f64),
        anchor: Anchor,
        offset: (f64, f64),
        duration: f64,
        start_delay: f64,
        easing: Ease,
    ) -> Self {
        self.animations.position = Some(PositionAnimation {
            target: PositionTarget::Cell {
                cell,
                anchor,
                offset,
            },
            duration,
            start_delay,
            easing,
            each: 1.0,
        });
        self
    }

    /// Declare a multi-keyframe position path.
    ///
    /// `each` is the dwell per stop and `ease_duration` the per-segment ease
    /// window. An empty path is rejected.
    pub fn with_position_path(
        mut self,
        stops: Vec<PathStop>,
        no_grid: bool,
        each: f64,
        ease_duration: f64,
        start_delay: f64,
        easing: Ease,
    ) -> ReelgridResult<Self> {
        if stops.is_empty() {
            return Err(ReelgridError::invalid_argument(
                "position path needs at least one stop",
            ));
        }
        self.animations.position = Some(PositionAnimation {
            target: PositionTarget::Path { stops, no_grid },
            duration: ease_duration,
            start_delay,
            easing,
            each,
        });
        Ok(self)
    }

    /// Declare a scale animation (recognized, not evaluated yet).
    pub fn with_scale_animation(
        mut self,
        scale: ScalarTarget,
        duration: f64,
        start_delay: f64,
        easing: Ease,
    ) -> Self {
        self.animations.scale = Some(ScaleAnimation {
            scale,
            duration,
            start_delay,
            easing,
            maintain_aspect: true,
            pivot: (0.5, 0.5),
        });
        self
    }

    /// Declare a rotation animation (recognized, not evaluated yet).
    pub fn with_rotation_animation(
        mut self,
        angles: ScalarTarget,
        duration: f64,
        start_delay: f64,
        easing: Ease,
    ) -> Self {
        self.animations.rotation = Some(RotationAnimation {
            angles,
            duration,
            start_delay,
            easing,
            pivot: (0.5, 0.5),
            use_shortest_path: true,
        });
        self
    }

    /// Declare an opacity animation (recognized, not evaluated yet).
    pub fn with_opacity_animation(
        mut self,
        opacity: ScalarTarget,
        duration: f64,
        start_delay: f64,
        easing: Ease,
    ) -> Self {
        self.animations.opacity = Some(OpacityAnimation {
            opacity,
            duration,
            start_delay,
            easing,
        });
        self
    }

    /// Declare a color animation (recognized, not evaluated yet).
    pub fn with_color_animation(mut self, color: ColorAnimation) -> Self {
        self.animations.color = Some(color);
        self
    }

    /// Declare a named custom animation (recognized, not evaluated yet).
    pub fn with_custom_animation(mut self, name: impl Into<String>, anim: CustomAnimation) -> Self {
        self.animations.custom.insert(name.into(), anim);
        self
    }

    /// Attach a sound. The sound is copied; its `begin` is computed from the
    /// placement policy over the sounds already attached.
    pub fn add_sound(&mut self, sound: &Sound, placement: Placement, start: f64) -> &mut Self {
        let mut copy = sound.clone();
        copy.begin = placed_begin(self.begin, &self.sounds, placement, start);
        self.sounds.push(copy);
        self
    }

    /// The opaque renderable media handle.
    pub fn clip(&self) -> &Arc<dyn RenderableClip> {
        &self.clip
    }

    /// Sounds attached to this tape, in insertion order.
    pub fn sounds(&self) -> &[Sound] {
        &self.sounds
    }
}

impl Timed for Tape {
    fn begin(&self) -> f64 {
        self.begin
    }

    /// The later of the child-derived finish and the clip's own extent: a
    /// tape with no attachments still occupies its media duration.
    fn finish(&self) -> f64 {
        let child_finish = derived_finish(self.begin, &self.sounds);
        let clip_finish = self.begin + self.clip.intrinsic_duration();
        child_finish.max(clip_finish)
    }

    /// A tape's lifetime is its media duration, independent of attachments.
    fn lifetime(&self) -> f64 {
        self.clip.intrinsic_duration()
    }
}

impl std::fmt::Debug for Tape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tape")
            .field("name", &self.name)
            .field("begin", &self.begin)
            .field("duration", &self.clip.intrinsic_duration())
            .field("cell", &self.cell)
            .field("anchor", &self.anchor)
            .field("effects", &self.effects.len())
            .field("animations", &self.animations.declared())
            .field("sounds", &self.sounds.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/tape.rs"]
mod tests;
