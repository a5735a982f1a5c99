//! Root element and the composition orchestrator.

use std::sync::Arc;

use kurbo::Point;

use crate::animation::descriptor::{PositionAnimation, PositionTarget};
use crate::animation::motion::{MoveBetween, MoveThrough, PositionTrack};
use crate::foundation::error::{ReelgridError, ReelgridResult};
use crate::layout::grid::GridSystem;
use crate::media::clip::{AudioClip, RenderableClip};
use crate::timeline::film::Film;
use crate::timeline::node::{Placement, Timed, derived_finish, placed_begin};
use crate::timeline::sound::Sound;
use crate::timeline::tape::Tape;

/// The orchestrator's sole output: stamped clip handles in tree order, ready
/// for an external compositor. Immutable once produced.
pub struct ResolvedComposition {
    /// Total composition duration in seconds (the root's derived finish).
    pub duration: f64,
    /// Stamped renderable clips, backdrop first, then tapes in tree order.
    pub video: Vec<Arc<dyn RenderableClip>>,
    /// Stamped audio clips: attached sounds and intrinsic tracks in tree
    /// order, background music last.
    pub audio: Vec<Arc<dyn AudioClip>>,
}

impl std::fmt::Debug for ResolvedComposition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedComposition")
            .field("duration", &self.duration)
            .field("video", &self.video.len())
            .field("audio", &self.audio.len())
            .finish()
    }
}

/// The top-level scene: screen geometry, frame rate, background, and the
/// films that make up the timeline.
///
/// A screen moves through three states: empty, built (at least one film) and
/// composed ([`Screen::compose`] succeeded). Render-facing queries are only
/// valid once composed and reject with [`ReelgridError::NotReady`] otherwise;
/// nothing is recomputed lazily.
#[derive(Clone)]
pub struct Screen {
    /// Descriptive name for authoring/debugging.
    pub name: String,
    /// Screen dimensions `(width, height)` in pixels.
    pub size: (u32, u32),
    /// Frame rate handed to the compositor.
    pub fps: u32,
    /// Background color as straight RGB8.
    pub background_color: [u8; 3],
    grid: GridSystem,
    backdrop: Option<Arc<dyn RenderableClip>>,
    background_music: Option<Sound>,
    films: Vec<Film>,
    resolved: Option<Arc<ResolvedComposition>>,
}

impl Screen {
    /// Create an empty screen.
    pub fn new(size: (u32, u32), fps: u32, background_color: [u8; 3], name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            fps,
            background_color,
            grid: GridSystem::new((f64::from(size.0), f64::from(size.1))),
            backdrop: None,
            background_music: None,
            films: Vec::new(),
            resolved: None,
        }
    }

    /// Set a backdrop clip; `compose()` stretches it to the full duration and
    /// places it first in the video list.
    pub fn with_backdrop(mut self, clip: Arc<dyn RenderableClip>) -> Self {
        self.backdrop = Some(clip);
        self
    }

    /// The grid resolver for this screen's size.
    pub fn grid(&self) -> GridSystem {
        self.grid
    }

    /// Films in insertion order.
    pub fn films(&self) -> &[Film] {
        &self.films
    }

    /// Insert a copy of `film`. An empty film is rejected and the screen is
    /// left unchanged.
    pub fn add_film(
        &mut self,
        film: &Film,
        placement: Placement,
        start: f64,
    ) -> ReelgridResult<&mut Self> {
        if film.is_empty() {
            return Err(ReelgridError::precondition(
                "film must have at least one tape",
            ));
        }
        let mut copy = film.clone();
        copy.begin = placed_begin(self.begin(), &self.films, placement, start);
        self.films.push(copy);
        Ok(self)
    }

    /// Set background music from a copy of `sound`, with optional fades and a
    /// source start offset.
    pub fn add_background_music(
        &mut self,
        sound: &Sound,
        fade_in: Option<f64>,
        fade_out: Option<f64>,
        start_offset: f64,
    ) -> &mut Self {
        let mut copy = sound.clone();
        copy.fade_in = fade_in;
        copy.fade_out = fade_out;
        copy.start_offset = Some(start_offset);
        self.background_music = Some(copy);
        self
    }

    /// Resolve the whole tree into stamped clip handles in a single pass.
    ///
    /// For each tape, in tree order: resolve its position (static grid
    /// placement, single-target movement, or multi-keyframe path), apply its
    /// effect stack, stamp its start time unless externally managed, and
    /// collect its attached sounds and intrinsic audio track. Background
    /// music is folded in last, windowed to the composition duration.
    ///
    /// The result is cached; later queries read the cache and never
    /// recompute.
    #[tracing::instrument(skip(self), fields(screen = %self.name))]
    pub fn compose(&mut self) -> ReelgridResult<&ResolvedComposition> {
        if self.films.is_empty() {
            return Err(ReelgridError::precondition(
                "screen must have at least one film",
            ));
        }

        let duration = self.finish();
        let mut video: Vec<Arc<dyn RenderableClip>> = Vec::new();
        let mut audio: Vec<Arc<dyn AudioClip>> = Vec::new();

        if let Some(backdrop) = &self.backdrop {
            video.push(backdrop.stamp_duration(duration));
        }

        for film in &self.films {
            for tape in film.tapes() {
                for kind in tape.animations.inert_declared() {
                    tracing::debug!(
                        tape = %tape.name,
                        ?kind,
                        "declared animation kind is recognized but not evaluated"
                    );
                }

                let mut clip = Arc::clone(tape.clip());

                if let Some(anim) = &tape.animations.position {
                    let track = resolve_position(self.grid, tape, anim)?;
                    clip = clip.stamp_position(track);
                } else if !tape.custom_position {
                    let coord =
                        self.grid
                            .coords(clip.intrinsic_size(), tape.cell, tape.anchor, tape.offset);
                    clip = clip.stamp_position(PositionTrack::Static(coord));
                }

                if !tape.effects.is_empty() {
                    clip = clip.stamp_effects(&tape.effects);
                }
                if !tape.custom_start {
                    clip = clip.stamp_start(tape.begin());
                }
                tracing::debug!(tape = %tape.name, begin = tape.begin(), "resolved tape");
                video.push(clip);

                for sound in tape.sounds() {
                    let mut stamped = sound.clip().stamp_start(tape.begin() + sound.begin());
                    if sound.adjust_to_parent {
                        stamped = stamped.stamp_duration(tape.lifetime());
                    }
                    if sound.fade_in.is_some() || sound.fade_out.is_some() {
                        stamped = stamped.stamp_fades(sound.fade_in, sound.fade_out);
                    }
                    audio.push(stamped);
                }

                if let Some(intrinsic) = tape.clip().intrinsic_audio() {
                    audio.push(intrinsic.stamp_start(tape.begin()));
                }
            }
        }

        if let Some(music) = &self.background_music {
            let offset = music.start_offset.unwrap_or(0.0);
            let mut stamped = music
                .clip()
                .subclip(offset, duration + offset)
                .stamp_start(0.0);
            if music.fade_in.is_some() || music.fade_out.is_some() {
                stamped = stamped.stamp_fades(music.fade_in, music.fade_out);
            }
            audio.push(stamped);
        }

        self.resolved = Some(Arc::new(ResolvedComposition {
            duration,
            video,
            audio,
        }));
        self.resolved()
    }

    /// The cached resolved composition. Rejects with `NotReady` until
    /// [`Screen::compose`] has succeeded.
    pub fn resolved(&self) -> ReelgridResult<&ResolvedComposition> {
        self.resolved
            .as_deref()
            .ok_or_else(|| ReelgridError::not_ready("screen must be prepared with compose() first"))
    }

    /// Total composition duration in seconds. Rejects with `NotReady` until
    /// [`Screen::compose`] has succeeded.
    pub fn total_duration(&self) -> ReelgridResult<f64> {
        Ok(self.resolved()?.duration)
    }

    /// Whether `compose()` has succeeded on this screen.
    pub fn is_composed(&self) -> bool {
        self.resolved.is_some()
    }
}

impl Timed for Screen {
    fn begin(&self) -> f64 {
        0.0
    }

    fn finish(&self) -> f64 {
        derived_finish(self.begin(), &self.films)
    }
}

impl std::fmt::Debug for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Screen")
            .field("name", &self.name)
            .field("size", &self.size)
            .field("fps", &self.fps)
            .field("films", &self.films.len())
            .field("composed", &self.is_composed())
            .finish()
    }
}

/// Resolve a declared position animation into a stamped track, mapping grid
/// targets through the resolver with the clip's intrinsic size.
fn resolve_position(
    grid: GridSystem,
    tape: &Tape,
    anim: &PositionAnimation,
) -> ReelgridResult<PositionTrack> {
    let size = tape.clip().intrinsic_size();
    match &anim.target {
        PositionTarget::Cell {
            cell,
            anchor,
            offset,
        } => {
            let from = grid.coords(size, tape.cell, tape.anchor, tape.offset);
            let to = grid.coords(size, *cell, *anchor, *offset);
            Ok(PositionTrack::Between(MoveBetween {
                from,
                to,
                duration: anim.duration,
                start_delay: anim.start_delay,
                easing: anim.easing,
            }))
        }
        PositionTarget::Path { stops, no_grid } => {
            if stops.is_empty() {
                return Err(ReelgridError::invalid_argument(
                    "position path needs at least one stop",
                ));
            }
            let points: Vec<Point> = if *no_grid {
                stops.iter().map(|s| Point::new(s.at.0, s.at.1)).collect()
            } else {
                stops
                    .iter()
                    .map(|s| grid.coords(size, s.at, s.anchor, s.offset))
                    .collect()
            };
            Ok(PositionTrack::Through(MoveThrough {
                stops: points,
                each: anim.each,
                ease_duration: anim.duration,
                start_delay: anim.start_delay,
                easing: anim.easing,
            }))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/screen.rs"]
mod tests;
