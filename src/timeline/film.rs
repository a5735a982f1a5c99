//! Group elements.

use crate::layout::grid::Anchor;
use crate::media::clip::EffectInstance;
use crate::timeline::node::{Placement, Timed, derived_finish, placed_begin};
use crate::timeline::tape::Tape;

/// Per-insertion attribute overrides applied to the inserted tape copy.
///
/// Every field is optional; unset fields leave the tape's own values alone.
/// Effects are appended to the tape's existing stack rather than replacing
/// it. A z-index override is stamped onto the copy's clip immediately.
#[derive(Clone, Debug, Default)]
pub struct TapeOverrides {
    /// Extra effects appended to the tape's stack.
    pub effects: Option<Vec<EffectInstance>>,
    /// Replacement grid cell `(row, col)`.
    pub cell: Option<(f64, f64)>,
    /// Replacement grid span.
    pub span: Option<(f64, f64)>,
    /// Replacement anchor.
    pub anchor: Option<Anchor>,
    /// Replacement pixel offset.
    pub offset: Option<(f64, f64)>,
    /// Layer (z-order) index stamped onto the clip.
    pub z_index: Option<i32>,
}

/// An ordered collection of tapes forming one segment of the timeline.
#[derive(Clone, Debug)]
pub struct Film {
    /// Descriptive name for authoring/debugging.
    pub name: String,
    pub(crate) begin: f64,
    pub(crate) tapes: Vec<Tape>,
}

impl Film {
    /// Create an empty film.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            begin: 0.0,
            tapes: Vec::new(),
        }
    }

    /// Insert a copy of `tape`, placing it by `placement`/`start` and applying
    /// `overrides` to the copy only. The caller's tape is untouched.
    pub fn add_tape(
        &mut self,
        tape: &Tape,
        placement: Placement,
        start: f64,
        overrides: TapeOverrides,
    ) -> &mut Self {
        let mut copy = tape.clone();
        copy.begin = placed_begin(self.begin, &self.tapes, placement, start);

        if let Some(effects) = overrides.effects {
            copy.effects.extend(effects);
        }
        if let Some(cell) = overrides.cell {
            copy.cell = cell;
        }
        if let Some(span) = overrides.span {
            copy.span = span;
        }
        if let Some(anchor) = overrides.anchor {
            copy.anchor = anchor;
        }
        if let Some(offset) = overrides.offset {
            copy.offset = offset;
        }
        if let Some(z) = overrides.z_index {
            copy.clip = copy.clip.stamp_layer(z);
        }

        self.tapes.push(copy);
        self
    }

    /// Insert copies of several tapes with the same placement and overrides.
    pub fn add_tapes(
        &mut self,
        tapes: &[Tape],
        placement: Placement,
        start: f64,
        overrides: TapeOverrides,
    ) -> &mut Self {
        for tape in tapes {
            self.add_tape(tape, placement, start, overrides.clone());
        }
        self
    }

    /// Tapes in insertion order.
    pub fn tapes(&self) -> &[Tape] {
        &self.tapes
    }

    /// Whether this film holds no tapes.
    pub fn is_empty(&self) -> bool {
        self.tapes.is_empty()
    }
}

impl Timed for Film {
    fn begin(&self) -> f64 {
        self.begin
    }

    fn finish(&self) -> f64 {
        derived_finish(self.begin, &self.tapes)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/film.rs"]
mod tests;
