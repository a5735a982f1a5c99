//! Shared timing derivation and sibling-placement policies.
//!
//! Every timeline node carries an absolute `begin` and derives `finish` and
//! `lifetime` from its current children on every read — nothing is cached,
//! so there is no invalidation to get wrong. Inserting a child always clones
//! the caller's value and mutates only the copy's `begin`; the caller's
//! instance stays untouched.

use crate::foundation::error::{ReelgridError, ReelgridResult};

/// How a child is placed relative to its siblings at insertion time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// Absolute offset from the parent's origin, independent of siblings:
    /// `begin = parent.begin + start`.
    #[default]
    Compose,
    /// Back-to-back after the previous sibling plus a gap:
    /// `begin = prev.finish + start` (`start` alone for the first child).
    Concat,
    /// Parallel to the previous sibling's start:
    /// `begin = prev.begin + start` (`start` alone for the first child).
    Last,
}

impl Placement {
    /// Parse a placement policy name. An unknown name is rejected, never
    /// defaulted.
    pub fn parse(name: &str) -> ReelgridResult<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "compose" => Ok(Self::Compose),
            "concat" => Ok(Self::Concat),
            "last" => Ok(Self::Last),
            other => Err(ReelgridError::invalid_argument(format!(
                "unknown placement '{other}'; use compose, concat or last"
            ))),
        }
    }
}

impl std::str::FromStr for Placement {
    type Err = ReelgridError;

    fn from_str(s: &str) -> ReelgridResult<Self> {
        Self::parse(s)
    }
}

/// Timing surface shared by every timeline node.
pub trait Timed {
    /// Absolute start time, in seconds from the root's origin.
    fn begin(&self) -> f64;

    /// Absolute end time. Derived from current children on every call.
    fn finish(&self) -> f64;

    /// Duration from `begin` to `finish`.
    fn lifetime(&self) -> f64 {
        self.finish() - self.begin()
    }
}

/// Compute the `begin` for a child about to be inserted after `siblings`.
pub(crate) fn placed_begin<T: Timed>(
    parent_begin: f64,
    siblings: &[T],
    placement: Placement,
    start: f64,
) -> f64 {
    match placement {
        Placement::Compose => parent_begin + start,
        Placement::Concat => siblings.last().map_or(start, |prev| prev.finish() + start),
        Placement::Last => siblings.last().map_or(start, |prev| prev.begin() + start),
    }
}

/// `max(child.finish())` over `children`, or `begin` when there are none.
pub(crate) fn derived_finish<T: Timed>(begin: f64, children: &[T]) -> f64 {
    children
        .iter()
        .map(Timed::finish)
        .reduce(f64::max)
        .unwrap_or(begin)
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/node.rs"]
mod tests;
