//! Opaque media capabilities consumed by the orchestrator.
//!
//! reelgrid never decodes, composites or encodes media. The only things the
//! core asks of a clip are its intrinsic duration and size, and the ability to
//! stamp resolved placement/timing/effect data onto it. Implementations live
//! in the host's rendering backend; every stamp returns a new handle and
//! existing handles are never mutated.

use std::sync::Arc;

use crate::animation::motion::PositionTrack;

/// A renderable (visual) clip capability.
pub trait RenderableClip: Send + Sync {
    /// Length of the clip's own media, in seconds.
    fn intrinsic_duration(&self) -> f64;

    /// Intrinsic pixel size `(width, height)`.
    fn intrinsic_size(&self) -> (f64, f64);

    /// Return a new handle with the resolved position track applied.
    fn stamp_position(&self, position: PositionTrack) -> Arc<dyn RenderableClip>;

    /// Return a new handle with playback start time `t` (timeline seconds).
    fn stamp_start(&self, t: f64) -> Arc<dyn RenderableClip>;

    /// Return a new handle with its on-screen duration overridden.
    fn stamp_duration(&self, duration: f64) -> Arc<dyn RenderableClip>;

    /// Return a new handle with the post-processing effect list applied.
    fn stamp_effects(&self, effects: &[EffectInstance]) -> Arc<dyn RenderableClip>;

    /// Return a new handle with an explicit layer (z-order) index.
    fn stamp_layer(&self, z_index: i32) -> Arc<dyn RenderableClip>;

    /// The clip's own embedded audio track, if it has one.
    fn intrinsic_audio(&self) -> Option<Arc<dyn AudioClip>>;
}

/// An audio clip capability, mirroring [`RenderableClip`] for the audio side.
pub trait AudioClip: Send + Sync {
    /// Length of the clip's own media, in seconds.
    fn intrinsic_duration(&self) -> f64;

    /// Return a new handle windowed to `[start, end)` source seconds.
    fn subclip(&self, start: f64, end: f64) -> Arc<dyn AudioClip>;

    /// Return a new handle with playback start time `t` (timeline seconds).
    fn stamp_start(&self, t: f64) -> Arc<dyn AudioClip>;

    /// Return a new handle with its playback duration overridden.
    fn stamp_duration(&self, duration: f64) -> Arc<dyn AudioClip>;

    /// Return a new handle with fade-in/fade-out durations applied.
    fn stamp_fades(&self, fade_in: Option<f64>, fade_out: Option<f64>) -> Arc<dyn AudioClip>;
}

/// One post-processing effect in a clip's effect stack.
///
/// Effects are opaque to the core: `kind` is a backend-defined identifier and
/// `params` an open JSON payload, forwarded untouched to the compositor.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EffectInstance {
    /// Canonical effect kind identifier (e.g. `"blur"`).
    pub kind: String,
    /// Raw effect parameters.
    #[serde(default)]
    pub params: serde_json::Value,
}

impl EffectInstance {
    /// Build an effect with no parameters.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            params: serde_json::Value::Null,
        }
    }

    /// Build an effect with a JSON parameter payload.
    pub fn with_params(kind: impl Into<String>, params: serde_json::Value) -> Self {
        Self {
            kind: kind.into(),
            params,
        }
    }
}
