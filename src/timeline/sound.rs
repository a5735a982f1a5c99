//! Audio attachments.

use std::sync::Arc;

use crate::media::clip::AudioClip;
use crate::timeline::node::Timed;

/// An audio clip attached to a tape (or used as a screen's background music).
///
/// A sound owns its timing and a handful of playback adjustments; the audio
/// media itself stays opaque behind the [`AudioClip`] capability.
#[derive(Clone)]
pub struct Sound {
    /// Descriptive name for authoring/debugging.
    pub name: String,
    /// Absolute start time, set at insertion.
    pub(crate) begin: f64,
    /// The opaque audio media.
    pub(crate) clip: Arc<dyn AudioClip>,
    /// Stretch playback to the owning tape's lifetime.
    pub adjust_to_parent: bool,
    /// Where to begin playing from the source clip, in seconds.
    pub start_offset: Option<f64>,
    /// Fade-in duration in seconds.
    pub fade_in: Option<f64>,
    /// Fade-out duration in seconds.
    pub fade_out: Option<f64>,
}

impl Sound {
    /// Wrap an audio clip.
    pub fn new(clip: Arc<dyn AudioClip>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            begin: 0.0,
            clip,
            adjust_to_parent: false,
            start_offset: None,
            fade_in: None,
            fade_out: None,
        }
    }

    /// Stretch this sound to its parent tape's lifetime at composition time.
    pub fn adjust_to_parent(mut self) -> Self {
        self.adjust_to_parent = true;
        self
    }

    /// Set fade-in and fade-out durations.
    pub fn with_fade(mut self, fade_in: Option<f64>, fade_out: Option<f64>) -> Self {
        self.fade_in = fade_in;
        self.fade_out = fade_out;
        self
    }

    /// Set where to begin playing from the source clip.
    pub fn with_start_offset(mut self, offset: f64) -> Self {
        self.start_offset = Some(offset);
        self
    }

    /// The opaque audio media handle.
    pub fn clip(&self) -> &Arc<dyn AudioClip> {
        &self.clip
    }
}

impl Timed for Sound {
    fn begin(&self) -> f64 {
        self.begin
    }

    fn finish(&self) -> f64 {
        self.begin + self.clip.intrinsic_duration()
    }

    fn lifetime(&self) -> f64 {
        self.clip.intrinsic_duration()
    }
}

impl std::fmt::Debug for Sound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sound")
            .field("name", &self.name)
            .field("begin", &self.begin)
            .field("duration", &self.clip.intrinsic_duration())
            .field("adjust_to_parent", &self.adjust_to_parent)
            .field("start_offset", &self.start_offset)
            .field("fade_in", &self.fade_in)
            .field("fade_out", &self.fade_out)
            .finish()
    }
}
