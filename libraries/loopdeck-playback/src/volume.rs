//! Volume level
//!
//! The media resource takes a linear level in `[0.0, 1.0]`; this type keeps
//! that invariant for values coming from settings or the UI.

/// Playback volume, always finite and within `[0.0, 1.0]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume {
    level: f32,
}

impl Volume {
    /// Full volume
    pub const MAX: Volume = Volume { level: 1.0 };

    /// Create a volume, clamping into range
    ///
    /// Non-finite input falls back to full volume.
    pub fn new(level: f32) -> Self {
        let level = if level.is_finite() {
            level.clamp(0.0, 1.0)
        } else {
            1.0
        };

        Self { level }
    }

    pub fn level(&self) -> f32 {
        self.level
    }

    pub fn is_silent(&self) -> bool {
        self.level == 0.0
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::MAX
    }
}

impl From<f32> for Volume {
    fn from(level: f32) -> Self {
        Self::new(level)
    }
}
