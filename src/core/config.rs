//! Game configuration.
//!
//! Hosts configure the engine at startup: presentation timings, the
//! vibration pattern pair, and whether a mismatch shows the end-of-round
//! score screen or restarts immediately. Defaults match the historical
//! device behavior.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A haptic pattern as a list of pulse/pause durations in milliseconds.
///
/// Alternating entries are vibration and pause lengths, starting with a
/// vibration. `[200, 100]` is a 200 ms pulse followed by a 100 ms pause.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VibrationPattern(SmallVec<[u32; 4]>);

impl VibrationPattern {
    /// Create a pattern from pulse/pause durations.
    #[must_use]
    pub fn new(pulses_ms: &[u32]) -> Self {
        Self(SmallVec::from_slice(pulses_ms))
    }

    /// The pulse/pause durations in milliseconds.
    #[must_use]
    pub fn pulses_ms(&self) -> &[u32] {
        &self.0
    }

    /// Default short double-pulse played when the sequence is extended.
    #[must_use]
    pub fn round_extended_default() -> Self {
        Self::new(&[200, 100])
    }

    /// Default single long pulse played when a round ends in a mismatch.
    #[must_use]
    pub fn round_failed_default() -> Self {
        Self::new(&[500])
    }
}

/// Complete engine configuration.
///
/// Hosts provide this at startup. [`Default`] reproduces the historical
/// device behavior; builder methods override individual fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// How long each quadrant stays highlighted during playback.
    pub flash_duration_ms: u32,

    /// Delay between consecutive flashes during playback.
    pub inter_entry_delay_ms: u32,

    /// Show the end-of-round score screen on a mismatch. When false the
    /// next game starts immediately after the failure haptic.
    pub show_score_on_failure: bool,

    /// Haptic pattern played when the player completes the sequence.
    pub round_extended_vibration: VibrationPattern,

    /// Haptic pattern played on a mismatch.
    pub round_failed_vibration: VibrationPattern,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            flash_duration_ms: 300,
            inter_entry_delay_ms: 500,
            show_score_on_failure: true,
            round_extended_vibration: VibrationPattern::round_extended_default(),
            round_failed_vibration: VibrationPattern::round_failed_default(),
        }
    }
}

impl GameConfig {
    /// Create a configuration with the default device behavior.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the flash duration.
    #[must_use]
    pub fn with_flash_duration_ms(mut self, ms: u32) -> Self {
        self.flash_duration_ms = ms;
        self
    }

    /// Set the delay between flashes.
    #[must_use]
    pub fn with_inter_entry_delay_ms(mut self, ms: u32) -> Self {
        self.inter_entry_delay_ms = ms;
        self
    }

    /// Choose whether a mismatch shows the score screen.
    #[must_use]
    pub fn with_show_score_on_failure(mut self, show: bool) -> Self {
        self.show_score_on_failure = show;
        self
    }

    /// Set the sequence-extended haptic pattern.
    #[must_use]
    pub fn with_round_extended_vibration(mut self, pattern: VibrationPattern) -> Self {
        self.round_extended_vibration = pattern;
        self
    }

    /// Set the mismatch haptic pattern.
    #[must_use]
    pub fn with_round_failed_vibration(mut self, pattern: VibrationPattern) -> Self {
        self.round_failed_vibration = pattern;
        self
    }
}
