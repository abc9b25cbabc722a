//! Presentation layer trait.
//!
//! The UI implements `Presentation` to render, animate, and vibrate; the
//! engine drives it through this seam and never touches view objects.
//!
//! ## Implementation Notes
//!
//! - `play_sequence` and `play_end_of_round` are asynchronous on the UI
//!   side: start the animation, return immediately, and report completion
//!   later via [`SequenceEngine::presentation_complete`] or
//!   [`SequenceEngine::transition_complete`] with the same ticket.
//! - `vibrate` and `set_input_enabled` are fire-and-forget.
//! - In-flight animations are assumed to always complete and call back;
//!   there is no cancellation.
//!
//! [`SequenceEngine::presentation_complete`]: crate::engine::SequenceEngine::presentation_complete
//! [`SequenceEngine::transition_complete`]: crate::engine::SequenceEngine::transition_complete

use serde::{Deserialize, Serialize};

use crate::core::{Quadrant, VibrationPattern};
use crate::engine::PresentationTicket;

/// Which game moment a haptic cue marks.
///
/// The engine resolves the cue to a concrete pattern from its
/// configuration; implementations that only care about the moment can
/// ignore the pattern argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VibrationCue {
    /// The player reproduced the full sequence; a new entry was added.
    RoundExtended,
    /// The player tapped the wrong quadrant; the round is over.
    RoundFailed,
}

/// Collaborator interface implemented by the UI layer.
pub trait Presentation {
    /// Animate each entry in order: flash each quadrant for
    /// `flash_duration_ms`, waiting `inter_entry_delay_ms` between entries.
    /// Report completion with the given ticket.
    fn play_sequence(
        &mut self,
        ticket: PresentationTicket,
        entries: &[Quadrant],
        flash_duration_ms: u32,
        inter_entry_delay_ms: u32,
    );

    /// Show the end-of-round score, then report completion with the given
    /// ticket.
    fn play_end_of_round(&mut self, ticket: PresentationTicket, score: u32);

    /// Play a haptic pattern. Fire-and-forget.
    fn vibrate(&mut self, cue: VibrationCue, pattern: &VibrationPattern);

    /// Enable or disable acceptance of quadrant taps at the UI layer.
    fn set_input_enabled(&mut self, enabled: bool);
}
