//! Engine phases and presentation tickets.

use serde::{Deserialize, Serialize};

/// Identifies one issued presentation (sequence playback or end-of-round
/// transition).
///
/// The engine allocates a fresh ticket per issuance and only accepts a
/// completion callback carrying the matching ticket, so duplicate or
/// stale callbacks are no-ops.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PresentationTicket(pub u64);

impl PresentationTicket {
    /// Create a ticket from a raw value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ticket value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PresentationTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ticket({})", self.0)
    }
}

/// Where the engine is in the game loop.
///
/// Input is accepted only in `AwaitingInput`. `RoundOver` covers the
/// end-of-round transition window, where taps must be ignored exactly as
/// during playback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No active round yet.
    Idle,
    /// The sequence is being played back to the player.
    Presenting(PresentationTicket),
    /// The player may tap.
    AwaitingInput,
    /// The end-of-round transition is playing.
    RoundOver(PresentationTicket),
}

impl Phase {
    /// True when player taps are accepted.
    #[must_use]
    pub fn accepts_input(self) -> bool {
        matches!(self, Phase::AwaitingInput)
    }
}
