//! The sequence engine: generation, validation, round progression.
//!
//! ## Game Loop
//!
//! 1. `start_new_game` clears the sequence and extends it to length 1.
//! 2. `extend` appends a random quadrant and asks the presentation layer
//!    to play the full sequence back (`Presenting`).
//! 3. `presentation_complete` opens the input window (`AwaitingInput`).
//! 4. `submit_input` validates each tap against the expected entry. A full
//!    reproduction extends the sequence; a mismatch ends the round with
//!    score = length − 1. There is no win state; play continues until a
//!    mismatch.
//! 5. After the end-of-round transition, `transition_complete` starts the
//!    next game.
//!
//! Taps arriving outside `AwaitingInput` are ignored, never an error:
//! late taps from a previous round must not corrupt new-round state.

use log::debug;
use smallvec::SmallVec;

use crate::core::{GameConfig, GameRng, Quadrant};
use crate::presentation::{Presentation, VibrationCue};

use super::phase::{Phase, PresentationTicket};

/// The memory game state machine.
///
/// Owns the expected sequence, the player's progress pointer, and the
/// random source. All operations are synchronous; the presentation layer
/// is passed in per call so the engine never holds view references.
#[derive(Debug)]
pub struct SequenceEngine {
    config: GameConfig,
    rng: GameRng,
    sequence: SmallVec<[Quadrant; 16]>,
    progress: usize,
    phase: Phase,
    next_ticket: u64,
}

impl SequenceEngine {
    /// Create an engine with no active round.
    #[must_use]
    pub fn new(config: GameConfig, rng: GameRng) -> Self {
        Self {
            config,
            rng,
            sequence: SmallVec::new(),
            progress: 0,
            phase: Phase::Idle,
            next_ticket: 0,
        }
    }

    /// Start a new game: clear the sequence and extend it to length 1.
    pub fn start_new_game(&mut self, presentation: &mut dyn Presentation) {
        debug!("starting new game");
        self.sequence.clear();
        self.progress = 0;
        self.extend(presentation);
    }

    /// Append one random quadrant and play the full sequence back.
    ///
    /// Resets the progress pointer and blocks input until the
    /// presentation layer reports playback complete.
    pub fn extend(&mut self, presentation: &mut dyn Presentation) {
        self.sequence.push(self.rng.next_quadrant());
        self.progress = 0;

        let ticket = self.issue_ticket();
        self.phase = Phase::Presenting(ticket);
        debug!("sequence extended to {:?}, presenting {}", self.sequence, ticket);

        presentation.set_input_enabled(false);
        presentation.play_sequence(
            ticket,
            &self.sequence,
            self.config.flash_duration_ms,
            self.config.inter_entry_delay_ms,
        );
    }

    /// Report that sequence playback for `ticket` has finished.
    ///
    /// Opens the input window. Duplicate or stale tickets are no-ops, so
    /// a double callback cannot desynchronize the engine.
    pub fn presentation_complete(
        &mut self,
        ticket: PresentationTicket,
        presentation: &mut dyn Presentation,
    ) {
        match self.phase {
            Phase::Presenting(current) if current == ticket => {
                self.phase = Phase::AwaitingInput;
                presentation.set_input_enabled(true);
            }
            _ => debug!("ignoring stale playback completion for {}", ticket),
        }
    }

    /// Register a player tap on `quadrant`.
    ///
    /// Ignored outside the input window. A match advances the progress
    /// pointer, extending the sequence when the reproduction is complete;
    /// a mismatch ends the round.
    pub fn submit_input(&mut self, quadrant: Quadrant, presentation: &mut dyn Presentation) {
        if !self.phase.accepts_input() {
            debug!("ignoring {} tap outside the input window", quadrant);
            return;
        }

        let Some(&expected) = self.sequence.get(self.progress) else {
            // Unreachable while AwaitingInput, but a stray event must
            // never panic the event loop.
            debug!("ignoring {} tap with no expected entry", quadrant);
            return;
        };

        if quadrant == expected {
            self.progress += 1;
            if self.progress == self.sequence.len() {
                presentation.vibrate(
                    VibrationCue::RoundExtended,
                    &self.config.round_extended_vibration,
                );
                self.extend(presentation);
            }
        } else {
            debug!("expected {}, got {}; round over", expected, quadrant);
            presentation.vibrate(
                VibrationCue::RoundFailed,
                &self.config.round_failed_vibration,
            );

            let score = self.score();
            if self.config.show_score_on_failure {
                let ticket = self.issue_ticket();
                self.phase = Phase::RoundOver(ticket);
                presentation.set_input_enabled(false);
                presentation.play_end_of_round(ticket, score);
            } else {
                self.start_new_game(presentation);
            }
        }
    }

    /// Report that the end-of-round transition for `ticket` has finished.
    ///
    /// Starts the next game. Duplicate or stale tickets are no-ops.
    pub fn transition_complete(
        &mut self,
        ticket: PresentationTicket,
        presentation: &mut dyn Presentation,
    ) {
        match self.phase {
            Phase::RoundOver(current) if current == ticket => {
                self.start_new_game(presentation);
            }
            _ => debug!("ignoring stale transition completion for {}", ticket),
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The entries the player must reproduce, in order.
    #[must_use]
    pub fn sequence(&self) -> &[Quadrant] {
        &self.sequence
    }

    /// How many entries of the current sequence have been reproduced.
    #[must_use]
    pub fn progress(&self) -> usize {
        self.progress
    }

    /// Entries correctly reproduced before a mistake would end the round.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.sequence.len().saturating_sub(1) as u32
    }

    /// The engine configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    fn issue_ticket(&mut self) -> PresentationTicket {
        let ticket = PresentationTicket::new(self.next_ticket);
        self.next_ticket += 1;
        ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::VibrationPattern;

    /// Discards all presentation calls.
    struct NullPresentation;

    impl Presentation for NullPresentation {
        fn play_sequence(&mut self, _: PresentationTicket, _: &[Quadrant], _: u32, _: u32) {}
        fn play_end_of_round(&mut self, _: PresentationTicket, _: u32) {}
        fn vibrate(&mut self, _: VibrationCue, _: &VibrationPattern) {}
        fn set_input_enabled(&mut self, _: bool) {}
    }

    fn engine(seed: u64) -> SequenceEngine {
        SequenceEngine::new(GameConfig::default(), GameRng::new(seed))
    }

    #[test]
    fn test_new_engine_is_idle() {
        let engine = engine(42);

        assert_eq!(engine.phase(), Phase::Idle);
        assert!(engine.sequence().is_empty());
        assert_eq!(engine.progress(), 0);
        assert_eq!(engine.score(), 0);
    }

    #[test]
    fn test_new_game_has_single_entry() {
        let mut engine = engine(42);
        engine.start_new_game(&mut NullPresentation);

        assert_eq!(engine.sequence().len(), 1);
        assert_eq!(engine.progress(), 0);
        assert!(matches!(engine.phase(), Phase::Presenting(_)));
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut engine1 = engine(42);
        let mut engine2 = engine(42);

        engine1.start_new_game(&mut NullPresentation);
        engine2.start_new_game(&mut NullPresentation);

        assert_eq!(engine1.sequence(), engine2.sequence());
    }

    #[test]
    fn test_tap_before_first_game_is_ignored() {
        let mut engine = engine(42);
        engine.submit_input(Quadrant::TopLeft, &mut NullPresentation);

        assert_eq!(engine.phase(), Phase::Idle);
        assert!(engine.sequence().is_empty());
    }

    #[test]
    fn test_tickets_are_unique_per_issuance() {
        let mut engine = engine(42);

        engine.start_new_game(&mut NullPresentation);
        let Phase::Presenting(first) = engine.phase() else {
            panic!("expected Presenting");
        };

        engine.start_new_game(&mut NullPresentation);
        let Phase::Presenting(second) = engine.phase() else {
            panic!("expected Presenting");
        };

        assert_ne!(first, second);
    }
}
