//! # memoseq
//!
//! A sequence engine for a "Simon says" memory game: the device flashes a
//! growing sequence of four colored quadrants, the player reproduces it by
//! tapping, and a mistake ends the round.
//!
//! ## Design Principles
//!
//! 1. **UI-Agnostic**: The engine holds no reference to concrete view
//!    objects. Rendering, animation, and haptics live behind the
//!    [`Presentation`] trait.
//!
//! 2. **Deterministic**: Randomness comes from an injected, seedable
//!    [`GameRng`], so tests can fix the generated sequence exactly.
//!
//! 3. **Single-Threaded**: All operations are synchronous and run on
//!    whatever thread dispatches input events. The only suspension points
//!    are the two presentation completion callbacks, which are idempotent.
//!
//! ## Modules
//!
//! - `core`: Quadrants, RNG, configuration
//! - `engine`: The sequence state machine
//! - `presentation`: The collaborator trait implemented by the UI layer

pub mod core;
pub mod engine;
pub mod presentation;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, Quadrant, VibrationPattern};

pub use crate::engine::{Phase, PresentationTicket, SequenceEngine};

pub use crate::presentation::{Presentation, VibrationCue};
