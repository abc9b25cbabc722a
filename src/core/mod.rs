//! Core building blocks: quadrants, RNG, configuration.
//!
//! These types carry no game-loop logic of their own. The state machine
//! that consumes them lives in `crate::engine`.

pub mod quadrant;
pub mod rng;
pub mod config;

pub use quadrant::Quadrant;
pub use rng::GameRng;
pub use config::{GameConfig, VibrationPattern};
