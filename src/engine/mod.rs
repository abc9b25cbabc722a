//! The sequence state machine.

pub mod phase;
pub mod machine;

pub use phase::{Phase, PresentationTicket};
pub use machine::SequenceEngine;
