//! Intake session state machine
//!
//! Tracks what kind of artifact the user is expected to supply next and
//! describes what the presentation layer must display. Pure data and
//! pure transitions; no I/O.

mod render;
pub mod state;
pub(crate) mod transition;

#[cfg(test)]
mod proptests;

pub use render::RenderInstruction;
pub use state::SessionState;
pub use transition::transition;
