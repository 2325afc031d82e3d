//! Application layer managing state and game workflow.
//!
//! This module coordinates between the domain layer and presentation layer,
//! owning the game state, the step engine, and the UI mode.

pub mod state;

pub use state::*;
