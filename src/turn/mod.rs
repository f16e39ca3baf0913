//! Per-turn scratch state.

pub mod flags;

pub use flags::TurnFlags;
