//! Policy set content.
//!
//! Everything under here is configuration, not engine: stock guard shapes
//! shared across decks, and complete policy sets exporting a `deck()`
//! constructor.

pub mod clockwork;
pub mod stock;
