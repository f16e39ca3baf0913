//! Turn phases.

use serde::{Deserialize, Serialize};

/// Phase of the current turn.
///
/// Ordered by when they occur within a turn, so guards can compare:
/// `view.phase >= Phase::Battle` reads as "battle phase or later".
/// Sudden-strike rules use this to hold a trap until combat starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Draw phase.
    Draw,
    /// Standby phase.
    Standby,
    /// First main phase.
    Main1,
    /// Battle phase.
    Battle,
    /// Second main phase.
    Main2,
    /// End phase.
    End,
}

impl Phase {
    /// Check whether this is a main phase (either one).
    #[must_use]
    pub const fn is_main(self) -> bool {
        matches!(self, Phase::Main1 | Phase::Main2)
    }
}
