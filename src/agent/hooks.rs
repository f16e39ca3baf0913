//! Out-of-band decision hooks.
//!
//! Two prompts fall outside the guard-rule flow: who goes first, and which
//! battle position a deploy takes. Both are answered by plain configuration
//! rather than rules - a constant for the opening, a pure function for the
//! position.

use serde::{Deserialize, Serialize};

use crate::core::{CardKind, Position};

/// Answer to the opening turn-order prompt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnOrder {
    /// Take the first turn.
    #[default]
    First,
    /// Let the opponent start.
    Second,
}

/// Position hook: offered orientations in, chosen orientation out.
///
/// `None` defers to the external engine's default.
pub type PositionFn = fn(CardKind, &[Position]) -> Option<Position>;

/// The out-of-band hook configuration of a policy set.
#[derive(Clone, Copy, Debug)]
pub struct AgentHooks {
    /// Opening turn-order answer.
    pub opening: TurnOrder,

    /// Deploy orientation answer.
    pub position: PositionFn,
}

impl AgentHooks {
    /// Create hooks with the aggressive defaults: go first, deploy monsters
    /// in face-up attack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the opening answer (builder pattern).
    #[must_use]
    pub const fn with_opening(mut self, opening: TurnOrder) -> Self {
        self.opening = opening;
        self
    }

    /// Set the position hook (builder pattern).
    #[must_use]
    pub const fn with_position(mut self, position: PositionFn) -> Self {
        self.position = position;
        self
    }
}

impl Default for AgentHooks {
    fn default() -> Self {
        Self {
            opening: TurnOrder::First,
            position: attack_position,
        }
    }
}

/// Default position hook.
///
/// Monsters take face-up attack when it is offered; every other prompt
/// defers to the external engine.
#[must_use]
pub fn attack_position(kind: CardKind, options: &[Position]) -> Option<Position> {
    if kind.is_monster() && options.contains(&Position::FaceUpAttack) {
        Some(Position::FaceUpAttack)
    } else {
        None
    }
}
