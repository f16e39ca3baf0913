//! The duel agent: orchestration, hooks, and policy assembly.
//!
//! ## Key Types
//!
//! - `DuelAgent`: Resolves decision, selection, and hook callbacks
//! - `DeckPolicy`: One deck's complete strategy configuration
//! - `AgentHooks` / `TurnOrder`: Out-of-band prompt answers

pub mod deck;
pub mod executor;
pub mod hooks;

pub use deck::DeckPolicy;
pub use executor::DuelAgent;
pub use hooks::{AgentHooks, PositionFn, TurnOrder, attack_position};
