//! # duelbot
//!
//! A policy-driven action-selection engine for autonomous duel agents.
//!
//! ## Design Principles
//!
//! 1. **Policy as Data**: Strategy lives in registered rule tables, not in
//!    code paths. The same engine runs every deck; swapping the table swaps
//!    the emergent behavior.
//!
//! 2. **Registration Order is Priority**: A rule chain is walked top to
//!    bottom and the first approving guard wins. There is no separate
//!    priority value to keep in sync.
//!
//! 3. **Total Decisions**: Every callback answers. No rule matching means
//!    "do nothing", unknown selection purposes degrade to input order, and
//!    nothing panics on content gaps.
//!
//! ## Architecture
//!
//! The external duel engine owns the game rules and the board. It calls in
//! with a snapshot (`DuelView`) whenever the agent may act: once per legal
//! (action, candidate) pair for decisions, once per prompt for selections.
//! The agent keeps exactly one piece of state between calls - the per-turn
//! flag map - and that is wholesale reset each of its turns.
//!
//! ## Modules
//!
//! - `core`: Identities, zones, phases, candidates, duel snapshots
//! - `turn`: The per-turn flag map
//! - `policy`: Guard rules and the ordered registry
//! - `select`: Per-purpose selection heuristics
//! - `agent`: The orchestrator, hooks, and policy assembly
//! - `decks`: Stock guard builders and the demonstration policy set

pub mod agent;
pub mod core;
pub mod decks;
pub mod policy;
pub mod select;
pub mod turn;

// Re-export commonly used types
pub use crate::core::{
    Candidate, CardId, CardKind, Controller, DuelView, EntityId, Phase, Position, SideView, Zone,
};

pub use crate::turn::TurnFlags;

pub use crate::policy::{
    ActionKind, GuardFn, GuardScope, PolicyRegistry, PolicyRule, ProposedAction, StagedChoices,
};

pub use crate::select::{SearchPriority, SelectPurpose};

pub use crate::agent::{AgentHooks, DeckPolicy, DuelAgent, PositionFn, TurnOrder};
