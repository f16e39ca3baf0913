//! Policy rules: guarded actions in priority order.
//!
//! A policy set is a table of rules, each tying an (action category, card)
//! pair to a guard closure. The table's registration order is its priority
//! order; the orchestrator walks a pair's chain top to bottom and commits
//! to the first guard that approves. Strategy lives entirely in these
//! tables - the engine is the same for every deck.
//!
//! ## Key Types
//!
//! - `ActionKind`: The action categories the external engine offers
//! - `GuardFn` / `GuardScope`: Rule bodies and what they may touch
//! - `StagedChoices` / `ProposedAction`: What a committed rule hands back
//! - `PolicyRegistry`: The ordered rule table

pub mod action;
pub mod guard;
pub mod registry;

pub use action::{ActionKind, ProposedAction, StagedChoices};
pub use guard::{GuardFn, GuardScope};
pub use registry::{PolicyRegistry, PolicyRule};
