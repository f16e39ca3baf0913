//! Selection heuristics.
//!
//! When the external engine prompts for a sub-choice (materials to combine,
//! a card to search out, targets to destroy), the agent answers from here:
//! a purpose tag picks the heuristic, the heuristic orders the caller's
//! candidates by eligibility tier, and the result is a bounded subsequence
//! of the input.
//!
//! ## Key Types
//!
//! - `SelectPurpose`: Why the engine is asking
//! - `SearchPriority`: Ranked add-to-hand wants (content configuration)
//! - `heuristic`: The per-purpose ordering functions

pub mod heuristic;
pub mod purpose;

pub use purpose::{SearchPriority, SelectPurpose};
