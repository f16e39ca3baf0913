//! Core vocabulary: identities, locations, phases, candidates, snapshots.
//!
//! These types are the shared language between the external duel engine and
//! the policy layers. Everything here is plain data - the engine interprets
//! none of it beyond equality and ordering.

pub mod candidate;
pub mod card;
pub mod phase;
pub mod view;
pub mod zone;

pub use candidate::Candidate;
pub use card::{CardId, CardKind, EntityId};
pub use phase::Phase;
pub use view::{DuelView, SideView};
pub use zone::{Controller, Position, Zone};
