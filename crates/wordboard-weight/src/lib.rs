//! # wordboard-weight
//!
//! Pure decision logic for a word's weight lifecycle.
//! Linear decay from 1 to 0 over a configured window, snap-to-2 rescue on
//! upvote, decrement-and-redecay on vote removal, purge-or-orphan on owner
//! delete. Admission rules (limits, self vote, ownership) are evaluated over
//! facts the store gathers inside its transaction.
//!
//! Nothing in this crate touches storage or the clock.

pub mod admission;
pub mod engine;
pub mod formula;
pub mod purge;
pub mod rejection;
pub mod state;

pub use engine::{OwnerDeleteDecision, WeightEngine};
pub use formula::DecayOutcome;
pub use purge::PurgeDecision;
pub use rejection::Rejection;
pub use state::WeightState;
