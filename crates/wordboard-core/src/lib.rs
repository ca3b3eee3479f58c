//! # wordboard-core
//!
//! Foundation crate for the wordboard voting ledger.
//! Defines the word model, identities, errors, config, the store trait,
//! and tracing setup. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod logging;
pub mod traits;
pub mod word;

// Re-export the most commonly used types at the crate root.
pub use config::BoardConfig;
pub use errors::{BoardError, BoardResult};
pub use word::{DecayMarker, Identity, Owner, Word, WordId, WordText};
