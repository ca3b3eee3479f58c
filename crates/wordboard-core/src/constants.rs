/// wordboard version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Identity used when the caller supplies none.
pub const ANONYMOUS_IDENTITY: &str = "anonymous@dev.local";

/// Persisted `created_by` value for words whose creator gave them up.
pub const ORPHAN_SENTINEL: &str = "system_orphan";

/// Weight every new word starts at.
pub const CREATION_WEIGHT: f64 = 1.0;

/// Weight a decaying word is snapped to when it receives an upvote.
pub const SNAP_WEIGHT: f64 = 2.0;

/// Effective weight at or below which an owner delete purges instead of orphaning.
pub const OWNER_PURGE_CEILING: f64 = 2.0;
