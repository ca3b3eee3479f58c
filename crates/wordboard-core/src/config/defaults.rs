// Single source of truth for all default values.

// --- Decay ---
pub const DEFAULT_DECAY_WINDOW_SECS: u64 = 10_000_000;

// --- Limits ---
pub const DEFAULT_MAX_WORDS_PER_CREATOR: usize = 3;
pub const DEFAULT_MAX_VOTES_PER_USER: usize = 10;
pub const DEFAULT_MAX_WEIGHT: f64 = 20.0;
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 20;
pub const DEFAULT_MAX_DESCRIPTION_LENGTH: usize = 40;

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "words.db";
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;
pub const DEFAULT_READ_POOL_SIZE: usize = 4;

// --- Config files ---
pub const PROJECT_CONFIG_FILENAME: &str = "wordboard.toml";

// --- Observability ---
pub const DEFAULT_LOG_FILTER: &str = "wordboard=info";
