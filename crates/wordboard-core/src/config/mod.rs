//! Configuration system for wordboard.
//! TOML-based, 3-layer resolution: overrides > env > project file > defaults.

pub mod board_config;
pub mod decay_config;
pub mod defaults;
pub mod limits_config;
pub mod storage_config;

pub use board_config::{BoardConfig, ConfigOverrides};
pub use decay_config::{DecayConfig, MalformedDecayPolicy};
pub use limits_config::LimitsConfig;
pub use storage_config::StorageConfig;
