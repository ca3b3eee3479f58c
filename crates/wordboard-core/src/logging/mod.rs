//! Tracing initialization.

mod setup;

pub use setup::{init_json_tracing, init_tracing};
