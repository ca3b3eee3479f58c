//! Tracing setup installs one global subscriber per process.

use wordboard_core::logging::{init_json_tracing, init_tracing};

#[test]
fn repeated_initialization_is_a_no_op() {
    init_json_tracing();
    init_tracing();
    init_json_tracing();
    tracing::info!(word_id = 1, "still logging after repeated init");
}
