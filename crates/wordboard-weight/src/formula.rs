use chrono::{DateTime, Utc};

use wordboard_core::word::DecayMarker;

/// Result of evaluating decay at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayOutcome {
    /// Weight a reader should see right now.
    pub effective: f64,
    /// The word has fully decayed and must be deleted with its votes.
    pub purge: bool,
    /// The stored marker could not be parsed; `effective` is the stored weight.
    pub malformed: bool,
}

/// Linear decay: `effective = 1 - elapsed / window`.
///
/// Stable words keep their stored weight. Elapsed time before the marker
/// (clock skew) counts as zero, so the result never exceeds 1 while decaying.
/// Purge is signalled iff the effective weight is <= 0.
pub fn decayed_weight(
    weight: f64,
    marker: &DecayMarker,
    now: DateTime<Utc>,
    window_secs: f64,
) -> DecayOutcome {
    match marker {
        DecayMarker::Stable => DecayOutcome {
            effective: weight,
            purge: false,
            malformed: false,
        },
        // Engine-level fail open; the store applies its configured policy.
        DecayMarker::Malformed(_) => DecayOutcome {
            effective: weight,
            purge: false,
            malformed: true,
        },
        DecayMarker::Decaying(start) => {
            let elapsed = elapsed_secs(*start, now);
            let effective = 1.0 - elapsed / window_secs;
            DecayOutcome {
                effective,
                purge: effective <= 0.0,
                malformed: false,
            }
        }
    }
}

/// Seconds from `start` to `now`, floored at zero, millisecond resolution.
pub fn elapsed_secs(start: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (now - start).num_milliseconds().max(0) as f64 / 1000.0
}
