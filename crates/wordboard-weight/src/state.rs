use chrono::{DateTime, Utc};

/// The persisted half of a word that the engine reasons about.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightState {
    pub weight: f64,
    /// Present iff the word is decaying.
    pub decay_start: Option<DateTime<Utc>>,
}

impl WeightState {
    pub fn stable(weight: f64) -> Self {
        Self {
            weight,
            decay_start: None,
        }
    }

    pub fn decaying(weight: f64, since: DateTime<Utc>) -> Self {
        Self {
            weight,
            decay_start: Some(since),
        }
    }

    pub fn is_decaying(&self) -> bool {
        self.decay_start.is_some()
    }
}
