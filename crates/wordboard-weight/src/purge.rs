use wordboard_core::word::WordId;

use crate::formula::DecayOutcome;

/// Sweep verdict for one word, with a reason for the log.
#[derive(Debug, Clone, PartialEq)]
pub struct PurgeDecision {
    pub word_id: WordId,
    pub purge: bool,
    pub effective_weight: f64,
    pub malformed: bool,
    pub reason: String,
}

/// Turn a decay outcome into a sweep verdict.
pub fn evaluate(word_id: WordId, outcome: &DecayOutcome) -> PurgeDecision {
    let reason = if outcome.malformed {
        "decay marker unparseable".to_string()
    } else if outcome.purge {
        format!("decayed to {:.3}", outcome.effective)
    } else {
        "alive".to_string()
    };

    PurgeDecision {
        word_id,
        purge: outcome.purge,
        effective_weight: outcome.effective,
        malformed: outcome.malformed,
        reason,
    }
}
