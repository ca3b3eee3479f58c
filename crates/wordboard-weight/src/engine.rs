use chrono::{DateTime, Utc};

use wordboard_core::config::BoardConfig;
use wordboard_core::constants::{CREATION_WEIGHT, OWNER_PURGE_CEILING, SNAP_WEIGHT};
use wordboard_core::word::{DecayMarker, WordId};

use crate::formula::{self, DecayOutcome};
use crate::purge::{self, PurgeDecision};
use crate::rejection::Rejection;
use crate::state::WeightState;

/// What an owner delete resolves to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OwnerDeleteDecision {
    /// Delete the word and every upvote on it.
    Purge,
    /// Keep the word with this state; the caller also sets the owner to orphan.
    Orphan(WeightState),
}

/// Weight lifecycle engine: decay evaluation plus the four action transitions.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightEngine {
    window_secs: f64,
    max_weight: f64,
}

impl WeightEngine {
    pub fn new(window_secs: u64, max_weight: f64) -> Self {
        Self {
            window_secs: window_secs.max(1) as f64,
            max_weight,
        }
    }

    pub fn from_config(config: &BoardConfig) -> Self {
        Self::new(config.decay.window_secs, config.limits.max_weight)
    }

    /// Effective weight at `now`, and whether the word must be purged.
    pub fn decayed_weight(&self, weight: f64, marker: &DecayMarker, now: DateTime<Utc>) -> DecayOutcome {
        formula::decayed_weight(weight, marker, now, self.window_secs)
    }

    /// Every new word starts at weight 1, decaying from the moment it exists.
    pub fn on_create(&self, now: DateTime<Utc>) -> WeightState {
        WeightState::decaying(CREATION_WEIGHT, now)
    }

    /// Apply one upvote.
    ///
    /// A decaying word (any marker present) snaps to exactly 2 with no marker,
    /// however far it had decayed. A stable word gains 1. Refused when the word
    /// has already decayed to zero, or when its effective weight is at or above
    /// the ceiling.
    pub fn on_upvote(
        &self,
        weight: f64,
        marker: &DecayMarker,
        now: DateTime<Utc>,
    ) -> Result<WeightState, Rejection> {
        let outcome = self.decayed_weight(weight, marker, now);
        if outcome.purge {
            return Err(Rejection::Expired);
        }
        if outcome.effective >= self.max_weight {
            return Err(Rejection::MaxWeight {
                max_weight: self.max_weight,
            });
        }

        if marker.is_present() {
            Ok(WeightState::stable(SNAP_WEIGHT))
        } else {
            Ok(WeightState::stable(weight + 1.0))
        }
    }

    /// Remove one vote's support: decrement the stored weight; below 2 the
    /// word snaps to 1 and starts decaying from `now`.
    pub fn on_remove_vote(&self, weight: f64, now: DateTime<Utc>) -> WeightState {
        settle_decrement(weight - 1.0, now)
    }

    /// Creator gives the word up.
    ///
    /// Effective weight <= 2 purges outright. Otherwise the word loses one
    /// point (re-entering decay if that leaves it below 2) and becomes
    /// an orphan.
    pub fn on_owner_delete(
        &self,
        weight: f64,
        marker: &DecayMarker,
        now: DateTime<Utc>,
    ) -> OwnerDeleteDecision {
        let outcome = self.decayed_weight(weight, marker, now);
        if outcome.effective <= OWNER_PURGE_CEILING {
            return OwnerDeleteDecision::Purge;
        }
        OwnerDeleteDecision::Orphan(settle_decrement(outcome.effective - 1.0, now))
    }

    /// Decay plus purge verdict for one stored row, for the lazy sweep.
    pub fn evaluate_purge(
        &self,
        word_id: WordId,
        weight: f64,
        marker: &DecayMarker,
        now: DateTime<Utc>,
    ) -> PurgeDecision {
        let outcome = self.decayed_weight(weight, marker, now);
        purge::evaluate(word_id, &outcome)
    }

    /// Evaluate a batch of stored rows at one instant.
    pub fn process_batch(
        &self,
        rows: &[(WordId, f64, DecayMarker)],
        now: DateTime<Utc>,
    ) -> Vec<PurgeDecision> {
        rows.iter()
            .map(|(id, weight, marker)| self.evaluate_purge(*id, *weight, marker, now))
            .collect()
    }
}

/// A stable word never sits below 2: anything lower snaps to 1 and decays.
fn settle_decrement(decremented: f64, now: DateTime<Utc>) -> WeightState {
    if decremented < SNAP_WEIGHT {
        WeightState::decaying(CREATION_WEIGHT, now)
    } else {
        WeightState::stable(decremented)
    }
}
