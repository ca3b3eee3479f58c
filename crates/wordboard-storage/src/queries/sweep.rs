//! Lazy decay sweep and the decay-evaluated read view.

use chrono::{DateTime, Utc};
use rusqlite::Connection;

use wordboard_core::config::MalformedDecayPolicy;
use wordboard_core::constants::SNAP_WEIGHT;
use wordboard_core::errors::{BoardResult, StorageError};
use wordboard_core::word::{format_timestamp, DecayMarker, Owner, SweepReport, Word, WordRecord};
use wordboard_weight::WeightEngine;

use super::word_crud;

/// Evaluate every word at `now`: purge the fully decayed (votes cascade) and
/// deal with unparseable markers per `policy`. Must run inside the caller's
/// write transaction so the purge and the read that follows agree.
pub fn sweep(
    conn: &Connection,
    engine: &WeightEngine,
    policy: MalformedDecayPolicy,
    now: DateTime<Utc>,
) -> BoardResult<SweepReport> {
    let records = word_crud::all_records(conn)?;
    let mut report = SweepReport {
        scanned: records.len(),
        ..SweepReport::default()
    };

    for record in &records {
        let marker = DecayMarker::parse(record.decay_start.as_deref());
        if let DecayMarker::Malformed(raw) = &marker {
            match policy {
                MalformedDecayPolicy::FailRead => return Err(corrupt_marker(record, raw).into()),
                MalformedDecayPolicy::FailOpen => {
                    tracing::warn!(
                        word_id = %record.id,
                        decay_start = %raw,
                        "unparseable decay marker, showing stored weight"
                    );
                }
                MalformedDecayPolicy::Repair => {
                    let repaired = repaired_marker(record.weight, now);
                    word_crud::set_marker(conn, record.id, repaired.as_deref())?;
                    report.repaired += 1;
                    tracing::warn!(
                        word_id = %record.id,
                        decay_start = %raw,
                        weight = record.weight,
                        restarted = repaired.is_some(),
                        "repaired unparseable decay marker"
                    );
                }
            }
            continue;
        }

        let decision = engine.evaluate_purge(record.id, record.weight, &marker, now);
        if decision.purge {
            word_crud::delete_word(conn, record.id)?;
            report.purged.push(record.id);
            tracing::info!(
                word_id = %record.id,
                text = %record.text,
                reason = %decision.reason,
                "purged decayed word"
            );
        }
    }

    if !report.purged.is_empty() || report.repaired > 0 {
        tracing::debug!(
            scanned = report.scanned,
            purged = report.purged.len(),
            repaired = report.repaired,
            "sweep complete"
        );
    }
    Ok(report)
}

/// Decay-evaluated view of one row, or `None` once it has decayed to nothing.
///
/// Does not write. A malformed marker is shown at its stored weight (the
/// next sweep repairs it) unless `policy` is `FailRead`.
pub fn present(
    record: WordRecord,
    engine: &WeightEngine,
    policy: MalformedDecayPolicy,
    now: DateTime<Utc>,
) -> BoardResult<Option<Word>> {
    let marker = DecayMarker::parse(record.decay_start.as_deref());
    if let DecayMarker::Malformed(raw) = &marker {
        if policy == MalformedDecayPolicy::FailRead {
            return Err(corrupt_marker(&record, raw).into());
        }
    }

    let outcome = engine.decayed_weight(record.weight, &marker, now);
    if outcome.purge {
        return Ok(None);
    }

    Ok(Some(Word {
        id: record.id,
        text: record.text,
        weight: outcome.effective,
        decay_start: marker.start(),
        created_by: Some(Owner::from_stored(record.created_by.as_deref())),
        description: record.description,
    }))
}

/// Decaying rows (weight at most 1) restart decay now; supported rows drop the marker.
/// Rows below the snap weight cannot stay stable, so they restart decay.
fn repaired_marker(weight: f64, now: DateTime<Utc>) -> Option<String> {
    (weight < SNAP_WEIGHT).then(|| format_timestamp(now))
}

fn corrupt_marker(record: &WordRecord, raw: &str) -> StorageError {
    StorageError::CorruptionDetected {
        details: format!("word {} has unparseable decay_start {raw:?}", record.id),
    }
}
