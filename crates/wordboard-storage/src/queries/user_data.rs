//! Per-identity view: created and upvoted words.

use chrono::{DateTime, Utc};
use rusqlite::Connection;

use wordboard_core::config::MalformedDecayPolicy;
use wordboard_core::errors::BoardResult;
use wordboard_core::word::{Identity, UserData, Word};
use wordboard_weight::WeightEngine;

use super::{sweep, vote_ops, word_crud};

/// Words `identity` created and words it upvoted, decay-evaluated at `now`.
/// Words that have already decayed to nothing are left out.
pub fn load_user_data(
    conn: &Connection,
    identity: &Identity,
    is_privileged: bool,
    engine: &WeightEngine,
    policy: MalformedDecayPolicy,
    now: DateTime<Utc>,
) -> BoardResult<UserData> {
    let mut created = Vec::new();
    for record in word_crud::records_created_by(conn, identity.as_str())? {
        if let Some(word) = sweep::present(record, engine, policy, now)? {
            created.push(word);
        }
    }

    let mut upvoted: Vec<Word> = Vec::new();
    for word_id in vote_ops::voted_word_ids(conn, identity.as_str())? {
        let Some(record) = word_crud::get_record(conn, word_id)? else {
            continue;
        };
        if let Some(word) = sweep::present(record, engine, policy, now)? {
            upvoted.push(word);
        }
    }

    Ok(UserData {
        identity: identity.clone(),
        created,
        upvoted,
        is_privileged,
    })
}
