//! Identity-scoped admission rules.
//!
//! The store gathers the facts inside the same transaction as the write they
//! gate; these functions only decide.

use wordboard_core::config::LimitsConfig;
use wordboard_core::errors::{BoardError, BoardResult};
use wordboard_core::word::{Identity, Owner, WordId};

/// Facts needed to admit a word creation.
#[derive(Debug, Clone, Copy)]
pub struct CreateFacts<'a> {
    pub owner: &'a Identity,
    /// Words currently owned by `owner` (orphans excluded).
    pub owned_words: usize,
}

/// Facts needed to admit an upvote. `owner` is `None` when the word does not exist.
#[derive(Debug, Clone, Copy)]
pub struct UpvoteFacts<'a> {
    pub word_id: WordId,
    pub voter: &'a Identity,
    pub votes_held: usize,
    pub already_voted: bool,
    pub owner: Option<&'a Owner>,
}

pub fn admit_create(facts: &CreateFacts<'_>, limits: &LimitsConfig) -> BoardResult<()> {
    reject_reserved(facts.owner)?;
    if !limits.is_privileged(facts.owner) && facts.owned_words >= limits.max_words_per_creator {
        return Err(BoardError::CreatorLimitExceeded {
            limit: limits.max_words_per_creator,
        });
    }
    Ok(())
}

/// Checks run in a fixed order: voter limit, duplicate vote, existence, self vote.
/// Decay and weight ceiling are judged afterwards by the engine.
pub fn admit_upvote(facts: &UpvoteFacts<'_>, limits: &LimitsConfig) -> BoardResult<()> {
    reject_reserved(facts.voter)?;
    if !limits.is_privileged(facts.voter) && facts.votes_held >= limits.max_votes_per_user {
        return Err(BoardError::VoterLimitExceeded {
            limit: limits.max_votes_per_user,
        });
    }
    if facts.already_voted {
        return Err(BoardError::AlreadyVoted {
            word_id: facts.word_id,
        });
    }
    let owner = facts.owner.ok_or(BoardError::NotFound {
        word_id: facts.word_id,
    })?;
    if owner.is_owned_by(facts.voter) {
        return Err(BoardError::SelfVote {
            word_id: facts.word_id,
        });
    }
    Ok(())
}

pub fn admit_remove_vote(word_id: WordId, voter: &Identity, has_vote: bool) -> BoardResult<()> {
    if has_vote {
        Ok(())
    } else {
        Err(BoardError::VoteNotFound {
            word_id,
            identity: voter.to_string(),
        })
    }
}

/// Owner-only actions (delete, describe). `owner` is `None` when the word does not exist.
pub fn admit_owner_action(
    word_id: WordId,
    identity: &Identity,
    owner: Option<&Owner>,
) -> BoardResult<()> {
    match owner {
        None => Err(BoardError::NotFound { word_id }),
        Some(owner) if owner.is_owned_by(identity) => Ok(()),
        Some(_) => Err(BoardError::Unauthorized {
            word_id,
            identity: identity.to_string(),
        }),
    }
}

fn reject_reserved(identity: &Identity) -> BoardResult<()> {
    if identity.is_reserved() {
        return Err(BoardError::InvalidInput {
            reason: format!("identity {identity} is reserved"),
        });
    }
    Ok(())
}
