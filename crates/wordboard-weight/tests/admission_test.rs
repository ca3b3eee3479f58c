use std::collections::BTreeSet;

use wordboard_core::config::LimitsConfig;
use wordboard_core::constants::ORPHAN_SENTINEL;
use wordboard_core::word::{Identity, Owner, WordId};
use wordboard_core::BoardError;
use wordboard_weight::admission::*;

fn limits_with_admin(admin: &str) -> LimitsConfig {
    LimitsConfig {
        privileged: BTreeSet::from([admin.to_string()]),
        ..LimitsConfig::default()
    }
}

#[test]
fn creator_limit_applies_at_three() {
    let limits = LimitsConfig::default();
    let owner = Identity::new("a@x.edu");
    assert!(admit_create(&CreateFacts { owner: &owner, owned_words: 2 }, &limits).is_ok());
    let err = admit_create(&CreateFacts { owner: &owner, owned_words: 3 }, &limits).unwrap_err();
    assert!(matches!(err, BoardError::CreatorLimitExceeded { limit: 3 }));
}

#[test]
fn privileged_creators_are_exempt() {
    let limits = limits_with_admin("admin@x.edu");
    let admin = Identity::new("admin@x.edu");
    assert!(admit_create(&CreateFacts { owner: &admin, owned_words: 50 }, &limits).is_ok());
}

#[test]
fn reserved_identity_cannot_create() {
    let limits = LimitsConfig::default();
    let sentinel = Identity::new(ORPHAN_SENTINEL);
    let err = admit_create(&CreateFacts { owner: &sentinel, owned_words: 0 }, &limits).unwrap_err();
    assert!(matches!(err, BoardError::InvalidInput { .. }));
}

#[test]
fn upvote_checks_run_in_fixed_order() {
    let limits = LimitsConfig::default();
    let voter = Identity::new("v@x.edu");
    let own = Owner::User(voter.clone());

    // Voter limit wins over everything else.
    let facts = UpvoteFacts {
        word_id: WordId(1),
        voter: &voter,
        votes_held: 10,
        already_voted: true,
        owner: None,
    };
    assert!(matches!(
        admit_upvote(&facts, &limits),
        Err(BoardError::VoterLimitExceeded { limit: 10 })
    ));

    // Then duplicate vote.
    let facts = UpvoteFacts { votes_held: 0, ..facts };
    assert!(matches!(admit_upvote(&facts, &limits), Err(BoardError::AlreadyVoted { .. })));

    // Then existence.
    let facts = UpvoteFacts { already_voted: false, ..facts };
    assert!(matches!(admit_upvote(&facts, &limits), Err(BoardError::NotFound { .. })));

    // Then self vote.
    let facts = UpvoteFacts { owner: Some(&own), ..facts };
    assert!(matches!(admit_upvote(&facts, &limits), Err(BoardError::SelfVote { .. })));
}

#[test]
fn orphaned_words_accept_votes_from_former_owner() {
    let limits = LimitsConfig::default();
    let voter = Identity::new("v@x.edu");
    let facts = UpvoteFacts {
        word_id: WordId(1),
        voter: &voter,
        votes_held: 0,
        already_voted: false,
        owner: Some(&Owner::Orphan),
    };
    assert!(admit_upvote(&facts, &limits).is_ok());
}

#[test]
fn privileged_voters_skip_the_vote_limit() {
    let limits = limits_with_admin("admin@x.edu");
    let admin = Identity::new("admin@x.edu");
    let other = Owner::User(Identity::new("a@x.edu"));
    let facts = UpvoteFacts {
        word_id: WordId(1),
        voter: &admin,
        votes_held: 99,
        already_voted: false,
        owner: Some(&other),
    };
    assert!(admit_upvote(&facts, &limits).is_ok());
}

#[test]
fn remove_vote_requires_a_vote() {
    let voter = Identity::new("v@x.edu");
    assert!(admit_remove_vote(WordId(1), &voter, true).is_ok());
    assert!(matches!(
        admit_remove_vote(WordId(1), &voter, false),
        Err(BoardError::VoteNotFound { .. })
    ));
}

#[test]
fn owner_action_distinguishes_missing_from_foreign() {
    let me = Identity::new("me@x.edu");
    let mine = Owner::User(me.clone());
    let theirs = Owner::User(Identity::new("them@x.edu"));

    assert!(admit_owner_action(WordId(1), &me, Some(&mine)).is_ok());
    assert!(matches!(
        admit_owner_action(WordId(1), &me, Some(&theirs)),
        Err(BoardError::Unauthorized { .. })
    ));
    assert!(matches!(
        admit_owner_action(WordId(1), &me, Some(&Owner::Orphan)),
        Err(BoardError::Unauthorized { .. })
    ));
    assert!(matches!(
        admit_owner_action(WordId(1), &me, None),
        Err(BoardError::NotFound { .. })
    ));
}
