//! Property tests: random action sequences never break the ledger invariants.

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use wordboard_core::config::BoardConfig;
use wordboard_core::traits::IWordStore;
use wordboard_core::word::{DecayMarker, Identity, WordId, WordText};
use wordboard_storage::StorageEngine;

const WINDOW: i64 = 7200;

#[derive(Debug, Clone)]
enum Action {
    Upvote { voter: u8, word: u8 },
    Unvote { voter: u8, word: u8 },
    Disown { word: u8 },
    Wait { secs: i64 },
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => (0u8..6, 0u8..4).prop_map(|(voter, word)| Action::Upvote { voter, word }),
        2 => (0u8..6, 0u8..4).prop_map(|(voter, word)| Action::Unvote { voter, word }),
        1 => (0u8..4).prop_map(|word| Action::Disown { word }),
        2 => (0i64..4000).prop_map(|secs| Action::Wait { secs }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn ledger_invariants_hold(actions in prop::collection::vec(arb_action(), 1..40)) {
        let mut config = BoardConfig::default();
        config.decay.window_secs = WINDOW as u64;
        let store = StorageEngine::open_in_memory(config).unwrap();
        let mut now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();

        let ids: Vec<WordId> = (0..4)
            .map(|i| {
                let text = WordText::normalize(&format!("w{i}"), 20).unwrap();
                let creator = Identity::new(format!("creator{i}@school.edu"));
                store.create_word(&text, &creator, now).unwrap().id
            })
            .collect();

        for action in actions {
            // Rule rejections are expected; only storage failures are bugs.
            let result = match action {
                Action::Upvote { voter, word } => store
                    .upvote(ids[word as usize], &Identity::new(format!("v{voter}@school.edu")), now)
                    .map(|_| ()),
                Action::Unvote { voter, word } => store
                    .remove_vote(ids[word as usize], &Identity::new(format!("v{voter}@school.edu")), now),
                Action::Disown { word } => {
                    let creator = Identity::new(format!("creator{word}@school.edu"));
                    store.delete_owned(ids[word as usize], &creator, now).map(|_| ())
                }
                Action::Wait { secs } => {
                    now += Duration::seconds(secs);
                    Ok(())
                }
            };
            if let Err(e) = result {
                prop_assert!(e.is_client_error(), "unexpected failure: {e}");
            }

            let listed = store.list_words(now).unwrap();
            for word in &listed {
                prop_assert!(word.weight > 0.0);
                if word.is_decaying() {
                    prop_assert!(word.weight <= 1.0);
                } else {
                    prop_assert!(word.weight >= 2.0);
                }
            }
            for row in store.dump().unwrap() {
                let marker = DecayMarker::parse(row.decay_start.as_deref());
                prop_assert!(!marker.is_malformed());
                if marker.is_present() {
                    prop_assert_eq!(row.weight, 1.0);
                } else {
                    prop_assert!(row.weight >= 2.0);
                }
            }
            let again = store.list_words(now).unwrap();
            prop_assert_eq!(listed, again);
        }
    }
}
