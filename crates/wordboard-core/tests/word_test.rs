use chrono::{TimeZone, Utc};
use wordboard_core::constants::{ANONYMOUS_IDENTITY, ORPHAN_SENTINEL};
use wordboard_core::word::*;

// --- Text normalization ---

#[test]
fn normalizes_spaces_case_and_punctuation() {
    let text = WordText::normalize("Hello World!", 20).unwrap();
    assert_eq!(text.as_str(), "hello_world");
}

#[test]
fn trims_before_replacing_spaces() {
    let text = WordText::normalize("   clash royale  ", 20).unwrap();
    assert_eq!(text.as_str(), "clash_royale");
}

#[test]
fn truncates_to_max_length() {
    let text = WordText::normalize("abcdefghijklmnopqrstuvwxyz", 20).unwrap();
    assert_eq!(text.as_str(), "abcdefghijklmnopqrst");
    let text = WordText::normalize("abcdefghijklmnopqrstuvwxyz", 32).unwrap();
    assert_eq!(text.as_str().len(), 26);
}

#[test]
fn strips_non_ascii_letters() {
    let text = WordText::normalize("Café 49ers", 20).unwrap();
    assert_eq!(text.as_str(), "caf_49ers");
}

#[test]
fn rejects_text_that_normalizes_to_empty() {
    for raw in ["", "   ", "!!!", "日本語"] {
        let err = WordText::normalize(raw, 20).unwrap_err();
        assert!(
            matches!(err, wordboard_core::BoardError::InvalidInput { .. }),
            "{raw:?} should be invalid"
        );
    }
}

#[test]
fn description_is_trimmed_and_bounded() {
    let long = "x".repeat(60);
    assert_eq!(normalize_description(&long, 40).len(), 40);
    assert_eq!(normalize_description("  hi there  ", 40), "hi there");
}

// --- Identity & owner ---

#[test]
fn blank_identity_falls_back_to_anonymous() {
    assert_eq!(Identity::new("  ").as_str(), ANONYMOUS_IDENTITY);
    assert!(Identity::resolve([None, Some(""), None]).is_anonymous());
}

#[test]
fn identity_resolution_takes_first_non_blank() {
    let id = Identity::resolve([None, Some(" user@x.edu "), Some("other@x.edu")]);
    assert_eq!(id.as_str(), "user@x.edu");
}

#[test]
fn orphan_is_owned_by_nobody() {
    let owner = Owner::from_stored(Some(ORPHAN_SENTINEL));
    assert!(owner.is_orphan());
    assert!(!owner.is_owned_by(&Identity::new(ORPHAN_SENTINEL)));
    assert!(Owner::from_stored(None).is_orphan());
}

#[test]
fn user_owner_matches_its_identity() {
    let owner = Owner::from_stored(Some("a@x.edu"));
    assert!(owner.is_owned_by(&Identity::new("a@x.edu")));
    assert!(!owner.is_owned_by(&Identity::new("b@x.edu")));
    assert_eq!(owner.as_stored(), "a@x.edu");
}

#[test]
fn owner_serializes_as_plain_string() {
    let json = serde_json::to_string(&Owner::Orphan).unwrap();
    assert_eq!(json, format!("\"{ORPHAN_SENTINEL}\""));
    let back: Owner = serde_json::from_str("\"a@x.edu\"").unwrap();
    assert!(back.is_owned_by(&Identity::new("a@x.edu")));
}

// --- Decay markers ---

#[test]
fn marker_parses_rfc3339_and_legacy_formats() {
    let expected = Utc.with_ymd_and_hms(2026, 1, 13, 7, 14, 22).unwrap();

    let rfc = DecayMarker::parse(Some("2026-01-13T07:14:22Z"));
    assert_eq!(rfc.start(), Some(expected));

    let legacy = DecayMarker::parse(Some("2026-01-13 07:14:22"));
    assert_eq!(legacy.start(), Some(expected));

    let legacy_micros = DecayMarker::parse(Some("2026-01-13 07:14:22.313132"));
    let start = legacy_micros.start().expect("legacy micros should parse");
    assert_eq!(start.timestamp(), expected.timestamp());
    assert_eq!(start.timestamp_subsec_micros(), 313_132);
}

#[test]
fn blank_marker_is_stable_and_garbage_is_malformed() {
    assert_eq!(DecayMarker::parse(None), DecayMarker::Stable);
    assert_eq!(DecayMarker::parse(Some("  ")), DecayMarker::Stable);
    assert!(DecayMarker::parse(Some("yesterday-ish")).is_malformed());
}

#[test]
fn formatted_timestamps_parse_back() {
    let ts = Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap();
    let formatted = format_timestamp(ts);
    assert!(formatted.ends_with('Z'));
    assert_eq!(parse_timestamp(&formatted), Some(ts));
}

#[test]
fn redacted_word_serializes_without_creator() {
    let word = Word {
        id: WordId(7),
        text: "zedd".to_string(),
        weight: 7.0,
        decay_start: None,
        created_by: Some(Owner::User(Identity::new("h@x.edu"))),
        description: None,
    };
    let json = serde_json::to_value(word.redacted()).unwrap();
    assert!(json.get("created_by").is_none());
    assert_eq!(json["id"], 7);
}
