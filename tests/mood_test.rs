use std::str::FromStr;

use moodify::mood::{Mood, MoodQuery};

#[test]
fn test_parse_accepts_all_presets() {
    for mood in Mood::ALL {
        let query = MoodQuery::parse(mood.as_str()).unwrap();
        assert_eq!(query.as_str(), mood.as_str());
    }
}

#[test]
fn test_parse_presets_case_insensitively() {
    assert_eq!(MoodQuery::parse("HAPPY").unwrap().as_str(), "happy");
    assert_eq!(MoodQuery::parse("Nostalgic").unwrap().as_str(), "nostalgic");
    assert_eq!(MoodQuery::parse("  eNeRgEtIc ").unwrap().as_str(), "energetic");
}

#[test]
fn test_parse_passes_free_text_through_trimmed() {
    // Free text keeps its casing, only surrounding whitespace is removed
    assert_eq!(
        MoodQuery::parse("  rainy evening  ").unwrap().as_str(),
        "rainy evening"
    );
    assert_eq!(
        MoodQuery::parse("Lo-Fi Beats").unwrap().as_str(),
        "Lo-Fi Beats"
    );
}

#[test]
fn test_parse_rejects_empty_input() {
    assert!(MoodQuery::parse("").is_err());
    assert!(MoodQuery::parse("   ").is_err());
    assert!(MoodQuery::parse("\t\n").is_err());
}

#[test]
fn test_parse_rejection_carries_the_user_visible_message() {
    let err = MoodQuery::parse("   ").unwrap_err();
    assert_eq!(err.to_string(), "Mood is required");
}

#[test]
fn test_mood_round_trips_through_from_str() {
    for mood in Mood::ALL {
        assert_eq!(Mood::from_str(mood.as_str()).unwrap(), mood);
    }
    assert!(Mood::from_str("grumpy").is_err());
}
