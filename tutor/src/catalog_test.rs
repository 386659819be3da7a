use super::*;

const ALL_KEYS: [MessageKey; 11] = [
    MessageKey::Welcome,
    MessageKey::CountingIntro,
    MessageKey::CountingDone,
    MessageKey::AreaBuildingIntro,
    MessageKey::AreaBuildingDone,
    MessageKey::TracingIntro,
    MessageKey::TracingDone,
    MessageKey::ComparisonIntro,
    MessageKey::ComparisonDone,
    MessageKey::PerimeterBuildingIntro,
    MessageKey::Mastery,
];

#[test]
fn default_language_is_english() {
    assert_eq!(Language::default(), Language::En);
}

#[test]
fn language_serializes_as_lowercase_code() {
    assert_eq!(serde_json::to_string(&Language::En).expect("serialize"), "\"en\"");
    assert_eq!(serde_json::to_string(&Language::Dk).expect("serialize"), "\"dk\"");
}

#[test]
fn language_deserializes_from_code() {
    let lang: Language = serde_json::from_str("\"dk\"").expect("deserialize");
    assert_eq!(lang, Language::Dk);
}

#[test]
fn language_rejects_unknown_code() {
    assert!(serde_json::from_str::<Language>("\"de\"").is_err());
}

#[test]
fn every_key_renders_in_both_languages() {
    for key in ALL_KEYS {
        assert!(!key.render(Language::En).is_empty(), "{:?} has no English text", key);
        assert!(!key.render(Language::Dk).is_empty(), "{:?} has no Danish text", key);
    }
}

#[test]
fn translations_differ_from_english() {
    for key in ALL_KEYS {
        assert_ne!(
            key.render(Language::En),
            key.render(Language::Dk),
            "{:?} is untranslated",
            key
        );
    }
}

#[test]
fn ids_are_unique_and_dotted() {
    let mut seen = std::collections::BTreeSet::new();
    for key in ALL_KEYS {
        let id = key.id();
        assert!(id.starts_with("shape_lab."), "unexpected id {id}");
        assert!(seen.insert(id), "duplicate id {id}");
    }
}

#[test]
fn welcome_text_matches_flow_greeting() {
    assert!(MessageKey::Welcome.render(Language::En).starts_with("Welcome to Shape Lab!"));
}
