use docsum::domain::SummaryLength;

#[test]
fn given_no_selector_when_defaulting_then_uses_medium() {
    assert_eq!(SummaryLength::default(), SummaryLength::Medium);
}

#[test]
fn given_selector_strings_when_parsing_then_round_trips_through_as_str() {
    for length in [SummaryLength::Short, SummaryLength::Medium, SummaryLength::Long] {
        assert_eq!(length.as_str().parse::<SummaryLength>(), Ok(length));
    }
}

#[test]
fn given_unknown_selector_when_parsing_then_returns_error() {
    let err = "huge".parse::<SummaryLength>().unwrap_err();
    assert!(err.contains("huge"));
}

#[test]
fn given_json_selector_when_deserializing_then_accepts_lowercase_only() {
    let short: SummaryLength = serde_json::from_str("\"short\"").unwrap();
    assert_eq!(short, SummaryLength::Short);
    assert!(serde_json::from_str::<SummaryLength>("\"Short\"").is_err());
}
