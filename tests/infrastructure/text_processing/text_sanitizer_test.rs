use docsum::infrastructure::text_processing::sanitize_extracted_text;

#[test]
fn given_ligatures_when_sanitizing_then_folds_them() {
    assert_eq!(sanitize_extracted_text("ﬁnding the ﬂoor"), "finding the floor");
}

#[test]
fn given_blank_line_runs_when_sanitizing_then_collapses_to_paragraph_break() {
    assert_eq!(
        sanitize_extracted_text("first\n\n\n\n\nsecond"),
        "first\n\nsecond"
    );
}

#[test]
fn given_hyphenated_line_break_when_sanitizing_then_rejoins_word() {
    assert_eq!(
        sanitize_extracted_text("a process-\ning step"),
        "a processing step"
    );
}

#[test]
fn given_list_markers_when_sanitizing_then_keeps_them() {
    assert_eq!(
        sanitize_extracted_text("Items:\n- first\n- second"),
        "Items:\n- first\n- second"
    );
}

#[test]
fn given_control_characters_and_spaces_when_sanitizing_then_strips_and_collapses() {
    assert_eq!(
        sanitize_extracted_text("  total\u{0}   due \t 10  "),
        "total due 10"
    );
}

#[test]
fn given_whitespace_only_when_sanitizing_then_returns_empty() {
    assert_eq!(sanitize_extracted_text("  \n\n \t "), "");
}
