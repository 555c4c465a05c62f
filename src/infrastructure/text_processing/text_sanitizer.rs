use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static SOFT_HYPHEN_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<head>\w)-[ \t]*\r?\n[ \t]*(?P<tail>\w)")
        .expect("hyphenation pattern is valid")
});

/// Cleans text pulled out of a PDF page.
///
/// Ligatures and compatibility forms are folded (NFKC), words split across
/// lines by a hyphen are rejoined, control characters are dropped, runs of
/// spaces collapse to one, and runs of blank lines collapse to a single
/// paragraph break.
pub fn sanitize_extracted_text(raw: &str) -> String {
    let folded: String = raw.nfkc().collect();
    let joined = SOFT_HYPHEN_BREAK.replace_all(&folded, "$head$tail");

    let mut paragraphs: Vec<String> = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for line in joined.lines() {
        let cleaned = clean_line(line);
        if cleaned.is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(cleaned);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join("\n"));
    }

    paragraphs.join("\n\n")
}

fn clean_line(line: &str) -> String {
    line.split(|c: char| c.is_whitespace())
        .map(|word| word.chars().filter(|c| !c.is_control()).collect::<String>())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
