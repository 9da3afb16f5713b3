use tracing::debug;

pub(crate) const COMPLETIONS: &str = "Completions";
pub(crate) const TIMES_PLAYED: &str = "Times Played";
pub(crate) const TIER: &str = "Tier";
pub(crate) const BONUS: &str = "Bonus";
pub(crate) const CHECKPOINTS: &str = "Checkpoints";

/// Read the count out of a cell like `"42 Completions"`.
///
/// The text must start with an integer, optionally grouped with commas
/// (`1,234`), followed by the words of `label` (case-insensitive, any
/// whitespace between words). The last word may carry a plural `s` or
/// `es`, so `Bonus` also matches `2 Bonuses`. Trailing text after the
/// label is ignored. Anything that does not match yields 0.
pub(crate) fn parse_labeled_count(text: &str, label: &str) -> u32 {
    match try_parse_labeled_count(text, label) {
        Some(count) => count,
        None => {
            if !text.trim().is_empty() {
                debug!(text, label, "cell did not match label pattern");
            }
            0
        }
    }
}

fn try_parse_labeled_count(text: &str, label: &str) -> Option<u32> {
    let text = text.trim();
    let number_end = text
        .find(|c: char| !c.is_ascii_digit() && c != ',')
        .unwrap_or(text.len());
    let count = parse_grouped_int(&text[..number_end])?;

    let mut words = text[number_end..].split_whitespace();
    let mut label_words = label.split_whitespace().peekable();
    while let Some(expected) = label_words.next() {
        let word = words.next()?;
        let matched = if label_words.peek().is_some() {
            word.eq_ignore_ascii_case(expected)
        } else {
            is_label_word(word, expected)
        };
        if !matched {
            return None;
        }
    }
    Some(count)
}

/// `1234` or `1,234`. Groups after the first comma must be three digits.
fn parse_grouped_int(number: &str) -> Option<u32> {
    let mut groups = number.split(',');
    let first = groups.next()?;
    if first.is_empty() {
        return None;
    }
    let mut digits = first.to_string();
    for group in groups {
        if first.len() > 3 || group.len() != 3 {
            return None;
        }
        digits.push_str(group);
    }
    digits.parse().ok()
}

fn is_label_word(word: &str, expected: &str) -> bool {
    if word.len() < expected.len() || !word.is_char_boundary(expected.len()) {
        return false;
    }
    let (head, tail) = word.split_at(expected.len());
    head.eq_ignore_ascii_case(expected)
        && ["", "s", "es"].iter().any(|t| tail.eq_ignore_ascii_case(t))
}
