//! vCard line folding.

/// Maximum line length in characters (not octets).
pub const MAX_LINE_CHARS: usize = 76;

/// Inserted at each fold point: CRLF followed by a single TAB.
pub const FOLD_MARKER: &str = "\r\n\t";

/// Folds a value so no physical line exceeds 76 characters.
///
/// Folding rules:
/// - Values of 76 characters or fewer are returned unchanged.
/// - A line is broken before the last SP or TAB seen since it started.
/// - If there is no such fold point, the line is broken at character 76.
///
/// The whitespace at a fold point starts the continuation line, so removing
/// every [`FOLD_MARKER`] restores the input.
#[must_use]
pub fn fold_value(data: &str) -> String {
    let chars: Vec<char> = data.chars().collect();
    if chars.len() <= MAX_LINE_CHARS {
        return data.to_string();
    }

    let mut result =
        String::with_capacity(data.len() + data.len() / MAX_LINE_CHARS * FOLD_MARKER.len());
    let mut start = 0;
    let mut fold_point: Option<usize> = None;
    let mut i = 0;

    while i < chars.len() {
        // Whitespace opening a line is not a fold point: folding there makes no progress
        if i > start && matches!(chars[i], ' ' | '\t') {
            fold_point = Some(i);
        }

        if i - start >= MAX_LINE_CHARS {
            let fold_at = fold_point.take().unwrap_or(i);
            result.extend(&chars[start..fold_at]);
            result.push_str(FOLD_MARKER);

            // Resume at the fold point so its character opens the next line
            start = fold_at;
            i = fold_at;
            continue;
        }

        if i == chars.len() - 1 {
            result.extend(&chars[start..]);
        }
        i += 1;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::vcard::parse::unfold;

    fn segments(folded: &str) -> Vec<&str> {
        folded.split(FOLD_MARKER).collect()
    }

    #[test]
    fn short_value_unchanged() {
        assert_eq!(fold_value(""), "");
        assert_eq!(fold_value("John Doe"), "John Doe");

        let exact = "x".repeat(76);
        assert_eq!(fold_value(&exact), exact);
    }

    #[test]
    fn hard_break_at_76_chars() {
        let value = "x".repeat(80);
        let folded = fold_value(&value);

        let parts = segments(&folded);
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].len(), 76);
        assert_eq!(parts[1].len(), 4);
        assert_eq!(folded, format!("{}\r\n\t{}", "x".repeat(76), "x".repeat(4)));
    }

    #[test]
    fn tail_never_exceeds_limit() {
        let value = "x".repeat(77);
        let folded = fold_value(&value);

        let parts = segments(&folded);
        assert_eq!(parts, vec!["x".repeat(76).as_str(), "x"]);
    }

    #[test]
    fn folds_before_last_whitespace() {
        let value = format!("{} {}", "a".repeat(70), "b".repeat(20));
        let folded = fold_value(&value);

        let parts = segments(&folded);
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0], "a".repeat(70));
        assert_eq!(parts[1], format!(" {}", "b".repeat(20)));
    }

    #[test]
    fn fold_at_whitespace_on_the_limit() {
        let value = format!("{}\t{}", "a".repeat(76), "b".repeat(10));
        let folded = fold_value(&value);

        let parts = segments(&folded);
        assert_eq!(parts[0], "a".repeat(76));
        assert_eq!(parts[1], format!("\t{}", "b".repeat(10)));
    }

    #[test]
    fn leading_whitespace_is_not_a_fold_point() {
        let value = format!("{} {}", "a".repeat(76), "b".repeat(200));
        let folded = fold_value(&value);

        for part in segments(&folded) {
            assert!(!part.is_empty());
            assert!(part.chars().count() <= MAX_LINE_CHARS);
        }
        assert_eq!(unfold(&folded), value);
    }

    #[test]
    fn counts_characters_not_octets() {
        // 日 is 3 bytes in UTF-8
        let value = "日".repeat(80);
        let folded = fold_value(&value);

        let parts = segments(&folded);
        assert_eq!(parts[0].chars().count(), 76);
        assert_eq!(parts[1].chars().count(), 4);
    }

    #[test]
    fn segments_bounded_for_all_lengths() {
        let words = "lorem ipsum\tdolor sit amet consectetur adipiscing elit ";
        for len in 0..400 {
            let value: String = words.chars().cycle().take(len).collect();
            let folded = fold_value(&value);

            for part in segments(&folded) {
                assert!(part.chars().count() <= MAX_LINE_CHARS, "len {len}: {part:?}");
            }
            assert_eq!(unfold(&folded), value, "len {len}");
        }
    }

    #[test]
    fn fold_multiple_times() {
        let value = "X".repeat(200);
        let folded = fold_value(&value);

        assert_eq!(folded.matches(FOLD_MARKER).count(), 2);
        assert_eq!(unfold(&folded), value);
    }
}
