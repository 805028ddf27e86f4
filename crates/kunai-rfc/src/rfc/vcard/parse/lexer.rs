//! Line unfolding.
//!
//! vCard uses the same folding/unfolding rules as iCalendar (RFC 5545 §3.1).

/// Unfolds a value by removing line continuations.
///
/// Line continuations are CRLF followed by a single space or tab; only that
/// one whitespace character is removed. Also handles bare LF for lenient
/// parsing. Line breaks not followed by whitespace are kept.
#[must_use]
pub fn unfold(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\r' && chars.peek() == Some(&'\n') {
            chars.next();
            if matches!(chars.peek(), Some(' ' | '\t')) {
                chars.next(); // Skip the whitespace, continue line
            } else {
                result.push_str("\r\n");
            }
        } else if c == '\n' && matches!(chars.peek(), Some(' ' | '\t')) {
            // Bare LF (lenient)
            chars.next();
        } else {
            result.push(c);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unfold_tab_continuation() {
        assert_eq!(unfold("abc\r\n\tdef"), "abcdef");
    }

    #[test]
    fn unfold_space_continuation() {
        assert_eq!(unfold("abc\r\n def"), "abcdef");
    }

    #[test]
    fn unfold_removes_only_one_whitespace() {
        assert_eq!(unfold("abc\r\n\t def"), "abc def");
        assert_eq!(unfold("abc\r\n\t\tdef"), "abc\tdef");
    }

    #[test]
    fn unfold_bare_lf() {
        assert_eq!(unfold("abc\n\tdef"), "abcdef");
    }

    #[test]
    fn unfold_keeps_plain_line_breaks() {
        assert_eq!(unfold("abc=\r\ndef"), "abc=\r\ndef");
        assert_eq!(unfold("abc\ndef"), "abc\ndef");
        assert_eq!(unfold("abc\rdef"), "abc\rdef");
    }
}
