//! Text value escaping (RFC 2426 §5, RFC 6350 §3.4).
//!
//! These are not applied by the codec itself: unescaping a structured value
//! such as `N` or `ADR` would merge its components. Callers that know a
//! property holds free text apply them explicitly.

/// Unescapes a text value (`\n`, `\N`, `\,`, `\;`, `\\`).
///
/// `\n` becomes CRLF, the line break vCard 3.0 text values stand for.
/// Unknown escapes are kept as they are.
#[must_use]
pub fn unescape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some('n' | 'N') => {
                    chars.next();
                    result.push_str("\r\n");
                }
                Some(',') => {
                    chars.next();
                    result.push(',');
                }
                Some(';') => {
                    chars.next();
                    result.push(';');
                }
                Some('\\') => {
                    chars.next();
                    result.push('\\');
                }
                _ => result.push(c),
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// Escapes a text value for vCard 3.0.
///
/// CRLF, bare CR and bare LF all become `\n`.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => result.push_str("\\\\"),
            ',' => result.push_str("\\,"),
            ';' => result.push_str("\\;"),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                result.push_str("\\n");
            }
            '\n' => result.push_str("\\n"),
            _ => result.push(c),
        }
    }

    result
}
