//! Literal escaping for user-supplied pattern text.

/// Characters with special meaning in regex pattern syntax.
const PATTERN_META: &[char] = &[
    '.', '*', '+', '?', '^', '$', '{', '}', '(', ')', '|', '[', ']', '\\',
];

/// Escapes pattern metacharacters so `text` compiles to a literal match.
///
/// Only `. * + ? ^ $ { } ( ) | [ ] \` are prefixed with a backslash; every other
/// character, whitespace and non-ASCII included, passes through unchanged.
pub fn escape_pattern(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if PATTERN_META.contains(&ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
