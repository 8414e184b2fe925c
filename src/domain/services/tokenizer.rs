//! Splitting raw list segments into individual item mentions
//!
//! There is no single delimiter between mentions upstream; segments
//! arrive as `"3 Cheese, 2 Gold and 1 Charm"` or with explicit line
//! breaks. Splitting keys off the quantity digit that starts the next
//! mention, so commas inside item names survive.

/// Split a raw list segment into trimmed item mentions.
///
/// Delimiters, scanned left to right:
/// - a `<br>` marker (consumed),
/// - `", "` directly ahead of an ASCII digit (the comma and space are
///   consumed, the digit starts the next mention),
/// - `" and "` directly ahead of an ASCII digit.
///
/// Mentions are trimmed and empty ones discarded.
pub fn split_segment(segment: &str) -> Vec<String> {
    let mut mentions = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < segment.len() {
        let rest = &segment[i..];
        if rest.starts_with("<br>") {
            push_mention(&mut mentions, &segment[start..i]);
            i += "<br>".len();
            start = i;
        } else if rest.strip_prefix(", ").is_some_and(starts_with_digit) {
            push_mention(&mut mentions, &segment[start..i]);
            i += ", ".len();
            start = i;
        } else if rest.strip_prefix(" and ").is_some_and(starts_with_digit) {
            push_mention(&mut mentions, &segment[start..i]);
            i += " and ".len();
            start = i;
        } else {
            // All delimiters are ASCII; still advance by whole chars.
            i += rest.chars().next().map_or(1, char::len_utf8);
        }
    }
    push_mention(&mut mentions, &segment[start..]);

    mentions
}

/// Strip a leading `"<number> "` quantity prefix from a mention,
/// leaving the catalog display name.
pub fn strip_quantity(mention: &str) -> &str {
    let digits = mention
        .bytes()
        .take_while(|byte| byte.is_ascii_digit())
        .count();
    if digits > 0 {
        if let Some(name) = mention[digits..].strip_prefix(' ') {
            return name;
        }
    }
    mention
}

fn starts_with_digit(text: &str) -> bool {
    text.bytes().next().is_some_and(|byte| byte.is_ascii_digit())
}

fn push_mention(mentions: &mut Vec<String>, raw: &str) {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        mentions.push(trimmed.to_string());
    }
}
