//! Delimiter-based extraction of item lists from narrative text
//!
//! Journal text is natural language and inconsistently formatted
//! upstream, so extraction is an ordered table of exact-substring
//! rules per category. A rule miss is the designed empty result, not
//! an error; callers leave the entry untouched.

use crate::domain::value_objects::{Category, Extraction, OTHER_PHRASES};

/// Delimiters separating a loot catch's narrative from its drop list,
/// tried in order.
const LOOT_DELIMITERS: &[&str] = &[" that dropped ", "<b>that dropped</b> "];

/// Split an entry's text into the narrative remainder and the raw item
/// list segment.
///
/// Returns `None` when no rule for the category matches.
/// `HasListNeedsClasses` entries never extract; their embedded list is
/// tagged in place by the pipeline instead.
pub fn extract(category: Category, text: &str) -> Option<Extraction> {
    match category {
        Category::Loot => extract_loot(text),
        Category::Convertible => extract_convertible(text),
        Category::Other | Category::Unclassified => extract_other(text),
        Category::HasListNeedsClasses => None,
    }
}

fn extract_loot(text: &str) -> Option<Extraction> {
    for delimiter in LOOT_DELIMITERS {
        if let Some((prefix, suffix)) = text.split_once(delimiter) {
            return Some(Extraction {
                remainder: format!("{prefix} that dropped:"),
                segment: suffix.to_string(),
            });
        }
    }
    None
}

fn extract_convertible(text: &str) -> Option<Extraction> {
    // Anything before "I received " is dropped from the remainder.
    let (_, received) = text.split_once("I received ")?;

    match received.split_once(" from ") {
        Some((segment, source)) => {
            let source = source.strip_suffix('.').unwrap_or(source);
            Some(Extraction {
                remainder: format!("I opened {source} and received:"),
                segment: segment.to_string(),
            })
        }
        None => Some(Extraction {
            remainder: "I received: ".to_string(),
            segment: received.to_string(),
        }),
    }
}

fn extract_other(text: &str) -> Option<Extraction> {
    for phrase in OTHER_PHRASES {
        if let Some((prefix, suffix)) = text.split_once(phrase) {
            // Phrases that already end in a colon would double it.
            let remainder = format!("{prefix} {phrase}: ").replacen("::", ":", 1);
            return Some(Extraction {
                remainder,
                segment: suffix.to_string(),
            });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loot_extraction() {
        let got = extract(
            Category::Loot,
            "Bob found a cheese that dropped 3 Cheese, 2 Gold",
        )
        .unwrap();
        assert_eq!(got.remainder, "Bob found a cheese that dropped:");
        assert_eq!(got.segment, "3 Cheese, 2 Gold");
    }

    #[test]
    fn test_loot_bold_delimiter_fallback() {
        let got = extract(
            Category::Loot,
            "I caught a mouse<b>that dropped</b> 1 Chrome Charm",
        )
        .unwrap();
        assert_eq!(got.remainder, "I caught a mouse that dropped:");
        assert_eq!(got.segment, "1 Chrome Charm");
    }

    #[test]
    fn test_loot_without_delimiter_is_a_miss() {
        assert_eq!(extract(Category::Loot, "I caught a mouse."), None);
    }

    #[test]
    fn test_convertible_with_source_label() {
        let got = extract(
            Category::Convertible,
            "I received 2 Super Brie from a Golden Chest.",
        )
        .unwrap();
        assert_eq!(got.remainder, "I opened a Golden Chest and received:");
        assert_eq!(got.segment, "2 Super Brie");
    }

    #[test]
    fn test_convertible_without_source_label() {
        let got = extract(Category::Convertible, "I received 10 Gold and 2 Cheese").unwrap();
        assert_eq!(got.remainder, "I received: ");
        assert_eq!(got.segment, "10 Gold and 2 Cheese");
    }

    #[test]
    fn test_convertible_without_delimiter_is_a_miss() {
        assert_eq!(extract(Category::Convertible, "Nothing here."), None);
    }

    #[test]
    fn test_other_phrase_match() {
        let got = extract(Category::Other, "Whee! Inside my chest was 5 Gems").unwrap();
        assert_eq!(got.remainder, "Whee!  Inside my chest was: ");
        assert_eq!(got.segment, " 5 Gems");
    }

    #[test]
    fn test_other_collapses_doubled_colon() {
        let got = extract(
            Category::Other,
            "I opened my Loyalty Chest and received: 5,000 Gold",
        )
        .unwrap();
        assert_eq!(got.remainder, "I opened my  Loyalty Chest and received: ");
        assert_eq!(got.segment, " 5,000 Gold");
    }

    #[test]
    fn test_other_phrase_order_is_deterministic() {
        // "Inside I found" precedes the bare "I found" in the table,
        // so it wins even though both are present.
        let got = extract(Category::Other, "Inside I found 2 Gems").unwrap();
        assert_eq!(got.remainder, " Inside I found: ");
        assert_eq!(got.segment, " 2 Gems");
    }

    #[test]
    fn test_unclassified_uses_the_phrase_table() {
        let got = extract(Category::Unclassified, "Surprise! I found 1 Map Piece").unwrap();
        assert_eq!(got.remainder, "Surprise!  I found: ");
        assert_eq!(got.segment, " 1 Map Piece");
    }

    #[test]
    fn test_no_phrase_is_a_miss() {
        assert_eq!(extract(Category::Other, "The sun set over the bay."), None);
        assert_eq!(
            extract(Category::Unclassified, "The sun set over the bay."),
            None
        );
    }

    #[test]
    fn test_has_list_needs_classes_never_extracts() {
        assert_eq!(
            extract(Category::HasListNeedsClasses, "I found 1 Tome"),
            None
        );
    }
}
