//! Tag-set classification

use std::collections::HashSet;

use crate::domain::value_objects::{Category, CATEGORY_TAGS, SKIP_TAGS};

/// Map an entry's tag set to its category.
///
/// The category table is walked in declaration order and the first
/// category whose tag list intersects the set wins; tag sets that
/// match nothing come back as `Unclassified`.
pub fn classify(tags: &HashSet<String>) -> Category {
    for (category, list) in CATEGORY_TAGS {
        if list.iter().any(|tag| tags.contains(*tag)) {
            return *category;
        }
    }
    Category::Unclassified
}

/// Whether the tag set carries a marker that rules out reformatting.
pub fn is_skipped(tags: &HashSet<String>) -> bool {
    SKIP_TAGS.iter().any(|tag| tags.contains(*tag))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag_set(tags: &[&str]) -> HashSet<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_classify_known_categories() {
        assert_eq!(classify(&tag_set(&["catchsuccess"])), Category::Loot);
        assert_eq!(
            classify(&tag_set(&["convertible_open"])),
            Category::Convertible
        );
        assert_eq!(classify(&tag_set(&["dailyreward"])), Category::Other);
        assert_eq!(
            classify(&tag_set(&["folkloreForest-bookClaimed"])),
            Category::HasListNeedsClasses
        );
    }

    #[test]
    fn test_classify_ignores_unrelated_tags() {
        assert_eq!(
            classify(&tag_set(&["entry", "luckycatchsuccess", "active"])),
            Category::Loot
        );
    }

    #[test]
    fn test_classify_unknown_tags_is_unclassified() {
        assert_eq!(
            classify(&tag_set(&["entry", "passivejournal"])),
            Category::Unclassified
        );
        assert_eq!(classify(&HashSet::new()), Category::Unclassified);
    }

    #[test]
    fn test_classify_overlapping_sets_resolve_by_priority() {
        // A set matching both loot and convertible tags picks loot,
        // the earlier table entry.
        assert_eq!(
            classify(&tag_set(&["convertible_open", "catchsuccess"])),
            Category::Loot
        );
        assert_eq!(
            classify(&tag_set(&["dailyreward", "convertible_open"])),
            Category::Convertible
        );
    }

    #[test]
    fn test_skip_tags() {
        assert!(is_skipped(&tag_set(&["mountain-boulderLooted"])));
        assert!(is_skipped(&tag_set(&["catchsuccess", "labyrinth-exitMaze"])));
        assert!(!is_skipped(&tag_set(&["catchsuccess"])));
    }
}
