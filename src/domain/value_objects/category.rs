//! Entry categories and the tag tables that select them

/// Semantic bucket a journal entry falls into, driving which
/// extraction rule applies to its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// A catch that dropped loot.
    Loot,
    /// A convertible item that was opened.
    Convertible,
    /// Miscellaneous reward entries matched by the generic phrase table.
    Other,
    /// Entries that already embed a list and only need styling classes.
    HasListNeedsClasses,
    /// No tag table matched; the generic phrase table is still tried.
    Unclassified,
}

/// Tag lists per category, in priority order. The first category whose
/// tag list intersects the entry's tag set wins, so the ordering here
/// is load-bearing for tag sets that overlap.
pub const CATEGORY_TAGS: &[(Category, &[&str])] = &[
    (
        Category::Loot,
        &[
            "bonuscatchsuccess",
            "catchsuccess",
            "catchsuccessprize",
            "catchsuccessloot",
            "luckycatchsuccess",
        ],
    ),
    (Category::Convertible, &["convertible_open"]),
    (
        Category::Other,
        &[
            "iceberg_defeated",
            "dailyreward",
            "kings_giveaway_bonus_prize_entry",
        ],
    ),
    (Category::HasListNeedsClasses, &["folkloreForest-bookClaimed"]),
];

/// Tags whose narrative structure is known to be incompatible with
/// extraction. Entries carrying any of these are never reformatted,
/// regardless of category.
pub const SKIP_TAGS: &[&str] = &["mountain-boulderLooted", "labyrinth-exitMaze"];
