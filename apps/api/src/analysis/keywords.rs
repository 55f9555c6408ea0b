/// Fixed vocabulary of resume-relevant terms, scanned in this order.
pub const RESUME_KEYWORDS: [&str; 15] = [
    "experience",
    "skills",
    "education",
    "project",
    "achievement",
    "leadership",
    "management",
    "development",
    "analysis",
    "research",
    "team",
    "communication",
    "responsibility",
    "success",
    "improvement",
];

/// Case-insensitive substring scan of `text` against the fixed vocabulary.
///
/// Results come back in vocabulary order, each keyword at most once.
/// Substring matching is intentional: "teamwork" counts for "team".
pub fn analyze_keywords(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();

    RESUME_KEYWORDS
        .iter()
        .copied()
        .filter(|keyword| lower.contains(keyword))
        .map(|keyword| keyword.to_string())
        .collect()
}
