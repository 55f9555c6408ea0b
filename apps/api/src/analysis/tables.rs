use std::sync::LazyLock;

use regex::Regex;

/// Text patterns that suggest tabular layout in a PDF text layer.
///
/// Deliberately a rough heuristic: indented prose trips the space-run
/// pattern, and tables rendered purely by column positioning slip through.
/// The detection categories are fixed — pipe-delimited rows, ASCII borders,
/// tab runs, space runs — and callers accept the imprecision.
static TABLE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\|.*\|",    // row segment between vertical bars
        r"\+-{3,}\+", // ASCII border like +---+
        r"\t{2,}",    // run of tabs
        r" {4,}",     // run of spaces
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("table pattern compiles"))
    .collect()
});

pub fn looks_tabular(text: &str) -> bool {
    TABLE_PATTERNS.iter().any(|re| re.is_match(text))
}
