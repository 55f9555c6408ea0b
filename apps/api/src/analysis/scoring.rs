use serde::{Deserialize, Serialize};

use crate::analysis::document::FileType;

/// Severity of a single feedback line, serialized as `type` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Success,
    Warning,
    Error,
    Info,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackItem {
    #[serde(rename = "type")]
    pub kind: FeedbackKind,
    pub message: String,
}

/// Scored report for one resume. Feedback ordering is part of the contract:
/// success first, then the image warning and table error when applicable,
/// info always last. Clients render the list as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub score: u8,
    pub feedback: Vec<FeedbackItem>,
    pub keywords: Vec<String>,
}

const IMAGE_PENALTY: i32 = 15;
const TABLE_PENALTY: i32 = 20;
const KEYWORD_POINTS: i32 = 5;
const KEYWORD_BONUS_CAP: i32 = 25;

/// Combines the extracted signals into a 0–100 score plus feedback.
///
/// Penalties come off the baseline of 100 before the keyword bonus is
/// added; the final value clamps into [0, 100].
pub fn score(
    file_type: FileType,
    has_tables: bool,
    has_images: bool,
    keywords: Vec<String>,
) -> AnalysisResult {
    let mut score: i32 = 100;
    let mut feedback = vec![FeedbackItem {
        kind: FeedbackKind::Success,
        message: format!(
            "File format ({}) is valid and commonly accepted by ATS systems",
            file_type.as_str().to_uppercase()
        ),
    }];

    if has_images {
        score -= IMAGE_PENALTY;
        feedback.push(FeedbackItem {
            kind: FeedbackKind::Warning,
            message: "Images detected: This may reduce ATS compatibility. Consider removing \
                      images and using text instead."
                .to_string(),
        });
    }

    if has_tables {
        score -= TABLE_PENALTY;
        feedback.push(FeedbackItem {
            kind: FeedbackKind::Error,
            message: "Tables detected: Many ATS systems cannot properly parse tables. Consider \
                      using plain text formatting."
                .to_string(),
        });
    }

    let score = (score + keyword_bonus(keywords.len())).clamp(0, 100) as u8;

    feedback.push(FeedbackItem {
        kind: FeedbackKind::Info,
        message: format!("Keywords found: {}", keywords.join(", ")),
    });

    AnalysisResult {
        score,
        feedback,
        keywords,
    }
}

/// 5 points per matched keyword, capped at 25.
pub fn keyword_bonus(count: usize) -> i32 {
    (count as i32 * KEYWORD_POINTS).min(KEYWORD_BONUS_CAP)
}
