//! The weighted keyword/pattern classifier.

use serde::{Deserialize, Serialize};

use crate::taxonomy::{taxonomy, FALLBACK_CATEGORY};

/// Normalization divisor for raw scores. A fixed compatibility constant
/// carried over from the original scoring table; do not recalibrate without
/// product sign-off.
const CONFIDENCE_DIVISOR: f64 = 50.0;

/// Confidence above this threshold counts as a high-confidence result.
const HIGH_CONFIDENCE_THRESHOLD: f64 = 0.6;

/// Maximum number of detected terms reported per classification.
const MAX_DETECTED_KEYWORDS: usize = 10;

/// Metadata of one uploaded document. Absent fields classify as empty text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassificationInput {
    #[serde(rename = "fileName", default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "fileType", default)]
    pub file_type: Option<String>,
}

impl From<&carelens_core::MedicalRecord> for ClassificationInput {
    fn from(record: &carelens_core::MedicalRecord) -> Self {
        Self {
            file_name: record.file_name.clone(),
            title: record.title.clone(),
            description: record.description.clone(),
            file_type: record.file_type.clone(),
        }
    }
}

/// One category's raw score. `all_scores` keeps every category, zeros
/// included, in taxonomy order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: String,
    pub score: u32,
}

/// Outcome of classifying one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub category: String,
    pub confidence: f64,
    #[serde(rename = "detectedKeywords")]
    pub detected_keywords: Vec<String>,
    #[serde(rename = "allScores")]
    pub all_scores: Vec<CategoryScore>,
    #[serde(rename = "isHighConfidence")]
    pub is_high_confidence: bool,
}

/// Normalize a raw score into a two-decimal confidence in [0, 1].
pub(crate) fn normalize_confidence(score: u32) -> f64 {
    let raw = (f64::from(score) / CONFIDENCE_DIVISOR).min(1.0);
    (raw * 100.0).round() / 100.0
}

fn push_distinct(detected: &mut Vec<String>, term: &str) {
    if !detected.iter().any(|d| d == term) {
        detected.push(term.to_string());
    }
}

/// Low-confidence imaging fallback, applied after primary scoring.
///
/// An image upload that the text rules could not place near an imaging
/// category is reclassified as a scan; the computed confidence stands.
fn image_fallback_applies(file_type: &str, category: &str, confidence: f64) -> bool {
    file_type.contains("image")
        && !category.contains("Ray")
        && !category.contains("Scan")
        && confidence < 0.5
}

/// Classify a document from its metadata. Total: any input shape yields a
/// result, with `"Other"` at confidence 0.0 when nothing matches.
pub fn classify(input: &ClassificationInput) -> ClassificationResult {
    let text = format!(
        "{} {} {}",
        input.file_name.as_deref().unwrap_or(""),
        input.title.as_deref().unwrap_or(""),
        input.description.as_deref().unwrap_or(""),
    )
    .to_lowercase();

    let mut detected: Vec<String> = Vec::new();
    let mut all_scores: Vec<CategoryScore> = Vec::with_capacity(taxonomy().len());
    let mut winner = FALLBACK_CATEGORY;
    let mut winner_score: u32 = 0;

    for def in taxonomy() {
        let mut score: u32 = 0;

        for pattern in &def.patterns {
            if let Some(m) = pattern.find(&text) {
                score += def.weight * 2;
                push_distinct(&mut detected, m.as_str());
            }
        }
        for keyword in def.keywords {
            if text.contains(keyword) {
                score += def.weight;
                push_distinct(&mut detected, keyword);
            }
        }

        // Strict comparison: the first category to reach the maximum wins.
        if score > winner_score {
            winner_score = score;
            winner = def.name;
        }

        all_scores.push(CategoryScore {
            category: def.name.to_string(),
            score,
        });
    }

    let confidence = normalize_confidence(winner_score);

    let mut category = winner.to_string();
    if let Some(file_type) = input.file_type.as_deref() {
        if image_fallback_applies(file_type, &category, confidence) {
            category = "Scan Report".to_string();
        }
    }

    detected.truncate(MAX_DETECTED_KEYWORDS);

    ClassificationResult {
        category,
        confidence,
        detected_keywords: detected,
        all_scores,
        is_high_confidence: confidence > HIGH_CONFIDENCE_THRESHOLD,
    }
}
