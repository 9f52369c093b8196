//! Batch classification and free-text category suggestions.

use carelens_core::{Error, MedicalRecord, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classifier::{classify, normalize_confidence, ClassificationInput, ClassificationResult};

/// Classification outcome for one record in a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchClassification {
    pub id: String,
    #[serde(flatten)]
    pub result: ClassificationResult,
}

/// A suggested category for free text, strongest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySuggestion {
    pub category: String,
    pub confidence: f64,
}

/// Classify every record independently, preserving input order.
///
/// Fails with [`Error::NotFound`] when the record set is empty, i.e. the
/// caller's id lookup matched nothing.
pub fn batch_classify(records: &[MedicalRecord]) -> Result<Vec<BatchClassification>> {
    if records.is_empty() {
        return Err(Error::NotFound(
            "no medical records matched the requested ids".into(),
        ));
    }

    let results: Vec<BatchClassification> = records
        .iter()
        .map(|record| BatchClassification {
            id: record.id.clone(),
            result: classify(&ClassificationInput::from(record)),
        })
        .collect();

    debug!("Batch classified {} records", results.len());
    Ok(results)
}

/// Suggest up to 3 categories for free text.
///
/// Runs the classifier once with the text standing in for both filename and
/// title, then re-normalizes the nonzero category scores independently.
/// Ties keep taxonomy order. Fails with [`Error::InvalidInput`] on blank text.
pub fn suggest_categories(free_text: &str) -> Result<Vec<CategorySuggestion>> {
    if free_text.trim().is_empty() {
        return Err(Error::InvalidInput("no text provided".into()));
    }

    let result = classify(&ClassificationInput {
        file_name: Some(free_text.to_string()),
        title: Some(free_text.to_string()),
        ..Default::default()
    });

    let mut scored: Vec<_> = result.all_scores.iter().filter(|s| s.score > 0).collect();
    // Stable sort: equal scores stay in taxonomy order.
    scored.sort_by(|a, b| b.score.cmp(&a.score));

    Ok(scored
        .into_iter()
        .take(3)
        .map(|s| CategorySuggestion {
            category: s.category.clone(),
            confidence: normalize_confidence(s.score),
        })
        .collect())
}
