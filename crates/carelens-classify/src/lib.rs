//! Document classification — weighted keyword/pattern matching over a fixed
//! medical category taxonomy.
//!
//! Scores uploaded-document metadata (filename, title, description) against
//! every category, normalizes the winner's score into a [0, 1] confidence,
//! and reports the terms that matched. No file content is ever inspected.

pub mod batch;
pub mod classifier;
pub mod taxonomy;

pub use batch::{batch_classify, suggest_categories, BatchClassification, CategorySuggestion};
pub use classifier::{classify, CategoryScore, ClassificationInput, ClassificationResult};
pub use taxonomy::{taxonomy, CategoryDefinition, FALLBACK_CATEGORY};
