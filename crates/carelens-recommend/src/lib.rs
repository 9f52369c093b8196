//! Recommendation synthesis — turns the aggregate bundle into a ranked list
//! of actionable recommendations.

pub mod synthesizer;
pub mod types;

pub use synthesizer::synthesize;
pub use types::{Priority, Recommendation};
