//! Runtime orchestrator — joins the five aggregators into a bundle, hands it
//! to the recommendation synthesizer, and fans batch classification out
//! across blocking workers while preserving input order.

pub mod orchestrator;
pub mod types;

pub use orchestrator::Orchestrator;
pub use types::{AnalysisReport, RecordSet};
