//! Runtime types.

use carelens_analytics::AggregateBundle;
use carelens_core::{Appointment, Doctor, Order, Patient, Visit};
use carelens_recommend::Recommendation;
use serde::{Deserialize, Serialize};

/// Bounded snapshot of the record collections one analysis runs over.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordSet {
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub appointments: Vec<Appointment>,
    #[serde(default)]
    pub patients: Vec<Patient>,
    #[serde(default)]
    pub doctors: Vec<Doctor>,
    #[serde(default)]
    pub visits: Vec<Visit>,
}

/// Output of one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub bundle: AggregateBundle,
    pub recommendations: Vec<Recommendation>,
    #[serde(rename = "durationMs")]
    pub duration_ms: u64,
}
