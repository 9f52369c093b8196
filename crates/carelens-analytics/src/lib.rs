//! Domain aggregators — pure passes over raw operational records.
//!
//! Five independent aggregations (product trends, doctor demand, patient
//! behavior, scalability, business feasibility) that compute sums, counts,
//! and group-bys with guarded denominators. Missing numeric fields default
//! to 0; empty inputs yield zero-valued objects, never errors.

pub mod business;
pub mod doctors;
pub mod patients;
pub mod products;
pub mod scalability;

use serde::{Deserialize, Serialize};

pub use business::{analyze_business_feasibility, BusinessFeasibility, MonthlyRevenue};
pub use doctors::{analyze_doctor_demand, DoctorDemand, DoctorStat, SpecializationStat};
pub use patients::{
    analyze_patient_behavior, AgeDistribution, ConditionStat, EngagementTiers,
    GenderDistribution, PatientInsights,
};
pub use products::{analyze_product_trends, ProductStat, ProductTrends};
pub use scalability::{
    analyze_scalability, Bottleneck, ScalabilityMetrics, ScalabilityReport, Severity,
};

/// The combined output of all five aggregators, consumed by the
/// recommendation synthesizer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AggregateBundle {
    pub products: ProductTrends,
    pub doctors: DoctorDemand,
    pub patients: PatientInsights,
    pub scalability: ScalabilityReport,
    pub business: BusinessFeasibility,
}

/// Round to one decimal place.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
