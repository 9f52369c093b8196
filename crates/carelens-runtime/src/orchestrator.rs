//! Orchestrator — concurrent aggregation and batch classification.

use std::sync::Arc;

use carelens_analytics::{
    analyze_business_feasibility, analyze_doctor_demand, analyze_patient_behavior,
    analyze_product_trends, analyze_scalability, AggregateBundle, ScalabilityMetrics,
};
use carelens_classify::{classify, BatchClassification, ClassificationInput};
use carelens_core::{Error, MedicalRecord, Result};
use carelens_recommend::synthesize;
use chrono::{DateTime, Utc};
use tokio::task::{self, JoinHandle};
use tracing::{error, info};

use crate::types::{AnalysisReport, RecordSet};

/// Coordinates the inference core over already-materialized record
/// snapshots. Holds no state; every call is independent.
#[derive(Debug, Default)]
pub struct Orchestrator;

impl Orchestrator {
    pub fn new() -> Self {
        Self
    }

    /// Run the five aggregators concurrently, join them into a bundle, and
    /// synthesize recommendations.
    ///
    /// The aggregators are mutually independent, so each runs on its own
    /// blocking worker; the synthesizer is the join point.
    pub async fn analyze(
        &self,
        records: Arc<RecordSet>,
        metrics: ScalabilityMetrics,
        now: DateTime<Utc>,
    ) -> AnalysisReport {
        let start = std::time::Instant::now();

        let products = {
            let records = Arc::clone(&records);
            task::spawn_blocking(move || analyze_product_trends(&records.orders, now))
        };
        let doctors = {
            let records = Arc::clone(&records);
            task::spawn_blocking(move || {
                analyze_doctor_demand(&records.appointments, &records.doctors)
            })
        };
        let patients = {
            let records = Arc::clone(&records);
            task::spawn_blocking(move || {
                analyze_patient_behavior(
                    &records.patients,
                    &records.appointments,
                    &records.visits,
                    now,
                )
            })
        };
        let scalability = task::spawn_blocking(move || analyze_scalability(&metrics));
        let business = {
            let records = Arc::clone(&records);
            task::spawn_blocking(move || {
                analyze_business_feasibility(&records.orders, &records.appointments)
            })
        };

        let bundle = AggregateBundle {
            products: join_aggregate(products, "products").await,
            doctors: join_aggregate(doctors, "doctors").await,
            patients: join_aggregate(patients, "patients").await,
            scalability: join_aggregate(scalability, "scalability").await,
            business: join_aggregate(business, "business").await,
        };

        Self::finish(bundle, start)
    }

    /// Sequential twin of [`Orchestrator::analyze`] for non-async callers.
    /// Produces identical output for identical input.
    pub fn analyze_blocking(
        &self,
        records: &RecordSet,
        metrics: &ScalabilityMetrics,
        now: DateTime<Utc>,
    ) -> AnalysisReport {
        let start = std::time::Instant::now();

        let bundle = AggregateBundle {
            products: analyze_product_trends(&records.orders, now),
            doctors: analyze_doctor_demand(&records.appointments, &records.doctors),
            patients: analyze_patient_behavior(
                &records.patients,
                &records.appointments,
                &records.visits,
                now,
            ),
            scalability: analyze_scalability(metrics),
            business: analyze_business_feasibility(&records.orders, &records.appointments),
        };

        Self::finish(bundle, start)
    }

    fn finish(bundle: AggregateBundle, start: std::time::Instant) -> AnalysisReport {
        let recommendations = synthesize(&bundle);
        let duration_ms = start.elapsed().as_millis() as u64;

        info!(
            "Analysis complete: {} recommendations, scalability {}/100, health {}/100, {}ms",
            recommendations.len(),
            bundle.scalability.scalability_score,
            bundle.business.health_score,
            duration_ms
        );

        AnalysisReport {
            bundle,
            recommendations,
            duration_ms,
        }
    }

    /// Classify a batch of records on blocking workers, reassembling results
    /// in input order.
    ///
    /// Fails with [`Error::NotFound`] when the record set is empty, matching
    /// the sequential wrapper in `carelens-classify`.
    pub async fn classify_batch(
        &self,
        records: Vec<MedicalRecord>,
    ) -> Result<Vec<BatchClassification>> {
        if records.is_empty() {
            return Err(Error::NotFound(
                "no medical records matched the requested ids".into(),
            ));
        }

        let handles: Vec<JoinHandle<BatchClassification>> = records
            .into_iter()
            .map(|record| {
                task::spawn_blocking(move || BatchClassification {
                    id: record.id.clone(),
                    result: classify(&ClassificationInput::from(&record)),
                })
            })
            .collect();

        // join_all preserves the spawn order, which is the input order.
        let joined = futures::future::join_all(handles).await;
        let results: Vec<BatchClassification> = joined
            .into_iter()
            .map(|outcome| {
                outcome.map_err(|e| Error::Internal(format!("classification task failed: {e}")))
            })
            .collect::<Result<_>>()?;

        info!("Batch classified {} records", results.len());
        Ok(results)
    }
}

/// Await one aggregator task, degrading to the zero-valued aggregate if the
/// worker died (a panic in a pure aggregation is a bug, not a user error).
async fn join_aggregate<T: Default>(handle: JoinHandle<T>, name: &str) -> T {
    match handle.await {
        Ok(value) => value,
        Err(e) => {
            error!("Aggregator {} failed: {}", name, e);
            T::default()
        }
    }
}
