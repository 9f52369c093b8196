//! Scalability assessment over an injected metrics snapshot.
//!
//! The snapshot comes from the caller's monitoring integration (or a test
//! fixture); this pass never samples anything itself.

use serde::{Deserialize, Serialize};

/// Load percentage above which capacity becomes a bottleneck.
const LOAD_THRESHOLD: f64 = 80.0;
/// Error-rate percentage above which reliability becomes a bottleneck.
const ERROR_RATE_THRESHOLD: f64 = 5.0;
/// Response time in ms above which performance becomes a bottleneck.
const RESPONSE_TIME_THRESHOLD_MS: f64 = 2000.0;

/// Point-in-time system metrics, caller-injected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScalabilityMetrics {
    /// Recent user counts, oldest first.
    #[serde(rename = "userGrowth", default)]
    pub user_growth: Vec<i64>,
    /// Current appointment load as a percentage of capacity.
    #[serde(rename = "appointmentLoad", default)]
    pub appointment_load: f64,
    /// Configured system capacity (appointments per day).
    #[serde(rename = "systemCapacity", default)]
    pub system_capacity: f64,
    /// Average response time in milliseconds.
    #[serde(rename = "avgResponseTimeMs", default)]
    pub avg_response_time_ms: f64,
    /// Error rate percentage.
    #[serde(rename = "errorRate", default)]
    pub error_rate: f64,
}

/// Bottleneck severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
}

/// A threshold crossing flagged by the rule set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bottleneck {
    pub area: String,
    pub severity: Severity,
    pub description: String,
}

/// Scalability summary with a bounded 0-100 score.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScalabilityReport {
    pub bottlenecks: Vec<Bottleneck>,
    #[serde(rename = "scalabilityScore")]
    pub scalability_score: u32,
    pub insights: Vec<String>,
}

/// Evaluate the fixed bottleneck rules and score the snapshot.
pub fn analyze_scalability(metrics: &ScalabilityMetrics) -> ScalabilityReport {
    let mut bottlenecks = Vec::new();

    let load_high = metrics.appointment_load > LOAD_THRESHOLD;
    let errors_high = metrics.error_rate > ERROR_RATE_THRESHOLD;
    let responses_slow = metrics.avg_response_time_ms > RESPONSE_TIME_THRESHOLD_MS;

    if load_high {
        bottlenecks.push(Bottleneck {
            area: "capacity".into(),
            severity: Severity::High,
            description: format!(
                "Appointment load is at {}% of system capacity.",
                metrics.appointment_load
            ),
        });
    }
    if errors_high {
        bottlenecks.push(Bottleneck {
            area: "reliability".into(),
            severity: Severity::High,
            description: format!(
                "Error rate of {}% exceeds the {}% threshold.",
                metrics.error_rate, ERROR_RATE_THRESHOLD
            ),
        });
    }
    if responses_slow {
        bottlenecks.push(Bottleneck {
            area: "performance".into(),
            severity: Severity::Medium,
            description: format!(
                "Average response time of {}ms exceeds {}ms.",
                metrics.avg_response_time_ms, RESPONSE_TIME_THRESHOLD_MS
            ),
        });
    }

    let mut deduction = 15 * bottlenecks.len() as i64;
    if errors_high {
        deduction += 20;
    }
    if responses_slow {
        deduction += 15;
    }
    if load_high {
        deduction += 10;
    }
    let scalability_score = (100 - deduction).max(0) as u32;

    let adjective = if scalability_score >= 80 {
        "strong"
    } else if scalability_score >= 50 {
        "adequate"
    } else {
        "at risk"
    };
    let mut insights = vec![format!(
        "System health is {}: scalability score {}/100.",
        adjective, scalability_score
    )];
    insights.extend(bottlenecks.iter().map(|b| b.description.clone()));

    ScalabilityReport {
        bottlenecks,
        scalability_score,
        insights,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(load: f64, errors: f64, response_ms: f64) -> ScalabilityMetrics {
        ScalabilityMetrics {
            user_growth: vec![100, 120, 150],
            appointment_load: load,
            system_capacity: 500.0,
            avg_response_time_ms: response_ms,
            error_rate: errors,
        }
    }

    #[test]
    fn test_healthy_system() {
        let report = analyze_scalability(&metrics(40.0, 1.0, 300.0));
        assert!(report.bottlenecks.is_empty());
        assert_eq!(report.scalability_score, 100);
        assert_eq!(
            report.insights[0],
            "System health is strong: scalability score 100/100."
        );
    }

    #[test]
    fn test_each_rule_fires_independently() {
        let report = analyze_scalability(&metrics(90.0, 1.0, 300.0));
        assert_eq!(report.bottlenecks.len(), 1);
        assert_eq!(report.bottlenecks[0].area, "capacity");
        assert_eq!(report.bottlenecks[0].severity, Severity::High);
        // 100 - 15*1 - 10 = 75
        assert_eq!(report.scalability_score, 75);

        let report = analyze_scalability(&metrics(40.0, 8.0, 300.0));
        assert_eq!(report.bottlenecks[0].area, "reliability");
        // 100 - 15*1 - 20 = 65
        assert_eq!(report.scalability_score, 65);

        let report = analyze_scalability(&metrics(40.0, 1.0, 2500.0));
        assert_eq!(report.bottlenecks[0].area, "performance");
        assert_eq!(report.bottlenecks[0].severity, Severity::Medium);
        // 100 - 15*1 - 15 = 70
        assert_eq!(report.scalability_score, 70);
    }

    #[test]
    fn test_all_rules_fire() {
        let report = analyze_scalability(&metrics(95.0, 10.0, 3000.0));
        assert_eq!(report.bottlenecks.len(), 3);
        // 100 - 15*3 - 20 - 15 - 10 = 10
        assert_eq!(report.scalability_score, 10);
        assert!(report
            .insights
            .iter()
            .any(|i| i.starts_with("System health is at risk")));
        // Score insight plus one line per bottleneck.
        assert_eq!(report.insights.len(), 4);
    }

    #[test]
    fn test_score_bounds() {
        for (load, errors, response) in
            [(0.0, 0.0, 0.0), (100.0, 100.0, 10_000.0), (81.0, 5.1, 2001.0)]
        {
            let report = analyze_scalability(&metrics(load, errors, response));
            assert!(report.scalability_score <= 100);
        }
    }

    #[test]
    fn test_thresholds_are_strict() {
        let report = analyze_scalability(&metrics(80.0, 5.0, 2000.0));
        assert!(report.bottlenecks.is_empty());
        assert_eq!(report.scalability_score, 100);
    }
}
