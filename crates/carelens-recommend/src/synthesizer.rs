//! The fixed recommendation rule list.

use carelens_analytics::AggregateBundle;
use tracing::debug;

use crate::types::{Priority, Recommendation};

fn recommendation(
    category: &str,
    priority: Priority,
    title: &str,
    description: String,
    action: &str,
    impact: &str,
) -> Recommendation {
    Recommendation {
        category: category.to_string(),
        priority,
        title: title.to_string(),
        description,
        action: action.to_string(),
        impact: impact.to_string(),
    }
}

/// Evaluate the fixed ordered rule list over the bundle.
///
/// Every rule whose guard holds appends one recommendation; the final list
/// is stable-sorted by priority rank, so equal-priority entries keep their
/// rule-evaluation order.
pub fn synthesize(bundle: &AggregateBundle) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if let Some(top) = bundle.products.top_products.first() {
        recommendations.push(recommendation(
            "inventory",
            Priority::High,
            "Keep top sellers stocked",
            format!(
                "{} leads order volume with {} orders.",
                top.product, top.order_count
            ),
            "Increase stock levels and feature it in storefront promotions.",
            "Protects the highest-volume revenue stream.",
        ));
    }

    if bundle.products.growth_rate > 20.0 {
        recommendations.push(recommendation(
            "operations",
            Priority::High,
            "Scale order operations",
            format!(
                "Order volume grew {}% over the last 30 days.",
                bundle.products.growth_rate
            ),
            "Expand fulfillment and support capacity ahead of continued growth.",
            "Avoids delivery delays as demand rises.",
        ));
    }

    if let Some(top) = bundle.doctors.top_specializations.first() {
        if top.demand_per_doctor > 15.0 {
            recommendations.push(recommendation(
                "staffing",
                Priority::High,
                "Recruit additional doctors",
                format!(
                    "{} averages {} appointments per doctor.",
                    top.specialization, top.demand_per_doctor
                ),
                "Onboard more doctors in the overloaded specialization.",
                "Shortens wait times and reduces practitioner burnout.",
            ));
        }
    }

    let engaged = bundle.patients.engagement.low
        + bundle.patients.engagement.medium
        + bundle.patients.engagement.high;
    if engaged > 0 && bundle.patients.engagement.low as f64 / engaged as f64 > 0.6 {
        recommendations.push(recommendation(
            "retention",
            Priority::Medium,
            "Improve patient retention",
            format!(
                "{} of {} engaged patients book two or fewer appointments.",
                bundle.patients.engagement.low, engaged
            ),
            "Launch follow-up reminders and care-plan outreach.",
            "Converts one-time visitors into regular patients.",
        ));
    }

    for bottleneck in &bundle.scalability.bottlenecks {
        recommendations.push(recommendation(
            "infrastructure",
            bottleneck.severity.into(),
            "Address scalability bottleneck",
            bottleneck.description.clone(),
            "Provision capacity or remediate the flagged subsystem.",
            "Keeps the platform responsive under load.",
        ));
    }

    if bundle.business.health_score < 60 {
        recommendations.push(recommendation(
            "business",
            Priority::High,
            "Strengthen business fundamentals",
            format!(
                "Business health score is {}/100.",
                bundle.business.health_score
            ),
            "Review pricing, order volume, and appointment conversion.",
            "Moves core revenue metrics back above target.",
        ));
    }

    recommendations.push(recommendation(
        "growth",
        Priority::Medium,
        "Invest in growth initiatives",
        "Steady growth requires ongoing acquisition and service expansion.".to_string(),
        "Run referral campaigns and evaluate new service lines.",
        "Compounds patient and revenue growth over time.",
    ));

    // Stable sort: ties keep rule-evaluation order.
    recommendations.sort_by_key(|r| r.priority);

    debug!("Synthesized {} recommendations", recommendations.len());
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use carelens_analytics::{
        Bottleneck, EngagementTiers, ProductStat, Severity, SpecializationStat,
    };

    fn bundle() -> AggregateBundle {
        AggregateBundle::default()
    }

    #[test]
    fn test_empty_bundle_yields_business_and_growth() {
        // A default bundle has health score 0 (< 60) and nothing else.
        let recommendations = synthesize(&bundle());
        let categories: Vec<&str> =
            recommendations.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(categories, vec!["business", "growth"]);
    }

    #[test]
    fn test_growth_rule_always_present() {
        let recommendations = synthesize(&bundle());
        assert!(recommendations.iter().any(|r| r.category == "growth"));
    }

    #[test]
    fn test_top_product_rule() {
        let mut b = bundle();
        b.business.health_score = 80;
        b.products.top_products.push(ProductStat {
            product: "Thermometer".into(),
            order_count: 42,
            revenue: 420.0,
        });
        let recommendations = synthesize(&b);
        let rec = recommendations.iter().find(|r| r.category == "inventory").unwrap();
        assert_eq!(rec.priority, Priority::High);
        assert!(rec.description.contains("Thermometer"));
    }

    #[test]
    fn test_growth_rate_threshold_is_strict() {
        let mut b = bundle();
        b.business.health_score = 80;
        b.products.growth_rate = 20.0;
        assert!(!synthesize(&b).iter().any(|r| r.category == "operations"));
        b.products.growth_rate = 20.1;
        assert!(synthesize(&b).iter().any(|r| r.category == "operations"));
    }

    #[test]
    fn test_staffing_rule() {
        let mut b = bundle();
        b.business.health_score = 80;
        b.doctors.top_specializations.push(SpecializationStat {
            specialization: "Cardiology".into(),
            appointment_count: 48,
            doctor_count: 3,
            demand_per_doctor: 16.0,
        });
        let recommendations = synthesize(&b);
        assert!(recommendations.iter().any(|r| r.category == "staffing"));
    }

    #[test]
    fn test_retention_rule_fraction() {
        let mut b = bundle();
        b.business.health_score = 80;
        b.patients.engagement = EngagementTiers {
            low: 7,
            medium: 2,
            high: 1,
        };
        let recommendations = synthesize(&b);
        let rec = recommendations.iter().find(|r| r.category == "retention").unwrap();
        assert_eq!(rec.priority, Priority::Medium);

        // Exactly 0.6 does not fire.
        b.patients.engagement = EngagementTiers {
            low: 6,
            medium: 3,
            high: 1,
        };
        assert!(!synthesize(&b).iter().any(|r| r.category == "retention"));
    }

    #[test]
    fn test_bottlenecks_inherit_severity() {
        let mut b = bundle();
        b.business.health_score = 80;
        b.scalability.bottlenecks = vec![
            Bottleneck {
                area: "capacity".into(),
                severity: Severity::High,
                description: "load".into(),
            },
            Bottleneck {
                area: "performance".into(),
                severity: Severity::Medium,
                description: "slow".into(),
            },
        ];
        let recommendations = synthesize(&b);
        let infra: Vec<&Recommendation> = recommendations
            .iter()
            .filter(|r| r.category == "infrastructure")
            .collect();
        assert_eq!(infra.len(), 2);
        assert_eq!(infra[0].priority, Priority::High);
        assert_eq!(infra[1].priority, Priority::Medium);
    }

    #[test]
    fn test_output_sorted_by_priority_stable() {
        let mut b = bundle();
        // health 0 → business rule (high); retention (medium); growth (medium).
        b.patients.engagement = EngagementTiers {
            low: 9,
            medium: 0,
            high: 1,
        };
        let recommendations = synthesize(&b);
        let ranks: Vec<u8> = recommendations.iter().map(|r| r.priority.rank()).collect();
        let mut sorted = ranks.clone();
        sorted.sort();
        assert_eq!(ranks, sorted);

        // Equal-priority entries keep rule order: retention before growth.
        let mediums: Vec<&str> = recommendations
            .iter()
            .filter(|r| r.priority == Priority::Medium)
            .map(|r| r.category.as_str())
            .collect();
        assert_eq!(mediums, vec!["retention", "growth"]);
    }
}
