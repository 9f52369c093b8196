//! Business and revenue feasibility aggregation.

use std::collections::BTreeMap;

use carelens_core::{Appointment, Order};
use serde::{Deserialize, Serialize};

/// Revenue attributed to one calendar month.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    /// Calendar month key, `YYYY-MM`.
    pub month: String,
    pub revenue: f64,
}

/// Business feasibility summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BusinessFeasibility {
    #[serde(rename = "totalRevenue")]
    pub total_revenue: f64,
    /// Up to the 12 most recent months present, ascending by month.
    #[serde(rename = "monthlyRevenue")]
    pub monthly_revenue: Vec<MonthlyRevenue>,
    /// Bounded 0-100 composite of revenue and volume milestones.
    #[serde(rename = "healthScore")]
    pub health_score: u32,
    #[serde(rename = "orderCount")]
    pub order_count: usize,
    #[serde(rename = "appointmentCount")]
    pub appointment_count: usize,
    pub insights: Vec<String>,
}

/// Aggregate revenue across orders and appointment consultation fees.
pub fn analyze_business_feasibility(
    orders: &[Order],
    appointments: &[Appointment],
) -> BusinessFeasibility {
    let mut by_month: BTreeMap<String, f64> = BTreeMap::new();
    let mut total_revenue = 0.0;

    for order in orders {
        total_revenue += order.total_amount;
        *by_month
            .entry(order.created_at.format("%Y-%m").to_string())
            .or_insert(0.0) += order.total_amount;
    }
    for appointment in appointments {
        let fee = appointment.consultation_fee.unwrap_or(0.0);
        total_revenue += fee;
        *by_month
            .entry(appointment.created_at.format("%Y-%m").to_string())
            .or_insert(0.0) += fee;
    }

    // BTreeMap keys ascend, and YYYY-MM sorts chronologically, so the last
    // 12 entries are the most recent months.
    let month_count = by_month.len();
    let monthly_revenue: Vec<MonthlyRevenue> = by_month
        .into_iter()
        .skip(month_count.saturating_sub(12))
        .map(|(month, revenue)| MonthlyRevenue { month, revenue })
        .collect();

    let mut health_score: u32 = 50;
    if total_revenue > 10_000.0 {
        health_score += 20;
    }
    if orders.len() > 100 {
        health_score += 15;
    }
    if appointments.len() > 200 {
        health_score += 15;
    }
    let health_score = health_score.min(100);

    let insights = vec![
        format!("Total revenue to date is {:.2}.", total_revenue),
        format!("Business health score is {}/100.", health_score),
    ];

    BusinessFeasibility {
        total_revenue,
        monthly_revenue,
        health_score,
        order_count: orders.len(),
        appointment_count: appointments.len(),
        insights,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carelens_core::AppointmentStatus;
    use chrono::{DateTime, TimeZone, Utc};

    fn ts(y: i32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, 15, 10, 0, 0).unwrap()
    }

    fn order(total: f64, created_at: DateTime<Utc>) -> Order {
        Order {
            items: Vec::new(),
            total_amount: total,
            created_at,
        }
    }

    fn appointment(fee: Option<f64>, created_at: DateTime<Utc>) -> Appointment {
        Appointment {
            doctor: "d1".into(),
            patient: "p1".into(),
            status: AppointmentStatus::Completed,
            created_at,
            consultation_fee: fee,
        }
    }

    #[test]
    fn test_empty_inputs() {
        let result = analyze_business_feasibility(&[], &[]);
        assert_eq!(result.total_revenue, 0.0);
        assert!(result.monthly_revenue.is_empty());
        assert_eq!(result.health_score, 50);
        assert_eq!(result.order_count, 0);
        assert_eq!(result.appointment_count, 0);
    }

    #[test]
    fn test_revenue_combines_orders_and_fees() {
        let orders = vec![order(120.0, ts(2025, 6)), order(80.0, ts(2025, 6))];
        let appointments = vec![
            appointment(Some(50.0), ts(2025, 6)),
            appointment(None, ts(2025, 6)),
        ];
        let result = analyze_business_feasibility(&orders, &appointments);
        assert_eq!(result.total_revenue, 250.0);
        assert_eq!(result.monthly_revenue.len(), 1);
        assert_eq!(result.monthly_revenue[0].month, "2025-06");
        assert_eq!(result.monthly_revenue[0].revenue, 250.0);
    }

    #[test]
    fn test_monthly_capped_to_recent_twelve() {
        let mut orders = Vec::new();
        for month in 1..=12 {
            orders.push(order(10.0, ts(2024, month)));
        }
        for month in 1..=3 {
            orders.push(order(10.0, ts(2025, month)));
        }
        let result = analyze_business_feasibility(&orders, &[]);
        assert_eq!(result.monthly_revenue.len(), 12);
        assert_eq!(result.monthly_revenue[0].month, "2024-04");
        assert_eq!(result.monthly_revenue[11].month, "2025-03");
        // Ascending by month key.
        for pair in result.monthly_revenue.windows(2) {
            assert!(pair[0].month < pair[1].month);
        }
    }

    #[test]
    fn test_health_score_milestones() {
        let result = analyze_business_feasibility(&[order(20_000.0, ts(2025, 6))], &[]);
        assert_eq!(result.health_score, 70);

        let orders: Vec<Order> = (0..101).map(|_| order(1.0, ts(2025, 6))).collect();
        let result = analyze_business_feasibility(&orders, &[]);
        assert_eq!(result.health_score, 65);

        let orders: Vec<Order> = (0..101).map(|_| order(100.0, ts(2025, 6))).collect();
        let appointments: Vec<Appointment> =
            (0..201).map(|_| appointment(Some(10.0), ts(2025, 6))).collect();
        let result = analyze_business_feasibility(&orders, &appointments);
        assert_eq!(result.health_score, 100);
    }

    #[test]
    fn test_insight_templates() {
        let result = analyze_business_feasibility(&[order(99.5, ts(2025, 6))], &[]);
        assert_eq!(result.insights[0], "Total revenue to date is 99.50.");
        assert_eq!(result.insights[1], "Business health score is 50/100.");
    }
}
