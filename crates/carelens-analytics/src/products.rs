//! Product trend aggregation over storefront orders.

use std::collections::HashMap;

use carelens_core::Order;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::round1;

/// Per-product order volume and revenue.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductStat {
    pub product: String,
    #[serde(rename = "orderCount")]
    pub order_count: u64,
    pub revenue: f64,
}

/// Product trend summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductTrends {
    /// Top 10 products by line-item count.
    #[serde(rename = "topProducts")]
    pub top_products: Vec<ProductStat>,
    /// 30-day order volume growth against the previous 30-day window, in
    /// percent, one decimal. 0 when the previous window is empty.
    #[serde(rename = "growthRate")]
    pub growth_rate: f64,
    #[serde(rename = "totalOrders")]
    pub total_orders: usize,
    pub insights: Vec<String>,
}

/// Aggregate order records into product trends.
///
/// `now` anchors the two 30-day growth windows; callers inject it so the
/// pass stays deterministic.
pub fn analyze_product_trends(orders: &[Order], now: DateTime<Utc>) -> ProductTrends {
    let mut by_product: HashMap<&str, (u64, f64)> = HashMap::new();
    for order in orders {
        for item in &order.items {
            let entry = by_product.entry(item.product.as_str()).or_insert((0, 0.0));
            entry.0 += 1;
            entry.1 += item.quantity * item.price;
        }
    }

    let mut top_products: Vec<ProductStat> = by_product
        .into_iter()
        .map(|(product, (order_count, revenue))| ProductStat {
            product: product.to_string(),
            order_count,
            revenue,
        })
        .collect();
    top_products.sort_by(|a, b| {
        b.order_count
            .cmp(&a.order_count)
            .then_with(|| a.product.cmp(&b.product))
    });
    top_products.truncate(10);

    let window_start = now - Duration::days(30);
    let prev_start = now - Duration::days(60);
    let last30 = orders
        .iter()
        .filter(|o| o.created_at > window_start && o.created_at <= now)
        .count();
    let prev30 = orders
        .iter()
        .filter(|o| o.created_at > prev_start && o.created_at <= window_start)
        .count();
    let growth_rate = if prev30 == 0 {
        0.0
    } else {
        round1((last30 as f64 - prev30 as f64) / prev30 as f64 * 100.0)
    };

    let mut insights = Vec::new();
    if let Some(top) = top_products.first() {
        insights.push(format!(
            "{} is the top-selling product with {} orders.",
            top.product, top.order_count
        ));
    }
    if growth_rate > 0.0 {
        insights.push(format!(
            "Order volume grew {}% over the last 30 days.",
            growth_rate
        ));
    } else if growth_rate < 0.0 {
        insights.push(format!(
            "Order volume fell {}% over the last 30 days.",
            -growth_rate
        ));
    }

    ProductTrends {
        top_products,
        growth_rate,
        total_orders: orders.len(),
        insights,
    }
}
