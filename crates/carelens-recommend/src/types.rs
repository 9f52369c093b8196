//! Recommendation types.

use carelens_analytics::Severity;
use serde::{Deserialize, Serialize};

/// Recommendation priority. Declaration order is rank order, so deriving
/// `Ord` gives critical < high < medium < low for sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    /// Fixed numeric rank: critical=0, high=1, medium=2, low=3.
    pub fn rank(self) -> u8 {
        self as u8
    }
}

impl From<Severity> for Priority {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::High => Priority::High,
            Severity::Medium => Priority::Medium,
        }
    }
}

/// One actionable recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: String,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub action: String,
    pub impact: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_rank_order() {
        assert_eq!(Priority::Critical.rank(), 0);
        assert_eq!(Priority::High.rank(), 1);
        assert_eq!(Priority::Medium.rank(), 2);
        assert_eq!(Priority::Low.rank(), 3);
        assert!(Priority::Critical < Priority::High);
        assert!(Priority::Medium < Priority::Low);
    }

    #[test]
    fn test_priority_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"high\"");
    }
}
