//! Read-only snapshots of the platform's domain records.
//!
//! These mirror the documents the persistence layer hands over (camelCase
//! JSON). The inference core never mutates them; every aggregation pass
//! builds its own local counters from a borrowed slice.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One line item of a storefront order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub product: String,
    pub quantity: f64,
    pub price: f64,
}

/// A medical-supplies order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(rename = "totalAmount", default)]
    pub total_amount: f64,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Appointment lifecycle status as stored by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
    /// Any status string this core does not recognize.
    #[serde(other)]
    Unknown,
}

/// A booked appointment. `doctor` and `patient` are record ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub doctor: String,
    pub patient: String,
    pub status: AppointmentStatus,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "consultationFee", default)]
    pub consultation_fee: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialization: String,
}

/// Patient demographics. Either `date_of_birth` or a literal `age` may be
/// present; both may be absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: String,
    #[serde(rename = "dateOfBirth", default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
}

/// A recorded visit with its stated diagnosis or reason.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Visit {
    pub patient: String,
    #[serde(default)]
    pub diagnosis: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

/// Storefront product metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub stock: u32,
}

/// Uploaded document metadata — the unit of batch classification.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MedicalRecord {
    pub id: String,
    #[serde(rename = "fileName", default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "fileType", default)]
    pub file_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_roundtrip() {
        let s: AppointmentStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(s, AppointmentStatus::Completed);
        assert_eq!(serde_json::to_string(&s).unwrap(), "\"completed\"");
    }

    #[test]
    fn test_status_unrecognized() {
        let s: AppointmentStatus = serde_json::from_str("\"rescheduled\"").unwrap();
        assert_eq!(s, AppointmentStatus::Unknown);
    }

    #[test]
    fn test_order_defaults() {
        let order: Order =
            serde_json::from_str(r#"{"createdAt": "2025-06-01T10:00:00Z"}"#).unwrap();
        assert!(order.items.is_empty());
        assert_eq!(order.total_amount, 0.0);
    }

    #[test]
    fn test_medical_record_camel_case() {
        let rec: MedicalRecord = serde_json::from_str(
            r#"{"id": "r1", "fileName": "cbc.pdf", "fileType": "application/pdf"}"#,
        )
        .unwrap();
        assert_eq!(rec.file_name.as_deref(), Some("cbc.pdf"));
        assert_eq!(rec.file_type.as_deref(), Some("application/pdf"));
    }
}
