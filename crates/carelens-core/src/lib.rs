//! CareLens Core — shared error type and domain record snapshots.

pub mod error;
pub mod records;

pub use error::{Error, Result};
pub use records::{
    Appointment, AppointmentStatus, Doctor, MedicalRecord, Order, OrderItem, Patient, Product,
    Visit,
};
