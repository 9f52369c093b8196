//! Doctor and specialization demand aggregation.

use std::collections::{HashMap, HashSet};

use carelens_core::{Appointment, AppointmentStatus, Doctor};
use serde::{Deserialize, Serialize};

use crate::round1;

/// Specialization used for appointments whose doctor id has no roster entry.
const UNKNOWN_SPECIALIZATION: &str = "Unknown";

/// Appointment demand for one specialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpecializationStat {
    pub specialization: String,
    #[serde(rename = "appointmentCount")]
    pub appointment_count: u64,
    #[serde(rename = "doctorCount")]
    pub doctor_count: u64,
    /// Appointments per distinct doctor, one decimal. 0 when no doctors.
    #[serde(rename = "demandPerDoctor")]
    pub demand_per_doctor: f64,
}

/// Appointment volume for one doctor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DoctorStat {
    pub doctor: String,
    #[serde(rename = "totalAppointments")]
    pub total_appointments: u64,
    pub completed: u64,
    pub cancelled: u64,
}

/// Doctor and specialization demand summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DoctorDemand {
    /// Top 10 specializations by appointment count.
    #[serde(rename = "topSpecializations")]
    pub top_specializations: Vec<SpecializationStat>,
    /// Top 10 doctors by appointment volume.
    #[serde(rename = "topDoctors")]
    pub top_doctors: Vec<DoctorStat>,
    pub insights: Vec<String>,
}

/// Aggregate appointments against the doctor roster.
pub fn analyze_doctor_demand(appointments: &[Appointment], doctors: &[Doctor]) -> DoctorDemand {
    let roster: HashMap<&str, &Doctor> = doctors.iter().map(|d| (d.id.as_str(), d)).collect();

    let mut by_specialization: HashMap<&str, (u64, HashSet<&str>)> = HashMap::new();
    let mut by_doctor: HashMap<&str, (u64, u64, u64)> = HashMap::new();

    for appointment in appointments {
        let doctor_id = appointment.doctor.as_str();
        let specialization = roster
            .get(doctor_id)
            .map(|d| d.specialization.as_str())
            .unwrap_or(UNKNOWN_SPECIALIZATION);

        let spec_entry = by_specialization
            .entry(specialization)
            .or_insert_with(|| (0, HashSet::new()));
        spec_entry.0 += 1;
        spec_entry.1.insert(doctor_id);

        let doc_entry = by_doctor.entry(doctor_id).or_insert((0, 0, 0));
        doc_entry.0 += 1;
        match appointment.status {
            AppointmentStatus::Completed => doc_entry.1 += 1,
            AppointmentStatus::Cancelled => doc_entry.2 += 1,
            _ => {}
        }
    }

    let mut top_specializations: Vec<SpecializationStat> = by_specialization
        .into_iter()
        .map(|(specialization, (count, ids))| {
            let doctor_count = ids.len() as u64;
            let demand_per_doctor = if doctor_count == 0 {
                0.0
            } else {
                round1(count as f64 / doctor_count as f64)
            };
            SpecializationStat {
                specialization: specialization.to_string(),
                appointment_count: count,
                doctor_count,
                demand_per_doctor,
            }
        })
        .collect();
    top_specializations.sort_by(|a, b| {
        b.appointment_count
            .cmp(&a.appointment_count)
            .then_with(|| a.specialization.cmp(&b.specialization))
    });
    top_specializations.truncate(10);

    let mut top_doctors: Vec<DoctorStat> = by_doctor
        .into_iter()
        .map(|(doctor_id, (total, completed, cancelled))| DoctorStat {
            doctor: roster
                .get(doctor_id)
                .map(|d| d.name.clone())
                .unwrap_or_else(|| doctor_id.to_string()),
            total_appointments: total,
            completed,
            cancelled,
        })
        .collect();
    top_doctors.sort_by(|a, b| {
        b.total_appointments
            .cmp(&a.total_appointments)
            .then_with(|| a.doctor.cmp(&b.doctor))
    });
    top_doctors.truncate(10);

    let mut insights = Vec::new();
    if let Some(top) = top_specializations.first() {
        insights.push(format!(
            "{} is the most in-demand specialization with {} appointments.",
            top.specialization, top.appointment_count
        ));
        if top.demand_per_doctor > 10.0 {
            insights.push(format!(
                "{} averages {} appointments per doctor.",
                top.specialization, top.demand_per_doctor
            ));
        }
    }

    DoctorDemand {
        top_specializations,
        top_doctors,
        insights,
    }
}
